//! Background Services
//!
//! - images: decodes ride images off the UI loop for the preview modal

pub mod images;
