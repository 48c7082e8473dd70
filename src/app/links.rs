//! External links and header menu
//!
//! Videos open in whatever `open_command` points at (a browser, usually).
//! The command is spawned detached so the TUI never blocks on it.

use parktui::logic;
use parktui::model::MENU_ENTRIES;

use crate::App;

impl App {
    pub(crate) fn open_video(&mut self, index: usize) {
        let Some(video) = self.model.catalog.videos.get(index) else {
            return;
        };
        self.model.ui.video_cursor = index;
        let url = logic::video::watch_url(&video.url);
        let title = video.title.clone();
        self.open_link(&url, &title);
    }

    pub(crate) fn open_preview_video(&mut self) {
        let Some(ride) = self.model.previewed_ride().cloned() else {
            return;
        };
        let Some(video) = ride.video.clone().filter(|v| !v.is_empty()) else {
            self.model.ui.show_toast(format!("{} has no video yet", ride.title));
            return;
        };
        let title = ride.title.clone();
        self.open_link(&logic::video::watch_url(&video), &title);
    }

    fn open_link(&mut self, url: &str, title: &str) {
        let Some(ref open_cmd) = self.open_command else {
            // Nothing to launch; show the link so it can be copied
            self.model.ui.show_toast(format!("{}: {}", title, url));
            return;
        };

        let result = std::process::Command::new(open_cmd)
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                tracing::info!(command = %open_cmd, url, "opened video");
                self.model.ui.show_toast(format!("Opening {}", title));
            }
            Err(e) => {
                tracing::warn!("Failed to execute open_command '{}': {}", open_cmd, e);
                self.model
                    .ui
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }

    pub(crate) fn select_menu_entry(&mut self, index: usize) {
        self.model.ui.menu = None;
        if let Some(entry) = MENU_ENTRIES.get(index) {
            self.model
                .ui
                .show_toast(format!("{}: {}", entry.title, entry.subtitle));
        }
    }
}
