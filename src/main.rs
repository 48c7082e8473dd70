use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
    time::Instant,
};

use parktui::catalog::Catalog;
use parktui::config::{self, Config};
use parktui::{logic, model, utils};

/// Amusement park landing page in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/parktui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Category to show first (category id or "all")
    #[arg(long)]
    category: Option<String>,

    /// Milliseconds between carousel auto-advance ticks
    #[arg(long)]
    interval_ms: Option<u64>,
}

mod app;
mod handlers;
mod services;
mod ui;

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { reason } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

pub struct App {
    pub model: model::Model,

    open_command: Option<String>,
    assets_dir: Option<PathBuf>,
    image_preview_enabled: bool,
    image_protocol: String,
    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: tokio::sync::mpsc::UnboundedSender<(String, ImagePreviewState)>,
    image_update_rx: tokio::sync::mpsc::UnboundedReceiver<(String, ImagePreviewState)>,

    /// Maps ride ids to their image preview states
    image_state_map: HashMap<String, ImagePreviewState>,
}

impl App {
    fn new(config: &Config, catalog: Catalog, now: Instant) -> Self {
        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        let model = model::Model::new(
            catalog,
            config.initial_filter(),
            config.carousel_settings(),
            config.vim_mode,
            now,
        );

        tracing::info!(
            filter = %model.carousel.filter(),
            rides = model.carousel.filtered_len(),
            page_window = model.carousel.settings().page_window,
            "carousel mounted"
        );

        Self {
            model,
            open_command: config.open_command.clone(),
            assets_dir: config.assets_dir.clone(),
            image_preview_enabled: config.image_preview_enabled,
            image_protocol: config.image_protocol.clone(),
            image_picker: None,
            image_update_tx,
            image_update_rx,
            image_state_map: HashMap::new(),
        }
    }

    /// Detect the terminal graphics protocol; must run after entering the alternate screen
    fn init_image_picker(&mut self) {
        if !self.image_preview_enabled || self.assets_dir.is_none() {
            return;
        }

        let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Image preview: failed to detect terminal: {}", e);
                ratatui_image::picker::Picker::from_fontsize((8, 16))
            }
        };

        match self.image_protocol.to_lowercase().as_str() {
            "auto" => {}
            "iterm2" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2),
            "kitty" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty),
            "sixel" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel),
            "halfblocks" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks),
            unknown => tracing::warn!("Image preview: unknown protocol '{}', using auto-detect", unknown),
        }
        tracing::debug!(font_size = ?picker.font_size(), "image picker ready");

        self.image_picker = Some(picker);
    }

    /// Store finished background image loads
    fn drain_image_updates(&mut self) {
        while let Ok((ride_id, state)) = self.image_update_rx.try_recv() {
            tracing::debug!(ride = %ride_id, ?state, "image update");
            self.image_state_map.insert(ride_id, state);
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!(path = %path.display(), "debug logging enabled");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let config_path = config::find_config_path(args.config)?;
    match &config_path {
        Some(path) => tracing::info!("Loading config from: {:?}", path),
        None => tracing::info!("No config file found, using defaults"),
    }
    let mut config = config::load(config_path.as_ref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(category) = args.category {
        config.initial_category = category;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.auto_advance_ms = interval_ms;
    }
    config.carousel_settings().validate()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    let mut app = App::new(&config, catalog, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.init_image_picker();

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process image updates from background loading tasks (non-blocking)
        app.drain_image_updates();

        if app.model.carousel.tick(Instant::now()) {
            app.model.clamp_cursors();
        }

        // Never sleep past the next auto-advance deadline
        let wait = logic::ui::input_wait(app.model.carousel.time_until_tick(Instant::now()));
        if event::poll(wait)? {
            let ev = event::read()?;
            handlers::handle_event(app, ev);
        }
    }

    Ok(())
}
