mod audio;
mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::Mutex;

use audio::LocalAudioDevice;
use config::Settings;
use controller::AppController;
use model::{MusicPlayer, SongLibrary};
use view::{
    AppView, MainPlayerView, MiniPlayerView, SharedTuiSurface, SidebarPlayerView, ViewSnapshot,
};

/// The shared render surfaces, one per display observer.
struct DisplaySurfaces {
    main: SharedTuiSurface,
    sidebar: SharedTuiSurface,
    mini: SharedTuiSurface,
}

impl DisplaySurfaces {
    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            main: self.main.snapshot(),
            sidebar: self.sidebar.snapshot(),
            mini: self.mini.snapshot(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_or_default(Path::new(config::SETTINGS_FILE));

    if let Err(e) = logging::init_logging(&settings.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== tunedeck starting ===");

    let library = Arc::new(SongLibrary::load_or_builtin(settings.library_path.as_deref()));

    // The player, device and displays are constructed and wired here, in one
    // place; everything else receives handles from this root.
    let device = LocalAudioDevice::new(settings.initial_volume);
    let device_remote = device.remote();
    let mut player = MusicPlayer::new(Box::new(device));

    let surfaces = DisplaySurfaces {
        main: SharedTuiSurface::new(),
        sidebar: SharedTuiSurface::new(),
        mini: SharedTuiSurface::new(),
    };

    player.add_observer(Box::new(MainPlayerView::new(surfaces.main.clone())));
    player.add_observer(Box::new(SidebarPlayerView::new(surfaces.sidebar.clone())));
    player.add_observer(Box::new(MiniPlayerView::new(surfaces.mini.clone())));

    let device_events = player.take_device_events();

    let player = Arc::new(Mutex::new(player));
    let controller = AppController::new(player, library.clone(), device_remote);

    if let Some(event_channel) = device_events {
        controller.start_device_event_listener(event_channel);
    }

    tracing::info!(
        device = LocalAudioDevice::name(),
        songs = library.len(),
        "Starting TUI..."
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, library.as_ref(), &controller, &surfaces).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("tunedeck shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    library: &SongLibrary,
    controller: &AppController,
    surfaces: &DisplaySurfaces,
) -> io::Result<()> {
    loop {
        // Observers write the surfaces as broadcasts arrive; each frame
        // renders from a snapshot of them.
        let snapshot = surfaces.snapshot();
        terminal.draw(|f| AppView::render(f, &snapshot, library))?;

        // Handle input with a short poll time for smooth UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
