//! View module - UI rendering and display observers
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `surface`: Render target capability and the shared TUI surface
//! - `observers`: Display observers registered with the player
//! - `layout`: Panel rendering (sidebar, main panel, mini bar)
//! - `utils`: Shared formatting helpers

mod layout;
mod observers;
mod surface;
mod utils;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::SongLibrary;

pub use observers::{MainPlayerView, MiniPlayerView, SidebarPlayerView};
pub use surface::{RenderSurface, SharedTuiSurface, SurfaceField, TuiSurface};

/// Per-frame copies of the three display surfaces.
pub struct ViewSnapshot {
    pub main: TuiSurface,
    pub sidebar: TuiSurface,
    pub mini: TuiSurface,
}

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &ViewSnapshot, library: &SongLibrary) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content (sidebar + now playing)
                Constraint::Length(3), // Mini bar
            ])
            .split(frame.area());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Sidebar (player + catalog)
                Constraint::Percentage(70), // Main player panel
            ])
            .split(chunks[0]);

        layout::render_sidebar(frame, main_chunks[0], &snapshot.sidebar, library);
        layout::render_main_panel(frame, main_chunks[1], &snapshot.main);
        layout::render_mini_bar(frame, chunks[1], &snapshot.mini);
    }
}
