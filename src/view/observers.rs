//! Display observers, one per player panel
//!
//! Three independent displays watch the same player: the full-detail main
//! panel, the sidebar panel, and the compact mini bar. They differ only in
//! which fields of their render surface they update.

use anyhow::Result;

use crate::model::{PlayerEvent, PlayerObserver};

use super::surface::{RenderSurface, SurfaceField};
use super::utils::{play_symbol, status_line};

/// Full-detail display: title, artist, cover art, play control, volume and
/// status line.
pub struct MainPlayerView<S> {
    surface: S,
}

impl<S: RenderSurface> MainPlayerView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface> PlayerObserver for MainPlayerView<S> {
    fn label(&self) -> &'static str {
        "main-player"
    }

    fn update(&mut self, event: &PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::Play(state) | PlayerEvent::Stop(state) | PlayerEvent::State(state) => {
                self.surface
                    .set_text(SurfaceField::PlayControl, play_symbol(state.playing))?;
                self.surface
                    .set_control(SurfaceField::VolumeControl, state.volume)?;
                self.surface
                    .set_text(SurfaceField::Status, &status_line(state))?;
                if let Some(song) = &state.current_song {
                    self.surface.set_text(SurfaceField::Title, &song.title)?;
                    self.surface.set_text(SurfaceField::Artist, &song.artist)?;
                    self.surface.set_image(SurfaceField::Cover, &song.cover)?;
                }
            }
            PlayerEvent::Volume { volume } => {
                self.surface
                    .set_control(SurfaceField::VolumeControl, *volume)?;
            }
        }
        Ok(())
    }
}

/// Sidebar display: track details and controls, no cover art or status.
pub struct SidebarPlayerView<S> {
    surface: S,
}

impl<S: RenderSurface> SidebarPlayerView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface> PlayerObserver for SidebarPlayerView<S> {
    fn label(&self) -> &'static str {
        "sidebar-player"
    }

    fn update(&mut self, event: &PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::Play(state) | PlayerEvent::Stop(state) | PlayerEvent::State(state) => {
                self.surface
                    .set_text(SurfaceField::PlayControl, play_symbol(state.playing))?;
                self.surface
                    .set_control(SurfaceField::VolumeControl, state.volume)?;
                if let Some(song) = &state.current_song {
                    self.surface.set_text(SurfaceField::Title, &song.title)?;
                    self.surface.set_text(SurfaceField::Artist, &song.artist)?;
                }
            }
            PlayerEvent::Volume { volume } => {
                self.surface
                    .set_control(SurfaceField::VolumeControl, *volume)?;
            }
        }
        Ok(())
    }
}

/// Compact bottom-bar display: one status line, play control and volume.
pub struct MiniPlayerView<S> {
    surface: S,
}

impl<S: RenderSurface> MiniPlayerView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface> PlayerObserver for MiniPlayerView<S> {
    fn label(&self) -> &'static str {
        "mini-player"
    }

    fn update(&mut self, event: &PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::Play(state) | PlayerEvent::Stop(state) | PlayerEvent::State(state) => {
                self.surface
                    .set_text(SurfaceField::PlayControl, play_symbol(state.playing))?;
                self.surface
                    .set_control(SurfaceField::VolumeControl, state.volume)?;
                self.surface
                    .set_text(SurfaceField::Status, &status_line(state))?;
            }
            PlayerEvent::Volume { volume } => {
                self.surface
                    .set_control(SurfaceField::VolumeControl, *volume)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{PlaybackState, Song};
    use crate::view::surface::TuiSurface;

    use super::*;

    fn playing_state() -> PlaybackState {
        PlaybackState {
            current_song: Some(Song::new(
                "Better Day",
                "Penguin Music",
                "songs/better-day.mp3",
                "songs/better-day.webp",
            )),
            playing: true,
            volume: 0.8,
        }
    }

    #[test]
    fn main_view_fills_all_fields_on_play() {
        let mut view = MainPlayerView::new(TuiSurface::default());
        view.update(&PlayerEvent::Play(playing_state())).unwrap();

        let surface = view.surface();
        assert_eq!(surface.text(SurfaceField::Title), Some("Better Day"));
        assert_eq!(surface.text(SurfaceField::Artist), Some("Penguin Music"));
        assert_eq!(surface.image(SurfaceField::Cover), Some("songs/better-day.webp"));
        assert_eq!(surface.text(SurfaceField::PlayControl), Some("▶"));
        assert_eq!(surface.control(SurfaceField::VolumeControl), Some(0.8));
        assert_eq!(
            surface.text(SurfaceField::Status),
            Some("▶ Better Day | Penguin Music")
        );
    }

    #[test]
    fn main_view_keeps_track_details_on_stop() {
        let mut view = MainPlayerView::new(TuiSurface::default());
        view.update(&PlayerEvent::Play(playing_state())).unwrap();

        let mut stopped = playing_state();
        stopped.playing = false;
        view.update(&PlayerEvent::Stop(stopped)).unwrap();

        let surface = view.surface();
        assert_eq!(surface.text(SurfaceField::PlayControl), Some("■"));
        assert_eq!(surface.text(SurfaceField::Title), Some("Better Day"));
    }

    #[test]
    fn volume_event_touches_only_the_volume_control() {
        let mut view = MainPlayerView::new(TuiSurface::default());
        view.update(&PlayerEvent::Volume { volume: 0.2 }).unwrap();

        let surface = view.surface();
        assert_eq!(surface.control(SurfaceField::VolumeControl), Some(0.2));
        assert_eq!(surface.text(SurfaceField::Title), None);
        assert_eq!(surface.text(SurfaceField::PlayControl), None);
    }

    #[test]
    fn sidebar_view_skips_cover_and_status() {
        let mut view = SidebarPlayerView::new(TuiSurface::default());
        view.update(&PlayerEvent::Play(playing_state())).unwrap();

        let surface = view.surface();
        assert_eq!(surface.text(SurfaceField::Title), Some("Better Day"));
        assert_eq!(surface.image(SurfaceField::Cover), None);
        assert_eq!(surface.text(SurfaceField::Status), None);
    }

    #[test]
    fn mini_view_only_writes_compact_fields() {
        let mut view = MiniPlayerView::new(TuiSurface::default());
        view.update(&PlayerEvent::State(playing_state())).unwrap();

        let surface = view.surface();
        assert_eq!(surface.text(SurfaceField::Title), None);
        assert_eq!(
            surface.text(SurfaceField::Status),
            Some("▶ Better Day | Penguin Music")
        );
        assert_eq!(surface.control(SurfaceField::VolumeControl), Some(0.8));
    }
}
