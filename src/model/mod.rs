//! Model module - Playback state and the observable player
//!
//! This module contains the player core and its data types. It is organized
//! into submodules by responsibility:
//!
//! - `song`: Song metadata and the bundled catalog
//! - `playback`: Playback state snapshot and volume clamping
//! - `events`: Notification events broadcast to observers
//! - `observer`: Observer capability trait
//! - `player`: The music player subject owning state and registry

mod events;
mod observer;
mod playback;
mod player;
mod song;

// Re-export all public types for convenient access
pub use events::PlayerEvent;
pub use observer::{ObserverId, PlayerObserver};
pub use playback::{PlaybackState, clamp_volume};
pub use player::MusicPlayer;
pub use song::{Song, SongLibrary};
