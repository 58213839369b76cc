//! Controller module - Input handling and playback commands
//!
//! This module contains the application controller that routes user input to
//! player mutations and forwards device-originated events. It is organized
//! into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Playback control methods
//! - `player_events`: Device event listener

mod input;
mod playback;
mod player_events;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::audio::DeviceRemote;
use crate::model::{MusicPlayer, SongLibrary};

#[derive(Clone)]
pub struct AppController {
    pub(crate) player: Arc<Mutex<MusicPlayer>>,
    pub(crate) library: Arc<SongLibrary>,
    pub(crate) device_remote: DeviceRemote,
    quit: Arc<AtomicBool>,
}

impl AppController {
    pub fn new(
        player: Arc<Mutex<MusicPlayer>>,
        library: Arc<SongLibrary>,
        device_remote: DeviceRemote,
    ) -> Self {
        Self {
            player,
            library,
            device_remote,
            quit: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    pub fn should_quit(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }
}
