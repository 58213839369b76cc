//! Playback control methods

use super::AppController;

/// Volume change per key press.
pub(crate) const VOLUME_STEP: f32 = 0.05;

impl AppController {
    /// Play a song from the catalog by index. Out-of-range indices are
    /// ignored.
    pub async fn play_song(&self, index: usize) {
        let Some(song) = self.library.get(index).cloned() else {
            tracing::debug!(index, "No song at catalog index");
            return;
        };

        let mut player = self.player.lock().await;
        match player.play(song) {
            Ok(()) => {
                tracing::info!(index, "Song started");
            }
            Err(e) => {
                tracing::error!(index, error = %e, "Play failed");
            }
        }
    }

    /// Toggle between playing and stopped. When idle with no song loaded,
    /// starts the first catalog entry.
    pub async fn toggle_playback(&self) {
        let mut player = self.player.lock().await;
        let state = player.state();
        tracing::debug!(is_playing = state.playing, "Toggling playback");

        let result = if state.playing {
            player.stop()
        } else {
            let song = state
                .current_song
                .or_else(|| self.library.get(0).cloned());
            match song {
                Some(song) => player.play(song),
                None => {
                    tracing::warn!("Catalog is empty, nothing to play");
                    return;
                }
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    action = if state.playing { "stopped" } else { "playing" },
                    "Playback toggled"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Toggle playback failed");
            }
        }
    }

    pub async fn stop_playback(&self) {
        let mut player = self.player.lock().await;
        if let Err(e) = player.stop() {
            tracing::error!(error = %e, "Stop failed");
        }
    }

    /// Nudge the volume by `delta`. The player clamps the result.
    pub async fn adjust_volume(&self, delta: f32) {
        let mut player = self.player.lock().await;
        let target = player.state().volume + delta;
        if let Err(e) = player.set_volume(target) {
            tracing::error!(error = %e, "Volume change failed");
        }
    }

    /// Turn the simulated device volume knob. The change travels the
    /// device-originated path: remote to event channel to listener to
    /// player broadcast.
    pub async fn turn_device_knob(&self, delta: f32) {
        let current = self.player.lock().await.state().volume;
        self.device_remote.volume_changed(current + delta);
    }
}
