//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;
use super::playback::VOLUME_STEP;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.request_quit();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit();
            }
            KeyCode::Char(' ') => {
                self.toggle_playback().await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.stop_playback().await;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.adjust_volume(VOLUME_STEP).await;
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.adjust_volume(-VOLUME_STEP).await;
            }
            KeyCode::Char(']') => {
                self.turn_device_knob(VOLUME_STEP).await;
            }
            KeyCode::Char('[') => {
                self.turn_device_knob(-VOLUME_STEP).await;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.play_song(index).await;
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use crate::audio::LocalAudioDevice;
    use crate::model::{MusicPlayer, SongLibrary};

    use super::*;

    fn controller() -> AppController {
        let device = LocalAudioDevice::new(0.5);
        let remote = device.remote();
        let player = MusicPlayer::new(Box::new(device));
        AppController::new(
            Arc::new(Mutex::new(player)),
            Arc::new(SongLibrary::builtin()),
            remote,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn q_requests_quit() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(controller.should_quit());
    }

    #[tokio::test]
    async fn space_toggles_playback() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        assert!(controller.player.lock().await.is_playing());

        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        assert!(!controller.player.lock().await.is_playing());
    }

    #[tokio::test]
    async fn digits_play_catalog_entries() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('2'))).await.unwrap();

        let state = controller.player.lock().await.state();
        assert_eq!(
            state.current_song.as_ref().unwrap().title,
            SongLibrary::builtin().get(1).unwrap().title
        );
    }

    #[tokio::test]
    async fn minus_lowers_the_volume() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('-'))).await.unwrap();
        let volume = controller.player.lock().await.state().volume;
        assert!((volume - 0.45).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unmapped_keys_are_ignored() {
        let controller = controller();
        controller.handle_key_event(press(KeyCode::Char('x'))).await.unwrap();
        assert!(controller.player.lock().await.state().is_idle());
        assert!(!controller.should_quit());
    }
}
