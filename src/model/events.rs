//! Notification events broadcast to player observers

use super::playback::PlaybackState;

/// A state-change notification delivered to every registered observer.
///
/// `Play`, `Stop` and `State` carry a full snapshot of the playback state;
/// `Volume` carries only the changed volume. `State` is the whole-snapshot
/// sync an observer receives once when it is registered.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    Play(PlaybackState),
    Stop(PlaybackState),
    Volume { volume: f32 },
    State(PlaybackState),
}

impl PlayerEvent {
    /// Event kind as a lowercase string, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PlayerEvent::Play(_) => "play",
            PlayerEvent::Stop(_) => "stop",
            PlayerEvent::Volume { .. } => "volume",
            PlayerEvent::State(_) => "state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let state = PlaybackState::idle(1.0);
        assert_eq!(PlayerEvent::Play(state.clone()).kind(), "play");
        assert_eq!(PlayerEvent::Stop(state.clone()).kind(), "stop");
        assert_eq!(PlayerEvent::Volume { volume: 0.5 }.kind(), "volume");
        assert_eq!(PlayerEvent::State(state).kind(), "state");
    }
}
