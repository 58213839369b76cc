//! Shared view helpers (status text, volume formatting)

use crate::model::PlaybackState;

/// Symbol for the play control slot.
pub fn play_symbol(playing: bool) -> &'static str {
    if playing { "▶" } else { "■" }
}

/// Volume as a percentage label, e.g. "Vol: 85%".
pub fn format_volume(volume: f32) -> String {
    format!("Vol: {}%", (volume * 100.0).round() as u32)
}

/// One-line status for the compact displays.
pub fn status_line(state: &PlaybackState) -> String {
    match &state.current_song {
        Some(song) if state.playing => format!("▶ {} | {}", song.title, song.artist),
        Some(song) => format!("■ {} | {}", song.title, song.artist),
        None => "No song playing".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Song;

    use super::*;

    #[test]
    fn volume_formats_as_percent() {
        assert_eq!(format_volume(0.85), "Vol: 85%");
        assert_eq!(format_volume(0.0), "Vol: 0%");
        assert_eq!(format_volume(1.0), "Vol: 100%");
    }

    #[test]
    fn status_line_reflects_playback() {
        let mut state = PlaybackState::idle(1.0);
        assert_eq!(status_line(&state), "No song playing");

        state.current_song = Some(Song::new("Better Day", "Penguin Music", "x.mp3", "x.webp"));
        state.playing = true;
        assert_eq!(status_line(&state), "▶ Better Day | Penguin Music");

        state.playing = false;
        assert_eq!(status_line(&state), "■ Better Day | Penguin Music");
    }
}
