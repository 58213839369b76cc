//! The music player subject: playback state, observer registry, broadcast

use anyhow::Result;

use crate::audio::{AudioDevice, DeviceEvent, DeviceEventChannel};

use super::events::PlayerEvent;
use super::observer::{ObserverId, PlayerObserver};
use super::playback::{PlaybackState, clamp_volume};
use super::song::Song;

struct Registration {
    id: ObserverId,
    observer: Box<dyn PlayerObserver>,
}

/// Subject of the display notifications.
///
/// Owns the playback state, the ordered observer registry and the audio
/// device. Every mutation updates the state, drives the device, and then
/// synchronously notifies all observers in registration order; the mutating
/// call does not return until every observer has processed the update.
///
/// Observers are owned by the player and broadcast borrows it mutably, so an
/// observer cannot call back into the player from inside `update`.
pub struct MusicPlayer {
    state: PlaybackState,
    observers: Vec<Registration>,
    audio: Box<dyn AudioDevice>,
    next_observer_id: ObserverId,
}

impl MusicPlayer {
    /// Create an idle player over an audio device. The initial volume is
    /// whatever the device reports.
    pub fn new(audio: Box<dyn AudioDevice>) -> Self {
        Self {
            state: PlaybackState::idle(audio.volume()),
            observers: Vec::new(),
            audio,
            next_observer_id: 0,
        }
    }

    /// Snapshot of the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    /// Hand over the device's event channel so the app shell can forward
    /// device-originated events into `handle_device_event`.
    pub fn take_device_events(&mut self) -> Option<DeviceEventChannel> {
        self.audio.take_event_channel()
    }

    // ========================================================================
    // Observer registry
    // ========================================================================

    /// Register an observer. Observers are notified in registration order;
    /// registering the same display again simply notifies it twice.
    ///
    /// The new observer immediately receives a whole-snapshot `State` event
    /// so it renders the current state without waiting for the next change.
    pub fn add_observer(&mut self, observer: Box<dyn PlayerObserver>) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;

        tracing::debug!(observer = observer.label(), id, "Observer registered");
        self.observers.push(Registration { id, observer });

        let sync = PlayerEvent::State(self.state.clone());
        if let Some(registration) = self.observers.last_mut() {
            if let Err(e) = registration.observer.update(&sync) {
                tracing::warn!(
                    observer = registration.observer.label(),
                    id,
                    error = %e,
                    "Observer failed initial state sync"
                );
            }
        }
        id
    }

    /// Remove a registration. Returns `false` (a no-op, not an error) when
    /// the id is not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|r| r.id == id) {
            Some(index) => {
                let registration = self.observers.remove(index);
                tracing::debug!(observer = registration.observer.label(), id, "Observer removed");
                true
            }
            None => false,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========================================================================
    // Playback mutations
    // ========================================================================

    /// Start playing a song, replacing the current one if already playing.
    ///
    /// The device is driven first; a device error propagates before any
    /// state change, so observers never see a state the device refused.
    pub fn play(&mut self, song: Song) -> Result<()> {
        self.audio.load_source(&song.file)?;
        self.audio.start()?;

        self.state = PlaybackState {
            current_song: Some(song),
            playing: true,
            volume: self.audio.volume(),
        };
        self.broadcast(&PlayerEvent::Play(self.state.clone()));
        Ok(())
    }

    /// Stop playback. The current song is kept so displays keep showing
    /// track details; only the playing flag changes. Stopping an idle player
    /// broadcasts the same payload again.
    pub fn stop(&mut self) -> Result<()> {
        self.audio.pause()?;

        self.state.playing = false;
        self.broadcast(&PlayerEvent::Stop(self.state.clone()));
        Ok(())
    }

    /// Set the volume, clamped into `[0.0, 1.0]`. Out-of-range input is
    /// clamped silently, not rejected. Does not touch the playing flag or
    /// the current song.
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        let clamped = clamp_volume(volume);
        self.audio.set_volume(clamped)?;

        self.state.volume = clamped;
        self.broadcast(&PlayerEvent::Volume { volume: clamped });
        Ok(())
    }

    /// Apply a device-originated event and rebroadcast it, so volume changes
    /// made on the device itself reach the displays like app-initiated ones.
    pub fn handle_device_event(&mut self, event: DeviceEvent) -> Result<()> {
        match event {
            DeviceEvent::VolumeChanged { volume } => {
                let clamped = clamp_volume(volume);
                self.audio.set_volume(clamped)?;

                self.state.volume = clamped;
                self.broadcast(&PlayerEvent::Volume { volume: clamped });
            }
        }
        Ok(())
    }

    /// Notify every registered observer, in registration order. A failing
    /// observer is logged and skipped; the remaining observers are still
    /// notified.
    fn broadcast(&mut self, event: &PlayerEvent) {
        tracing::debug!(
            event = event.kind(),
            observers = self.observers.len(),
            "Broadcasting state change"
        );
        for registration in &mut self.observers {
            if let Err(e) = registration.observer.update(event) {
                tracing::warn!(
                    observer = registration.observer.label(),
                    id = registration.id,
                    event = event.kind(),
                    error = %e,
                    "Observer update failed, continuing broadcast"
                );
            }
        }
    }
}
