//! Audio device capability and the bundled local device
//!
//! The player drives playback through the `AudioDevice` trait and receives
//! device-originated notifications (volume changed on the device itself)
//! through an event channel taken from the device at startup.

use anyhow::Result;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const DEVICE_NAME: &str = "tunedeck-local";

/// Volume a fresh device starts at.
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Notifications originating on the device rather than in the application.
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceEvent {
    VolumeChanged { volume: f32 },
}

/// Receiving end of a device's event stream. Taken once by the app shell and
/// drained into the player.
pub type DeviceEventChannel = UnboundedReceiver<DeviceEvent>;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("empty source uri")]
    EmptySource,
    #[error("start requested with no source loaded")]
    NoSource,
}

/// Playback capability consumed by the player.
pub trait AudioDevice: Send {
    /// Prepare a source for playback without starting it.
    fn load_source(&mut self, uri: &str) -> Result<()>;

    /// Start rendering the loaded source.
    fn start(&mut self) -> Result<()>;

    /// Pause rendering. Pausing an idle device is a no-op.
    fn pause(&mut self) -> Result<()>;

    /// Current device volume, within `[0.0, 1.0]`.
    fn volume(&self) -> f32;

    /// Set the device volume. Values outside `[0.0, 1.0]` are clamped by the
    /// device. Does not emit a `DeviceEvent`.
    fn set_volume(&mut self, volume: f32) -> Result<()>;

    /// Hand over the device-originated event channel. Yields `Some` at most
    /// once; `None` for devices without an event source.
    fn take_event_channel(&mut self) -> Option<DeviceEventChannel>;
}

/// Handle for injecting device-originated events, simulating e.g. a hardware
/// volume knob. Clonable; safe to use from any task.
#[derive(Clone)]
pub struct DeviceRemote {
    event_tx: UnboundedSender<DeviceEvent>,
}

impl DeviceRemote {
    /// Report a volume change that happened on the device side.
    pub fn volume_changed(&self, volume: f32) {
        if self.event_tx.send(DeviceEvent::VolumeChanged { volume }).is_err() {
            tracing::debug!("Device event channel closed, dropping volume event");
        }
    }
}

/// In-process stand-in for a sound device.
///
/// Remembers the loaded source, whether it is rendering, and its volume, and
/// carries the event channel hardware notifications arrive on.
pub struct LocalAudioDevice {
    source: Option<String>,
    playing: bool,
    volume: f32,
    event_tx: UnboundedSender<DeviceEvent>,
    event_rx: Option<DeviceEventChannel>,
}

impl LocalAudioDevice {
    pub fn new(initial_volume: f32) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            source: None,
            playing: false,
            volume: initial_volume.clamp(0.0, 1.0),
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    /// Remote control for this device's event stream.
    pub fn remote(&self) -> DeviceRemote {
        DeviceRemote {
            event_tx: self.event_tx.clone(),
        }
    }

    pub fn name() -> &'static str {
        DEVICE_NAME
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Default for LocalAudioDevice {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl AudioDevice for LocalAudioDevice {
    fn load_source(&mut self, uri: &str) -> Result<()> {
        if uri.is_empty() {
            return Err(AudioError::EmptySource.into());
        }
        tracing::debug!(device = DEVICE_NAME, uri, "Source loaded");
        self.source = Some(uri.to_string());
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(AudioError::NoSource.into());
        }
        self.playing = true;
        tracing::debug!(device = DEVICE_NAME, "Playback started");
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        tracing::debug!(device = DEVICE_NAME, "Playback paused");
        Ok(())
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.volume = volume.clamp(0.0, 1.0);
        Ok(())
    }

    fn take_event_channel(&mut self) -> Option<DeviceEventChannel> {
        self.event_rx.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_start_drive_the_device() {
        let mut device = LocalAudioDevice::default();
        device.load_source("songs/better-day.mp3").unwrap();
        device.start().unwrap();
        assert!(device.is_playing());
        device.pause().unwrap();
        assert!(!device.is_playing());
    }

    #[test]
    fn start_without_source_fails() {
        let mut device = LocalAudioDevice::default();
        let err = device.start().unwrap_err();
        assert!(err.downcast_ref::<AudioError>().is_some());
        assert!(!device.is_playing());
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut device = LocalAudioDevice::default();
        assert!(device.load_source("").is_err());
    }

    #[test]
    fn pause_on_idle_device_is_a_noop() {
        let mut device = LocalAudioDevice::default();
        device.pause().unwrap();
        assert!(!device.is_playing());
    }

    #[test]
    fn device_clamps_volume() {
        let mut device = LocalAudioDevice::new(0.5);
        device.set_volume(3.0).unwrap();
        assert_eq!(device.volume(), 1.0);
        device.set_volume(-1.0).unwrap();
        assert_eq!(device.volume(), 0.0);
    }

    #[test]
    fn event_channel_is_taken_once() {
        let mut device = LocalAudioDevice::default();
        assert!(device.take_event_channel().is_some());
        assert!(device.take_event_channel().is_none());
    }

    #[tokio::test]
    async fn remote_events_arrive_on_the_channel() {
        let mut device = LocalAudioDevice::default();
        let remote = device.remote();
        let mut events = device.take_event_channel().unwrap();

        remote.volume_changed(0.3);
        let event = events.recv().await.unwrap();
        assert_eq!(event, DeviceEvent::VolumeChanged { volume: 0.3 });
    }
}
