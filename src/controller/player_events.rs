//! Device event listener
//!
//! Device-originated notifications (a volume knob turned on the device
//! itself) arrive on the device's event channel and are forwarded into the
//! player, which rebroadcasts them to the displays like any app-initiated
//! change.

use crate::audio::DeviceEventChannel;

use super::AppController;

impl AppController {
    /// Spawn the background task draining device events into the player.
    pub fn start_device_event_listener(&self, mut event_channel: DeviceEventChannel) {
        let controller = self.clone();
        tracing::info!("Starting device event listener");

        tokio::spawn(async move {
            while let Some(event) = event_channel.recv().await {
                if controller.should_quit() {
                    tracing::debug!("Device event listener shutting down");
                    break;
                }

                tracing::debug!(event = ?event, "Device event received");
                let mut player = controller.player.lock().await;
                if let Err(e) = player.handle_device_event(event) {
                    tracing::error!(error = %e, "Device event handling failed");
                }
            }
        });
    }
}
