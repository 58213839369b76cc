//! Observer capability for display components

use anyhow::Result;

use super::events::PlayerEvent;

/// Token identifying one observer registration.
///
/// Returned by `MusicPlayer::add_observer` and accepted by
/// `remove_observer`. Registering the same display twice yields two tokens,
/// and each registration is notified separately.
pub type ObserverId = u64;

/// Capability for anything that reacts to player state changes.
///
/// Implementations read the event and refresh their own render surface. They
/// receive snapshots only and have no way to reach back into the player from
/// inside `update`.
pub trait PlayerObserver: Send {
    /// Short name used in log lines when an update fails.
    fn label(&self) -> &'static str;

    /// Handle one state-change notification.
    fn update(&mut self, event: &PlayerEvent) -> Result<()>;
}
