//! Render target capability consumed by the display observers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

/// Addressable slots on a render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceField {
    Title,
    Artist,
    Cover,
    PlayControl,
    VolumeControl,
    Status,
}

/// UI surface an observer writes into.
///
/// The observers only depend on these operations, not on what the surface
/// is; tests substitute recording or failing implementations.
pub trait RenderSurface: Send {
    fn set_text(&mut self, field: SurfaceField, text: &str) -> Result<()>;
    fn set_image(&mut self, field: SurfaceField, uri: &str) -> Result<()>;
    fn set_control(&mut self, field: SurfaceField, value: f32) -> Result<()>;
}

/// Retained field store the TUI renders from.
///
/// Observers write fields as notifications arrive; the draw loop snapshots
/// the store each frame.
#[derive(Clone, Debug, Default)]
pub struct TuiSurface {
    texts: HashMap<SurfaceField, String>,
    images: HashMap<SurfaceField, String>,
    controls: HashMap<SurfaceField, f32>,
}

impl TuiSurface {
    pub fn text(&self, field: SurfaceField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn image(&self, field: SurfaceField) -> Option<&str> {
        self.images.get(&field).map(String::as_str)
    }

    pub fn control(&self, field: SurfaceField) -> Option<f32> {
        self.controls.get(&field).copied()
    }
}

impl RenderSurface for TuiSurface {
    fn set_text(&mut self, field: SurfaceField, text: &str) -> Result<()> {
        self.texts.insert(field, text.to_string());
        Ok(())
    }

    fn set_image(&mut self, field: SurfaceField, uri: &str) -> Result<()> {
        self.images.insert(field, uri.to_string());
        Ok(())
    }

    fn set_control(&mut self, field: SurfaceField, value: f32) -> Result<()> {
        self.controls.insert(field, value);
        Ok(())
    }
}

/// Handle shared between an observer (writer) and the draw loop (reader).
#[derive(Clone, Default)]
pub struct SharedTuiSurface(Arc<Mutex<TuiSurface>>);

impl SharedTuiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current surface contents for rendering. A poisoned lock
    /// yields an empty surface for this frame rather than tearing down the
    /// UI.
    pub fn snapshot(&self) -> TuiSurface {
        self.0
            .lock()
            .map(|surface| surface.clone())
            .unwrap_or_default()
    }
}

impl RenderSurface for SharedTuiSurface {
    fn set_text(&mut self, field: SurfaceField, text: &str) -> Result<()> {
        self.0
            .lock()
            .map_err(|_| anyhow!("render surface lock poisoned"))?
            .set_text(field, text)
    }

    fn set_image(&mut self, field: SurfaceField, uri: &str) -> Result<()> {
        self.0
            .lock()
            .map_err(|_| anyhow!("render surface lock poisoned"))?
            .set_image(field, uri)
    }

    fn set_control(&mut self, field: SurfaceField, value: f32) -> Result<()> {
        self.0
            .lock()
            .map_err(|_| anyhow!("render surface lock poisoned"))?
            .set_control(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_round_trip() {
        let mut surface = TuiSurface::default();
        surface.set_text(SurfaceField::Title, "Better Day").unwrap();
        surface.set_image(SurfaceField::Cover, "x.webp").unwrap();
        surface.set_control(SurfaceField::VolumeControl, 0.4).unwrap();

        assert_eq!(surface.text(SurfaceField::Title), Some("Better Day"));
        assert_eq!(surface.image(SurfaceField::Cover), Some("x.webp"));
        assert_eq!(surface.control(SurfaceField::VolumeControl), Some(0.4));
        assert_eq!(surface.text(SurfaceField::Artist), None);
    }

    #[test]
    fn shared_surface_snapshot_sees_writes() {
        let mut shared = SharedTuiSurface::new();
        let reader = shared.clone();

        shared.set_text(SurfaceField::Status, "stopped").unwrap();
        assert_eq!(reader.snapshot().text(SurfaceField::Status), Some("stopped"));
    }
}
