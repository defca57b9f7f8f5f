use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};
use crate::overlay::ViewportRect;

/// Corner of each slice view reserved for the figure: the rectangle from
/// (`start_width`, 0) to (1, `finish_height`) in normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportGeometry {
    pub start_width: f64,
    pub finish_height: f64,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self {
            start_width: 0.8,
            finish_height: 0.3,
        }
    }
}

impl ViewportGeometry {
    pub fn rect(&self) -> ViewportRect {
        ViewportRect {
            left: self.start_width,
            bottom: 0.0,
            right: 1.0,
            top: self.finish_height,
        }
    }

    /// Width of the overlay as a fraction of the view.
    pub fn width_fraction(&self) -> f64 {
        1.0 - self.start_width
    }

    pub fn set_width_fraction(&mut self, fraction: f64) -> Result<()> {
        unit_interval("viewport width fraction", fraction)?;
        self.start_width = 1.0 - fraction;
        Ok(())
    }

    pub fn set_height_fraction(&mut self, fraction: f64) -> Result<()> {
        unit_interval("viewport height fraction", fraction)?;
        self.finish_height = fraction;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        unit_interval("viewport start width", self.start_width)?;
        unit_interval("viewport finish height", self.finish_height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub show_figure: bool,
    /// Zoom slider level; camera distance is `zoom * zoom_multiplier`.
    pub zoom: f64,
    pub zoom_multiplier: f64,
    pub viewport: ViewportGeometry,
    /// Directory holding the figure meshes.
    pub model_dir: PathBuf,
    /// Drop overlays of views that no longer exist in the host.
    pub prune_vanished_views: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_figure: false,
            zoom: 35.0,
            zoom_multiplier: 10.0,
            viewport: ViewportGeometry::default(),
            model_dir: PathBuf::from("Resources/Models"),
            prune_vanished_views: true,
        }
    }
}

impl OverlayConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: OverlayConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn camera_distance(&self) -> f64 {
        self.zoom * self.zoom_multiplier
    }

    pub fn validate(&self) -> Result<()> {
        positive("zoom", self.zoom)?;
        positive("zoom multiplier", self.zoom_multiplier)?;
        self.viewport.validate()
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidSetting { name, value })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidSetting { name, value })
    }
}
