//! Display geometry and coordinate scaling between agent and physical space.

use serde::Serialize;

/// Widest screen the agent is shown unless configured otherwise.
pub const DEFAULT_MAX_WIDTH: u32 = 1280;

/// Physical display size and the (possibly smaller) size the agent sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayGeometry {
    pub physical_width: u32,
    pub physical_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    /// `target / physical`; 1.0 when the display fits within the cap.
    pub scale_factor: f64,
}

impl DisplayGeometry {
    /// Geometry for a display, capped at [`DEFAULT_MAX_WIDTH`].
    pub fn new(physical_width: u32, physical_height: u32) -> Self {
        Self::with_max_width(physical_width, physical_height, DEFAULT_MAX_WIDTH)
    }

    /// Geometry for a display, capped at `max_width`.
    pub fn with_max_width(physical_width: u32, physical_height: u32, max_width: u32) -> Self {
        let max_width = max_width.max(1);
        if physical_width > max_width {
            let scale_factor = f64::from(max_width) / f64::from(physical_width);
            let target_height = (f64::from(physical_height) * scale_factor) as u32;
            Self {
                physical_width,
                physical_height,
                target_width: max_width,
                target_height: target_height.max(1),
                scale_factor,
            }
        } else {
            Self {
                physical_width,
                physical_height,
                target_width: physical_width,
                target_height: physical_height,
                scale_factor: 1.0,
            }
        }
    }

    /// Whether the agent sees a downscaled screen.
    pub fn is_downscaled(&self) -> bool {
        self.scale_factor < 1.0
    }
}

/// Which way a coordinate is being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingDirection {
    /// Agent-issued coordinate to real screen pixels.
    FromAgentSpace,
    /// Real screen pixels to the agent's coordinate system.
    ToAgentSpace,
}

/// Maps coordinates between agent space and physical space.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateScaler {
    geometry: DisplayGeometry,
    enabled: bool,
}

impl CoordinateScaler {
    pub fn new(geometry: DisplayGeometry, enabled: bool) -> Self {
        Self { geometry, enabled }
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Translate `(x, y)`. Rounds half to even in both directions.
    pub fn scale(&self, direction: ScalingDirection, x: u32, y: u32) -> (u32, u32) {
        if !self.enabled {
            return (x, y);
        }

        let g = &self.geometry;
        let x_factor = f64::from(g.physical_width) / f64::from(g.target_width);
        let y_factor = f64::from(g.physical_height) / f64::from(g.target_height);

        let (x, y) = match direction {
            ScalingDirection::FromAgentSpace => (f64::from(x) * x_factor, f64::from(y) * y_factor),
            ScalingDirection::ToAgentSpace => (f64::from(x) / x_factor, f64::from(y) / y_factor),
        };
        (x.round_ties_even() as u32, y.round_ties_even() as u32)
    }

    /// Size screenshots must be resized to, or `None` to keep the capture as is.
    pub fn screenshot_size(&self) -> Option<(u32, u32)> {
        if self.enabled && self.geometry.is_downscaled() {
            Some((self.geometry.target_width, self.geometry.target_height))
        } else {
            None
        }
    }
}
