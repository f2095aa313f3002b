use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Edge length used when the requested width is invalid.
pub const FALLBACK_WIDTH: f64 = 12.0;
/// Layer count used when the requested layer count is invalid.
pub const FALLBACK_LAYERS: usize = 2;

/// Parameters used to construct a cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct CubeParams {
    /// Edge length of the whole cube.
    pub width: f64,
    /// Number of layers along each axis.
    pub layers: usize,
    /// Duration of one animated quarter turn, in milliseconds.
    ///
    /// 0 disables interpolation.
    pub turn_duration: f64,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            layers: 3,
            turn_duration: 150.0,
        }
    }
}

impl CubeParams {
    /// Constructs cube parameters.
    pub fn new(width: f64, layers: usize, turn_duration: f64) -> Self {
        Self {
            width,
            layers,
            turn_duration,
        }
    }

    /// Returns the parameters with invalid values replaced.
    ///
    /// If either the layer count or width is invalid, both are reset to
    /// [`FALLBACK_LAYERS`] and [`FALLBACK_WIDTH`]. A negative or non-finite
    /// turn duration becomes 0.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut ret = self;
        if ret.layers < 2 || !ret.width.is_finite() || ret.width <= 0.0 {
            log::warn!(
                "invalid cube size (width {}, {} layers); using width {FALLBACK_WIDTH} with {FALLBACK_LAYERS} layers",
                ret.width,
                ret.layers,
            );
            ret.layers = FALLBACK_LAYERS;
            ret.width = FALLBACK_WIDTH;
        }
        if !ret.turn_duration.is_finite() || ret.turn_duration < 0.0 {
            log::warn!("invalid turn duration {}; using 0", ret.turn_duration);
            ret.turn_duration = 0.0;
        }
        ret
    }

    /// Returns the edge length of a single piece.
    pub fn piece_width(&self) -> f64 {
        self.width / self.layers as f64
    }

    /// Returns the duration of one animated quarter turn.
    pub fn turn_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.turn_duration / 1000.0).unwrap_or_default()
    }

    /// Returns the number of animation steps for one quarter turn.
    pub fn turn_steps(&self) -> u32 {
        if self.turn_duration == 0.0 {
            1
        } else {
            crate::TURN_STEPS
        }
    }
}
