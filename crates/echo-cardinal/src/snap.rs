// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Snapping of continuous directions onto sign vectors.
//!
//! A float direction is normalised and dotted with each world axis. Each dot
//! product is classified against `cos(half_angle)`: inside the cone around
//! `+axis` gives `1`, inside the cone around `-axis` gives `-1`, otherwise
//! `0`. With the default 60° half-angle a direction halfway between two axes
//! (45° from each) lands in both cones and snaps to the diagonal.

use thiserror::Error;
use tracing::trace;

use crate::IntVec3;

/// Default cone half-angle in degrees.
pub const DEFAULT_CONE_HALF_ANGLE_DEG: f32 = 60.0;

/// Rejected [`SnapConfig`] values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SnapConfigError {
    /// The half-angle is NaN, infinite, or outside `(0, 90]` degrees.
    #[error("cone half-angle must be finite and in (0, 90] degrees, got {0}")]
    InvalidHalfAngle(f32),
}

/// Tuning for float-to-sign-vector snapping.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSnapConfig", into = "RawSnapConfig"))]
pub struct SnapConfig {
    cone_half_angle_deg: f32,
}

impl SnapConfig {
    /// Validates and builds a config.
    ///
    /// # Errors
    /// [`SnapConfigError::InvalidHalfAngle`] unless `0 < deg <= 90`.
    pub fn new(cone_half_angle_deg: f32) -> Result<Self, SnapConfigError> {
        if !cone_half_angle_deg.is_finite()
            || cone_half_angle_deg <= 0.0
            || cone_half_angle_deg > 90.0
        {
            return Err(SnapConfigError::InvalidHalfAngle(cone_half_angle_deg));
        }
        Ok(Self {
            cone_half_angle_deg,
        })
    }

    /// Half-angle of each axis cone, in degrees.
    pub fn cone_half_angle_deg(&self) -> f32 {
        self.cone_half_angle_deg
    }

    /// Dot-product threshold: `cos(half_angle)`.
    pub fn threshold(&self) -> f32 {
        libm::cosf(self.cone_half_angle_deg.to_radians())
    }

    /// Snaps `direction` to a sign vector.
    ///
    /// The zero vector and any input with a NaN or infinite component snap
    /// to [`IntVec3::ZERO`]. Every other finite input is classified, however
    /// large or small its magnitude.
    pub fn snap(&self, direction: [f32; 3]) -> IntVec3 {
        if direction.iter().any(|c| !c.is_finite()) {
            trace!(?direction, "non-finite direction snapped to zero");
            return IntVec3::ZERO;
        }
        let peak = direction.iter().fold(0.0_f32, |m, c| m.max(c.abs()));
        if peak <= 0.0 {
            trace!(?direction, "zero direction snapped to zero");
            return IntVec3::ZERO;
        }
        // Pre-scaling by the largest magnitude keeps the squares in [0, 3].
        let [x, y, z] = direction.map(|c| c / peak);
        let length = libm::sqrtf(x * x + y * y + z * z);
        let threshold = self.threshold();
        // Dotting a unit vector with a world axis just selects a component.
        let classify = |component: f32| {
            let dot = component / length;
            if dot >= threshold {
                1
            } else if dot <= -threshold {
                -1
            } else {
                0
            }
        };
        let snapped = IntVec3::new(classify(x), classify(y), classify(z));
        trace!(?direction, %snapped, "snapped direction");
        snapped
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            cone_half_angle_deg: DEFAULT_CONE_HALF_ANGLE_DEG,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSnapConfig {
    #[serde(default = "default_half_angle")]
    cone_half_angle_deg: f32,
}

#[cfg(feature = "serde")]
const fn default_half_angle() -> f32 {
    DEFAULT_CONE_HALF_ANGLE_DEG
}

#[cfg(feature = "serde")]
impl TryFrom<RawSnapConfig> for SnapConfig {
    type Error = SnapConfigError;

    fn try_from(raw: RawSnapConfig) -> Result<Self, Self::Error> {
        Self::new(raw.cone_half_angle_deg)
    }
}

#[cfg(feature = "serde")]
impl From<SnapConfig> for RawSnapConfig {
    fn from(config: SnapConfig) -> Self {
        Self {
            cone_half_angle_deg: config.cone_half_angle_deg,
        }
    }
}
