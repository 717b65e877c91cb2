//! Targeting configuration
//!
//! Owned and persisted by the host; the engine only ever reads a snapshot of
//! it each tick through [`WorldView::config`](crate::world::view::WorldView).

use serde::{Deserialize, Serialize};

use crate::targeting::constants::{close, cone};

/// One concentric cone band: entities out to `max_distance` are matched
/// against `angle_degrees` of the avatar's facing direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeBand {
    /// Distance threshold of this band
    pub max_distance: f32,
    /// Angular threshold applied to targets falling in this band
    pub angle_degrees: f32,
}

/// Targeting configuration
///
/// Band semantics follow the innermost-to-outermost evaluation order: a
/// target past band N-1's distance but within band N's picks up band N's
/// angle. Disabled outer bands are `None`; the innermost band is always
/// active and also caps the range when both outer bands are disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetingConfig {
    /// Enable the small omnidirectional circle around the avatar
    pub close_circle_enabled: bool,
    /// Radius of that circle
    pub close_circle_radius: f32,
    /// Innermost cone band, always evaluated
    pub cone1: ConeBand,
    /// Middle cone band
    pub cone2: Option<ConeBand>,
    /// Outermost cone band
    pub cone3: Option<ConeBand>,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            close_circle_enabled: false,
            close_circle_radius: close::RADIUS,
            cone1: ConeBand {
                max_distance: cone::CONE1_DISTANCE,
                angle_degrees: cone::CONE1_ANGLE,
            },
            cone2: Some(ConeBand {
                max_distance: cone::CONE2_DISTANCE,
                angle_degrees: cone::CONE2_ANGLE,
            }),
            cone3: Some(ConeBand {
                max_distance: cone::CONE3_DISTANCE,
                angle_degrees: cone::CONE3_ANGLE,
            }),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("close circle radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("cone distance must be positive, got {0}")]
    NonPositiveDistance(f32),
    #[error("cone angle must be within (0, 180], got {0}")]
    AngleOutOfRange(f32),
    #[error("cone band distances must increase outward ({inner} >= {outer})")]
    NonMonotonicBands { inner: f32, outer: f32 },
}

impl TargetingConfig {
    /// Validate after loading from host persistence
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.close_circle_enabled && self.close_circle_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.close_circle_radius));
        }

        let mut inner = &self.cone1;
        Self::validate_band(inner)?;
        for band in [&self.cone2, &self.cone3].into_iter().flatten() {
            Self::validate_band(band)?;
            if inner.max_distance >= band.max_distance {
                return Err(ConfigError::NonMonotonicBands {
                    inner: inner.max_distance,
                    outer: band.max_distance,
                });
            }
            inner = band;
        }
        Ok(())
    }

    fn validate_band(band: &ConeBand) -> Result<(), ConfigError> {
        if band.max_distance <= 0.0 {
            return Err(ConfigError::NonPositiveDistance(band.max_distance));
        }
        if band.angle_degrees <= 0.0 || band.angle_degrees > 180.0 {
            return Err(ConfigError::AngleOutOfRange(band.angle_degrees));
        }
        Ok(())
    }

    /// Distance past which no cone band applies
    pub fn outer_cone_distance(&self) -> f32 {
        if let Some(cone3) = &self.cone3 {
            cone3.max_distance
        } else if let Some(cone2) = &self.cone2 {
            cone2.max_distance
        } else {
            self.cone1.max_distance
        }
    }

    /// Angular threshold for a target at the given distance, following the
    /// innermost-to-outermost band ladder
    pub fn cone_angle_at(&self, distance: f32) -> f32 {
        let mut angle = self.cone1.angle_degrees;
        match (&self.cone3, &self.cone2) {
            (Some(cone3), Some(cone2)) => {
                if distance > cone2.max_distance {
                    angle = cone3.angle_degrees;
                } else if distance > self.cone1.max_distance {
                    angle = cone2.angle_degrees;
                }
            }
            (Some(cone3), None) => {
                if distance > self.cone1.max_distance {
                    angle = cone3.angle_degrees;
                }
            }
            (None, Some(cone2)) => {
                if distance > self.cone1.max_distance {
                    angle = cone2.angle_degrees;
                }
            }
            (None, None) => {}
        }
        angle
    }
}
