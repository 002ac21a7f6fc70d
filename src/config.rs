// Tunable thresholds for gesture classification and animation timing.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Max travel on either axis (px) for a touch to still count as a tap.
    pub click_diff_px: f64,
    /// Max time between touch-start and the last move sample for a tap.
    pub click_timeout_ms: f64,
    /// Two taps closer than this toggle the zoom level.
    pub double_click_timeout_ms: f64,
    /// A swipe shorter than this (and longer than `flick_min_px`) is a flick.
    pub flick_max_ms: f64,
    pub flick_min_px: f64,
    /// CSS transition duration of both the carousel and the image transform.
    pub transition_ms: u32,
    /// Grace period after `transition_ms` before the fallback timer reconciles.
    pub transition_fallback_ms: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 5.0,
            click_diff_px: 15.0,
            click_timeout_ms: 50.0,
            double_click_timeout_ms: 200.0,
            flick_max_ms: 250.0,
            flick_min_px: 20.0,
            transition_ms: 300,
            transition_fallback_ms: 150,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let cfg: ViewerConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        let non_negative = [
            ("click_diff_px", self.click_diff_px),
            ("click_timeout_ms", self.click_timeout_ms),
            ("double_click_timeout_ms", self.double_click_timeout_ms),
            ("flick_max_ms", self.flick_max_ms),
            ("flick_min_px", self.flick_min_px),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::InvalidThreshold {
                    field,
                    reason: format!("must be a finite non-negative number, got {value}"),
                });
            }
        }
        if !self.min_zoom.is_finite() || self.min_zoom <= 0.0 {
            return Err(ViewerError::InvalidThreshold {
                field: "min_zoom",
                reason: format!("must be positive, got {}", self.min_zoom),
            });
        }
        if !self.max_zoom.is_finite() || self.max_zoom <= self.min_zoom {
            return Err(ViewerError::InvalidThreshold {
                field: "max_zoom",
                reason: format!(
                    "must be greater than min_zoom ({}), got {}",
                    self.min_zoom, self.max_zoom
                ),
            });
        }
        Ok(())
    }

    /// Total time the fallback timer waits for a transition-end event.
    pub fn fallback_delay_ms(&self) -> u32 {
        self.transition_ms.saturating_add(self.transition_fallback_ms)
    }

    pub(crate) fn transition_css(&self) -> String {
        format!("transform {}ms", self.transition_ms)
    }
}
