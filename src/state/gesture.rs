// Touch gesture session bookkeeping: which gesture a finger-down started and
// where it has been since.

use crate::config::ViewerConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    #[default]
    None,
    Swiping,
    Panning,
    /// Recognized on a two-finger start but never acted upon.
    Pinching,
}

/// One observed contact point, captured by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
}

impl TouchSample {
    pub fn new(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }
}

/// Lives from touch-start to touch-end, never longer.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    pub mode: GestureMode,
    pub start: TouchSample,
    pub current: TouchSample,
    /// Zoom level was above the minimum when the finger went down.
    pub is_zoom_mode_start: bool,
    /// Pan offset at touch-start, so successive pans accumulate.
    pub pan_origin: (f64, f64),
}

impl GestureSession {
    pub fn dx(&self) -> f64 {
        self.current.x - self.start.x
    }

    pub fn dy(&self) -> f64 {
        self.current.y - self.start.y
    }

    pub fn dt(&self) -> f64 {
        self.current.timestamp_ms - self.start.timestamp_ms
    }

    pub fn is_tap(&self, cfg: &ViewerConfig) -> bool {
        self.dx().abs() <= cfg.click_diff_px
            && self.dy().abs() <= cfg.click_diff_px
            && self.dt() <= cfg.click_timeout_ms
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureClassifier {
    session: Option<GestureSession>,
    /// Armed by a single tap, consumed by the double tap that follows it.
    last_tap_ms: Option<f64>,
}

impl GestureClassifier {
    pub fn mode(&self) -> GestureMode {
        self.session
            .as_ref()
            .map(|s| s.mode)
            .unwrap_or(GestureMode::None)
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn last_tap_ms(&self) -> Option<f64> {
        self.last_tap_ms
    }

    /// Open a session for the given contact points. Returns the new mode, or
    /// `None` when the touch-start is ignored.
    pub fn begin(
        &mut self,
        points: &[TouchSample],
        zoom_level: f64,
        pan_offset: (f64, f64),
        cfg: &ViewerConfig,
    ) -> Option<GestureMode> {
        let mode = match points.len() {
            1 if zoom_level <= cfg.min_zoom => GestureMode::Swiping,
            1 => GestureMode::Panning,
            // A second finger joining a live gesture leaves it alone.
            2 if self.session.is_none() => GestureMode::Pinching,
            _ => return None,
        };
        let start = points[0];
        self.session = Some(GestureSession {
            mode,
            start,
            current: start,
            is_zoom_mode_start: zoom_level > cfg.min_zoom,
            pan_origin: pan_offset,
        });
        Some(mode)
    }

    pub fn session_mut(&mut self) -> Option<&mut GestureSession> {
        self.session.as_mut()
    }

    /// Close the session; the mode is `None` afterwards.
    pub fn finish(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Record a tap at `timestamp_ms`. Returns `true` when it completes a
    /// double tap, which disarms the detector so a third tap starts over.
    pub fn register_tap(&mut self, timestamp_ms: f64, cfg: &ViewerConfig) -> bool {
        // Event timestamps may be negative or jump, so only the distance counts.
        match self.last_tap_ms {
            Some(prev) if (timestamp_ms - prev).abs() <= cfg.double_click_timeout_ms => {
                self.last_tap_ms = None;
                true
            }
            _ => {
                self.last_tap_ms = Some(timestamp_ms);
                false
            }
        }
    }
}
