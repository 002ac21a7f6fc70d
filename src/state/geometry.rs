// Transform math and letterbox geometry shared by the carousel and the current image.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    /// Translate by `(x, y)`, then scale uniformly by `zoom`.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}, {})",
            self.x, self.y, self.zoom, self.zoom
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal travel a non-flick swipe needs to navigate.
    /// An unmeasured viewport only navigates on flicks.
    pub fn swipe_threshold(&self) -> f64 {
        if self.width.is_finite() && self.width > 0.0 {
            self.width / 2.0
        } else {
            f64::INFINITY
        }
    }
}

/// Displayed box of an image letterboxed into the viewport at zoom 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageGeometry {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_top: f64,
}

impl ImageGeometry {
    /// Fit the natural size into the viewport. `None` until every dimension is
    /// known and positive, so callers never divide by zero.
    pub fn fit(natural_width: f64, natural_height: f64, viewport: Viewport) -> Option<Self> {
        let dims = [natural_width, natural_height, viewport.width, viewport.height];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return None;
        }
        let image_ratio = natural_width / natural_height;
        let viewport_ratio = viewport.width / viewport.height;
        let geometry = if image_ratio > viewport_ratio {
            let height = viewport.width / image_ratio;
            Self {
                width: viewport.width,
                height,
                padding_left: 0.0,
                padding_top: (viewport.height - height) / 2.0,
            }
        } else {
            let width = viewport.height * image_ratio;
            Self {
                width,
                height: viewport.height,
                padding_left: (viewport.width - width) / 2.0,
                padding_top: 0.0,
            }
        };
        Some(geometry)
    }

    /// Largest pan offset per axis that keeps the zoomed image covering its box.
    pub fn max_offset(&self, zoom: f64) -> (f64, f64) {
        let max_x = self.width * (zoom - 1.0) / 2.0 - self.padding_left;
        let max_y = self.height * (zoom - 1.0) / 2.0 - self.padding_top;
        (max_x.max(0.0), max_y.max(0.0))
    }

    pub fn clamp_pan(&self, zoom: f64, x: f64, y: f64) -> (f64, f64) {
        let (max_x, max_y) = self.max_offset(zoom);
        (x.clamp(-max_x, max_x), y.clamp(-max_y, max_y))
    }
}
