// Viewer state driven by touch and transition-end events. Every event lands in
// exactly one handler for the current gesture mode; handlers only mutate state
// and report what happened, the component turns reports into renders, timers
// and `on_prev`/`on_next` calls.

use log::{debug, trace};

use super::geometry::{ImageGeometry, Transform, Viewport};
use super::gesture::{GestureClassifier, GestureMode, GestureSession, TouchSample};
use super::ledger::{classify_swipe, IndexLedger, Navigation};
use crate::config::ViewerConfig;

/// What a touch-end resolved into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No open session, a pinch, or a swipe released mid-animation.
    Ignored,
    /// A single tap; arms double-tap detection, no visual change.
    Tap,
    /// Second tap of a double tap; the zoom level was toggled.
    DoubleTap,
    /// The carousel started animating towards `pending`. `None` is a snap back.
    SwipeCommitted(Option<Navigation>),
    /// A pan finished and was clamped.
    PanEnded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    pub config: ViewerConfig,
    pub zoom_level: f64,
    pub carousel_offset_x: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
    pub is_carousel_animating: bool,
    pub is_image_animating: bool,
    pub viewport: Viewport,
    /// Natural size of the current image, as last read from the element.
    pub natural_size: Option<(f64, f64)>,
    ledger: IndexLedger,
    gestures: GestureClassifier,
    carousel_generation: u64,
    image_generation: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            zoom_level: config.min_zoom,
            config,
            carousel_offset_x: 0.0,
            pan_offset_x: 0.0,
            pan_offset_y: 0.0,
            is_carousel_animating: false,
            is_image_animating: false,
            viewport: Viewport::default(),
            natural_size: None,
            ledger: IndexLedger::default(),
            gestures: GestureClassifier::default(),
            carousel_generation: 0,
            image_generation: 0,
        }
    }

    pub fn ledger(&self) -> &IndexLedger {
        &self.ledger
    }

    pub fn mode(&self) -> GestureMode {
        self.gestures.mode()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.gestures.session()
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom_level > self.config.min_zoom
    }

    /// Generation of the latest swipe commit, for matching fallback timers.
    pub fn carousel_generation(&self) -> u64 {
        self.carousel_generation
    }

    pub fn image_generation(&self) -> u64 {
        self.image_generation
    }

    /// Swap thresholds, keeping the zoom toggle on the same side.
    pub fn apply_config(&mut self, config: ViewerConfig) {
        let zoomed = self.is_zoomed();
        self.zoom_level = if zoomed {
            config.max_zoom
        } else {
            config.min_zoom
        };
        self.config = config;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_natural_size(&mut self, width: f64, height: f64) {
        self.natural_size = Some((width, height));
    }

    /// Replace the known size with what the current image reports right now;
    /// `None` while it is still loading.
    pub fn sync_natural_size(&mut self, size: Option<(f64, f64)>) {
        self.natural_size = size;
    }

    /// Current image fitted into the viewport, if its size is known.
    pub fn image_geometry(&self) -> Option<ImageGeometry> {
        let (w, h) = self.natural_size?;
        ImageGeometry::fit(w, h, self.viewport)
    }

    pub fn carousel_transform(&self) -> Transform {
        let slots = 1.0 + self.ledger.diff() as f64;
        Transform::translate(self.carousel_offset_x - self.viewport.width * slots, 0.0)
    }

    pub fn image_transform(&self) -> Transform {
        Transform {
            x: self.pan_offset_x,
            y: self.pan_offset_y,
            zoom: self.zoom_level,
        }
    }

    pub fn touch_start(&mut self, points: &[TouchSample]) -> GestureMode {
        let pan = (self.pan_offset_x, self.pan_offset_y);
        if let Some(mode) = self.gestures.begin(points, self.zoom_level, pan, &self.config) {
            debug!("gesture start: {:?} with {} contact(s)", mode, points.len());
        }
        self.gestures.mode()
    }

    pub fn touch_move(&mut self, point: TouchSample) {
        match self.gestures.mode() {
            GestureMode::Swiping => self.swipe_move(point),
            GestureMode::Panning => self.pan_move(point),
            GestureMode::Pinching | GestureMode::None => {}
        }
    }

    pub fn touch_end(&mut self, timestamp_ms: f64) -> GestureOutcome {
        let Some(session) = self.gestures.finish() else {
            return GestureOutcome::Ignored;
        };
        let outcome = match session.mode {
            GestureMode::Swiping => self.swipe_end(&session, timestamp_ms),
            GestureMode::Panning => self.pan_end(&session, timestamp_ms),
            GestureMode::Pinching | GestureMode::None => GestureOutcome::Ignored,
        };
        debug!("gesture end: {:?} -> {:?}", session.mode, outcome);
        outcome
    }

    fn swipe_move(&mut self, point: TouchSample) {
        let Some(session) = self.gestures.session_mut() else {
            return;
        };
        session.current = point;
        if !self.is_carousel_animating {
            self.carousel_offset_x = point.x - session.start.x;
            trace!("swipe offset {}", self.carousel_offset_x);
        }
    }

    fn pan_move(&mut self, point: TouchSample) {
        let Some(session) = self.gestures.session_mut() else {
            return;
        };
        session.current = point;
        if self.is_image_animating {
            return;
        }
        self.pan_offset_x = session.pan_origin.0 + (point.x - session.start.x);
        self.pan_offset_y = session.pan_origin.1 + (point.y - session.start.y);
        trace!("pan offset ({}, {})", self.pan_offset_x, self.pan_offset_y);
    }

    fn swipe_end(&mut self, session: &GestureSession, timestamp_ms: f64) -> GestureOutcome {
        if session.is_tap(&self.config) {
            return self.tap(timestamp_ms);
        }
        if self.is_carousel_animating {
            return GestureOutcome::Ignored;
        }
        let duration = timestamp_ms - session.start.timestamp_ms;
        let target = classify_swipe(
            session.dx(),
            duration,
            self.viewport.swipe_threshold(),
            &self.config,
        );
        self.ledger.stage(target);
        self.is_carousel_animating = true;
        self.carousel_offset_x = 0.0;
        self.carousel_generation += 1;
        GestureOutcome::SwipeCommitted(target)
    }

    fn pan_end(&mut self, session: &GestureSession, timestamp_ms: f64) -> GestureOutcome {
        if let Some(geometry) = self.image_geometry() {
            let (x, y) = geometry.clamp_pan(self.zoom_level, self.pan_offset_x, self.pan_offset_y);
            self.pan_offset_x = x;
            self.pan_offset_y = y;
        }
        if session.is_tap(&self.config) {
            return self.tap(timestamp_ms);
        }
        GestureOutcome::PanEnded
    }

    fn tap(&mut self, timestamp_ms: f64) -> GestureOutcome {
        if self.gestures.register_tap(timestamp_ms, &self.config) {
            self.toggle_zoom();
            GestureOutcome::DoubleTap
        } else {
            GestureOutcome::Tap
        }
    }

    fn toggle_zoom(&mut self) {
        self.zoom_level = if self.is_zoomed() {
            self.config.min_zoom
        } else {
            self.config.max_zoom
        };
        self.pan_offset_x = 0.0;
        self.pan_offset_y = 0.0;
        self.is_image_animating = true;
        self.image_generation += 1;
        debug!("zoom toggled to {}", self.zoom_level);
    }

    /// The carousel transform finished animating. The only writer of the
    /// committed index.
    pub fn carousel_transition_end(&mut self) -> Option<Navigation> {
        let nav = self.ledger.reconcile();
        self.is_carousel_animating = false;
        if let Some(nav) = nav {
            debug!("navigated {:?} to index {}", nav, self.ledger.committed());
        }
        nav
    }

    pub fn image_transition_end(&mut self) {
        self.is_image_animating = false;
    }

    /// Reconcile a carousel animation whose transition-end never arrived.
    /// Does nothing if `generation` is stale or the animation already ended.
    pub fn expire_carousel_transition(&mut self, generation: u64) -> Option<Navigation> {
        if generation != self.carousel_generation || !self.is_carousel_animating {
            return None;
        }
        self.carousel_transition_end()
    }

    /// Returns `true` if the image animation was still pending and got cleared.
    pub fn expire_image_transition(&mut self, generation: u64) -> bool {
        if generation != self.image_generation || !self.is_image_animating {
            return false;
        }
        self.image_transition_end();
        true
    }
}
