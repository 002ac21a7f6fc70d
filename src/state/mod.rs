pub mod geometry;
pub mod gesture;
pub mod ledger;
pub mod viewer;

pub use geometry::{ImageGeometry, Transform, Viewport};
pub use gesture::{GestureClassifier, GestureMode, GestureSession, TouchSample};
pub use ledger::{classify_swipe, IndexLedger, Navigation};
pub use viewer::{GestureOutcome, ViewerState};
