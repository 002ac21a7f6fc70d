//! Touch-driven image viewer for Yew.
//!
//! [`ImgViewer`] renders the previous, current and next image as a horizontally
//! swipeable carousel. A swipe navigates, a double tap toggles zoom and a drag
//! while zoomed pans the current image. The host owns the image list: it gets
//! `on_prev`/`on_next` once per completed swipe and supplies new sources.
//!
//! ```ignore
//! html! {
//!     <ImgViewer
//!         visible={true}
//!         prev_src={prev}
//!         main_src={main}
//!         next_src={next}
//!         on_prev={on_prev}
//!         on_next={on_next}
//!         title={Some(AttrValue::from("heroes"))}
//!     />
//! }
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod state;
mod util;

pub use components::{ImgViewer, ImgViewerProps};
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use state::{
    GestureClassifier, GestureMode, GestureOutcome, GestureSession, ImageGeometry, IndexLedger,
    Navigation, TouchSample, Transform, ViewerState, Viewport,
};
pub use util::init_logging;
