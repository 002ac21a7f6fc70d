pub mod img_viewer;
pub mod toolbar;

pub use img_viewer::{ImgViewer, ImgViewerProps};
pub use toolbar::{Toolbar, ToolbarProps};
