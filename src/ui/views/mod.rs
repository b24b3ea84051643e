//! Application views (screens).

mod gallery;
mod help;

pub use gallery::{GalleryAction, GalleryView};
pub use help::HelpView;
