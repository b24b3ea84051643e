//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the gallery screen, the
//! help overlay, and the reusable paginator component.

mod components;
pub mod theme;
mod views;

pub use components::{Paginator, PAGE_SIZE};
pub use theme::init_theme;
pub use views::{GalleryAction, GalleryView, HelpView};
