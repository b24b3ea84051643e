//! Reusable UI components.

mod paginator;

pub use paginator::{Paginator, PAGE_SIZE};
