//! Event handling for the application.
//!
//! This module defines the application event type and the terminal event
//! poller that produces it.

mod handler;

pub use handler::EventHandler;

use crossterm::event::KeyEvent;

/// Events consumed by the application's update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Periodic tick; fires when no terminal event arrived within the
    /// tick rate. Used to keep the loop draining the task channel.
    Tick,
}
