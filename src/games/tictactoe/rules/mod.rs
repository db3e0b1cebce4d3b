//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the engine so they can be tested without driving whole games.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completes_line, line_through};
