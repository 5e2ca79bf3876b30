//! Tree View Widget
//!
//! Interactive terminal view over a [`Browser`](branchtree::application::Browser).
//!
//! # Module Structure
//!
//! - `view` - Cursor state and action handling
//! - `render` - Row, modal and help bar rendering
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod render;
mod view;

pub use input::run_interactive;
pub use render::render_tree;
