//! Frame building independent of any graphics backend.
//!
//! A frame is described as a sequence of calls on a [`Canvas`]. [`DrawList`] records those calls
//! so a backend can present them, and so tests can inspect them.

mod canvas;
mod frame;
pub mod palette;
mod sprite;

pub use canvas::{Canvas, DrawCommand, DrawList, Shape};
pub use frame::{draw_frame, FrameContext};
pub use sprite::Sprite;
