//! Text rendering of mazes, search progress and solutions.

mod frames;
mod text;

pub use frames::{clear_frames, frame_path, FrameRecorder};
pub use text::{render_grid, RenderOptions};
