//! Browser glue: canvas surface, frame scheduling and page events

pub mod app;
pub mod canvas;
pub mod error;
pub mod scheduler;

pub use app::start;
pub use canvas::{CanvasSprite, CanvasSurface};
pub use error::GlueError;
pub use scheduler::{FrameHandle, FrameScheduler};
