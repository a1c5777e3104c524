//! Core building blocks shared by every other module

pub mod logging;
pub mod vec2;

pub use vec2::Vector2;
