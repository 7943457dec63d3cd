//! Perspective camera and screen-space ray construction.

/// Core camera struct and projection matrices.
pub mod core;
/// World-space rays through normalized device coordinates.
pub mod ray;

pub use self::core::Camera;
pub use self::ray::Ray;
