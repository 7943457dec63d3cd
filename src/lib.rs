// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated 3D scene with ray-cast hover picking.
//!
//! A cone and a torus knot sit in a small scene graph. Every frame the knot
//! slides back and forth along X while rotating about +Y, and whatever mesh
//! is under the pointer flashes a highlight colour.
//!
//! # Key entry points
//!
//! - [`app::DemoApp`] - application context owning the scene and driving
//!   one frame at a time
//! - [`animation::AnimationController`] - back-and-forth translation with
//!   slerped rotation
//! - [`picking::PickHelper`] - pointer to scene-node resolution and
//!   reversible emissive highlighting
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! There is exactly one logical thread. The host (the browser's
//! `requestAnimationFrame` loop behind the `web` feature, or the headless
//! binary) calls [`app::DemoApp::frame`] with a monotonically increasing
//! timestamp. The frame advances the animation, then either picks under the
//! current pointer or clears any previous pick.

pub mod animation;
pub mod app;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
#[cfg(feature = "web")]
pub mod web;

pub use app::DemoApp;
pub use error::KnotpickError;
pub use input::{InputEvent, PointerPosition, Viewport};
