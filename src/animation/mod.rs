//! # Animation Helpers
//!
//! Interpolation routines and a path follower for moving scene objects
//! through a loop of control points.

pub mod interpolation;
pub mod path;

pub use interpolation::{catmull_rom, lerp};
pub use path::{Interpolation, PathError, PathFollower};
