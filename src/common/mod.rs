//! Common types, traits, and error definitions for rigid_motion
//!
//! This module provides the foundational building blocks shared by the
//! trajectory, projection, and animation modules.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
