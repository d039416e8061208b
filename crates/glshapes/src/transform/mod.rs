//! Pivoted affine transforms.
//!
//! A shape's placement is a single [`Transform`] record. The model matrix is
//! rebuilt from the whole record every time it changes, so rotation, scale
//! and translation never erase each other and never accumulate drift.

mod pivoted;

pub use pivoted::Transform;
