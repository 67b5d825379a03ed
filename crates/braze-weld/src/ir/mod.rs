//! Intermediate Representation (IR) for binding generation
//!
//! This module provides the metadata structures for representing tagged
//! C++ members and the per-header binding surface they form.

pub mod candidate;
pub mod surface;

pub use candidate::*;
pub use surface::*;
