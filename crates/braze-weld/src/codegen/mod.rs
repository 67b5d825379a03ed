//! Output generation
//!
//! Renders extracted binding surfaces into the two generated artifacts:
//! the pybind11 registration unit and the Python stub file. Both renderers
//! validate the exposed surface before emitting anything, so a fatal
//! authoring error can never leave a half-written artifact pair.

pub mod registration;
pub mod stub;

pub use registration::RegistrationGenerator;
pub use stub::StubGenerator;
