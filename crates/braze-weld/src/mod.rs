//! braze-weld: binding generation core for the braze generator
//!
//! This crate turns documentation-tagged C++ headers into Python bindings by:
//! - Scanning header text for tagged member declarations (`#pythonMethod`,
//!   `#pythonProperty`) with a permissive comment-tag pattern
//! - Building an IR of binding candidates and the per-type exposed surface
//! - Mapping raw C++ type text to Python type names through one static table
//! - Rendering a pybind11 registration unit and a `.pyi` stub file that stay
//!   consistent with each other
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ tagged headers  │
//! │ (regex scan)    │
//! └────────┬────────┘
//!          │
//!          ▼
//!   ┌──────────────┐
//!   │HeaderBinding │
//!   └──────┬───────┘
//!          │
//!   ┌──────┴───────┐
//!   ▼              ▼
//! ┌──────────┐ ┌──────────┐
//! │ pybind11 │ │   .pyi   │
//! │   unit   │ │   stub   │
//! └──────────┘ └──────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use braze_weld::{BrazeConfig, Brazier};
//!
//! let config = BrazeConfig::batch(
//!     "generated",
//!     "carouselData",
//!     vec!["include/Project.h".into()],
//! );
//! Brazier::new(config)
//!     .run()
//!     .expect("Failed to generate bindings");
//! ```

// Core types
pub mod diagnostics;
pub mod ir;
pub mod types;

// Parsing and generation
pub mod brazier;
pub mod codegen;
pub mod parser;
pub mod utils;


// Re-exports for convenience
pub use brazier::{BrazeConfig, Brazier, BuildOutput, Invocation};
pub use codegen::{RegistrationGenerator, StubGenerator};
pub use diagnostics::{
    BrazeError, BrazeResult, Diagnostic, DiagnosticSeverity, DiagnosticsCollector,
};
pub use ir::{
    BindingCandidate, BindingParam, BindingSurface, HeaderBinding, METHOD_MARKER, PROPERTY_MARKER,
};
pub use parser::{
    class_name, class_summary, extract_candidates, namespace_path, parse_header,
    parse_header_with_identity,
};
pub use types::{map_type, required_import, required_imports};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
