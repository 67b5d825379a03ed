//! Error types and diagnostics
//!
//! This module provides error handling and diagnostic reporting
//! for the binding generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for braze-weld operations
pub type BrazeResult<T> = Result<T, BrazeError>;

/// Main error type for braze-weld
#[derive(Debug, Error)]
pub enum BrazeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No class declaration in the input header
    #[error("No class declaration found in {0}")]
    ClassNotFound(PathBuf),

    /// No namespace declaration in the input header
    #[error("No namespace declaration found in {0}")]
    NamespaceNotFound(PathBuf),

    /// No summary block ahead of the class declaration
    #[error("No class summary block found in {0}")]
    ClassSummaryNotFound(PathBuf),

    /// A property-tagged member without a captured parameter
    #[error(
        "Property tag #pythonProperty requires a set method with one parameter: {member} || {class_path}"
    )]
    PropertyWithoutParameter { member: String, class_path: String },

    /// A property-tagged member whose name does not start with `set`
    #[error(
        "Property tag #pythonProperty requires a member named set<Property>: {member} || {class_path}"
    )]
    PropertyNamingConvention { member: String, class_path: String },

    /// An exposed member with more than one declared parameter
    #[error("Member takes more than one parameter, which bindings do not support: {member} || {class_path}")]
    UnsupportedSignature { member: String, class_path: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl BrazeError {
    /// Create a property authoring error for a member missing its parameter
    pub fn property_without_parameter(
        member: impl Into<String>,
        class_path: impl Into<String>,
    ) -> Self {
        BrazeError::PropertyWithoutParameter {
            member: member.into(),
            class_path: class_path.into(),
        }
    }

    /// Create a property authoring error for a misnamed member
    pub fn property_naming(member: impl Into<String>, class_path: impl Into<String>) -> Self {
        BrazeError::PropertyNamingConvention {
            member: member.into(),
            class_path: class_path.into(),
        }
    }

    /// Create an authoring error for a multi-parameter member
    pub fn unsupported_signature(
        member: impl Into<String>,
        class_path: impl Into<String>,
    ) -> Self {
        BrazeError::UnsupportedSignature {
            member: member.into(),
            class_path: class_path.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        BrazeError::Other(message.into())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Error - prevents binding generation
    Error,
    /// Warning - generation continues
    Warning,
    /// Info - informational message
    Info,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Info => "info",
        }
    }

    /// Get ANSI color code
    pub fn color(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "\x1b[31m",   // Red
            DiagnosticSeverity::Warning => "\x1b[33m", // Yellow
            DiagnosticSeverity::Info => "\x1b[34m",    // Blue
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Source file
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Create an info diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Info, message)
    }

    /// Set the source file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref file) = self.file {
            result.push_str(&file.display().to_string());
            result.push_str(": ");
        }

        result.push_str(self.severity.display());
        result.push_str(": ");
        result.push_str(&self.message);

        result
    }

    /// Format with ANSI colors
    pub fn format_colored(&self) -> String {
        let mut result = String::new();
        let reset = "\x1b[0m";

        if let Some(ref file) = self.file {
            result.push_str("\x1b[2m");
            result.push_str(&file.display().to_string());
            result.push_str(reset);
            result.push_str(": ");
        }

        result.push_str(self.severity.color());
        result.push_str(self.severity.display());
        result.push_str(reset);
        result.push_str(": ");
        result.push_str(&self.message);

        result
    }
}

/// Collector for diagnostics during binding generation
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an error
    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::error(message));
    }

    /// Add a warning
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    /// Add an info message
    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::info(message));
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Print all diagnostics to stderr
    pub fn print(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic.format_colored());
        }
    }

    /// Print summary
    pub fn print_summary(&self) {
        let warnings = self.warning_count();
        if warnings > 0 {
            eprintln!("\n{} warning(s)", warnings);
        }
    }
}
