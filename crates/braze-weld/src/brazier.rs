//! Brazier - binding generation orchestrator
//!
//! This module provides the `Brazier` struct which coordinates the whole
//! pipeline for one invocation: reading headers, extracting candidates,
//! rendering the registration unit and the stub file, and writing both.
//! One orchestrator serves both invocation shapes; the batch and
//! single-file entry points only differ in how the declaring-type identity
//! and output locations are obtained.

use crate::codegen::{RegistrationGenerator, StubGenerator};
use crate::diagnostics::{BrazeResult, DiagnosticsCollector};
use crate::ir::HeaderBinding;
use crate::parser::{parse_header, parse_header_with_identity};
use crate::utils::{include_directive, relative_path};
use std::fs;
use std::path::{Path, PathBuf};

/// The two supported invocation shapes
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Combined registration unit and stub for a list of headers, named
    /// from the module name; class identity derived from each source text
    Batch {
        /// Directory receiving both artifacts
        output_dir: PathBuf,
        /// Module name prefixing the artifact file names
        module_name: String,
        /// Input headers, processed strictly in the order given
        headers: Vec<PathBuf>,
    },
    /// Exactly one registration unit/stub pair for one declared type, with
    /// the class identity supplied explicitly rather than re-derived
    Single {
        /// Input header
        header: PathBuf,
        /// Output path of the registration unit; the stub lands next to it
        output_unit: PathBuf,
        /// Include directive to embed verbatim
        include: String,
        /// Bare name of the declaring class
        class_name: String,
        /// Namespace path of the declaring class
        namespace: String,
    },
}

/// Configuration for the Brazier
#[derive(Debug, Clone)]
pub struct BrazeConfig {
    /// The invocation shape to run
    pub invocation: Invocation,
}

impl BrazeConfig {
    /// Configure a batch run
    pub fn batch(
        output_dir: impl Into<PathBuf>,
        module_name: impl Into<String>,
        headers: Vec<PathBuf>,
    ) -> Self {
        Self {
            invocation: Invocation::Batch {
                output_dir: output_dir.into(),
                module_name: module_name.into(),
                headers,
            },
        }
    }

    /// Configure a single-file run
    pub fn single(
        header: impl Into<PathBuf>,
        output_unit: impl Into<PathBuf>,
        include: impl Into<String>,
        class_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            invocation: Invocation::Single {
                header: header.into(),
                output_unit: output_unit.into(),
                include: include.into(),
                class_name: class_name.into(),
                namespace: namespace.into(),
            },
        }
    }
}

/// Output of one generation run
#[derive(Debug)]
pub struct BuildOutput {
    /// Path of the written registration unit
    pub registration_unit: PathBuf,
    /// Path of the written stub file
    pub stub_file: PathBuf,
    /// Number of headers processed
    pub header_count: usize,
    /// Number of candidates extracted across all headers
    pub candidate_count: usize,
}

/// The binding generation pipeline
///
/// Brazier runs one invocation end to end:
/// 1. Read each input header in the order given
/// 2. Extract the declaring-type identity and binding candidates
/// 3. Render and fully write the registration unit
/// 4. Render and write the stub file
///
/// Fully sequential; a fatal error aborts the whole invocation. Each run is
/// side-effect-free until its final writes, so re-running after fixing the
/// input is the recovery path.
pub struct Brazier {
    config: BrazeConfig,
    diagnostics: DiagnosticsCollector,
    headers: Vec<HeaderBinding>,
}

impl Brazier {
    /// Create a new Brazier with the given configuration
    pub fn new(config: BrazeConfig) -> Self {
        Self {
            config,
            diagnostics: DiagnosticsCollector::new(),
            headers: Vec::new(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BrazeConfig {
        &self.config
    }

    /// Get the parsed header bindings (populated by `run`)
    pub fn headers(&self) -> &[HeaderBinding] {
        &self.headers
    }

    /// Get the diagnostics collector
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Serialize the parsed header bindings as pretty JSON
    pub fn headers_json(&self) -> BrazeResult<String> {
        Ok(serde_json::to_string_pretty(&self.headers)?)
    }

    /// Run the binding generation pipeline
    pub fn run(&mut self) -> BrazeResult<BuildOutput> {
        // Step 1: read and parse every input header
        self.headers = self.load_headers()?;

        let candidate_count: usize = self.headers.iter().map(|h| h.candidates.len()).sum();
        self.diagnostics.info(format!(
            "Extracted {} candidates from {} header(s)",
            candidate_count,
            self.headers.len()
        ));

        for header in &self.headers {
            let surface = header.surface();
            if surface.is_empty() {
                self.diagnostics.warning(format!(
                    "{} exposes no tagged members",
                    header.class_path()
                ));
            }
        }

        // Step 2: resolve the two output locations from one base path
        let (unit_path, stub_path) = self.output_paths();
        if let Some(parent) = unit_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Step 3: the registration unit is fully written before the stub
        // rendering begins
        let unit = RegistrationGenerator::new(&self.headers).generate()?;
        fs::write(&unit_path, unit)?;
        self.diagnostics
            .info(format!("Wrote registration unit {}", unit_path.display()));

        // Step 4: stub file
        let stub = StubGenerator::new(&self.headers).generate()?;
        fs::write(&stub_path, stub)?;
        self.diagnostics
            .info(format!("Wrote stub file {}", stub_path.display()));

        self.diagnostics.print_summary();

        Ok(BuildOutput {
            registration_unit: unit_path,
            stub_file: stub_path,
            header_count: self.headers.len(),
            candidate_count,
        })
    }

    /// Read every input header into a `HeaderBinding`, strictly in the
    /// order given
    fn load_headers(&self) -> BrazeResult<Vec<HeaderBinding>> {
        match &self.config.invocation {
            Invocation::Batch {
                output_dir,
                headers,
                ..
            } => {
                let mut parsed = Vec::with_capacity(headers.len());
                for path in headers {
                    let source = fs::read_to_string(path)?;
                    let include = include_directive(&relative_path(output_dir, path));
                    parsed.push(parse_header(&source, path, include)?);
                }
                Ok(parsed)
            }
            Invocation::Single {
                header,
                include,
                class_name,
                namespace,
                ..
            } => {
                let source = fs::read_to_string(header)?;
                Ok(vec![parse_header_with_identity(
                    &source,
                    header,
                    include.clone(),
                    class_name.clone(),
                    namespace.clone(),
                )?])
            }
        }
    }

    /// Both artifacts derive from one output base path
    fn output_paths(&self) -> (PathBuf, PathBuf) {
        match &self.config.invocation {
            Invocation::Batch {
                output_dir,
                module_name,
                ..
            } => {
                let unit = output_dir.join(format!("{module_name}PythonBindings.h"));
                let stub = output_dir.join(format!("{module_name}PythonBindings.pyi"));
                (unit, stub)
            }
            Invocation::Single { output_unit, .. } => {
                let stub = stub_path_for(output_unit);
                (output_unit.clone(), stub)
            }
        }
    }
}

/// Swap the registration-unit suffix for the stub suffix
fn stub_path_for(unit: &Path) -> PathBuf {
    unit.with_extension("pyi")
}
