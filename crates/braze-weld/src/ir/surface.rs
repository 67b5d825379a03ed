//! Per-header binding surface
//!
//! A `HeaderBinding` aggregates everything extracted from one header file:
//! the declaring class identity, its documentation, and the candidate
//! members. The `BindingSurface` is the partition of those candidates into
//! exposed methods and exposed properties.

use crate::diagnostics::{BrazeError, BrazeResult};
use crate::ir::BindingCandidate;
use serde::{Deserialize, Serialize};

/// The partitioned method/property set for one declaring type
///
/// Partition is by substring containment of the two markers, so a candidate
/// authored with both markers lands in both lists. That is an undefined
/// authoring condition and is not defended against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSurface {
    /// Candidates tagged with the method marker
    pub methods: Vec<BindingCandidate>,
    /// Candidates tagged with the property marker
    pub properties: Vec<BindingCandidate>,
}

impl BindingSurface {
    /// Partition candidates into exposed methods and properties
    pub fn partition(candidates: &[BindingCandidate]) -> Self {
        Self {
            methods: candidates.iter().filter(|c| c.is_method()).cloned().collect(),
            properties: candidates
                .iter()
                .filter(|c| c.is_property())
                .cloned()
                .collect(),
        }
    }

    /// Whether nothing is exposed
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty()
    }
}

/// All binding data extracted from one header file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBinding {
    /// Bare class name of the declaring type
    pub class_name: String,
    /// `::`-joined namespace path of the declaring type
    pub namespace: String,
    /// Class-level summary text, when located
    pub class_doc: Option<String>,
    /// Include directive path embedded in the registration unit
    pub include: String,
    /// Every candidate matched in the header, tagged or not
    pub candidates: Vec<BindingCandidate>,
}

impl HeaderBinding {
    /// Create a new header binding for a declaring type
    pub fn new(class_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: namespace.into(),
            class_doc: None,
            include: String::new(),
            candidates: Vec::new(),
        }
    }

    /// Set the class-level documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.class_doc = Some(doc.into());
        self
    }

    /// Set the include directive path
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = include.into();
        self
    }

    /// Add one candidate
    pub fn candidate(mut self, candidate: BindingCandidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Set all candidates at once
    pub fn candidates(mut self, candidates: Vec<BindingCandidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Fully qualified name of the declaring type
    pub fn class_path(&self) -> String {
        format!("{}::{}", self.namespace, self.class_name)
    }

    /// First segment of the namespace path
    pub fn namespace_root(&self) -> &str {
        self.namespace.split("::").next().unwrap_or(&self.namespace)
    }

    /// Partition the candidates into the exposed surface
    pub fn surface(&self) -> BindingSurface {
        BindingSurface::partition(&self.candidates)
    }

    /// Check the exposed surface for authoring errors.
    ///
    /// Every exposed member must fit the single-parameter capture; every
    /// property must originate from a single-parameter setter named
    /// `set<Property>`. Both renderers run this before emitting anything.
    pub fn validate_surface(&self) -> BrazeResult<BindingSurface> {
        let surface = self.surface();

        for property in &surface.properties {
            if property.unsupported {
                return Err(BrazeError::unsupported_signature(
                    property.name.as_str(),
                    self.class_path(),
                ));
            }
            if property.param.is_none() {
                return Err(BrazeError::property_without_parameter(
                    property.name.as_str(),
                    self.class_path(),
                ));
            }
            if property.property_name().is_none() {
                return Err(BrazeError::property_naming(
                    property.name.as_str(),
                    self.class_path(),
                ));
            }
        }

        for method in &surface.methods {
            if method.unsupported {
                return Err(BrazeError::unsupported_signature(
                    method.name.as_str(),
                    self.class_path(),
                ));
            }
        }

        Ok(surface)
    }
}
