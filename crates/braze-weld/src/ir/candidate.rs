//! Binding candidate metadata
//!
//! A candidate is one tagged member extracted from a header, carrying its
//! documentation blocks, capability tag and signature fragment, plus the
//! Python types derived from the raw C++ type text.

use crate::types::map_type;
use serde::{Deserialize, Serialize};

/// Tag marker exposing a member as a Python method
pub const METHOD_MARKER: &str = "#pythonMethod";

/// Tag marker exposing a get/set pair as a Python property
pub const PROPERTY_MARKER: &str = "#pythonProperty";

/// The single captured parameter of a member
///
/// The extraction pattern supports at most one parameter, so this is an
/// explicit capability limit of the candidate type, not the head of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingParam {
    /// Raw C++ type text (e.g. "const std::string&")
    pub raw_type: String,
    /// Parameter identifier
    pub name: String,
    /// Python type derived from the raw type
    pub py_type: String,
}

impl BindingParam {
    /// Create a new parameter, deriving its Python type immediately
    pub fn new(raw_type: impl Into<String>, name: impl Into<String>) -> Self {
        let raw_type = raw_type.into();
        let py_type = map_type(&raw_type);
        Self {
            raw_type,
            name: name.into(),
            py_type,
        }
    }
}

/// One match of the member tag pattern against header text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingCandidate {
    /// Summary block text, `///` markers stripped
    pub summary: String,
    /// Inner text of the `<returns>` block, if present
    pub return_annotation: Option<String>,
    /// Inner text of the `<param>` block, if present
    pub param_annotation: Option<String>,
    /// Raw capability tag text (empty when no `<tag>` block was authored)
    pub capability_tag: String,
    /// Raw declared return type text (empty for constructors)
    pub return_type: String,
    /// Member identifier
    pub name: String,
    /// The single captured parameter, if any
    pub param: Option<BindingParam>,
    /// Python type derived from the declared return type
    pub py_return_type: String,
    /// Set when the member declares more than one parameter
    pub unsupported: bool,
}

impl BindingCandidate {
    /// Create a new candidate for a member
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the summary text
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the return annotation block
    pub fn with_return_annotation(mut self, text: impl Into<String>) -> Self {
        self.return_annotation = Some(text.into());
        self
    }

    /// Set the parameter annotation block
    pub fn with_param_annotation(mut self, text: impl Into<String>) -> Self {
        self.param_annotation = Some(text.into());
        self
    }

    /// Set the capability tag text
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.capability_tag = tag.into();
        self
    }

    /// Set the declared return type, deriving its Python type
    pub fn returns(mut self, raw_type: impl Into<String>) -> Self {
        self.return_type = raw_type.into();
        self.py_return_type = map_type(&self.return_type);
        self
    }

    /// Attach the captured parameter
    pub fn param(mut self, param: BindingParam) -> Self {
        self.param = Some(param);
        self
    }

    /// Mark the member as taking more than one parameter
    pub fn unsupported(mut self) -> Self {
        self.unsupported = true;
        self
    }

    /// Whether the capability tag exposes this member as a method
    pub fn is_method(&self) -> bool {
        self.capability_tag.contains(METHOD_MARKER)
    }

    /// Whether the capability tag exposes this member as a property
    pub fn is_property(&self) -> bool {
        self.capability_tag.contains(PROPERTY_MARKER)
    }

    /// External property name: the member name with its `set` prefix
    /// stripped. `None` when the member does not follow the setter naming
    /// convention, which is an authoring error for property candidates.
    pub fn property_name(&self) -> Option<&str> {
        self.name.strip_prefix("set").filter(|rest| !rest.is_empty())
    }

    /// Inferred getter name for a property setter
    pub fn getter_name(&self) -> Option<String> {
        self.property_name().map(|rest| format!("get{rest}"))
    }
}
