//! Native-to-Python type mapping
//!
//! This module owns the static mapping table between raw C++ type text and
//! Python type names, plus the resolution of `typing` imports needed by the
//! mapped names. Both the registration unit and the stub file resolve types
//! through the same table so the two artifacts never disagree.

use crate::ir::BindingCandidate;
use std::collections::BTreeSet;

/// Ordered mapping rules from native type text to Python type names.
///
/// Rules are evaluated first-match-wins by substring containment, so the
/// broader vector rules must come before the bare element rules: a raw type
/// holding both `std::vector<std::string>` and `string` has to resolve to
/// `List[str]`, never `str`.
const TYPE_RULES: &[(&str, &str)] = &[
    ("std::vector<std::string>", "List[str]"),
    ("std::vector<int>", "List[int]"),
    ("std::vector<float>", "List[float]"),
    ("string", "str"),
    ("int", "int"),
    ("float", "float"),
    // In Python, float covers double
    ("double", "float"),
    ("bool", "bool"),
    // Single character in Python
    ("char", "str"),
];

/// `typing` imports keyed by the marker they cover, first match wins.
const IMPORT_RULES: &[(&str, &str)] = &[
    ("List", "from typing import List"),
    ("Dict", "from typing import Dict"),
    ("Tuple", "from typing import Tuple"),
    ("Optional", "from typing import Optional"),
    ("Union", "from typing import Union"),
    ("Any", "from typing import Any"),
    ("Set", "from typing import Set"),
    ("Iterable", "from typing import Iterable"),
];

/// Map raw C++ type text to a Python type name.
///
/// Unrecognized types pass through unchanged, which lets user-defined type
/// names survive into the stub file verbatim. The function is total and
/// idempotent: every mapped name is a fixed point of the table.
pub fn map_type(raw: &str) -> String {
    let raw = raw.trim();

    // Already-mapped list names would re-match their element rule
    if raw.starts_with("List[") {
        return raw.to_string();
    }

    for (needle, target) in TYPE_RULES {
        if raw.contains(needle) {
            return (*target).to_string();
        }
    }

    raw.to_string()
}

/// Resolve the `typing` import required by a mapped Python type, if any.
pub fn required_import(py_type: &str) -> Option<&'static str> {
    IMPORT_RULES
        .iter()
        .find(|(marker, _)| py_type.contains(marker))
        .map(|(_, import)| *import)
}

/// Collect the deduplicated import set over the mapped return and parameter
/// types of all candidates. A `BTreeSet` keeps emission order stable across
/// runs.
pub fn required_imports<'a>(
    candidates: impl IntoIterator<Item = &'a BindingCandidate>,
) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::new();

    for candidate in candidates {
        if let Some(import) = required_import(&candidate.py_return_type) {
            imports.insert(import);
        }
        if let Some(param) = &candidate.param {
            if let Some(import) = required_import(&param.py_type) {
                imports.insert(import);
            }
        }
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BindingCandidate, BindingParam};

    #[test]
    fn test_map_type_table() {
        assert_eq!(map_type("std::vector<std::string>"), "List[str]");
        assert_eq!(map_type("const std::string&"), "str");
        assert_eq!(map_type("const int&"), "int");
        assert_eq!(map_type("double"), "float");
        assert_eq!(map_type("bool"), "bool");
        assert_eq!(map_type("char"), "str");
    }

    #[test]
    fn test_map_type_priority_order() {
        // Both the vector marker and the bare string marker are present;
        // the broader rule must win.
        assert_eq!(map_type("std::vector<std::string>&"), "List[str]");
        assert_eq!(map_type("const std::vector<int>&"), "List[int]");
    }

    #[test]
    fn test_map_type_passthrough() {
        assert_eq!(map_type("DatabaseTable&"), "DatabaseTable&");
        assert_eq!(map_type(""), "");
    }

    #[test]
    fn test_map_type_idempotent() {
        let raws = [
            "std::vector<std::string>",
            "std::vector<int>",
            "std::vector<float>",
            "std::string",
            "int",
            "float",
            "double",
            "bool",
            "char",
            "DatabaseTable&",
        ];
        for raw in raws {
            let once = map_type(raw);
            assert_eq!(map_type(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_required_import() {
        assert_eq!(required_import("List[str]"), Some("from typing import List"));
        assert_eq!(required_import("Optional[int]"), Some("from typing import Optional"));
        assert_eq!(required_import("str"), None);
    }

    #[test]
    fn test_required_imports_deduplicate() {
        let a = BindingCandidate::new("setTags")
            .param(BindingParam::new("std::vector<std::string>&", "newTags"));
        let b = BindingCandidate::new("setNames")
            .param(BindingParam::new("const std::vector<std::string>&", "newNames"));

        let imports = required_imports([&a, &b]);
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("from typing import List"));
    }
}
