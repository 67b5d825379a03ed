//! Tag extraction from annotated headers
//!
//! This module applies the documentation-tag patterns over raw header text
//! and produces `BindingCandidate` records plus the declaring-type identity
//! (class name, namespace path, class summary). The patterns are a
//! best-effort tag scanner, not a C++ grammar: they are deliberately
//! permissive, tolerate intervening documentation lines, and every optional
//! block yields an empty capture rather than an error. The renderers only
//! ever see the extracted IR, so a structured parser could replace this
//! module without touching them.

use crate::diagnostics::{BrazeError, BrazeResult};
use crate::ir::{BindingCandidate, BindingParam, HeaderBinding};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// Member tag pattern. Captures, in order: the summary block, the
    /// optional `<returns>` / `<param>` / `<tag>` blocks, the declared
    /// return type text, the member identifier, and the raw argument text.
    static ref MEMBER_REGEX: Regex = Regex::new(concat!(
        r"///\s*<summary>\s*([\s\S]*?)\s*///\s*</summary>\s+",
        r"(?:///\s*<returns>(.*?)</returns>\s+)?",
        r"(?:///\s*<param(.*?)</param>\s+)?",
        r"(?:///\s*<tag(.*?)</tag>\s+)?",
        r"(.*?)(\w+)\(([^)]*)\)",
    ))
    .unwrap();

    /// Declaring class name
    static ref CLASS_REGEX: Regex = Regex::new(r"class\s+(\w+).*\s+\{").unwrap();

    /// One namespace scope; all matches joined give the namespace path
    static ref NAMESPACE_REGEX: Regex = Regex::new(r"namespace\s+(\w+)\s*\{").unwrap();

    /// Summary block anchored immediately before the class declaration
    static ref CLASS_SUMMARY_REGEX: Regex =
        Regex::new(r"<summary>\s*([\s\S]*?)\s*///\s*</summary>\s*class").unwrap();
}

/// Outcome of splitting a member's raw argument text
enum ArgCapture {
    /// No parameter, or a bare type with no identifier
    None,
    /// Exactly one typed, named parameter
    Single(BindingParam),
    /// More than one declared parameter
    Multiple,
}

/// Split raw argument text into at most one `(type, name)` pair.
///
/// A comma marks the member as taking more than one parameter, which the
/// candidate model cannot represent; such members are flagged unsupported
/// instead of being truncated to one binding. A type with no identifiable
/// name is treated as no parameter.
fn split_argument_text(raw_args: &str) -> ArgCapture {
    let args = raw_args.trim();
    if args.is_empty() {
        return ArgCapture::None;
    }
    if args.contains(',') {
        return ArgCapture::Multiple;
    }

    let Some((raw_type, name)) = args.rsplit_once(char::is_whitespace) else {
        return ArgCapture::None;
    };

    let name = name.trim_start_matches(['&', '*']);
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return ArgCapture::None;
    }

    ArgCapture::Single(BindingParam::new(raw_type.trim(), name))
}

/// Strip `///` markers and indentation from a captured documentation block
fn clean_doc(text: &str) -> String {
    let cleaned: Vec<&str> = text
        .lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix("///").unwrap_or(line).trim()
        })
        .collect();
    cleaned.join("\n").trim().to_string()
}

/// Extract every binding candidate from raw header text.
///
/// Candidates are returned in source order, tagged or not; classification
/// into the exposed surface happens on `HeaderBinding`.
pub fn extract_candidates(source: &str) -> Vec<BindingCandidate> {
    MEMBER_REGEX
        .captures_iter(source)
        .map(|caps| {
            let mut candidate = BindingCandidate::new(&caps[6])
                .with_summary(clean_doc(&caps[1]))
                .returns(caps[5].trim());

            if let Some(block) = caps.get(2) {
                candidate = candidate.with_return_annotation(block.as_str());
            }
            if let Some(block) = caps.get(3) {
                candidate = candidate.with_param_annotation(block.as_str());
            }
            if let Some(block) = caps.get(4) {
                candidate = candidate.with_tag(block.as_str());
            }

            match split_argument_text(&caps[7]) {
                ArgCapture::None => {}
                ArgCapture::Single(param) => candidate = candidate.param(param),
                ArgCapture::Multiple => candidate = candidate.unsupported(),
            }

            candidate
        })
        .collect()
}

/// Extract the declaring class name
pub fn class_name(source: &str) -> Option<String> {
    CLASS_REGEX
        .captures(source)
        .map(|caps| caps[1].to_string())
}

/// Extract the `::`-joined namespace path of the declaring type
pub fn namespace_path(source: &str) -> Option<String> {
    let parts: Vec<String> = NAMESPACE_REGEX
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("::"))
    }
}

/// Extract the class-level summary block
pub fn class_summary(source: &str) -> Option<String> {
    CLASS_SUMMARY_REGEX
        .captures(source)
        .map(|caps| clean_doc(&caps[1]))
}

/// Parse one header into a `HeaderBinding`, deriving the declaring-type
/// identity from the source text. A header without a class declaration,
/// namespace, or class summary block is a fatal configuration error.
pub fn parse_header(
    source: &str,
    file: &Path,
    include: impl Into<String>,
) -> BrazeResult<HeaderBinding> {
    let class_name =
        class_name(source).ok_or_else(|| BrazeError::ClassNotFound(file.to_path_buf()))?;
    let namespace =
        namespace_path(source).ok_or_else(|| BrazeError::NamespaceNotFound(file.to_path_buf()))?;
    let class_doc =
        class_summary(source).ok_or_else(|| BrazeError::ClassSummaryNotFound(file.to_path_buf()))?;

    Ok(HeaderBinding::new(class_name, namespace)
        .with_doc(class_doc)
        .include(include)
        .candidates(extract_candidates(source)))
}

/// Parse one header with the declaring-type identity supplied by the caller
/// instead of re-derived from source (the single-file invocation shape).
pub fn parse_header_with_identity(
    source: &str,
    file: &Path,
    include: impl Into<String>,
    class_name: impl Into<String>,
    namespace: impl Into<String>,
) -> BrazeResult<HeaderBinding> {
    let class_doc =
        class_summary(source).ok_or_else(|| BrazeError::ClassSummaryNotFound(file.to_path_buf()))?;

    Ok(HeaderBinding::new(class_name, namespace)
        .with_doc(class_doc)
        .include(include)
        .candidates(extract_candidates(source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::SAMPLE_HEADER;
    use std::path::PathBuf;

    #[test]
    fn test_extract_candidates_from_sample() {
        let candidates = extract_candidates(SAMPLE_HEADER);

        let play = candidates.iter().find(|c| c.name == "play").unwrap();
        assert!(play.is_method());
        assert!(play.param.is_none());
        assert_eq!(play.summary, "Start playback");

        let seek = candidates.iter().find(|c| c.name == "seek").unwrap();
        assert!(seek.is_method());
        let param = seek.param.as_ref().unwrap();
        assert_eq!(param.name, "position");
        assert_eq!(param.py_type, "int");
        assert_eq!(seek.return_annotation.as_deref(), Some(""));

        let set_title = candidates.iter().find(|c| c.name == "setTitle").unwrap();
        assert!(set_title.is_property());
        assert_eq!(set_title.param.as_ref().unwrap().py_type, "str");

        // The getter carries no tag and is exposed as neither
        let get_title = candidates.iter().find(|c| c.name == "getTitle").unwrap();
        assert!(!get_title.is_method());
        assert!(!get_title.is_property());
    }

    #[test]
    fn test_identity_extraction() {
        assert_eq!(class_name(SAMPLE_HEADER).as_deref(), Some("Track"));
        assert_eq!(namespace_path(SAMPLE_HEADER).as_deref(), Some("studio::audio"));
        assert_eq!(
            class_summary(SAMPLE_HEADER).as_deref(),
            Some("One audio track inside a mixing session")
        );
    }

    #[test]
    fn test_parse_header() {
        let header = parse_header(SAMPLE_HEADER, &PathBuf::from("Track.h"), "Track.h").unwrap();
        assert_eq!(header.class_path(), "studio::audio::Track");
        assert_eq!(header.include, "Track.h");
        assert!(!header.candidates.is_empty());
    }

    #[test]
    fn test_parse_header_missing_class_is_fatal() {
        let err = parse_header("int x = 0;", &PathBuf::from("Empty.h"), "Empty.h").unwrap_err();
        assert!(matches!(err, BrazeError::ClassNotFound(_)));
    }

    #[test]
    fn test_parse_header_with_identity() {
        let header = parse_header_with_identity(
            SAMPLE_HEADER,
            &PathBuf::from("Track.h"),
            "../include/Track.h",
            "Track",
            "studio::audio",
        )
        .unwrap();
        assert_eq!(header.namespace_root(), "studio");
        assert_eq!(header.include, "../include/Track.h");
    }

    #[test]
    fn test_multi_parameter_member_flagged_unsupported() {
        let source = r#"
/// <summary>
/// Crop the waveform
/// </summary>
/// <tag>#pythonMethod</tag>
void crop(int start, int end);
"#;
        let candidates = extract_candidates(source);
        let crop = candidates.iter().find(|c| c.name == "crop").unwrap();
        assert!(crop.unsupported);
        assert!(crop.param.is_none());
    }

    #[test]
    fn test_bare_type_treated_as_no_parameter() {
        let source = r#"
/// <summary>
/// Reload state
/// </summary>
/// <tag>#pythonMethod</tag>
void reload(void);
"#;
        let candidates = extract_candidates(source);
        let reload = candidates.iter().find(|c| c.name == "reload").unwrap();
        assert!(reload.param.is_none());
        assert!(!reload.unsupported);
    }

    #[test]
    fn test_reference_glued_to_name() {
        let source = r#"
/// <summary>
/// Rename the track
/// </summary>
/// <tag>#pythonMethod</tag>
void rename(const std::string &newName);
"#;
        let candidates = extract_candidates(source);
        let rename = candidates.iter().find(|c| c.name == "rename").unwrap();
        let param = rename.param.as_ref().unwrap();
        assert_eq!(param.name, "newName");
        assert_eq!(param.py_type, "str");
    }

    #[test]
    fn test_clean_doc_strips_markers() {
        assert_eq!(clean_doc("/// Set Id"), "Set Id");
        assert_eq!(clean_doc("\t/// line one\n\t/// line two"), "line one\nline two");
        assert_eq!(clean_doc("///"), "");
    }
}
