//! Stub file generator
//!
//! Generates the `.pyi` type-stub describing the exposed binding surface
//! for editor tooling: one class block per declaring type with property
//! placeholders and method signatures, each followed by its docstring.

use crate::diagnostics::BrazeResult;
use crate::ir::{BindingCandidate, HeaderBinding};
use crate::types::required_imports;

/// Generator for the Python stub file
pub struct StubGenerator<'a> {
    headers: &'a [HeaderBinding],
}

impl<'a> StubGenerator<'a> {
    /// Create a new generator over a batch of headers
    pub fn new(headers: &'a [HeaderBinding]) -> Self {
        Self { headers }
    }

    /// Generate the complete stub source
    pub fn generate(&self) -> BrazeResult<String> {
        let mut output = String::new();

        // Imports resolve over every candidate of every header, tagged or
        // not, and collapse to one line each in stable order
        let all_candidates = self.headers.iter().flat_map(|h| h.candidates.iter());
        for import in required_imports(all_candidates) {
            output.push_str(import);
            output.push('\n');
        }

        for header in self.headers {
            output.push_str(&self.generate_class(header)?);
        }

        Ok(output)
    }

    /// Generate one class block
    fn generate_class(&self, header: &HeaderBinding) -> BrazeResult<String> {
        let surface = header.validate_surface()?;

        let mut output = String::new();

        output.push_str("\n\n");
        output.push_str(&format!("class {}:\n", header.class_name));

        if let Some(doc) = header.class_doc.as_deref().filter(|doc| !doc.is_empty()) {
            output.push_str(&docstring(doc));
        }

        // Property placeholders with the set prefix stripped
        for property in &surface.properties {
            let name = property.property_name().unwrap_or(&property.name);
            output.push_str(&format!("\t{name} : str = ...\n"));
            output.push_str(&docstring(&property.summary));
        }

        // Method signatures; the docstring is the method's own summary
        for method in &surface.methods {
            output.push_str(&self.method_signature(method));
            output.push_str(&docstring(&method.summary));
        }

        Ok(output)
    }

    /// Render a method declaration line with zero or one typed parameter
    fn method_signature(&self, method: &BindingCandidate) -> String {
        match &method.param {
            Some(param) => format!(
                "\tdef {}(self, {} : {}): ...\n",
                method.name, param.name, param.py_type
            ),
            None => format!("\tdef {}(self): ...\n", method.name),
        }
    }
}

/// Render an indented docstring block
fn docstring(text: &str) -> String {
    let mut output = String::from("\t\"\"\"\n");
    for line in text.lines() {
        output.push('\t');
        output.push_str(line);
        output.push('\n');
    }
    output.push_str("\t\"\"\"\n\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BrazeError;
    use crate::ir::BindingCandidate;
    use crate::test::{mock_playlist_header, mock_track_header};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_stub() {
        let headers = vec![mock_track_header()];
        let output = StubGenerator::new(&headers).generate().unwrap();

        assert!(output.contains("class Track:"));
        assert!(output.contains("One audio track inside a mixing session"));
        assert!(output.contains("Title : str = ..."));
        assert!(output.contains("def play(self): ..."));
        assert!(output.contains("def seek(self, position : int): ..."));
    }

    #[test]
    fn test_stub_arity_matches_surface() {
        let headers = vec![mock_track_header()];
        let output = StubGenerator::new(&headers).generate().unwrap();

        assert_eq!(output.matches("class ").count(), 1);
        assert_eq!(output.matches(" : str = ...").count(), 1);
        assert_eq!(output.matches("\tdef ").count(), 2);
        // Exactly one signature takes a parameter beyond self
        assert_eq!(output.matches("(self, ").count(), 1);
        assert_eq!(output.matches("(self): ...").count(), 1);
    }

    #[test]
    fn test_method_docstring_uses_own_summary() {
        let headers = vec![mock_track_header()];
        let output = StubGenerator::new(&headers).generate().unwrap();

        // The docstring following a method line is that method's summary,
        // never the preceding property's
        let play = output.find("def play(self)").unwrap();
        let play_doc = output.find("Start playback").unwrap();
        let next_def = output.find("def seek").unwrap();
        assert!(play < play_doc && play_doc < next_def);

        let title_placeholder = output.find("Title : str = ...").unwrap();
        let title_doc = output.find("Set the track title").unwrap();
        assert!(title_placeholder < title_doc && title_doc < play);
    }

    #[test]
    fn test_import_deduplication() {
        // Two properties both mapping to List[str] yield one import line
        let headers = vec![mock_playlist_header()];
        let output = StubGenerator::new(&headers).generate().unwrap();

        assert_eq!(output.matches("from typing import List").count(), 1);
        assert!(output.starts_with("from typing import List\n"));
    }

    #[test]
    fn test_no_imports_when_no_typing_types() {
        let headers = vec![HeaderBinding::new("Scratch", "studio::audio")
            .with_doc("Scratch buffer")
            .candidate(BindingCandidate::new("clear").with_summary("Clear the buffer"))];
        let output = StubGenerator::new(&headers).generate().unwrap();

        assert!(!output.contains("from typing"));
        assert!(output.starts_with("\n\nclass Scratch:\n"));
    }

    #[test]
    fn test_property_errors_propagate() {
        let headers = vec![HeaderBinding::new("Track", "studio::audio")
            .candidate(BindingCandidate::new("setTitle").with_tag(">#pythonProperty"))];
        let err = StubGenerator::new(&headers).generate().unwrap_err();
        assert!(matches!(err, BrazeError::PropertyWithoutParameter { .. }));
    }

    #[test]
    fn test_docstring_block() {
        assert_eq!(docstring("Set Id"), "\t\"\"\"\n\tSet Id\n\t\"\"\"\n\n");
        assert_eq!(docstring(""), "\t\"\"\"\n\t\"\"\"\n\n");
    }
}
