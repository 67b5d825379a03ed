//! Registration unit generator
//!
//! Generates the pybind11 C++ header that binds tagged native members into
//! the Python runtime: one class registration block per declaring type, each
//! with a default constructor, its property pairs, and its methods.

use crate::diagnostics::{BrazeError, BrazeResult};
use crate::ir::HeaderBinding;

/// Generator for the pybind11 registration unit
pub struct RegistrationGenerator<'a> {
    headers: &'a [HeaderBinding],
}

impl<'a> RegistrationGenerator<'a> {
    /// Create a new generator over a batch of headers
    pub fn new(headers: &'a [HeaderBinding]) -> Self {
        Self { headers }
    }

    /// Root namespace scope of the unit, taken from the first declaring
    /// type's namespace path
    fn namespace_root(&self) -> &str {
        self.headers
            .first()
            .map(|h| h.namespace_root())
            .unwrap_or("bindings")
    }

    /// Generate the complete registration unit source
    pub fn generate(&self) -> BrazeResult<String> {
        let root = self.namespace_root();
        let module_ident = format!("{root}Module");

        let mut output = String::new();

        // Preamble and one include per contributing header
        output.push_str("#pragma once\n");
        output.push_str("#include <pybind11/pybind11.h>\n");
        for header in self.headers {
            output.push_str(&format!("#include \"{}\"\n", header.include));
        }
        output.push('\n');

        // Enclosing namespace scopes
        output.push_str(&format!("namespace {root}\n{{\n"));
        output.push_str("\tnamespace scripting\n\t{\n");

        // Registration function covering the whole batch
        output.push_str(&format!(
            "\t\tstatic void expose_models(pybind11::module& {module_ident})\n\t\t{{\n"
        ));

        for header in self.headers {
            output.push('\n');
            output.push_str(&format!(
                "\t\t\t// {} - python embedding\n",
                header.class_name
            ));
            output.push_str(&self.generate_class(header, &module_ident)?);
        }

        output.push_str("\t\t}\n\t}\n}\n");

        Ok(output)
    }

    /// Generate one class registration block
    fn generate_class(&self, header: &HeaderBinding, module_ident: &str) -> BrazeResult<String> {
        let surface = header.validate_surface()?;
        let class_path = header.class_path();

        let mut output = String::new();

        output.push_str(&format!(
            "\t\t\tpybind11::class_<{class_path}>({module_ident}, \"{}\")\n",
            header.class_name
        ));

        // Default constructor is always registered
        output.push_str("\t\t\t    .def(pybind11::init<>())\n");

        // Property pairs: external name with the set prefix stripped,
        // getter first, then the setter the tag was authored on
        for property in &surface.properties {
            let name = match property.property_name() {
                Some(name) => name,
                None => {
                    return Err(BrazeError::property_naming(
                        property.name.as_str(),
                        class_path.as_str(),
                    ));
                }
            };
            let getter = format!("get{name}");
            output.push_str(&format!(
                "\t\t\t    .def_property(\"{name}\", &{class_path}::{getter}, &{class_path}::{})\n",
                property.name
            ));
        }

        // Methods, with the external argument name when one was captured
        for method in &surface.methods {
            match &method.param {
                Some(param) => output.push_str(&format!(
                    "\t\t\t    .def(\"{0}\", &{class_path}::{0}, pybind11::arg(\"{1}\"))\n",
                    method.name, param.name
                )),
                None => output.push_str(&format!(
                    "\t\t\t    .def(\"{0}\", &{class_path}::{0})\n",
                    method.name
                )),
            }
        }

        output.push_str("\t\t\t    ;\n");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BrazeError;
    use crate::ir::BindingCandidate;
    use crate::test::mock_track_header;

    #[test]
    fn test_generate_registration_unit() {
        let headers = vec![mock_track_header()];
        let output = RegistrationGenerator::new(&headers).generate().unwrap();

        assert!(output.contains("#pragma once"));
        assert!(output.contains("#include <pybind11/pybind11.h>"));
        assert!(output.contains("#include \"Track.h\""));
        assert!(output.contains("namespace studio"));
        assert!(output.contains("namespace scripting"));
        assert!(output.contains("static void expose_models(pybind11::module& studioModule)"));
        assert!(output.contains("pybind11::class_<studio::audio::Track>(studioModule, \"Track\")"));
    }

    #[test]
    fn test_round_trip_line_counts() {
        let headers = vec![mock_track_header()];
        let output = RegistrationGenerator::new(&headers).generate().unwrap();

        assert_eq!(output.matches(".def(pybind11::init<>())").count(), 1);
        assert_eq!(output.matches(".def_property(").count(), 1);
        // Two method lines, exactly one of which binds an argument name
        assert_eq!(output.matches(".def(\"").count(), 2);
        assert_eq!(output.matches("pybind11::arg(").count(), 1);
        assert!(output.contains(".def(\"play\", &studio::audio::Track::play)"));
        assert!(output.contains(
            ".def(\"seek\", &studio::audio::Track::seek, pybind11::arg(\"position\"))"
        ));
    }

    #[test]
    fn test_property_pair_getter_first() {
        let headers = vec![mock_track_header()];
        let output = RegistrationGenerator::new(&headers).generate().unwrap();

        assert!(output.contains(
            ".def_property(\"Title\", &studio::audio::Track::getTitle, &studio::audio::Track::setTitle)"
        ));
    }

    #[test]
    fn test_untagged_surface_still_renders() {
        let headers = vec![HeaderBinding::new("Scratch", "studio::audio")
            .include("Scratch.h")
            .candidate(BindingCandidate::new("clear").with_summary("Clear the buffer"))];
        let output = RegistrationGenerator::new(&headers).generate().unwrap();

        assert!(output.contains("pybind11::class_<studio::audio::Scratch>"));
        assert_eq!(output.matches(".def(pybind11::init<>())").count(), 1);
        assert_eq!(output.matches(".def_property(").count(), 0);
        assert_eq!(output.matches(".def(\"").count(), 0);
    }

    #[test]
    fn test_property_without_parameter_is_fatal() {
        let headers = vec![HeaderBinding::new("Track", "studio::audio")
            .candidate(BindingCandidate::new("setTitle").with_tag(">#pythonProperty"))];
        let err = RegistrationGenerator::new(&headers).generate().unwrap_err();

        assert!(matches!(err, BrazeError::PropertyWithoutParameter { .. }));
        assert!(err.to_string().contains("setTitle"));
        assert!(err.to_string().contains("studio::audio::Track"));
    }

    #[test]
    fn test_batch_of_two_headers() {
        let headers = vec![mock_track_header(), crate::test::mock_playlist_header()];
        let output = RegistrationGenerator::new(&headers).generate().unwrap();

        assert!(output.contains("#include \"Track.h\""));
        assert!(output.contains("#include \"Playlist.h\""));
        assert!(output.contains("// Track - python embedding"));
        assert!(output.contains("// Playlist - python embedding"));
        assert_eq!(output.matches(".def(pybind11::init<>())").count(), 2);
    }
}
