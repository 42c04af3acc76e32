//! Helpers for the `Display` implementations of the model types. Rendering
//! lists only the fields that are present, as `Name: value` pairs inside
//! braces, with sequences shown as `[a, b]`. This output is meant for logs
//! and diagnostics; the wire format is handled by serde.

use std::fmt::{self, Display};

use itertools::Itertools;

pub(crate) struct FieldWriter {
    parts: Vec<String>,
}

impl FieldWriter {
    pub(crate) fn new() -> Self {
        FieldWriter { parts: Vec::new() }
    }

    /// Records `name: value` if the field is present.
    pub(crate) fn field<T: Display>(&mut self, name: &str, value: &Option<T>) {
        if let Some(v) = value {
            self.parts.push(format!("{}: {}", name, v));
        }
    }

    /// Records `name: [a, b]` if the sequence is present. An empty but
    /// present sequence renders as `name: []`.
    pub(crate) fn list<T: Display>(&mut self, name: &str, value: &Option<Vec<T>>) {
        if let Some(values) = value {
            self.parts
                .push(format!("{}: [{}]", name, values.iter().join(", ")));
        }
    }

    pub(crate) fn finish(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.parts.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    struct Probe {
        name: Option<String>,
        size: Option<i32>,
        zones: Option<Vec<String>>,
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut w = FieldWriter::new();
            w.field("Name", &self.name);
            w.field("Size", &self.size);
            w.list("Zones", &self.zones);
            w.finish(f)
        }
    }

    #[test]
    fn absent_fields_are_omitted() {
        let p = Probe {
            name: Some("web".to_string()),
            size: None,
            zones: None,
        };
        assert_eq!(p.to_string(), "{Name: web}");
    }

    #[test]
    fn lists_render_without_quotes() {
        let p = Probe {
            name: None,
            size: Some(3),
            zones: Some(vec!["us-east-1a".to_string(), "us-east-1b".to_string()]),
        };
        assert_eq!(p.to_string(), "{Size: 3, Zones: [us-east-1a, us-east-1b]}");
    }

    #[test]
    fn empty_present_list_renders_as_brackets() {
        let p = Probe {
            name: None,
            size: None,
            zones: Some(vec![]),
        };
        assert_eq!(p.to_string(), "{Zones: []}");
    }
}
