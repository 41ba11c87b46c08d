use super::{Attribute, AttributeType, Attributes, Schema, Validator};
use crate::validators;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A problem found in a configuration, located by attribute path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: String,
    pub summary: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.summary)
        } else {
            write!(f, "{}: {}", self.path, self.summary)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {diagnostic}")?;
        }
        Ok(())
    }
}

impl Schema {
    /// Check a configuration against the schema. `null` counts as unset.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut validation = Validation::default();
        match config {
            Value::Object(values) => validation.attributes(&self.attributes, values, ""),
            other => validation.push("", format!("expected an object, got {}", type_of(other))),
        }
        Diagnostics(validation.diagnostics)
    }
}

#[derive(Default)]
struct Validation {
    diagnostics: Vec<Diagnostic>,
}

impl Validation {
    fn push(&mut self, path: &str, summary: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            path: path.to_string(),
            summary: summary.into(),
        });
    }

    fn attributes(&mut self, attributes: &Attributes, values: &Map<String, Value>, path: &str) {
        for name in values.keys().filter(|name| !attributes.contains_key(*name)) {
            self.push(&join(path, name), "unsupported argument");
        }

        for (name, attribute) in attributes {
            let attribute_path = join(path, name);
            match values.get(name).filter(|v| !v.is_null()) {
                None if attribute.required => self.push(&attribute_path, "missing required argument"),
                None => {}
                Some(_) if !attribute.is_configurable() => {
                    self.push(&attribute_path, "value for unconfigurable attribute")
                }
                Some(value) => self.attribute(attribute, value, &attribute_path),
            }
        }
    }

    fn attribute(&mut self, attribute: &Attribute, value: &Value, path: &str) {
        let before = self.diagnostics.len();
        self.value(&attribute.type_, value, path);
        // validators only make sense on a well typed value
        if self.diagnostics.len() == before {
            for validator in &attribute.validators {
                self.validator(validator, value, path);
            }
        }
    }

    fn value(&mut self, type_: &AttributeType, value: &Value, path: &str) {
        let matches = match type_ {
            AttributeType::Dynamic => true,
            AttributeType::String => value.is_string(),
            AttributeType::Bool => value.is_boolean(),
            AttributeType::Int64 => value.is_i64() || value.is_u64(),
            AttributeType::Float64 => value.is_number(),
            AttributeType::IntOrString => value.is_string() || value.is_i64() || value.is_u64(),
            AttributeType::List(element) => match value {
                Value::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        self.value(element, item, &format!("{path}[{i}]"));
                    }
                    true
                }
                _ => false,
            },
            AttributeType::Map(element) => match value {
                Value::Object(entries) => {
                    for (key, entry) in entries.iter().filter(|(_, v)| !v.is_null()) {
                        self.value(element, entry, &format!("{path}[{key:?}]"));
                    }
                    true
                }
                _ => false,
            },
            AttributeType::Object(attributes) => match value {
                Value::Object(values) => {
                    self.attributes(attributes, values, path);
                    true
                }
                _ => false,
            },
        };
        if !matches {
            self.push(path, format!("expected {}, got {}", type_name(type_), type_of(value)));
        }
    }

    fn validator(&mut self, validator: &Validator, value: &Value, path: &str) {
        match validator {
            Validator::OneOf(allowed) => {
                if let Some(s) = value.as_str() {
                    if !allowed.iter().any(|a| a == s) {
                        self.push(path, format!("value must be one of: {}, got {s:?}", allowed.join(", ")));
                    }
                }
            }
            Validator::ExactlyOneOf(names) => {
                let set = value
                    .as_object()
                    .map(|o| names.iter().filter(|n| o.get(*n).map_or(false, |v| !v.is_null())).count())
                    .unwrap_or_default();
                if set != 1 {
                    self.push(path, format!("exactly one of these attributes must be configured: [{}]", names.join(", ")));
                }
            }
            Validator::IntRange { min, max } => {
                let in_range = match value.as_i64() {
                    Some(n) => (*min..=*max).contains(&n),
                    None => !value.is_u64(),
                };
                if !in_range {
                    self.push(path, format!("value must be between {min} and {max}, got {value}"));
                }
            }
            Validator::DnsSubdomain => self.string_check(value, path, validators::dns1123_subdomain),
            Validator::DnsLabel => self.string_check(value, path, validators::dns1123_label),
            Validator::Labels => {
                for error in validators::labels(&string_map(value)) {
                    self.push(path, error);
                }
            }
            Validator::Annotations => {
                for error in validators::annotations(&string_map(value)) {
                    self.push(path, error);
                }
            }
        }
    }

    fn string_check(&mut self, value: &Value, path: &str, check: fn(&str) -> Result<(), String>) {
        if let Some(Err(error)) = value.as_str().map(check) {
            self.push(path, error);
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn string_map(value: &Value) -> BTreeMap<String, String> {
    value
        .as_object()
        .map(|o| {
            o.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

fn type_name(type_: &AttributeType) -> &'static str {
    match type_ {
        AttributeType::String => "a string",
        AttributeType::Bool => "a bool",
        AttributeType::Int64 => "an integer",
        AttributeType::Float64 => "a number",
        AttributeType::IntOrString => "an integer or a string",
        AttributeType::Dynamic => "any value",
        AttributeType::List(_) => "a list",
        AttributeType::Map(_) | AttributeType::Object(_) => "an object",
    }
}

fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn schema() -> Schema {
        let handler: Attributes = [
            ("log".to_string(), Attribute::optional(AttributeType::Object(Attributes::new()))),
            ("none".to_string(), Attribute::optional(AttributeType::Object(Attributes::new()))),
        ]
        .into_iter()
        .collect();
        Schema {
            description: "test".into(),
            attributes: [
                ("yaml".to_string(), Attribute::computed(AttributeType::String)),
                ("name".to_string(), Attribute::required(AttributeType::String).with_validator(Validator::DnsSubdomain)),
                ("replicas".to_string(), Attribute::optional(AttributeType::Int64)
                    .with_validator(Validator::IntRange { min: i32::MIN.into(), max: i32::MAX.into() })),
                ("port".to_string(), Attribute::optional(AttributeType::IntOrString)),
                ("profile".to_string(), Attribute::optional(AttributeType::String)
                    .with_validator(Validator::OneOf(vec!["Kubernetes".into(), "Knative".into()]))),
                ("tags".to_string(), Attribute::optional(AttributeType::List(Box::new(AttributeType::String)))),
                ("handler".to_string(), Attribute::optional(AttributeType::Object(handler))
                    .with_validator(Validator::ExactlyOneOf(vec!["log".into(), "none".into()]))),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn paths(diagnostics: Diagnostics) -> Vec<String> {
        diagnostics.0.into_iter().map(|d| d.path).collect()
    }

    #[test]
    fn valid_config() {
        let config = json!({
            "name": "timer-to-log",
            "replicas": 2,
            "port": 8080,
            "profile": "Knative",
            "tags": ["a", "b"],
            "handler": { "log": {}, "none": null },
            "yaml": null
        });
        assert_eq!(schema().validate(&config), Diagnostics::default());
    }

    #[test]
    fn reports_every_problem() {
        let config = json!({
            "replicas": "two",
            "profile": "OpenShift",
            "tags": ["a", 1],
            "handler": { "log": {}, "none": {} },
            "yaml": "set by hand",
            "extra": true
        });
        let diagnostics = schema().validate(&config);
        assert_eq!(
            paths(diagnostics),
            vec!["extra", "handler", "name", "profile", "replicas", "tags[1]", "yaml"]
        );
    }

    #[test]
    fn validators_run_on_strings() {
        let diagnostics = schema().validate(&json!({ "name": "Not_A_Name" }));
        assert_eq!(diagnostics.0.len(), 1);
        assert!(diagnostics.0[0].summary.contains("RFC 1123 subdomain"));
        assert_eq!(
            diagnostics.to_string(),
            format!("  name: {}", diagnostics.0[0].summary)
        );
    }

    #[test]
    fn integers_must_fit_their_format() {
        let diagnostics = schema().validate(&json!({ "name": "a", "replicas": 3_000_000_000u64 }));
        assert_eq!(paths(diagnostics.clone()), vec!["replicas"]);
        assert_eq!(
            diagnostics.0[0].summary,
            "value must be between -2147483648 and 2147483647, got 3000000000"
        );

        let diagnostics = schema().validate(&json!({ "name": "a", "replicas": u64::MAX }));
        assert_eq!(paths(diagnostics), vec!["replicas"]);
    }

    #[test]
    fn int_or_string_accepts_both() {
        assert!(schema().validate(&json!({ "name": "a", "port": 8080 })).0.is_empty());
        assert!(schema().validate(&json!({ "name": "a", "port": "http" })).0.is_empty());

        let diagnostics = schema().validate(&json!({ "name": "a", "port": 80.5 }));
        assert_eq!(diagnostics.0[0].summary, "expected an integer or a string, got number");
    }

    #[test]
    fn root_must_be_an_object() {
        let diagnostics = schema().validate(&json!([]));
        assert_eq!(diagnostics.0[0].summary, "expected an object, got list");
    }
}
