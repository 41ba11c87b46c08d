//! Kubernetes object metadata validation.
//!
//! Messages follow the wording of the Kubernetes API server so users see the
//! same error locally that `kubectl apply` would report.
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;
pub const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

lazy_static! {
    static ref DNS1123_LABEL: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap();
    static ref DNS1123_SUBDOMAIN: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap();
    static ref QUALIFIED_NAME: Regex = Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap();
    static ref LABEL_VALUE: Regex = Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").unwrap();
}

pub fn dns1123_subdomain(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        return Err(format!("must be no more than {DNS1123_SUBDOMAIN_MAX_LENGTH} characters"));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        return Err("a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', \
                    and must start and end with an alphanumeric character".into());
    }
    Ok(())
}

pub fn dns1123_label(value: &str) -> Result<(), String> {
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        return Err(format!("must be no more than {DNS1123_LABEL_MAX_LENGTH} characters"));
    }
    if !DNS1123_LABEL.is_match(value) {
        return Err("a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', \
                    and must start and end with an alphanumeric character".into());
    }
    Ok(())
}

/// A qualified name is an optional DNS subdomain prefix followed by `/` and a name.
pub fn qualified_name(value: &str) -> Result<(), String> {
    let name = match value.split_once('/') {
        Some((prefix, name)) => {
            if prefix.is_empty() {
                return Err("prefix part must be non-empty".into());
            }
            dns1123_subdomain(prefix).map_err(|e| format!("prefix part {e}"))?;
            name
        }
        None => value,
    };
    if name.is_empty() {
        return Err("name part must be non-empty".into());
    }
    if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        return Err(format!("name part must be no more than {QUALIFIED_NAME_MAX_LENGTH} characters"));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err("name part must consist of alphanumeric characters, '-', '_' or '.', \
                    and must start and end with an alphanumeric character".into());
    }
    Ok(())
}

pub fn label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        return Err(format!("must be no more than {LABEL_VALUE_MAX_LENGTH} characters"));
    }
    if !LABEL_VALUE.is_match(value) {
        return Err("a valid label must be an empty string or consist of alphanumeric characters, '-', '_' or '.', \
                    and must start and end with an alphanumeric character".into());
    }
    Ok(())
}

/// Validates every label, returning one message per offending entry.
pub fn labels(labels: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, value) in labels {
        if let Err(e) = qualified_name(key) {
            errors.push(format!("label key {key:?}: {e}"));
        }
        if let Err(e) = label_value(value) {
            errors.push(format!("label value {value:?} of {key:?}: {e}"));
        }
    }
    errors
}

pub fn annotations(annotations: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    let mut total = 0;
    for (key, value) in annotations {
        if let Err(e) = qualified_name(&key.to_lowercase()) {
            errors.push(format!("annotation key {key:?}: {e}"));
        }
        total += key.len() + value.len();
    }
    if total > TOTAL_ANNOTATION_SIZE_LIMIT {
        errors.push(format!("annotations are too long, must have at most {TOTAL_ANNOTATION_SIZE_LIMIT} bytes"));
    }
    errors
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subdomains() {
        assert!(dns1123_subdomain("kafka-to-http").is_ok());
        assert!(dns1123_subdomain("orders.v1").is_ok());
        assert!(dns1123_subdomain("Orders").is_err());
        assert!(dns1123_subdomain("-orders").is_err());
        assert!(dns1123_subdomain(&"a".repeat(254)).is_err());
    }

    #[test]
    fn labels_reject_dots() {
        assert!(dns1123_label("integrations").is_ok());
        assert!(dns1123_label("my.namespace").is_err());
        assert!(dns1123_label(&"a".repeat(64)).is_err());
    }

    #[test]
    fn qualified_names() {
        assert!(qualified_name("app.kubernetes.io/part-of").is_ok());
        assert!(qualified_name("Team_Name").is_ok());
        assert!(qualified_name("/part-of").is_err());
        assert!(qualified_name("example.com/").is_err());
        assert!(qualified_name("Example.com/name").is_err());
        assert!(qualified_name("name_").is_err());
    }

    #[test]
    fn label_map() {
        let good: BTreeMap<_, _> = [("app".to_string(), "orders".to_string()), ("empty".to_string(), String::new())]
            .into_iter()
            .collect();
        assert!(labels(&good).is_empty());

        let bad: BTreeMap<_, _> = [("app".to_string(), "not valid!".to_string())].into_iter().collect();
        assert_eq!(labels(&bad).len(), 1);
    }

    #[test]
    fn annotation_size_limit() {
        let huge: BTreeMap<_, _> = [("description".to_string(), "x".repeat(TOTAL_ANNOTATION_SIZE_LIMIT))]
            .into_iter()
            .collect();
        assert_eq!(annotations(&huge).len(), 1);
    }
}
