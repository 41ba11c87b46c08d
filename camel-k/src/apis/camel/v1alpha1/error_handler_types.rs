use super::Endpoint;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ErrorHandlerSpec represents an unstructured object for an error handler.
///
/// On the wire the handler type is the single key of the object, e.g.
/// `{"log": {"parameters": {...}}}`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorHandlerSpec {
    /// Ignores any error
    None {},
    /// Logs errors with the Camel default error handler
    Log(ErrorHandlerLog),
    /// Sends the failed exchange to a dead letter channel
    Sink(ErrorHandlerSink),
}

/// ErrorHandlerParameters represent an unstructured object for error handler parameters
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct ErrorHandlerParameters(pub BTreeMap<String, serde_json::Value>);

/// ErrorHandlerLog represent a default (log) error handler type
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct ErrorHandlerLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ErrorHandlerParameters>,
}

/// ErrorHandlerSink represents a sink error handler type which behave like a dead letter channel
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ErrorHandlerSink {
    pub endpoint: Endpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ErrorHandlerParameters>,
}

impl ErrorHandlerSpec {
    /// The handler type, as used for the key on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorHandlerSpec::None {} => "none",
            ErrorHandlerSpec::Log(_) => "log",
            ErrorHandlerSpec::Sink(_) => "sink",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn externally_tagged_on_the_wire() {
        let none: ErrorHandlerSpec = serde_json::from_value(json!({ "none": {} })).unwrap();
        assert_eq!(none, ErrorHandlerSpec::None {});
        assert_eq!(serde_json::to_value(&none).unwrap(), json!({ "none": {} }));

        let log = ErrorHandlerSpec::Log(ErrorHandlerLog {
            parameters: Some(ErrorHandlerParameters(
                [("maximumRedeliveries".to_string(), json!(3))].into_iter().collect(),
            )),
        });
        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            json!({ "log": { "parameters": { "maximumRedeliveries": 3 } } })
        );
        assert_eq!(log.kind(), "log");
    }

    #[test]
    fn sink_error_handler_carries_an_endpoint() {
        let yaml = r#"
sink:
  endpoint:
    ref:
      kind: Kamelet
      apiVersion: camel.apache.org/v1alpha1
      name: error-handler
    properties:
      message: "ERROR!"
  parameters:
    maximumRedeliveries: 1
"#;
        // serde_yaml only reads tagged enums from `!sink`, go through JSON for the map form
        let value: serde_json::Value = serde_yaml::from_str(yaml).unwrap();
        let handler: ErrorHandlerSpec = serde_json::from_value(value).unwrap();
        match handler {
            ErrorHandlerSpec::Sink(sink) => {
                assert!(sink.endpoint.is_kamelet());
                assert_eq!(sink.parameters.unwrap().0["maximumRedeliveries"], json!(1));
            }
            other => panic!("expected sink error handler, got {}", other.kind()),
        }
    }
}
