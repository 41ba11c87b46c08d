use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// KameletBindingStatus specify the status of a binding
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletBindingStatus {
    /// ObservedGeneration is the most recent generation observed for this KameletBinding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Phase --
    #[serde(default)]
    pub phase: KameletBindingPhase,
    /// Conditions --
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<KameletBindingCondition>,
    /// Replicas is the number of actual replicas of the binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Selector allows to identify pods belonging to the binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// KameletBindingPhase --
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum KameletBindingPhase {
    #[serde(rename = "")]
    None,
    Creating,
    Error,
    Ready,
}

impl Default for KameletBindingPhase {
    fn default() -> Self {
        KameletBindingPhase::None
    }
}

/// KameletBindingConditionType --
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[non_exhaustive]
pub enum KameletBindingConditionType {
    /// Whether the binding is ready to receive events.
    Ready,
}

impl Default for KameletBindingConditionType {
    fn default() -> Self {
        KameletBindingConditionType::Ready
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl Default for ConditionStatus {
    fn default() -> Self {
        ConditionStatus::Unknown
    }
}

/// KameletBindingCondition describes the state of a resource at a certain point.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletBindingCondition {
    /// Type of kameletBinding condition.
    #[serde(rename = "type")]
    pub type_: KameletBindingConditionType,
    /// Status of the condition, one of True, False, Unknown.
    pub status: ConditionStatus,
    /// The last time this condition was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Last time the condition transitioned from one status to another.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<chrono::DateTime<chrono::Utc>>,
    /// The reason for the condition's last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// A human readable message indicating details about the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl KameletBindingCondition {
    pub fn new(type_: KameletBindingConditionType, status: ConditionStatus) -> Self {
        KameletBindingCondition {
            type_,
            status,
            ..Default::default()
        }
    }

    pub fn is_true(&self) -> bool {
        self.status == ConditionStatus::True
    }
}

impl KameletBindingStatus {
    pub fn get_condition(&self, type_: KameletBindingConditionType) -> Option<&KameletBindingCondition> {
        self.conditions.iter().find(|c| c.type_ == type_)
    }

    /// Replaces the condition of the same type. The transition time only moves
    /// when the status actually changed.
    pub fn set_condition(&mut self, mut condition: KameletBindingCondition) {
        let now = chrono::Utc::now();
        condition.last_update_time = Some(now);

        match self.conditions.iter_mut().find(|c| c.type_ == condition.type_) {
            Some(existing) => {
                condition.last_transition_time = if existing.status == condition.status {
                    existing.last_transition_time.or(Some(now))
                } else {
                    Some(now)
                };
                *existing = condition;
            }
            None => {
                condition.last_transition_time = Some(now);
                self.conditions.push(condition);
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == KameletBindingPhase::Ready
            && self
                .get_condition(KameletBindingConditionType::Ready)
                .map_or(false, KameletBindingCondition::is_true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn transition_time_kept_when_status_unchanged() {
        let mut status = KameletBindingStatus::default();
        status.set_condition(KameletBindingCondition::new(
            KameletBindingConditionType::Ready,
            ConditionStatus::False,
        ));
        let first = status.conditions[0].last_transition_time;
        assert!(first.is_some());

        status.set_condition(KameletBindingCondition {
            reason: Some("IntegrationPhaseRunning".into()),
            ..KameletBindingCondition::new(KameletBindingConditionType::Ready, ConditionStatus::False)
        });
        assert_eq!(status.conditions.len(), 1);
        assert_eq!(status.conditions[0].last_transition_time, first);
        assert_eq!(status.conditions[0].reason.as_deref(), Some("IntegrationPhaseRunning"));
    }

    #[test]
    fn ready_requires_phase_and_condition() {
        let mut status = KameletBindingStatus::default();
        assert!(!status.is_ready());

        status.set_condition(KameletBindingCondition::new(
            KameletBindingConditionType::Ready,
            ConditionStatus::True,
        ));
        assert!(!status.is_ready());

        status.phase = KameletBindingPhase::Ready;
        assert!(status.is_ready());
    }

    #[test]
    fn deserialize_status() {
        let status: KameletBindingStatus = serde_json::from_value(json!({
            "phase": "Ready",
            "replicas": 1,
            "selector": "camel.apache.org/integration=timer-to-log",
            "conditions": [{
                "type": "Ready",
                "status": "True",
                "lastTransitionTime": "2022-08-01T12:00:00Z"
            }]
        }))
        .unwrap();
        assert!(status.is_ready());
        assert_eq!(status.replicas, Some(1));

        let empty: KameletBindingStatus = serde_json::from_value(json!({ "phase": "" })).unwrap();
        assert_eq!(empty.phase, KameletBindingPhase::None);
    }
}
