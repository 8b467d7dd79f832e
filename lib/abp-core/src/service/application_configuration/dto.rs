use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application configuration document as returned by the backend. The schema
/// belongs to the server, so the payload is kept verbatim and only read through
/// the lookups below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationConfigurationDTO(Value);

impl ApplicationConfigurationDTO {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn setting(&self, name: &str) -> Option<&str> {
        self.0
            .pointer("/setting/values")
            .and_then(|values| values.get(name))
            .and_then(Value::as_str)
    }

    pub fn feature(&self, name: &str) -> Option<&str> {
        self.0
            .pointer("/features/values")
            .and_then(|values| values.get(name))
            .and_then(Value::as_str)
    }

    pub fn is_granted(&self, policy: &str) -> bool {
        self.0
            .pointer("/auth/grantedPolicies")
            .and_then(|policies| policies.get(policy))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn is_authenticated(&self) -> bool {
        self.0
            .pointer("/currentUser/isAuthenticated")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn current_user_name(&self) -> Option<&str> {
        self.0
            .pointer("/currentUser/userName")
            .and_then(Value::as_str)
    }

    pub fn current_culture(&self) -> Option<&str> {
        self.0
            .pointer("/localization/currentCulture/cultureName")
            .and_then(Value::as_str)
    }
}

impl From<Value> for ApplicationConfigurationDTO {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<ApplicationConfigurationDTO> for Value {
    fn from(value: ApplicationConfigurationDTO) -> Self {
        value.0
    }
}
