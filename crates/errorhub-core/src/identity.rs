use serde::{Deserialize, Serialize};

use crate::classified::{ClassifiedError, ErrorBuilder};
use crate::model::Environment;
use crate::taxonomy::ErrorKind;

/// Who is reporting: the service name and where it runs
///
/// Usually read from configuration once and reused for every error the
/// service raises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceIdentity {
    /// Name written to the `service` field
    pub name: String,
    #[serde(default)]
    pub environment: Environment,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>, environment: Environment) -> Self {
        Self {
            name: name.into(),
            environment,
        }
    }

    /// Builder for a taxonomy error with service and environment filled in
    pub fn error(&self, kind: ErrorKind) -> ErrorBuilder {
        kind.error(self.name.clone()).environment(self.environment)
    }

    /// Builder for an error outside the taxonomy
    pub fn custom(&self, error_type: impl Into<String>, message: impl Into<String>) -> ErrorBuilder {
        ClassifiedError::builder(self.name.clone(), error_type, message).environment(self.environment)
    }
}
