//! One-shot credential verification, as performed before persisting a new
//! configuration.

use serde_json::Value;

use crate::api::{ApiError, InverterListRequest, SolisCloud};

/// Outcome of a verification probe.
#[derive(Debug, Eq, PartialEq)]
pub enum CredentialCheck {
    Valid,
    /// The API answered, but flagged the request as unsuccessful.
    InvalidAuth,
}

/// Probe the API with a minimal list request.
///
/// An application-level `success: false` means the credentials were rejected;
/// a transport or decode failure means the service could not be reached. The
/// server does not expose a finer distinction.
pub async fn verify_credentials(api: &SolisCloud) -> Result<CredentialCheck, ApiError> {
    let document = api.inverter_list(&InverterListRequest::page(1, 1)).await?;
    Ok(interpret(&document))
}

fn interpret(document: &Value) -> CredentialCheck {
    if document.get("success").and_then(Value::as_bool) == Some(false) {
        CredentialCheck::InvalidAuth
    } else {
        CredentialCheck::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_false_means_invalid_auth() {
        let document = serde_json::json!({"success": false, "code": "1001"});
        assert_eq!(interpret(&document), CredentialCheck::InvalidAuth);
    }

    #[test]
    fn test_success_true_or_absent_means_valid() {
        assert_eq!(interpret(&serde_json::json!({"success": true})), CredentialCheck::Valid);
        assert_eq!(interpret(&serde_json::json!({"code": "0"})), CredentialCheck::Valid);
    }
}
