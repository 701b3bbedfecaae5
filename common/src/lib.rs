pub mod config;
pub mod error;
pub mod fallback;
pub mod fields;
pub mod forms;
pub mod kind;
pub mod payload;
pub mod state;
pub mod submission;
pub mod validate;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use crate::config::Config;
pub use crate::error::{DeliveryError, Error};
pub use crate::kind::FormKind;
pub use crate::payload::{EmailPayload, Metadata};
pub use crate::state::{FormState, SubmissionStatus};

/// Body of the email service's send call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmailJsRequest {
    #[validate(length(min = 1, max = 64))]
    pub service_id: String,
    #[validate(length(min = 1, max = 64))]
    pub template_id: String,
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: EmailPayload,
}

impl EmailJsRequest {
    pub fn new(config: &Config, template_params: EmailPayload) -> Self {
        EmailJsRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            access_token: None,
            template_params,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

/// What the email service answered to an accepted message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::submission::FormSubmission;

    #[test]
    fn request_body() {
        let config = Config::load().unwrap();
        let form = FormSubmission::blank(FormKind::General).with_text("name", "Kasun");
        let meta = Metadata::now(config.organization.clone());
        let payload = payload::build_payload(FormKind::General, &form, &meta);
        let body = EmailJsRequest::new(&config, payload).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["service_id"], json!("service_qpahzur"));
        assert_eq!(value["template_id"], json!("template_js8zym8"));
        assert_eq!(value["user_id"], json!("6MgztWwU_P9WcNjJi"));
        assert_eq!(value["template_params"]["name"], json!("Kasun"));
        assert!(value.get("accessToken").is_none());
    }

    #[test]
    fn empty_ids_are_refused() {
        let mut config = Config::load().unwrap();
        config.service_id = String::new();
        let err = EmailJsRequest::new(&config, EmailPayload::default())
            .to_json()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
