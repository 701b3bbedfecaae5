use std::rc::Rc;

use log::{error, info};
use yew::prelude::ComponentLink;

use common::{Config, DeliveryError, DeliveryReceipt, EmailJsRequest, EmailPayload};

use crate::components::submission_form::{SubmissionForm, SubmissionFormMsg};
use crate::js_functions::send_email;

pub async fn deliver(
    config: &Config,
    payload: EmailPayload,
) -> Result<DeliveryReceipt, DeliveryError> {
    let body = EmailJsRequest::new(config, payload).to_json()?;
    send_email(&config.endpoint, &body).await
}

/// Sends a validated submission and reports the outcome back to the form.
pub async fn submit_enquiry(
    link: &ComponentLink<SubmissionForm>,
    config: Rc<Config>,
    ticket: u32,
    payload: EmailPayload,
) {
    let result = match deliver(&config, payload).await {
        Ok(receipt) => {
            info!("Email sent: {} {}", receipt.status, receipt.text);
            Ok(())
        }
        Err(e) => {
            error!("Failed to send email: {}", e);
            Err(e)
        }
    };

    link.send_message(SubmissionFormMsg::Delivered(ticket, result));
}
