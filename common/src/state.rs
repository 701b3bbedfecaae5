use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::error::{DeliveryError, Error};
use crate::kind::FormKind;
use crate::payload::{build_payload, EmailPayload, Metadata};
use crate::submission::{FieldValue, FormSubmission};
use crate::validate::{validate, FieldError, ValidationReport};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Initial,
    Sending,
    Sent,
    Failed(DeliveryError),
}

impl SubmissionStatus {
    pub fn class_name(&self) -> &'static str {
        match self {
            SubmissionStatus::Initial => "",
            SubmissionStatus::Sending => "is-sending",
            SubmissionStatus::Sent => "is-sent",
            SubmissionStatus::Failed(_) => "is-failed",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Initial
    }
}

/// Visible error messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotations(BTreeMap<&'static str, FieldError>);

impl Annotations {
    /// Replaces whatever was shown for `id`.
    pub fn show(&mut self, id: &'static str, error: FieldError) {
        self.0.insert(id, error);
    }

    pub fn clear(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, id: &str) -> Option<&FieldError> {
        self.0.get(id)
    }

    pub fn is_showing(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn annotate(&mut self, report: &ValidationReport) {
        for (id, error) in report.iter() {
            self.show(id, error.clone());
        }
    }
}

/// Everything one rendered form needs between two events.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub values: FormSubmission,
    pub annotations: Annotations,
    pub status: SubmissionStatus,
    // Identifies the request in flight; replies carrying another one are stale.
    ticket: u32,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        FormState {
            kind,
            values: FormSubmission::blank(kind),
            annotations: Annotations::default(),
            status: SubmissionStatus::Initial,
            ticket: 0,
        }
    }

    /// Starts over with an empty form of `kind`. A request still in flight
    /// for the previous form is orphaned.
    pub fn switch(&mut self, kind: FormKind) {
        if self.status.is_sending() {
            debug!("{} form left while sending", self.kind);
        }
        let ticket = self.ticket.wrapping_add(1);
        *self = FormState { ticket, ..FormState::new(kind) };
    }

    pub fn ticket(&self) -> u32 {
        self.ticket
    }

    /// Input on a field; a showing annotation goes away on the first keystroke.
    pub fn update(&mut self, id: &str, value: FieldValue) {
        if self.annotations.is_showing(id) {
            self.annotations.clear(id);
        }
        self.values.set(id, value);
    }

    /// Drops one picked file from an upload field.
    pub fn remove_file(&mut self, id: &str, index: usize) {
        let mut files = self.values.files(id).to_vec();
        if index >= files.len() {
            return;
        }
        files.remove(index);
        self.annotations.clear(id);
        self.values.set(id, FieldValue::Files(files));
    }

    pub fn blur(&mut self, id: &str) {
        let spec = match self.kind.field(id) {
            Some(spec) => spec,
            None => return,
        };
        let clears = match self.values.get(id) {
            Some(value) => spec.clears_on_blur(value),
            None => spec.clears_on_blur(&FieldValue::empty_for(&spec.input)),
        };
        if clears {
            self.annotations.clear(id);
        }
    }

    /// Validates the current values and, when they pass, moves to `Sending`
    /// and hands back the parameters to deliver.
    pub fn submit(&mut self, meta: &Metadata) -> Result<EmailPayload, Error> {
        if self.status.is_sending() {
            warn!("{} form submitted while a request is in flight", self.kind);
            return Err(Error::Busy);
        }

        self.annotations.clear_all();
        let report = validate(self.kind, &self.values);
        if !report.is_valid() {
            self.annotations.annotate(&report);
            return Err(Error::Invalid(report));
        }

        debug!("{} form valid, building payload", self.kind);
        self.ticket = self.ticket.wrapping_add(1);
        self.status = SubmissionStatus::Sending;
        Ok(build_payload(self.kind, &self.values, meta))
    }

    /// Applies the outcome of the request `ticket`. Returns `false` and
    /// changes nothing when the reply belongs to an abandoned request.
    pub fn complete(&mut self, ticket: u32, result: Result<(), DeliveryError>) -> bool {
        if ticket != self.ticket || !self.status.is_sending() {
            debug!("{} form ignores a stale delivery result", self.kind);
            return false;
        }

        match result {
            Ok(()) => {
                info!("{} form delivered", self.kind);
                self.values = FormSubmission::blank(self.kind);
                self.annotations.clear_all();
                self.status = SubmissionStatus::Sent;
            }
            Err(e) => {
                warn!("{} form could not be delivered: {}", self.kind, e);
                self.status = SubmissionStatus::Failed(e);
            }
        }

        true
    }

    /// Hides the success banner or the fallback modal.
    pub fn dismiss(&mut self) {
        if !self.status.is_sending() {
            self.status = SubmissionStatus::Initial;
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_sending() {
            "Sending..."
        } else {
            self.kind.submit_label()
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::submission::FileMeta;

    fn meta() -> Metadata {
        let timestamp = NaiveDate::from_ymd(2024, 11, 30).and_hms(9, 15, 0);
        Metadata::new("Ocyana Global Migration", timestamp)
    }

    fn filled_contact() -> FormState {
        let mut state = FormState::new(FormKind::Contact);
        state.update("name", FieldValue::Text("Kasun Silva".to_owned()));
        state.update("email", FieldValue::Text("kasun@example.com".to_owned()));
        state.update("message", FieldValue::Text("Please call me back".to_owned()));
        state
    }

    #[test]
    fn empty_required_fields_block_delivery() {
        let mut state = FormState::new(FormKind::Contact);
        let err = state.submit(&meta()).unwrap_err();

        assert!(matches!(err, Error::Invalid(ref report) if report.len() == 3));
        assert_eq!(state.status, SubmissionStatus::Initial);
        assert_eq!(state.annotations.len(), 3);
        assert_eq!(
            state.annotations.get("name"),
            Some(&FieldError::Missing("Please enter your name"))
        );
        assert!(!state.annotations.is_showing("phone"));
    }

    #[test]
    fn resubmitting_replaces_annotations() {
        let mut state = FormState::new(FormKind::Contact);
        state.submit(&meta()).unwrap_err();
        state.values.set("name", FieldValue::Text("Kasun".to_owned()));
        state.values.set("email", FieldValue::Text("kasun@".to_owned()));
        state.submit(&meta()).unwrap_err();

        assert!(!state.annotations.is_showing("name"));
        assert_eq!(state.annotations.get("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(state.annotations.len(), 2);
    }

    #[test]
    fn typing_clears_annotation() {
        let mut state = FormState::new(FormKind::Contact);
        state.submit(&meta()).unwrap_err();
        state.update("message", FieldValue::Text("H".to_owned()));
        assert!(!state.annotations.is_showing("message"));
        assert!(state.annotations.is_showing("name"));
    }

    #[test]
    fn blur_clears_only_filled_fields() {
        let mut state = FormState::new(FormKind::Student);
        state.submit(&meta()).unwrap_err();

        state.blur("firstName");
        assert!(state.annotations.is_showing("firstName"));

        state.values.set("firstName", FieldValue::Text("Nimal".to_owned()));
        state.blur("firstName");
        assert!(!state.annotations.is_showing("firstName"));

        state.blur("agree");
        state.blur("cvUpload");
        assert!(!state.annotations.is_showing("agree"));
        assert!(!state.annotations.is_showing("cvUpload"));
    }

    #[test]
    fn valid_submission_starts_sending() {
        let mut state = filled_contact();
        let payload = state.submit(&meta()).unwrap();

        assert_eq!(payload.get("contactMessage"), Some("Please call me back"));
        assert!(state.status.is_sending());
        assert_eq!(state.submit_label(), "Sending...");
        assert!(matches!(state.submit(&meta()), Err(Error::Busy)));
    }

    #[test]
    fn success_resets_form() {
        let mut state = filled_contact();
        state.submit(&meta()).unwrap();
        let ticket = state.ticket();
        assert!(state.complete(ticket, Ok(())));

        assert_eq!(state.status, SubmissionStatus::Sent);
        assert_eq!(state.values, FormSubmission::blank(FormKind::Contact));
        assert!(state.annotations.is_empty());
        assert_eq!(state.submit_label(), "Send Message");
    }

    #[test]
    fn failure_keeps_values() {
        let mut state = filled_contact();
        state.submit(&meta()).unwrap();
        let error = DeliveryError::Rejected {
            status: 400,
            text: "The template ID is invalid".to_owned(),
        };
        let ticket = state.ticket();
        assert!(state.complete(ticket, Err(error.clone())));

        assert_eq!(state.status, SubmissionStatus::Failed(error));
        assert_eq!(state.values.text("message"), "Please call me back");
        assert_eq!(state.submit_label(), "Send Message");

        state.dismiss();
        assert_eq!(state.status, SubmissionStatus::Initial);
        assert!(state.submit(&meta()).is_ok());
    }

    #[test]
    fn leaving_during_send_drops_the_late_reply() {
        let mut state = filled_contact();
        state.submit(&meta()).unwrap();
        let contact_ticket = state.ticket();

        state.switch(FormKind::Student);
        assert_eq!(state.kind, FormKind::Student);
        assert_eq!(state.status, SubmissionStatus::Initial);
        assert_eq!(state.values, FormSubmission::blank(FormKind::Student));

        assert!(!state.complete(contact_ticket, Ok(())));
        assert_eq!(state.status, SubmissionStatus::Initial);
        assert_eq!(state.kind, FormKind::Student);

        let err = state.submit(&meta()).unwrap_err();
        assert!(state.annotations.is_showing("firstName"));
        assert!(!state.annotations.is_showing("name"));
        assert!(!state.annotations.is_showing("message"));
        assert!(matches!(err, Error::Invalid(ref report) if report.get("name").is_none()));
    }

    #[test]
    fn reply_for_an_older_request_is_ignored() {
        let mut state = filled_contact();
        state.submit(&meta()).unwrap();
        let first = state.ticket();
        state.switch(FormKind::Contact);
        state.update("name", FieldValue::Text("Kasun Silva".to_owned()));
        state.update("email", FieldValue::Text("kasun@example.com".to_owned()));
        state.update("message", FieldValue::Text("Second try".to_owned()));
        state.submit(&meta()).unwrap();

        assert!(!state.complete(first, Ok(())));
        assert!(state.status.is_sending());
        let second = state.ticket();
        assert!(state.complete(second, Ok(())));
        assert_eq!(state.status, SubmissionStatus::Sent);
    }

    #[test]
    fn removing_a_rejected_file_clears_the_upload() {
        let mut state = FormState::new(FormKind::Unskilled);
        state.update("cvUpload", FieldValue::Files(vec![FileMeta::new("setup.exe", 1024)]));
        state.submit(&meta()).unwrap_err();
        assert!(state.annotations.is_showing("cvUpload"));

        state.remove_file("cvUpload", 3);
        assert_eq!(state.values.files("cvUpload").len(), 1);

        state.remove_file("cvUpload", 0);
        assert!(state.values.files("cvUpload").is_empty());
        assert!(!state.annotations.is_showing("cvUpload"));

        state.submit(&meta()).unwrap_err();
        assert!(!state.annotations.is_showing("cvUpload"));
    }

    #[test]
    fn removing_one_of_several_documents_keeps_the_rest() {
        let mut state = FormState::new(FormKind::Documentation);
        state.update(
            "visaDocument",
            FieldValue::Files(vec![
                FileMeta::new("passport.pdf", 1024),
                FileMeta::new("photo.jpg", 2048),
            ]),
        );
        state.remove_file("visaDocument", 0);
        assert_eq!(
            state.values.files("visaDocument"),
            &[FileMeta::new("photo.jpg", 2048)][..]
        );
    }
}
