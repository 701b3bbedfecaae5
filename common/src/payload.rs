use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::kind::{FormKind, SECTION_HIDDEN, SECTION_KEYS, SECTION_VISIBLE};
use crate::submission::FormSubmission;
use crate::validate::MB;

/// Flat template parameters sent to the email service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailPayload(BTreeMap<String, String>);

impl EmailPayload {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_owned(), value.into());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub organization: String,
    pub timestamp: NaiveDateTime,
}

impl Metadata {
    pub fn new(organization: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Metadata {
            organization: organization.into(),
            timestamp,
        }
    }

    pub fn now(organization: impl Into<String>) -> Self {
        Self::new(organization, Local::now().naive_local())
    }

    /// `M/D/YYYY`
    pub fn date(&self) -> String {
        self.timestamp.format("%-m/%-d/%Y").to_string()
    }

    /// `H:MM:SS AM`
    pub fn time(&self) -> String {
        self.timestamp.format("%-I:%M:%S %p").to_string()
    }
}

/// Where a template parameter takes its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Field(&'static str),
    /// Like `Field`, rendered as a `mailto:` link in the summary table.
    Email(&'static str),
    /// Display label of the chosen option.
    Choice(&'static str),
    FullName {
        first: &'static str,
        middle: &'static str,
        last: &'static str,
    },
    YesNo(&'static str),
    Attached {
        field: &'static str,
        yes: &'static str,
        no: &'static str,
    },
    FileNames(&'static str),
    FileSize(&'static str),
    FirstWord(&'static str),
    RestWords(&'static str),
    SubmitTime,
}

/// One template parameter and/or one row of the summary table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub key: Option<&'static str>,
    pub label: Option<&'static str>,
    pub source: Source,
    pub fallback: Option<&'static str>,
}

impl ParamSpec {
    pub const fn new(key: &'static str, source: Source) -> Self {
        ParamSpec {
            key: Some(key),
            label: None,
            source,
            fallback: None,
        }
    }

    /// A summary row without a template parameter of its own.
    pub const fn row(label: &'static str, source: Source) -> Self {
        ParamSpec {
            key: None,
            label: Some(label),
            source,
            fallback: None,
        }
    }

    pub const fn labelled(self, label: &'static str) -> Self {
        ParamSpec {
            label: Some(label),
            ..self
        }
    }

    /// Text sent instead of an empty value.
    pub const fn or(self, fallback: &'static str) -> Self {
        ParamSpec {
            fallback: Some(fallback),
            ..self
        }
    }

    pub fn resolve(&self, kind: FormKind, submission: &FormSubmission, meta: &Metadata) -> String {
        let value = match self.source {
            Source::Field(id) | Source::Email(id) => submission.text(id).to_owned(),
            Source::Choice(id) => {
                let text = submission.text(id);
                match kind.field(id) {
                    Some(spec) => spec.display_value(text).to_owned(),
                    None => text.to_owned(),
                }
            }
            Source::FullName {
                first,
                middle,
                last,
            } => full_name(&[
                submission.text(first),
                submission.text(middle),
                submission.text(last),
            ]),
            Source::YesNo(id) => yes_no(submission.is_checked(id)).to_owned(),
            Source::Attached { field, yes, no } => {
                if submission.files(field).is_empty() {
                    no.to_owned()
                } else {
                    yes.to_owned()
                }
            }
            Source::FileNames(id) => submission
                .files(id)
                .iter()
                .map(|file| file.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Source::FileSize(id) => {
                let total: u64 = submission.files(id).iter().map(|file| file.size).sum();
                if total == 0 {
                    String::new()
                } else {
                    format!("{:.2} MB", total as f64 / MB as f64)
                }
            }
            Source::FirstWord(id) => submission
                .text(id)
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_owned(),
            Source::RestWords(id) => submission
                .text(id)
                .split_whitespace()
                .skip(1)
                .collect::<Vec<_>>()
                .join(" "),
            Source::SubmitTime => meta.time(),
        };

        match self.fallback {
            Some(fallback) if value.is_empty() => fallback.to_owned(),
            _ => value,
        }
    }
}

pub fn yes_no(checked: bool) -> &'static str {
    if checked {
        "Yes"
    } else {
        "No"
    }
}

/// Non-empty name parts joined by single spaces.
pub fn full_name(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const CONTAINER_STYLE: &str = "font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 600px; margin: 0; padding: 20px; color: #1a1a1a; background-color: #fefefe; border: 1px solid #ddd; border-radius: 8px;";
const HEADING_STYLE: &str = "color: #2a6ebb; margin-bottom: 25px; text-align: left; border-bottom: 2px solid #2a6ebb; padding-bottom: 8px;";
const TABLE_STYLE: &str =
    "width: 100%; border-collapse: collapse; font-size: 15px; color: #333; text-align: left;";
const ROW_STYLE: &str = "border-bottom: 1px solid #eaeaea;";
const LABEL_STYLE: &str = "padding: 10px 15px; font-weight: 600; width: 160px; vertical-align: top;";
const VALUE_STYLE: &str = "padding: 10px 15px; vertical-align: top;";
const LINK_STYLE: &str = "color: #2a6ebb; text-decoration: none;";

/// The email body: a heading and a two-column table of label/value rows.
pub fn summary_html(heading: &str, rows: &[(&str, String, bool)]) -> String {
    let mut html = format!(
        "<div style=\"{}\"><h2 style=\"{}\">{}</h2><table style=\"{}\">",
        CONTAINER_STYLE,
        HEADING_STYLE,
        encode_text(heading),
        TABLE_STYLE
    );

    for (label, value, is_email) in rows {
        let cell = if value.is_empty() {
            "-".to_owned()
        } else if *is_email {
            format!(
                "<a href=\"mailto:{}\" style=\"{}\">{}</a>",
                encode_double_quoted_attribute(value),
                LINK_STYLE,
                encode_text(value)
            )
        } else {
            encode_text(value).into_owned()
        };

        html.push_str(&format!(
            "<tr style=\"{}\"><td style=\"{}\">{}:</td><td style=\"{}\">{}</td></tr>",
            ROW_STYLE,
            LABEL_STYLE,
            encode_text(label),
            VALUE_STYLE,
            cell
        ));
    }

    html.push_str("</table></div>");
    html
}

/// Builds the template parameters of a validated submission.
pub fn build_payload(kind: FormKind, submission: &FormSubmission, meta: &Metadata) -> EmailPayload {
    let mut payload = EmailPayload::default();
    let mut rows = Vec::new();

    for spec in kind.params() {
        let value = spec.resolve(kind, submission, meta);
        if let Some(label) = spec.label {
            rows.push((label, value.clone(), matches!(spec.source, Source::Email(_))));
        }
        if let Some(key) = spec.key {
            payload.insert(key, value);
        }
    }

    for key in SECTION_KEYS.iter() {
        let style = if kind.section_key() == Some(*key) {
            SECTION_VISIBLE
        } else {
            SECTION_HIDDEN
        };
        payload.insert(key, style);
    }

    for (key, value) in kind.constants() {
        payload.insert(key, *value);
    }

    if let Some(prefix) = kind.summary_prefix() {
        let sender = kind.sender();
        let name = full_name(
            &sender
                .name
                .iter()
                .map(|id| submission.text(id))
                .collect::<Vec<_>>(),
        );
        let phone = match submission.text(sender.phone) {
            "" => "Not provided",
            phone => phone,
        };
        payload.insert(
            "message",
            format!(
                "{} - Name: {}, Email: {}, Phone: {}",
                prefix,
                name,
                submission.text(sender.email),
                phone
            ),
        );
    }

    payload.insert("message_html", summary_html(kind.heading(), &rows));
    payload.insert("formType", kind.title());
    payload.insert("date", meta.date());
    payload.insert("time", meta.time());
    payload.insert("to_name", meta.organization.as_str());

    payload
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::submission::{FieldValue, FileMeta};

    fn meta() -> Metadata {
        let timestamp = NaiveDate::from_ymd(2024, 3, 7).and_hms(14, 5, 9);
        Metadata::new("Ocyana Global Migration", timestamp)
    }

    fn contact() -> FormSubmission {
        FormSubmission::blank(FormKind::Contact)
            .with_text("name", "Kasun Silva")
            .with_text("email", "kasun@example.com")
            .with_text("service", "skilled")
            .with_text("message", "I would like a consultation.")
    }

    fn parent() -> FormSubmission {
        FormSubmission::blank(FormKind::Parent)
            .with_text("firstName", "Dilani")
            .with_text("lastName", "Jayasuriya")
            .with_text("email", "dilani@example.com")
            .with_text("phone", "0712345678")
            .with_text("urgency", "soon")
            .with("agree", FieldValue::Flag(true))
    }

    #[test]
    fn metadata_formats() {
        assert_eq!(meta().date(), "3/7/2024");
        assert_eq!(meta().time(), "2:05:09 PM");
    }

    #[test]
    fn exactly_one_section_is_shown() {
        for kind in FormKind::all() {
            let payload = build_payload(kind, &FormSubmission::blank(kind), &meta());
            let visible: Vec<_> = SECTION_KEYS
                .iter()
                .filter(|key| payload.get(key) == Some(SECTION_VISIBLE))
                .collect();
            let hidden = SECTION_KEYS
                .iter()
                .filter(|key| payload.get(key) == Some(SECTION_HIDDEN))
                .count();

            match kind.section_key() {
                Some(key) => assert_eq!(visible, vec![&key], "{}", kind),
                None => assert!(visible.is_empty(), "{}", kind),
            }
            assert_eq!(visible.len() + hidden, SECTION_KEYS.len(), "{}", kind);
        }
    }

    #[test]
    fn metadata_is_included() {
        let payload = build_payload(FormKind::Parent, &parent(), &meta());
        assert_eq!(payload.get("date"), Some("3/7/2024"));
        assert_eq!(payload.get("time"), Some("2:05:09 PM"));
        assert_eq!(payload.get("to_name"), Some("Ocyana Global Migration"));
        assert_eq!(payload.get("formType"), Some("Parent Migration Form"));
    }

    #[test]
    fn parent_fields_and_fallbacks() {
        let payload = build_payload(FormKind::Parent, &parent(), &meta());
        assert_eq!(payload.get("parentName"), Some("Dilani Jayasuriya"));
        assert_eq!(payload.get("parentUrgency"), Some("soon"));
        assert_eq!(payload.get("parentMiddleName"), Some("Not provided"));
        assert_eq!(payload.get("parentFamilyDetails"), Some("Not provided"));
        assert_eq!(payload.get("parentNewsletter"), Some("No"));
        assert_eq!(
            payload.get("message"),
            Some("Parent Migration Details - Name: Dilani Jayasuriya, Email: dilani@example.com, Phone: 0712345678")
        );
    }

    #[test]
    fn middle_name_is_kept_when_given() {
        let form = parent().with_text("middleName", "Sachini");
        let payload = build_payload(FormKind::Parent, &form, &meta());
        assert_eq!(payload.get("parentName"), Some("Dilani Sachini Jayasuriya"));
        assert_eq!(payload.get("parentMiddleName"), Some("Sachini"));
    }

    #[test]
    fn contact_params() {
        let payload = build_payload(FormKind::Contact, &contact(), &meta());
        assert_eq!(payload.get("contactName"), Some("Kasun Silva"));
        assert_eq!(payload.get("contactPhone"), Some("Not provided"));
        assert_eq!(payload.get("contactService"), Some("skilled"));
        assert_eq!(payload.get("contactSubject"), Some("Website Contact Form Inquiry"));
        assert_eq!(payload.get("service"), Some("Contact Form Inquiry"));
        assert_eq!(payload.get("name"), Some("Kasun Silva"));
        assert_eq!(payload.get("email"), Some("kasun@example.com"));
        assert_eq!(payload.get("contactDisplay"), Some(SECTION_VISIBLE));

        let html = payload.get("message_html").unwrap();
        assert!(html.contains("Contact Form Inquiry"));
        assert!(html.contains("Skilled Migration"));
    }

    #[test]
    fn unselected_service_reads_not_selected() {
        let form = contact().with_text("service", "");
        let payload = build_payload(FormKind::Contact, &form, &meta());
        assert_eq!(payload.get("contactService"), Some("Not selected"));
        assert!(payload.get("message_html").unwrap().contains("Not selected"));
    }

    #[test]
    fn cv_presence_is_summarised() {
        let form = FormSubmission::blank(FormKind::Skilled)
            .with("cvUpload", FieldValue::Files(vec![FileMeta::new("cv.pdf", MB)]));
        let payload = build_payload(FormKind::Skilled, &form, &meta());
        assert_eq!(payload.get("skilledFileUpload"), Some("Yes - CV uploaded"));
        assert_eq!(payload.get("skilledEnglishTest"), Some("Not taken yet"));

        let payload = build_payload(FormKind::Unskilled, &FormSubmission::blank(FormKind::Unskilled), &meta());
        assert_eq!(payload.get("unskilledFileUpload"), Some("No file uploaded"));
    }

    #[test]
    fn document_summary() {
        let none = build_payload(
            FormKind::Documentation,
            &FormSubmission::blank(FormKind::Documentation),
            &meta(),
        );
        assert_eq!(none.get("docFileUpload"), Some("No"));
        assert_eq!(none.get("docFileNames"), Some("None"));
        assert_eq!(none.get("docFileSize"), Some("N/A"));

        let form = FormSubmission::blank(FormKind::Documentation).with(
            "visaDocument",
            FieldValue::Files(vec![
                FileMeta::new("passport.pdf", MB),
                FileMeta::new("photo.jpg", MB / 2),
            ]),
        );
        let some = build_payload(FormKind::Documentation, &form, &meta());
        assert_eq!(some.get("docFileUpload"), Some("Yes"));
        assert_eq!(some.get("docFileNames"), Some("passport.pdf, photo.jpg"));
        assert_eq!(some.get("docFileSize"), Some("1.50 MB"));
    }

    #[test]
    fn documentation_message_lead() {
        let form = FormSubmission::blank(FormKind::Documentation)
            .with_text("visaFirstName", "Ayesha")
            .with_text("visaMiddleName", "M")
            .with_text("visaLastName", "Fernando")
            .with_text("visaEmail", "ayesha@example.com")
            .with_text("visaPhone", "0771234567");
        let payload = build_payload(FormKind::Documentation, &form, &meta());
        assert_eq!(payload.get("docName"), Some("Ayesha M Fernando"));
        assert_eq!(
            payload.get("message"),
            Some("Visa & Documentation Request - Name: Ayesha M Fernando, Email: ayesha@example.com, Phone: 0771234567")
        );
    }

    #[test]
    fn general_form_splits_name() {
        let form = FormSubmission::blank(FormKind::General)
            .with_text("name", "Mohamed Rizwan Fazal")
            .with_text("email", "rizwan@example.com")
            .with_text("message", "Hello");
        let payload = build_payload(FormKind::General, &form, &meta());
        assert_eq!(payload.get("firstName"), Some("Mohamed"));
        assert_eq!(payload.get("lastName"), Some("Rizwan Fazal"));
        assert_eq!(payload.get("phone"), Some("Not provided"));
        assert_eq!(payload.get("message"), Some("Hello"));
        assert_eq!(payload.get("formId"), Some("generalForm"));
        assert_eq!(payload.get("formSubmitTime"), Some("2:05:09 PM"));
    }

    #[test]
    fn single_word_name_has_no_last_name() {
        let form = FormSubmission::blank(FormKind::General).with_text("name", "Madonna");
        let payload = build_payload(FormKind::General, &form, &meta());
        assert_eq!(payload.get("firstName"), Some("Madonna"));
        assert_eq!(payload.get("lastName"), Some("Not provided"));
    }

    #[test]
    fn summary_table_escapes_values() {
        let form = contact().with_text("message", "<script>alert(1)</script> & more");
        let html = build_payload(FormKind::Contact, &form, &meta())
            .get("message_html")
            .unwrap()
            .to_owned();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(html.contains("href=\"mailto:kasun@example.com\""));
    }

    #[test]
    fn empty_rows_render_as_dash() {
        let html = summary_html("Heading", &[("Phone", String::new(), false)]);
        assert!(html.contains("Phone:</td><td style=\"padding: 10px 15px; vertical-align: top;\">-</td>"));
    }

    #[test]
    fn file_bytes_never_sent() {
        let form = FormSubmission::blank(FormKind::Student)
            .with("cvUpload", FieldValue::Files(vec![FileMeta::new("cv.pdf", 3 * MB)]));
        let payload = build_payload(FormKind::Student, &form, &meta());
        assert!(payload.keys().all(|key| !key.to_lowercase().contains("content")));
        assert_eq!(payload.get("studentFileUpload"), Some("Yes - CV uploaded"));
    }
}
