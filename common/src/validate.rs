use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::fields::{FieldSpec, InputKind, Rule};
use crate::kind::FormKind;
use crate::submission::{FieldValue, FileMeta, FormSubmission};

pub const MB: u64 = 1024 * 1024;

const CV_TYPES: [&str; 3] = [".pdf", ".doc", ".docx"];
const DOCUMENT_TYPES: [&str; 6] = [".pdf", ".doc", ".docx", ".jpg", ".jpeg", ".png"];

lazy_static! {
    // local-part@domain.tld, no whitespace and a single @
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Age must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
    #[error("Please upload your CV")]
    MissingUpload,
    #[error("Please upload a PDF, DOC, or DOCX file")]
    CvType,
    #[error("File size must be less than {limit_mb}MB")]
    CvTooLarge { limit_mb: u64 },
    #[error("File \"{name}\" is not supported. Please upload PDF, DOC, DOCX, JPG, or PNG files.")]
    DocumentType { name: String },
    #[error("File \"{name}\" is too large. Maximum {limit_mb}MB per file.")]
    DocumentTooLarge { name: String, limit_mb: u64 },
    #[error("Total file size exceeds {limit_mb}MB limit.")]
    TotalTooLarge { limit_mb: u64 },
}

/// Constraints of a file input. CV inputs take one file, document inputs several.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    pub required: bool,
    pub multiple: bool,
    pub allowed: &'static [&'static str],
    pub max_file_bytes: u64,
    pub max_total_bytes: Option<u64>,
}

impl UploadPolicy {
    pub const fn cv(required: bool) -> Self {
        UploadPolicy {
            required,
            multiple: false,
            allowed: &CV_TYPES,
            max_file_bytes: 5 * MB,
            max_total_bytes: None,
        }
    }

    pub const fn documents() -> Self {
        UploadPolicy {
            required: false,
            multiple: true,
            allowed: &DOCUMENT_TYPES,
            max_file_bytes: 5 * MB,
            max_total_bytes: Some(25 * MB),
        }
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept(&self) -> String {
        self.allowed.join(",")
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.allowed.iter().any(|ext| name.ends_with(ext))
    }

    /// The type is checked before the size, so a disallowed file is reported
    /// as such whatever its size.
    pub fn check(&self, files: &[FileMeta]) -> Result<(), FieldError> {
        let first = match files.first() {
            Some(file) => file,
            None if self.required => return Err(FieldError::MissingUpload),
            None => return Ok(()),
        };

        if !self.multiple {
            if !self.accepts(&first.name) {
                return Err(FieldError::CvType);
            }
            if first.size > self.max_file_bytes {
                return Err(FieldError::CvTooLarge {
                    limit_mb: self.max_file_bytes / MB,
                });
            }
            return Ok(());
        }

        let mut total = 0;
        for file in files {
            if !self.accepts(&file.name) {
                return Err(FieldError::DocumentType {
                    name: file.name.clone(),
                });
            }
            if file.size > self.max_file_bytes {
                return Err(FieldError::DocumentTooLarge {
                    name: file.name.clone(),
                    limit_mb: self.max_file_bytes / MB,
                });
            }
            total += file.size;
        }

        match self.max_total_bytes {
            Some(max) if total > max => Err(FieldError::TotalTooLarge { limit_mb: max / MB }),
            _ => Ok(()),
        }
    }
}

/// Every failing field of one submission attempt, in form order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<(&'static str, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, e)| e)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.errors.iter().map(|(field, e)| (*field, e))
    }
}

pub fn check_field(spec: &FieldSpec, value: Option<&FieldValue>) -> Result<(), FieldError> {
    match spec.input {
        InputKind::Upload(policy) => {
            return policy.check(value.map(FieldValue::files).unwrap_or(&[]));
        }
        InputKind::Checkbox => {
            return match spec.rule {
                Rule::Required(message) if !value.map(FieldValue::is_checked).unwrap_or(false) => {
                    Err(FieldError::Missing(message))
                }
                _ => Ok(()),
            };
        }
        _ => {}
    }

    let text = value.map(|v| v.as_text().trim()).unwrap_or_default();
    match spec.rule {
        Rule::Optional if text.is_empty() => return Ok(()),
        Rule::Required(message) if text.is_empty() => return Err(FieldError::Missing(message)),
        Rule::Range { missing, .. } if text.is_empty() => return Err(FieldError::Missing(missing)),
        Rule::Range { min, max, .. } => {
            return match text.parse::<f64>() {
                Ok(n) if (f64::from(min)..=f64::from(max)).contains(&n) => Ok(()),
                _ => Err(FieldError::OutOfRange { min, max }),
            };
        }
        _ => {}
    }

    if spec.input == InputKind::Email && !is_valid_email(text) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

pub fn validate(kind: FormKind, submission: &FormSubmission) -> ValidationReport {
    let errors: Vec<_> = kind
        .fields()
        .iter()
        .filter_map(|spec| {
            check_field(spec, submission.get(spec.id))
                .err()
                .map(|e| (spec.id, e))
        })
        .collect();

    if !errors.is_empty() {
        debug!("{} form rejected: {} field(s) invalid", kind, errors.len());
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student() -> FormSubmission {
        FormSubmission::blank(FormKind::Student)
            .with_text("firstName", "Nimal")
            .with_text("lastName", "Perera")
            .with_text("sex", "male")
            .with_text("dob", "2001-04-12")
            .with_text("maritalStatus", "single")
            .with_text("email", "nimal@example.com")
            .with_text("phone", "+94 71 000 0000")
            .with_text("currentCountry", "sri-lanka")
            .with_text("educationLevel", "bachelors")
            .with_text("desiredCountry", "australia")
            .with_text("studyField", "it")
            .with("cvUpload", FieldValue::Files(vec![FileMeta::new("cv.pdf", MB)]))
            .with("agree", FieldValue::Flag(true))
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn complete_student_form_is_valid() {
        assert!(validate(FormKind::Student, &student()).is_valid());
    }

    #[test]
    fn every_empty_required_field_is_reported() {
        let report = validate(FormKind::Student, &FormSubmission::blank(FormKind::Student));
        let fields: Vec<_> = report.fields().collect();
        assert_eq!(
            fields,
            vec![
                "firstName",
                "lastName",
                "sex",
                "dob",
                "maritalStatus",
                "email",
                "phone",
                "currentCountry",
                "educationLevel",
                "desiredCountry",
                "studyField",
                "cvUpload",
                "agree",
            ]
        );
        assert_eq!(
            report.get("firstName").map(ToString::to_string).as_deref(),
            Some("Please enter your first name")
        );
        assert_eq!(
            report.get("agree").map(ToString::to_string).as_deref(),
            Some("Please agree to the Terms and Conditions")
        );
    }

    #[test]
    fn required_fields_reported_for_all_forms() {
        for kind in FormKind::all() {
            let report = validate(kind, &FormSubmission::blank(kind));
            let required = kind.fields().iter().filter(|f| f.is_required()).count();
            assert!(!report.is_valid(), "{} accepted an empty form", kind);
            assert_eq!(report.len(), required, "{}", kind);
        }
    }

    #[test]
    fn whitespace_only_is_empty() {
        let form = student().with_text("firstName", "   ");
        assert_eq!(
            validate(FormKind::Student, &form).get("firstName"),
            Some(&FieldError::Missing("Please enter your first name"))
        );
    }

    #[test]
    fn malformed_email_reported_separately() {
        let form = student().with_text("email", "nimal@example");
        let report = validate(FormKind::Student, &form);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("email"), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn mandatory_cv_rejects_no_file() {
        let form = student().with("cvUpload", FieldValue::Files(vec![]));
        assert_eq!(
            validate(FormKind::Student, &form).get("cvUpload"),
            Some(&FieldError::MissingUpload)
        );
    }

    #[test]
    fn optional_uploads_accept_no_file() {
        assert_eq!(UploadPolicy::cv(false).check(&[]), Ok(()));
        assert_eq!(UploadPolicy::documents().check(&[]), Ok(()));
    }

    #[test]
    fn oversized_cv_gets_size_message() {
        let err = UploadPolicy::cv(true)
            .check(&[FileMeta::new("cv.pdf", 6 * MB)])
            .unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 5MB");
    }

    #[test]
    fn disallowed_type_wins_over_size() {
        let small = UploadPolicy::cv(true).check(&[FileMeta::new("setup.exe", 10)]);
        let large = UploadPolicy::cv(true).check(&[FileMeta::new("setup.exe", 60 * MB)]);
        assert_eq!(small, Err(FieldError::CvType));
        assert_eq!(large, Err(FieldError::CvType));

        let doc = UploadPolicy::documents().check(&[FileMeta::new("setup.EXE", 60 * MB)]);
        assert_eq!(
            doc.unwrap_err().to_string(),
            "File \"setup.EXE\" is not supported. Please upload PDF, DOC, DOCX, JPG, or PNG files."
        );
    }

    #[test]
    fn extension_check_ignores_case() {
        assert_eq!(UploadPolicy::cv(true).check(&[FileMeta::new("CV.DOCX", MB)]), Ok(()));
        assert_eq!(
            UploadPolicy::documents().check(&[FileMeta::new("passport.JPeG", MB)]),
            Ok(())
        );
    }

    #[test]
    fn document_limits() {
        let policy = UploadPolicy::documents();
        let err = policy
            .check(&[
                FileMeta::new("a.pdf", MB),
                FileMeta::new("scan.png", 6 * MB),
            ])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "File \"scan.png\" is too large. Maximum 5MB per file."
        );

        let six: Vec<_> = (0..6)
            .map(|i| FileMeta::new(format!("page{}.pdf", i), 5 * MB))
            .collect();
        assert_eq!(
            policy.check(&six).unwrap_err().to_string(),
            "Total file size exceeds 25MB limit."
        );
        assert_eq!(policy.check(&six[..5]), Ok(()));
    }

    #[test]
    fn age_range() {
        let spec = FormKind::Unskilled.field("age").unwrap();
        let check = |age: &str| check_field(spec, Some(&FieldValue::Text(age.to_owned())));

        assert_eq!(check(""), Err(FieldError::Missing("Please enter your age")));
        assert_eq!(check("18"), Ok(()));
        assert_eq!(check("65"), Ok(()));
        assert_eq!(check("17"), Err(FieldError::OutOfRange { min: 18, max: 65 }));
        assert_eq!(check("66"), Err(FieldError::OutOfRange { min: 18, max: 65 }));
        assert_eq!(check("thirty"), Err(FieldError::OutOfRange { min: 18, max: 65 }));
        assert_eq!(check("25.5"), Ok(()));
        assert_eq!(check("65.5"), Err(FieldError::OutOfRange { min: 18, max: 65 }));
        assert_eq!(check("NaN"), Err(FieldError::OutOfRange { min: 18, max: 65 }));
        assert_eq!(
            check("70").unwrap_err().to_string(),
            "Age must be between 18 and 65"
        );
    }

    #[test]
    fn documentation_form_needs_no_agreement_or_upload() {
        let form = FormSubmission::blank(FormKind::Documentation)
            .with_text("visaFirstName", "Ayesha")
            .with_text("visaLastName", "Fernando")
            .with_text("visaEmail", "ayesha@example.com")
            .with_text("visaPhone", "0771234567")
            .with_text("visaCountry", "canada")
            .with_text("visaType", "work")
            .with_text("visaMessage", "Need help with a work permit");
        assert!(validate(FormKind::Documentation, &form).is_valid());
    }
}
