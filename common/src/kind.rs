use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::fields::FieldSpec;
use crate::forms;
use crate::payload::ParamSpec;

pub const SECTION_VISIBLE: &str = "display: block;";
pub const SECTION_HIDDEN: &str = "display: none;";

/// Section flags of the shared email template, one per dedicated form.
pub const SECTION_KEYS: [&str; 7] = [
    "studentDisplay",
    "parentDisplay",
    "skilledDisplay",
    "unskilledDisplay",
    "supportDisplay",
    "docDisplay",
    "contactDisplay",
];

/// Fields identifying the sender, used for the plain-text summary and the
/// prefilled fallback email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SenderFields {
    pub name: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormKind {
    Contact,
    Student,
    Parent,
    Skilled,
    Unskilled,
    Support,
    Documentation,
    General,
}

impl FormKind {
    pub fn all() -> impl Iterator<Item = FormKind> {
        FormKind::iter()
    }

    /// Element id of the `<form>`.
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Contact => "contactForm",
            FormKind::Student => "studentForm",
            FormKind::Parent => "parentForm",
            FormKind::Skilled => "skilledForm",
            FormKind::Unskilled => "unskilledForm",
            FormKind::Support => "supportForm",
            FormKind::Documentation => "docForm",
            FormKind::General => "generalForm",
        }
    }

    /// Sent as `formType`.
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Contact => "Contact Form",
            FormKind::Student => "Student Migration Form",
            FormKind::Parent => "Parent Migration Form",
            FormKind::Skilled => "Skilled Migration Form",
            FormKind::Unskilled => "Unskilled Migration Form",
            FormKind::Support => "Language & Interview Support Form",
            FormKind::Documentation => "Visa & Documentation Form",
            FormKind::General => "General Enquiry",
        }
    }

    /// Heading of the summary table in the email body.
    pub fn heading(self) -> &'static str {
        match self {
            FormKind::Contact => "Contact Form Inquiry",
            FormKind::Student => "Student Migration Details",
            FormKind::Parent => "Parent Migration Details",
            FormKind::Skilled => "Skilled Migration Details",
            FormKind::Unskilled => "Unskilled Migration Details",
            FormKind::Support => "Support Request Details",
            FormKind::Documentation => "Visa & Documentation Request Details",
            FormKind::General => "Website Enquiry",
        }
    }

    /// Lead of the plain-text `message`; the generic form sends the typed
    /// message under that key instead.
    pub fn summary_prefix(self) -> Option<&'static str> {
        match self {
            FormKind::Documentation => Some("Visa & Documentation Request"),
            FormKind::General => None,
            kind => Some(kind.heading()),
        }
    }

    pub fn section_key(self) -> Option<&'static str> {
        match self {
            FormKind::Contact => Some("contactDisplay"),
            FormKind::Student => Some("studentDisplay"),
            FormKind::Parent => Some("parentDisplay"),
            FormKind::Skilled => Some("skilledDisplay"),
            FormKind::Unskilled => Some("unskilledDisplay"),
            FormKind::Support => Some("supportDisplay"),
            FormKind::Documentation => Some("docDisplay"),
            FormKind::General => None,
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => forms::CONTACT_FIELDS,
            FormKind::Student => forms::STUDENT_FIELDS,
            FormKind::Parent => forms::PARENT_FIELDS,
            FormKind::Skilled => forms::SKILLED_FIELDS,
            FormKind::Unskilled => forms::UNSKILLED_FIELDS,
            FormKind::Support => forms::SUPPORT_FIELDS,
            FormKind::Documentation => forms::DOC_FIELDS,
            FormKind::General => forms::GENERAL_FIELDS,
        }
    }

    pub fn field(self, id: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.id == id)
    }

    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            FormKind::Contact => forms::CONTACT_PARAMS,
            FormKind::Student => forms::STUDENT_PARAMS,
            FormKind::Parent => forms::PARENT_PARAMS,
            FormKind::Skilled => forms::SKILLED_PARAMS,
            FormKind::Unskilled => forms::UNSKILLED_PARAMS,
            FormKind::Support => forms::SUPPORT_PARAMS,
            FormKind::Documentation => forms::DOC_PARAMS,
            FormKind::General => forms::GENERAL_PARAMS,
        }
    }

    /// Fixed template parameters of this form.
    pub fn constants(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FormKind::Contact => &[
                ("contactSubject", "Website Contact Form Inquiry"),
                ("subject", "Website Contact Form Inquiry"),
                ("service", "Contact Form Inquiry"),
            ],
            FormKind::Student => &[("service", "Student Migration Services")],
            FormKind::General => &[("formId", "generalForm")],
            _ => &[],
        }
    }

    pub fn sender(self) -> SenderFields {
        match self {
            FormKind::Contact | FormKind::General => SenderFields {
                name: &["name"],
                email: "email",
                phone: "phone",
                message: "message",
            },
            FormKind::Support => SenderFields {
                name: &["lsFirstName", "lsMiddleName", "lsLastName"],
                email: "lsEmail",
                phone: "lsPhone",
                message: "lsAdditional",
            },
            FormKind::Documentation => SenderFields {
                name: &["visaFirstName", "visaMiddleName", "visaLastName"],
                email: "visaEmail",
                phone: "visaPhone",
                message: "visaMessage",
            },
            _ => SenderFields {
                name: &["firstName", "middleName", "lastName"],
                email: "email",
                phone: "phone",
                message: "additionalInfo",
            },
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Contact | FormKind::General => "Send Message",
            FormKind::Support | FormKind::Documentation => "Submit Request",
            _ => "Submit Application",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact | FormKind::General => {
                "Thank you! Your message has been sent successfully."
            }
            FormKind::Student => {
                "Thank you! Your student migration application has been submitted successfully. We will contact you within 24 hours."
            }
            FormKind::Parent => {
                "Thank you! Your parent migration inquiry has been submitted successfully. We will contact you within 24 hours."
            }
            FormKind::Skilled => {
                "Thank you! Your skilled migration application has been submitted successfully. We will contact you within 24 hours."
            }
            FormKind::Unskilled => {
                "Thank you! Your unskilled migration application has been submitted successfully. We will contact you within 24 hours."
            }
            FormKind::Support => {
                "Thank you! Your language & interview support inquiry has been submitted successfully. We will contact you within 24 hours."
            }
            FormKind::Documentation => {
                "Thank you! Your visa & documentation inquiry has been submitted successfully. We will contact you within 24 hours."
            }
        }
    }
}
