use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::kind::FormKind;
use crate::payload::full_name;
use crate::submission::FormSubmission;

// Characters left alone by a URI component encoder.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const MAIL_SUBJECT: &str = "Contact Form Inquiry";

fn encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Other ways to reach the consultancy when the email service fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: String,
    /// Dialable form, e.g. `+94777638715`.
    pub phone: String,
    pub phone_display: String,
    /// Digits only, as used by `wa.me`.
    pub whatsapp: String,
    pub backup_form: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackLinks {
    pub mailto: String,
    pub whatsapp: String,
    pub tel: String,
    pub backup_form: String,
}

impl ContactChannels {
    /// Links of the fallback modal; the email is prefilled with what the
    /// visitor typed so nothing has to be entered twice.
    pub fn links(
        &self,
        organization: &str,
        kind: FormKind,
        submission: &FormSubmission,
    ) -> FallbackLinks {
        let sender = kind.sender();
        let name = full_name(
            &sender
                .name
                .iter()
                .map(|id| submission.text(id))
                .collect::<Vec<_>>(),
        );

        let mailto = format!(
            "mailto:{}?subject={}&body=Name:%20{}%0D%0AEmail:%20{}%0D%0APhone:%20{}%0D%0AMessage:%20{}",
            self.email,
            encode(MAIL_SUBJECT),
            encode(&name),
            encode(submission.text(sender.email)),
            encode(submission.text(sender.phone)),
            encode(submission.text(sender.message)),
        );

        let greeting = format!("Hello {}, I'm interested in your services.", organization);

        FallbackLinks {
            mailto,
            whatsapp: format!("https://wa.me/{}?text={}", self.whatsapp, encode(&greeting)),
            tel: format!("tel:{}", self.phone),
            backup_form: self.backup_form.clone(),
        }
    }
}
