//! Contact form → `mailto:` hand-off.
//!
//! No request leaves the page: the form fields are folded into a subject
//! and body, percent-encoded, and the browser is pointed at a `mailto:` URI.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The five form fields. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Build from a lookup of form field values. Missing fields become empty.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut field = |name: &str| lookup(name).unwrap_or_default();
        Self {
            name: field("name"),
            company: field("company"),
            phone: field("phone"),
            email: field("email"),
            message: field("message"),
        }
    }

    /// `"<prefix> — <company>"`, falling back to the name when company is empty.
    pub fn subject(&self, prefix: &str) -> String {
        let who = if self.company.is_empty() {
            &self.name
        } else {
            &self.company
        };
        format!("{prefix} — {who}")
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nCompany: {}\nPhone: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.company, self.phone, self.email, self.message
        )
    }

    pub fn mailto_uri(&self, recipient: &str, subject_prefix: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(&self.subject(subject_prefix)),
            encode_uri_component(&self.body())
        )
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
