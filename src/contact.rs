use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything `encodeURIComponent` escapes.
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

pub const SENT_LABEL: &str = "Message Sent!";
pub const IDLE_LABEL: &str = "Send Message";

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Field values of the contact form. No validation: empty fields stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_uri(&self, address: &str) -> String {
        format!(
            "mailto:{address}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }

    /// Builds the hand-off URI and resets every field.
    pub fn submit(&mut self, address: &str) -> String {
        let uri = self.mailto_uri(address);
        *self = Self::default();
        uri
    }
}

/// Transient "sent" state of the submit button.
///
/// Each submission returns a token; only the newest token may revert the
/// button, so a quick second submission keeps its full feedback window.
#[derive(Debug, Default)]
pub struct SubmitFeedback {
    sent: bool,
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackToken(u64);

impl SubmitFeedback {
    pub fn show(&mut self) -> FeedbackToken {
        self.generation = self.generation.wrapping_add(1);
        self.sent = true;
        FeedbackToken(self.generation)
    }

    pub fn revert(&mut self, token: FeedbackToken) -> bool {
        if !self.sent || token.0 != self.generation {
            return false;
        }

        self.sent = false;
        true
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn label(&self) -> &'static str {
        if self.sent {
            SENT_LABEL
        } else {
            IDLE_LABEL
        }
    }
}
