use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Shown after an accepted sign-up.
pub const THANK_YOU_MESSAGE: &str = "شكرًا لك! سنعلمك عند إطلاق المتجر.";
/// Shown when the address is empty or malformed.
pub const INVALID_EMAIL_MESSAGE: &str = "الرجاء إدخال بريد إلكتروني صحيح.";

/// The "valid e-mail address" production browsers apply to
/// `<input type="email">`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyError {
    /// Nothing was typed
    Empty,
    /// Something was typed but it is not an email address
    Malformed,
}

impl NotifyError {
    pub fn message(&self) -> &'static str {
        INVALID_EMAIL_MESSAGE
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Empty => write!(f, "email is empty"),
            NotifyError::Malformed => write!(f, "email is malformed"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Check `raw` the way the browser checks an email input: surrounding
/// whitespace is ignored, then the address must match the pattern.
pub fn validate_email(raw: &str) -> Result<&str, NotifyError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(NotifyError::Empty);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(NotifyError::Malformed);
    }
    Ok(value)
}

/// Outcome of submitting the store's "notify me" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Address accepted; the input should be cleared
    Accepted { email: String },
    /// Address rejected; the input is left as typed
    Rejected(NotifyError),
}

impl NotifyOutcome {
    /// Local acknowledgment shown to the visitor
    pub fn message(&self) -> &'static str {
        match self {
            NotifyOutcome::Accepted { .. } => THANK_YOU_MESSAGE,
            NotifyOutcome::Rejected(err) => err.message(),
        }
    }

    pub fn clears_input(&self) -> bool {
        matches!(self, NotifyOutcome::Accepted { .. })
    }
}

/// Handle a submit. Nothing leaves the page: the form is a placeholder
/// until the store launches.
pub fn submit(raw: &str) -> NotifyOutcome {
    match validate_email(raw) {
        Ok(email) => {
            log::info!("store launch sign-up accepted");
            NotifyOutcome::Accepted {
                email: email.to_string(),
            }
        }
        Err(err) => {
            log::debug!("store launch sign-up rejected: {}", err);
            NotifyOutcome::Rejected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert_eq!(validate_email("a@b.co"), Ok("a@b.co"));
        assert_eq!(
            validate_email("first.last+tag@mail.example.org"),
            Ok("first.last+tag@mail.example.org")
        );
        // Browsers accept dotless domains
        assert_eq!(validate_email("user@localhost"), Ok("user@localhost"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate_email("  me@x.io \n"), Ok("me@x.io"));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_email(""), Err(NotifyError::Empty));
        assert_eq!(validate_email("   "), Err(NotifyError::Empty));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["plain", "@example.com", "user@", "a b@c.d", "user@-bad.com", "user@bad-.com"] {
            assert_eq!(validate_email(raw), Err(NotifyError::Malformed), "{raw}");
        }
    }

    #[test]
    fn test_submit_outcomes() {
        let ok = submit("fan@example.com");
        assert!(ok.clears_input());
        assert_eq!(ok.message(), THANK_YOU_MESSAGE);

        let bad = submit("nope");
        assert!(!bad.clears_input());
        assert_eq!(bad.message(), INVALID_EMAIL_MESSAGE);
        assert_eq!(bad, NotifyOutcome::Rejected(NotifyError::Malformed));
    }
}
