use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ClassifyError, Result};

/// Shape of a ticket key: uppercase ASCII project key, hyphen, ASCII digits.
pub(crate) const TICKET_SHAPE: &str = r"[A-Z]+-[0-9]+";

static EXACT_TICKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{TICKET_SHAPE}$")).expect("ticket pattern is a valid regex")
});

/// An issue-tracker reference such as `COH-123`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketReference(String);

impl TicketReference {
    /// Wrap text the classifier has already matched against [`TICKET_SHAPE`]
    pub(crate) fn from_match(text: &str) -> Self {
        TicketReference(text.to_string())
    }

    /// The full reference, e.g. `"COH-123"`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project key before the hyphen, e.g. `"COH"`
    pub fn project_key(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(key, _)| key)
    }

    /// Issue number after the hyphen, kept as text since it has no upper bound
    pub fn number(&self) -> &str {
        self.0.split_once('-').map_or("", |(_, number)| number)
    }
}

impl FromStr for TicketReference {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self> {
        if EXACT_TICKET.is_match(s) {
            Ok(TicketReference::from_match(s))
        } else {
            Err(ClassifyError::invalid_ticket(s))
        }
    }
}

impl fmt::Display for TicketReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
