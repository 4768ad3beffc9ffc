/// Conventional-commit structure recovered from a ticket-prefixed message.
///
/// `scope` keeps the parentheses exactly as they appeared in the message,
/// so `COH-1/feat(deps): x` yields `Some("(deps)")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalParts {
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
}

impl ConventionalParts {
    pub(crate) fn new(r#type: &str, scope: Option<&str>, subject: &str) -> Self {
        ConventionalParts {
            r#type: r#type.to_string(),
            scope: scope.map(str::to_string),
            subject: subject.to_string(),
        }
    }
}
