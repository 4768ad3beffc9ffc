//! Commit message classification.
//!
//! A message is matched against three patterns in priority order, and the
//! first one that matches decides the [`Strategy`]:
//!
//! 1. [`Strategy::Structured`] - `TICKET/type(scope): subject` spanning the whole line
//! 2. [`Strategy::TicketSlashFallback`] - any line starting with `TICKET/`
//! 3. [`Strategy::LooseScan`] - the leftmost `TICKET` anywhere in the line
//!
//! Anything else is [`Strategy::NoMatch`], which callers should present as
//! "no ticket detected" rather than as a failure.
//!
//! ```rust
//! use ticket_classify::classifier::{classify, Strategy};
//!
//! let result = classify("COH-123/feat(deps): Update dependency");
//! assert_eq!(result.strategy(), Strategy::Structured);
//! assert_eq!(result.ticket().unwrap().as_str(), "COH-123");
//! assert_eq!(result.conventional().unwrap().scope.as_deref(), Some("(deps)"));
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::ticket::TICKET_SHAPE;
use crate::domain::{ConventionalParts, TicketReference};

/// Any character except a line terminator (`\r`, `\n`, U+2028, U+2029).
const LINE_CHAR: &str = r"[^\r\n\x{2028}\x{2029}]";

/// Word boundary over ASCII word characters only, so text such as `修复COH-1`
/// or `éCOH-1` still delimits the ticket.
const ASCII_BOUNDARY: &str = r"(?-u:\b)";

static STRUCTURED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<ticket>{TICKET_SHAPE})/(?P<type>[a-z]+)(?P<scope>\([^)]*\))?: (?P<subject>{LINE_CHAR}+)$"
    ))
    .expect("structured pattern is a valid regex")
});

static TICKET_SLASH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?P<ticket>{TICKET_SHAPE})/{LINE_CHAR}+$"))
        .expect("ticket slash pattern is a valid regex")
});

static LOOSE_TICKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{ASCII_BOUNDARY}{TICKET_SHAPE}{ASCII_BOUNDARY}"))
        .expect("loose ticket pattern is a valid regex")
});

/// Which pattern produced a [`Classification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Structured,
    TicketSlashFallback,
    LooseScan,
    NoMatch,
}

impl Strategy {
    /// All strategies in the order they are attempted, `NoMatch` last
    pub const ALL: [Strategy; 4] = [
        Strategy::Structured,
        Strategy::TicketSlashFallback,
        Strategy::LooseScan,
        Strategy::NoMatch,
    ];

    /// Stable lowercase label used in output
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Structured => "structured",
            Strategy::TicketSlashFallback => "ticket-slash-fallback",
            Strategy::LooseScan => "loose-scan",
            Strategy::NoMatch => "none",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one commit message.
///
/// The variant is the strategy that matched; each variant carries exactly
/// the data that strategy can recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Structured {
        ticket: TicketReference,
        conventional: ConventionalParts,
    },
    TicketSlashFallback {
        ticket: TicketReference,
    },
    LooseScan {
        ticket: TicketReference,
    },
    NoMatch,
}

impl Classification {
    pub fn strategy(&self) -> Strategy {
        match self {
            Classification::Structured { .. } => Strategy::Structured,
            Classification::TicketSlashFallback { .. } => Strategy::TicketSlashFallback,
            Classification::LooseScan { .. } => Strategy::LooseScan,
            Classification::NoMatch => Strategy::NoMatch,
        }
    }

    /// The selected ticket, absent only for `NoMatch`
    pub fn ticket(&self) -> Option<&TicketReference> {
        match self {
            Classification::Structured { ticket, .. }
            | Classification::TicketSlashFallback { ticket }
            | Classification::LooseScan { ticket } => Some(ticket),
            Classification::NoMatch => None,
        }
    }

    /// Conventional parts, present only for `Structured`
    pub fn conventional(&self) -> Option<&ConventionalParts> {
        match self {
            Classification::Structured { conventional, .. } => Some(conventional),
            _ => None,
        }
    }
}

type Matcher = fn(&str) -> Option<Classification>;

const MATCHERS: [(Strategy, Matcher); 3] = [
    (Strategy::Structured, match_structured),
    (Strategy::TicketSlashFallback, match_ticket_slash),
    (Strategy::LooseScan, match_loose_scan),
];

fn match_structured(message: &str) -> Option<Classification> {
    let captures = STRUCTURED_PATTERN.captures(message)?;
    let ticket = TicketReference::from_match(captures.name("ticket")?.as_str());
    let conventional = ConventionalParts::new(
        captures.name("type")?.as_str(),
        captures.name("scope").map(|m| m.as_str()),
        captures.name("subject")?.as_str(),
    );

    Some(Classification::Structured {
        ticket,
        conventional,
    })
}

fn match_ticket_slash(message: &str) -> Option<Classification> {
    let captures = TICKET_SLASH_PATTERN.captures(message)?;
    let ticket = TicketReference::from_match(captures.name("ticket")?.as_str());
    Some(Classification::TicketSlashFallback { ticket })
}

fn match_loose_scan(message: &str) -> Option<Classification> {
    let found = LOOSE_TICKET_PATTERN.find(message)?;
    Some(Classification::LooseScan {
        ticket: TicketReference::from_match(found.as_str()),
    })
}

/// Classify a single commit message line.
///
/// Never fails: a message nothing recognizes yields [`Classification::NoMatch`].
pub fn classify(message: &str) -> Classification {
    MATCHERS
        .iter()
        .find_map(|(strategy, matcher)| {
            let result = matcher(message);
            trace!(%strategy, matched = result.is_some(), "tried strategy");
            result
        })
        .unwrap_or(Classification::NoMatch)
}

/// Every ticket-shaped substring in `message`, left to right.
///
/// The first element, if any, is the ticket a loose scan selects.
pub fn find_tickets(message: &str) -> Vec<TicketReference> {
    LOOSE_TICKET_PATTERN
        .find_iter(message)
        .map(|m| TicketReference::from_match(m.as_str()))
        .collect()
}

/// Classify each message independently, preserving input order
pub fn classify_all<I, S>(messages: I) -> Vec<Classification>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|message| classify(message.as_ref()))
        .collect()
}
