use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::classifier::{classify, find_tickets, Classification, Strategy};
use crate::domain::TicketReference;

/// Aggregated view of a batch of classified commit messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Number of messages analyzed
    pub total: usize,
    /// Distinct tickets in first-seen order
    pub tickets: Vec<TicketReference>,
    /// Messages no strategy matched, in input order
    pub uncategorized: Vec<String>,
    /// Conventional type of each structured message, with its count
    pub by_type: BTreeMap<String, usize>,
    strategy_counts: BTreeMap<Strategy, usize>,
}

impl BatchReport {
    /// How many messages were classified with `strategy`
    pub fn count(&self, strategy: Strategy) -> usize {
        self.strategy_counts.get(&strategy).copied().unwrap_or(0)
    }

    /// Number of messages that yielded a ticket
    pub fn with_ticket(&self) -> usize {
        self.total - self.count(Strategy::NoMatch)
    }
}

/// One message together with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedMessage {
    pub message: String,
    pub classification: Classification,
    /// Every ticket in the message, collected only when the analyzer
    /// includes all tickets
    pub all_tickets: Option<Vec<TicketReference>>,
}

/// Classifies commit messages and folds the results into a [`BatchReport`]
pub struct BatchAnalyzer {
    include_all_tickets: bool,
}

impl BatchAnalyzer {
    /// Create an analyzer that records only the ticket each message selects
    pub fn new() -> Self {
        BatchAnalyzer {
            include_all_tickets: false,
        }
    }

    /// Also record every ticket-shaped reference found in each message
    pub fn include_all_tickets(mut self, include: bool) -> Self {
        self.include_all_tickets = include;
        self
    }

    /// Classify each message once, in order
    pub fn classify_each(&self, messages: Vec<String>) -> Vec<ClassifiedMessage> {
        messages
            .into_iter()
            .map(|message| ClassifiedMessage {
                classification: classify(&message),
                all_tickets: self.include_all_tickets.then(|| find_tickets(&message)),
                message,
            })
            .collect()
    }

    /// Fold already classified messages into a report
    pub fn report(&self, classified: &[ClassifiedMessage]) -> BatchReport {
        let mut report = BatchReport::default();
        let mut seen = HashSet::new();

        for item in classified {
            record(&mut report, &mut seen, item);
        }

        debug!(
            total = report.total,
            tickets = report.tickets.len(),
            uncategorized = report.uncategorized.len(),
            "analyzed batch"
        );
        report
    }

    /// Analyze commit messages in order
    pub fn analyze_messages(&self, messages: &[String]) -> BatchReport {
        self.report(&self.classify_each(messages.to_vec()))
    }
}

fn record(
    report: &mut BatchReport,
    seen: &mut HashSet<TicketReference>,
    item: &ClassifiedMessage,
) {
    report.total += 1;
    *report
        .strategy_counts
        .entry(item.classification.strategy())
        .or_insert(0) += 1;

    let candidates = item
        .classification
        .ticket()
        .into_iter()
        .chain(item.all_tickets.iter().flatten());
    for ticket in candidates {
        if seen.insert(ticket.clone()) {
            report.tickets.push(ticket.clone());
        }
    }

    match &item.classification {
        Classification::Structured { conventional, .. } => {
            *report.by_type.entry(conventional.r#type.clone()).or_insert(0) += 1;
        }
        Classification::NoMatch => report.uncategorized.push(item.message.clone()),
        _ => {}
    }
}

impl Default for BatchAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze_empty_batch() {
        let report = BatchAnalyzer::new().analyze_messages(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.with_ticket(), 0);
        assert!(report.tickets.is_empty());
    }

    #[test]
    fn test_analyze_counts_each_strategy() {
        let report = BatchAnalyzer::new().analyze_messages(&messages(&[
            "COH-1/feat(api): add endpoint",
            "COH-2/fix: handle nulls",
            "COH-3/Not conventional",
            "Update COH-4 dependency version",
            "feat(deps): Update dependency",
        ]));

        assert_eq!(report.total, 5);
        assert_eq!(report.count(Strategy::Structured), 2);
        assert_eq!(report.count(Strategy::TicketSlashFallback), 1);
        assert_eq!(report.count(Strategy::LooseScan), 1);
        assert_eq!(report.count(Strategy::NoMatch), 1);
        assert_eq!(report.with_ticket(), 4);
        assert_eq!(report.uncategorized, vec!["feat(deps): Update dependency"]);
    }

    #[test]
    fn test_analyze_groups_structured_types() {
        let report = BatchAnalyzer::new().analyze_messages(&messages(&[
            "COH-1/feat: one",
            "COH-2/fix: two",
            "COH-3/feat(ui): three",
            "COH-4/Feat: not structured",
        ]));

        assert_eq!(report.by_type.get("feat"), Some(&2));
        assert_eq!(report.by_type.get("fix"), Some(&1));
        assert_eq!(report.by_type.len(), 2);
    }

    #[test]
    fn test_analyze_tickets_distinct_in_first_seen_order() {
        let report = BatchAnalyzer::new().analyze_messages(&messages(&[
            "Fix issue COH-123 and update for COH-456",
            "ABC-9/fix: follow up",
            "More work on COH-123",
        ]));

        let tickets: Vec<&str> = report.tickets.iter().map(|t| t.as_str()).collect();
        assert_eq!(tickets, vec!["COH-123", "ABC-9"]);
    }

    #[test]
    fn test_classify_each_collects_all_tickets_only_when_enabled() {
        let input = messages(&["Fix issue COH-123 and update for COH-456"]);

        let plain = BatchAnalyzer::new().classify_each(input.clone());
        assert_eq!(plain[0].all_tickets, None);
        assert_eq!(plain[0].classification, classify(&input[0]));

        let all = BatchAnalyzer::new()
            .include_all_tickets(true)
            .classify_each(input.clone());
        assert_eq!(all[0].all_tickets, Some(find_tickets(&input[0])));
    }

    #[test]
    fn test_report_from_classified_matches_analyze_messages() {
        let input = messages(&[
            "COH-1/feat(api): add endpoint",
            "COH-2/Not conventional",
            "Fix COH-3 and COH-4",
            "nothing",
        ]);
        let analyzer = BatchAnalyzer::new().include_all_tickets(true);

        let classified = analyzer.classify_each(input.clone());
        assert_eq!(analyzer.report(&classified), analyzer.analyze_messages(&input));
    }

    #[test]
    fn test_analyze_include_all_tickets() {
        let report = BatchAnalyzer::new()
            .include_all_tickets(true)
            .analyze_messages(&messages(&[
                "Fix issue COH-123 and update for COH-456",
                "ABC-9/fix: relates to COH-456",
            ]));

        let tickets: Vec<&str> = report.tickets.iter().map(|t| t.as_str()).collect();
        assert_eq!(tickets, vec!["COH-123", "COH-456", "ABC-9"]);
    }
}
