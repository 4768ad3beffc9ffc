//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::analyzer::BatchReport;
use crate::classifier::{Classification, Strategy};
use crate::domain::TicketReference;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

fn strategy_badge(strategy: Strategy) -> String {
    let label = format!("[{}]", strategy.label());
    match strategy {
        Strategy::Structured => style(label).green().to_string(),
        Strategy::TicketSlashFallback => style(label).cyan().to_string(),
        Strategy::LooseScan => style(label).yellow().to_string(),
        Strategy::NoMatch => style(label).dim().to_string(),
    }
}

/// Format one classified message.
///
/// `NoMatch` is rendered as "no ticket detected". When `all_tickets` is
/// given and holds more than the selected ticket, the full list is appended
/// on its own line.
pub fn format_classification(
    message: &str,
    classification: &Classification,
    all_tickets: Option<&[TicketReference]>,
) -> String {
    let mut out = format!("{} {}", strategy_badge(classification.strategy()), message);

    match classification {
        Classification::Structured {
            ticket,
            conventional,
        } => {
            out.push_str(&format!(
                "\n    ticket: {}  type: {}  scope: {}  subject: {}",
                style(ticket).bold(),
                conventional.r#type,
                conventional.scope.as_deref().unwrap_or("-"),
                conventional.subject
            ));
        }
        Classification::TicketSlashFallback { ticket } | Classification::LooseScan { ticket } => {
            out.push_str(&format!("\n    ticket: {}", style(ticket).bold()));
        }
        Classification::NoMatch => {
            out.push_str(&format!("\n    {}", style("no ticket detected").dim()));
        }
    }

    if let Some(tickets) = all_tickets.filter(|tickets| tickets.len() > 1) {
        let joined: Vec<&str> = tickets.iter().map(TicketReference::as_str).collect();
        out.push_str(&format!("\n    all tickets: {}", joined.join(", ")));
    }

    out
}

/// Format a batch summary: strategy counts, distinct tickets, structured types.
pub fn format_report(report: &BatchReport) -> String {
    let mut lines = vec![
        style("Summary").bold().to_string(),
        format!(
            "  {} messages, {} with a ticket",
            report.total,
            report.with_ticket()
        ),
    ];

    for strategy in Strategy::ALL {
        lines.push(format!(
            "  {:<22} {}",
            strategy.label(),
            report.count(strategy)
        ));
    }

    if report.tickets.is_empty() {
        lines.push("  tickets: none".to_string());
    } else {
        let joined: Vec<&str> = report.tickets.iter().map(TicketReference::as_str).collect();
        lines.push(format!("  tickets: {}", joined.join(", ")));
    }

    if !report.by_type.is_empty() {
        let types: Vec<String> = report
            .by_type
            .iter()
            .map(|(kind, count)| format!("{} ({})", kind, count))
            .collect();
        lines.push(format!("  types: {}", types.join(", ")));
    }

    lines.join("\n")
}

/// Print one classified message.
pub fn display_classification(
    message: &str,
    classification: &Classification,
    all_tickets: Option<&[TicketReference]>,
) {
    println!(
        "{}",
        format_classification(message, classification, all_tickets)
    );
}

/// Print a batch summary.
pub fn display_report(report: &BatchReport) {
    println!("\n{}", format_report(report));
}
