//! Main workflow orchestration logic
//!
//! Separates the classification run from CLI argument parsing so it can be
//! driven programmatically without depending on clap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::analyzer::{BatchAnalyzer, BatchReport, ClassifiedMessage};
use crate::config::Config;
use crate::input::{read_messages, MessageSource};
use crate::ui;

/// Arguments for the classify workflow
///
/// Flags can only switch options on; they are combined with the config file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifyWorkflowArgs {
    /// Messages given on the command line
    pub messages: Vec<String>,

    /// File with one message per line
    pub file: Option<PathBuf>,

    /// List every ticket found in each message
    pub all_tickets: bool,

    /// Print a batch summary after the results
    pub summary: bool,
}

impl ClassifyWorkflowArgs {
    /// Where messages are read from: file, then arguments, then stdin
    pub fn source(&self) -> MessageSource {
        match (&self.file, self.messages.is_empty()) {
            (Some(path), _) => MessageSource::File(path.clone()),
            (None, false) => MessageSource::Args(self.messages.clone()),
            (None, true) => MessageSource::Stdin,
        }
    }
}

/// Result of a classify workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Classified messages in input order
    pub messages: Vec<ClassifiedMessage>,

    /// Aggregate over all messages
    pub report: BatchReport,
}

/// Read, classify and report on the messages selected by `args`.
///
/// Classification never fails; errors come only from reading input.
pub fn run_classify_workflow(
    args: &ClassifyWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let source = args.source();
    let lines = read_messages(&source, &config.input)
        .with_context(|| format!("failed to read messages from {:?}", source))?;
    debug!(count = lines.len(), "read messages");

    let result = classify_messages(lines, args.all_tickets || config.output.all_tickets);
    render(&result, args, config);
    Ok(result)
}

/// Classify already-read messages without printing anything
pub fn classify_messages(lines: Vec<String>, include_all_tickets: bool) -> WorkflowResult {
    let analyzer = BatchAnalyzer::new().include_all_tickets(include_all_tickets);
    let messages = analyzer.classify_each(lines);
    let report = analyzer.report(&messages);

    WorkflowResult { messages, report }
}

fn render(result: &WorkflowResult, args: &ClassifyWorkflowArgs, config: &Config) {
    ui::set_color(config.output.color);

    if result.messages.is_empty() {
        ui::display_status("No commit messages to classify");
    }

    for item in &result.messages {
        ui::display_classification(
            &item.message,
            &item.classification,
            item.all_tickets.as_deref(),
        );
    }

    if args.summary || config.output.summary {
        ui::display_report(&result.report);
    }
}
