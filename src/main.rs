use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ticket_classify::cli::orchestration::{run_classify_workflow, ClassifyWorkflowArgs};
use ticket_classify::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "ticket-classify",
    version,
    about = "Extract ticket references and conventional-commit parts from commit messages"
)]
struct Args {
    #[arg(help = "Commit messages to classify (reads stdin when none are given)")]
    messages: Vec<String>,

    #[arg(short, long, help = "Read messages from a file, one per line")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "List every ticket found in each message")]
    all_tickets: bool,

    #[arg(short, long, help = "Print a summary after the results")]
    summary: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with classification output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = ClassifyWorkflowArgs {
        messages: args.messages,
        file: args.file,
        all_tickets: args.all_tickets,
        summary: args.summary,
    };

    if let Err(e) = run_classify_workflow(&workflow_args, &config) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
