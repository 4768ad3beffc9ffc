//! Turning command-line input into commit message lines

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::config::InputConfig;
use crate::error::Result;

/// Where commit messages come from
#[derive(Debug, Clone, PartialEq)]
pub enum MessageSource {
    /// Each argument is one message
    Args(Vec<String>),
    /// One message per line of a file
    File(PathBuf),
    /// One message per line of standard input
    Stdin,
}

/// Read and normalize messages from `source`
pub fn read_messages(source: &MessageSource, config: &InputConfig) -> Result<Vec<String>> {
    let raw: Vec<String> = match source {
        MessageSource::Args(args) => args
            .iter()
            .map(|arg| {
                if config.first_line_only {
                    first_line(arg).to_string()
                } else {
                    arg.clone()
                }
            })
            .collect(),
        MessageSource::File(path) => split_lines(&fs::read_to_string(path)?),
        MessageSource::Stdin => io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?,
    };

    Ok(normalize(raw, config))
}

/// Text before the first line break, without a trailing `\r`
pub fn first_line(message: &str) -> &str {
    message
        .split('\n')
        .next()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or_default()
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn normalize(messages: Vec<String>, config: &InputConfig) -> Vec<String> {
    messages
        .into_iter()
        .map(|message| {
            if config.trim {
                message.trim().to_string()
            } else {
                message
            }
        })
        .filter(|message| !config.skip_empty || !message.trim().is_empty())
        .collect()
}
