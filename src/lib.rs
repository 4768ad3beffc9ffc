pub mod analyzer;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod ui;

pub use classifier::{classify, classify_all, find_tickets, Classification, Strategy};
pub use domain::{ConventionalParts, TicketReference};
pub use error::{ClassifyError, Result};
