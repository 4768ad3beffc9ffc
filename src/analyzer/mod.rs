//! Aggregation of classifications across a range of commits

pub mod batch_analyzer;

pub use batch_analyzer::{BatchAnalyzer, BatchReport, ClassifiedMessage};
