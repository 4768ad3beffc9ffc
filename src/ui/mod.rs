//! User interface module - terminal output.
//!
//! Rendering lives in [`formatter`]; this module decides whether it is
//! colored.

pub mod formatter;

pub use formatter::{
    display_classification, display_error, display_report, display_status,
    format_classification, format_report,
};

/// Disable ANSI styling when `enabled` is false.
///
/// `true` leaves console's terminal detection in charge, so piped output
/// stays plain either way.
pub fn set_color(enabled: bool) {
    if !enabled {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}
