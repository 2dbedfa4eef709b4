// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors that can cross the crate boundary.
//!
//! The [`crate::FilterMachine`] itself never fails: a rejected commit is surfaced as a
//! [`crate::ValidationError`] record, which is data for the view to render. The errors
//! in this module are only produced by fallible constructors (eg: building a
//! [`crate::RangeValue`] from untrusted numbers, validating a
//! [`crate::LabelFilterConfig`], or parsing a replay script).

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`LabelFilterError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq)]
pub enum LabelFilterError {
    #[error("🎚️ Range bound {name} = {value} is outside of [0, 1]")]
    #[diagnostic(
        code(label_filter::range::out_of_bounds),
        help("Both ends of a confidence range must be between 0 and 1 inclusive")
    )]
    RangeOutOfBounds { name: &'static str, value: f64 },

    #[error("🎚️ Range low {low} is greater than high {high}")]
    #[diagnostic(
        code(label_filter::range::inverted),
        help("Swap the two ends, the low end must not exceed the high end")
    )]
    RangeInverted { low: f64, high: f64 },

    #[error("⚙️ Invalid config value for `{field}`: {reason}")]
    #[diagnostic(code(label_filter::config::invalid))]
    InvalidConfig { field: &'static str, reason: String },

    #[error("📜 Could not parse event on line {line_number}")]
    #[diagnostic(
        code(label_filter::replay::parse),
        help("Each line must be a JSON object like {{\"type\":\"CHANGE\",\"value\":\"do\"}}")
    )]
    ParseEvent { line_number: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_values() {
        let it = LabelFilterError::RangeInverted { low: 0.7, high: 0.2 };
        assert_eq!(it.to_string(), "🎚️ Range low 0.7 is greater than high 0.2");

        let it = LabelFilterError::RangeOutOfBounds {
            name: "high",
            value: 1.5,
        };
        assert!(it.to_string().contains("high = 1.5"));
    }

    #[test]
    fn error_converts_into_report() {
        let result: CommonResult<()> = Err(LabelFilterError::InvalidConfig {
            field: "results_panel_row_count",
            reason: "must be greater than 0".into(),
        }
        .into());
        let report = result.unwrap_err();
        assert!(report.to_string().contains("results_panel_row_count"));
        assert!(report.downcast_ref::<LabelFilterError>().is_some());
    }
}
