// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{CommonResult, LabelFilterError};

pub const DEFAULT_RESULTS_PANEL_ROW_COUNT: usize = 10;
pub const DEFAULT_ENTITY_NAME: &str = "ground_truth";

/// Knobs for one mounted filter widget. Fields missing from a config file take their
/// default values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFilterConfig {
    /// Max number of results shown at once in the results panel.
    pub results_panel_row_count: usize,
    /// Which entity of the [`crate::FilterStore`] the widget binds to.
    pub entity_name: String,
}

impl Default for LabelFilterConfig {
    fn default() -> Self {
        Self {
            results_panel_row_count: DEFAULT_RESULTS_PANEL_ROW_COUNT,
            entity_name: DEFAULT_ENTITY_NAME.to_string(),
        }
    }
}

impl LabelFilterConfig {
    /// # Errors
    ///
    /// [`LabelFilterError::InvalidConfig`] if the row count is zero or the entity name is
    /// blank.
    pub fn try_validate(&self) -> CommonResult<()> {
        if self.results_panel_row_count == 0 {
            return Err(LabelFilterError::InvalidConfig {
                field: "results_panel_row_count",
                reason: "must be greater than 0".into(),
            }
            .into());
        }

        if self.entity_name.trim().is_empty() {
            return Err(LabelFilterError::InvalidConfig {
                field: "entity_name",
                reason: "must not be empty".into(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn default_is_valid() {
        let it = LabelFilterConfig::default();
        assert!(it.try_validate().is_ok());
        assert_eq2!(it.results_panel_row_count, 10);
    }

    #[test]
    fn zero_rows_is_rejected() {
        let it = LabelFilterConfig {
            results_panel_row_count: 0,
            ..Default::default()
        };
        let report = it.try_validate().unwrap_err();
        assert_eq2!(
            report.downcast_ref::<LabelFilterError>(),
            Some(&LabelFilterError::InvalidConfig {
                field: "results_panel_row_count",
                reason: "must be greater than 0".into(),
            })
        );
    }

    #[test]
    fn blank_entity_name_is_rejected() {
        let it = LabelFilterConfig {
            entity_name: "  ".into(),
            ..Default::default()
        };
        assert!(it.try_validate().is_err());
    }

    #[test]
    fn partial_json_takes_defaults() {
        let it: LabelFilterConfig =
            serde_json::from_str(r#"{"results_panel_row_count": 3}"#).unwrap();
        assert_eq2!(it, LabelFilterConfig {
            results_panel_row_count: 3,
            entity_name: "ground_truth".into(),
        });
    }
}
