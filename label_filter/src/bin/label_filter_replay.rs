// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replays a JSON lines script against a freshly mounted label filter, and prints a JSON
//! snapshot of the view after each line.
//!
//! Each line is either an event, eg: `{"type":"CHANGE","value":"do"}`, or a key press,
//! eg: `{"key":"Down"}`. Blank lines are skipped.

use clap::Parser;
use miette::{Context, IntoDiagnostic};
use r3bl_label_filter::{CommonResult, DEFAULT_LOG_FILE_NAME, ExternalStoreAdapter,
                        FilterEvent, FilterKey, FilterStore, LabelFilterConfig,
                        LabelFilterError, Selection, TracingConfig,
                        Vocabulary, init_tracing};
use serde::Deserialize;

use crate::clap_config::CLIArg;

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let _maybe_guard = if cli_arg.global_options.enable_logging {
        init_tracing(TracingConfig::new_file(Some(DEFAULT_LOG_FILE_NAME.to_string())))?
    } else {
        None
    };

    let config = match &cli_arg.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err(format!("Could not read config file {path}"))?;
            serde_json::from_str::<LabelFilterConfig>(&text)
                .into_diagnostic()
                .wrap_err(format!("Could not parse config file {path}"))?
        }
        None => LabelFilterConfig::default(),
    };
    config.try_validate()?;

    let script = std::fs::read_to_string(&cli_arg.events)
        .into_diagnostic()
        .wrap_err(format!("Could not read events file {}", cli_arg.events))?;
    let steps = parse_script(&script)?;

    let store = FilterStore::new();
    let cells = store.cells_for(&config.entity_name);
    cells.vocabulary.set(Vocabulary::from(cli_arg.vocab));
    cells.selection.set(Selection::from(cli_arg.selected));

    let mut adapter = ExternalStoreAdapter::mount(cells, config);
    tracing::info!(message = "🏷️ replay started", steps = steps.len());

    for step in steps {
        _ = match step {
            ReplayStep::Event(event) => adapter.send(event),
            ReplayStep::Key { key } => adapter.press(key),
        };
        let line = serde_json::to_string(&adapter.view())
            .into_diagnostic()
            .wrap_err("Could not serialize view")?;
        println!("{line}");
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayStep {
    Event(FilterEvent),
    Key { key: FilterKey },
}

fn parse_script(script: &str) -> CommonResult<Vec<ReplayStep>> {
    let mut acc = vec![];
    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let step = serde_json::from_str::<ReplayStep>(line)
            .into_diagnostic()
            .wrap_err(LabelFilterError::ParseEvent {
                line_number: index + 1,
            })?;
        acc.push(step);
    }
    Ok(acc)
}

mod clap_config {
    use clap::{Args, Parser};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "label_filter_replay")]
    #[command(about = "🏷️ Replay label filter events and print view snapshots")]
    #[command(version)]
    #[command(next_line_help = true)]
    pub struct CLIArg {
        /// Class labels of the vocabulary, eg: `--vocab cat,dog,bird`.
        #[arg(long, value_delimiter = ',')]
        pub vocab: Vec<String>,

        /// Labels selected before the first event.
        #[arg(long, value_delimiter = ',')]
        pub selected: Vec<String>,

        /// Path to a JSON lines file of events and key presses.
        #[arg(long, short = 'e')]
        pub events: String,

        /// Optional JSON file with a `LabelFilterConfig`.
        #[arg(long, short = 'c')]
        pub config: Option<String>,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `label_filter_log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }
}

#[cfg(test)]
mod tests {
    use r3bl_label_filter::assert_eq2;

    use super::*;

    #[test]
    fn script_mixes_events_and_keys() {
        let script = r#"{"type":"EDIT"}

{"type":"CHANGE","value":"do"}
{"key":"Down"}"#;
        let steps = parse_script(script).unwrap();
        assert_eq2!(steps.len(), 3);
        assert!(matches!(steps[1], ReplayStep::Event(FilterEvent::Change { .. })));
        assert!(matches!(steps[2], ReplayStep::Key {
            key: FilterKey::Down
        }));
    }

    #[test]
    fn bad_line_reports_line_number() {
        let report = parse_script("{\"type\":\"EDIT\"}\nnot json").unwrap_err();
        assert!(report.to_string().contains("line 2"));
    }
}
