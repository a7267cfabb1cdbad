//! Demo application: a drop zone and a hidden file picker that list the
//! files they receive.
//!
//! There is no browser here. Events are replayed from stdin as NDJSON
//! (one JSON object per line), the way page-side glue would forward them:
//!
//! ```text
//! {"element":"dropZone","event":"dragover","payload":{"dataTransfer":{"files":[...]}}}
//! {"element":"fileInput","event":"change","payload":{"target":{"files":[...]}}}
//! ```
//!
//! The rendered view is written to stdout after every state change. Logs go
//! to stderr only.

mod app;
mod cli;

pub use app::{update, view, App, Element, Model, Msg};
pub use cli::Cli;

use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, Write};

use crate::events::EventKind;

/// One recorded native event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub element: Element,
    pub event: EventKind,
    #[serde(default)]
    pub payload: Value,
}

/// Parse the command line, then replay stdin until it closes.
pub fn run() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    log::info!(
        "Drop zone #{}, file input #{} (accept: {:?})",
        config.drop_zone_id,
        config.input_id,
        config.accept
    );

    let mut app = App::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();

    writeln!(stdout_lock, "{}", view(&app.model))
        .map_err(|e| format!("Failed to write view: {}", e))?;
    replay(&mut app, stdin.lock(), &mut stdout_lock)?;

    log::info!("Stdin closed, exiting");
    Ok(())
}

/// Feed every record in `input` through the app, writing the view to
/// `output` whenever a message was applied.
pub fn replay<I: BufRead, W: Write>(app: &mut App, input: I, output: &mut W) -> Result<(), String> {
    for (number, line) in input.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        if line.trim().is_empty() {
            continue;
        }

        let record: EventRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping line {}: {}", number + 1, e);
                continue;
            }
        };

        let dispatch = match app.handle(record.element, record.event, &record.payload) {
            Some(dispatch) => dispatch,
            None => {
                log::debug!("No {} listener on {:?}", record.event, record.element);
                continue;
            }
        };

        match dispatch.outcome {
            Ok(()) => {
                writeln!(output, "{}", view(&app.model))
                    .map_err(|e| format!("Failed to write view: {}", e))?;
                output
                    .flush()
                    .map_err(|e| format!("Failed to flush output: {}", e))?;
            }
            Err(e) => log::debug!("Ignored {} on {:?}: {}", record.event, record.element, e),
        }
    }
    Ok(())
}
