//! Scripted keystroke replay.
//!
//! Reads a CSV tape of keystrokes, drives a [`Session`] with them in order,
//! and writes a transcript row after every accepted key.

use crate::error::Result;
use crate::key::KeyRecord;
use crate::session::Session;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// Replays keystroke tapes against a single session.
///
/// # Transcript format
///
/// Header `key,status,display`, then one row per accepted key holding the
/// canonical key token and the session's status line and display after it.
pub struct TapeRunner {
    session: Session,
}

impl TapeRunner {
    /// Creates a runner with a cleared session.
    pub fn new() -> Self {
        TapeRunner {
            session: Session::new(),
        }
    }

    /// Processes keystrokes from a CSV reader, streaming the transcript to `writer`.
    ///
    /// Unknown keys and malformed rows are logged at warn level and skipped.
    pub fn run<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["key", "status", "display"])?;

        for (row_idx, result) in csv_reader.deserialize::<KeyRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    continue;
                }
            };

            let key = match record.parse() {
                Some(key) => key,
                None => {
                    warn!("Row {}: Unknown key {:?}, ignoring", row_num, record.key);
                    continue;
                }
            };

            self.session.press(key);
            debug!(
                "Row {}: {} -> status {:?}, display {:?}",
                row_num,
                key,
                self.session.status(),
                self.session.display()
            );

            csv_writer.write_record([
                key.to_string().as_str(),
                self.session.status(),
                self.session.display(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// The session driven by this runner.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Default for TapeRunner {
    fn default() -> Self {
        Self::new()
    }
}
