//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use ritorika_api::{CasesResponse, ClichesResponse, RepeatsResponse};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter
///
/// A single result is written as the bare response object; several results
/// become an array of `{ "source": ..., "result": ... }` records.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

/// One analyzed input in a multi-result array
#[derive(Debug, Serialize)]
pub struct Record {
    /// Phrase, file path, `<text>` or `<stdin>`
    pub source: Option<String>,
    /// Response as served by the API
    pub result: Value,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    fn push<T: Serialize>(&mut self, source: Option<&str>, response: &T) -> Result<()> {
        self.records.push(Record {
            source: source.map(str::to_string),
            result: serde_json::to_value(response)?,
        });
        Ok(())
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_cases(&mut self, phrase: &str, cases: &CasesResponse) -> Result<()> {
        self.push(Some(phrase), cases)
    }

    fn format_repeats(&mut self, source: Option<&str>, repeats: &RepeatsResponse) -> Result<()> {
        self.push(source, repeats)
    }

    fn format_cliches(&mut self, source: Option<&str>, cliches: &ClichesResponse) -> Result<()> {
        self.push(source, cliches)
    }

    fn finish(&mut self) -> Result<()> {
        let records = std::mem::take(&mut self.records);
        match records.as_slice() {
            [single] => self.write_value(&single.result)?,
            _ => self.write_value(&records)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
