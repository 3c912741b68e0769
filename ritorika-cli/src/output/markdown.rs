//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use ritorika_api::{CasesResponse, ClichesResponse, RepeatsResponse};
use ritorika_core::Case;
use std::io::Write;

/// Markdown formatter - one table per analyzed input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    finding_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            finding_count: 0,
        }
    }

    fn heading(&mut self, source: Option<&str>) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Escape table cell content
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_cases(&mut self, phrase: &str, cases: &CasesResponse) -> Result<()> {
        writeln!(self.writer, "## {}", cell(phrase))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Case | Form |")?;
        writeln!(self.writer, "|------|------|")?;
        for case in Case::ALL {
            writeln!(self.writer, "| {} | {} |", case.name(), cell(cases.get(case)))?;
        }
        if let Some(plural) = &cases.plural_nomn {
            writeln!(self.writer, "| nominative plural | {} |", cell(plural))?;
        }
        writeln!(self.writer)?;
        self.finding_count += 1;
        Ok(())
    }

    fn format_repeats(&mut self, source: Option<&str>, repeats: &RepeatsResponse) -> Result<()> {
        self.heading(source)?;
        writeln!(self.writer, "| Word | Category | Window | Occurrences |")?;
        writeln!(self.writer, "|------|----------|--------|-------------|")?;
        for group in &repeats.repeat_data {
            let occurrences: Vec<String> = group
                .repeats
                .iter()
                .map(|r| format!("{} ({})", cell(&r.word), r.start_position))
                .collect();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                cell(&group.word),
                group.category,
                group.window_size,
                occurrences.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        self.finding_count += repeats.repeat_data.len();
        Ok(())
    }

    fn format_cliches(&mut self, source: Option<&str>, cliches: &ClichesResponse) -> Result<()> {
        self.heading(source)?;
        writeln!(self.writer, "| Start | End | Text | Pattern |")?;
        writeln!(self.writer, "|-------|-----|------|---------|")?;
        for found in &cliches.data {
            writeln!(
                self.writer,
                "| {} | {} | {} | `{}` |",
                found.start,
                found.end,
                cell(&found.text),
                found.pattern
            )?;
        }
        writeln!(self.writer)?;
        self.finding_count += cliches.data.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total findings: {}*", self.finding_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
