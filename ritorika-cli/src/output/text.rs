//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use ritorika_api::{CasesResponse, ClichesResponse, RepeatsResponse};
use ritorika_core::Case;
use std::io::{self, Write};

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn header(&mut self, source: Option<&str>) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "== {source} ==")?;
        }
        Ok(())
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_cases(&mut self, phrase: &str, cases: &CasesResponse) -> Result<()> {
        writeln!(self.writer, "{phrase}")?;
        for case in Case::ALL {
            writeln!(self.writer, "  {:<6} {}", case.tag(), cases.get(case))?;
        }
        if let Some(plural) = &cases.plural_nomn {
            writeln!(self.writer, "  {:<6} {}", "plur", plural)?;
        }
        Ok(())
    }

    fn format_repeats(&mut self, source: Option<&str>, repeats: &RepeatsResponse) -> Result<()> {
        self.header(source)?;
        if repeats.repeat_data.is_empty() {
            writeln!(self.writer, "No repeated words")?;
        }
        for group in &repeats.repeat_data {
            let occurrences: Vec<String> = group
                .repeats
                .iter()
                .map(|r| format!("{} [{}-{}]", r.word, r.start_position, r.end_position))
                .collect();
            writeln!(
                self.writer,
                "{} ({}, window {}): {}",
                group.word,
                group.category,
                group.window_size,
                occurrences.join(", ")
            )?;
        }
        Ok(())
    }

    fn format_cliches(&mut self, source: Option<&str>, cliches: &ClichesResponse) -> Result<()> {
        self.header(source)?;
        if cliches.data.is_empty() {
            writeln!(self.writer, "No clichés")?;
        }
        for found in &cliches.data {
            writeln!(
                self.writer,
                "[{}..{}] {} ({}: {})",
                found.start, found.end, found.text, found.pattern_id, found.pattern
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use ritorika_api::{ClicheDTO, RepeatDTO, RepeatGroupDTO, WordCategory};

    #[test]
    fn test_cases_table() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let cases = CasesResponse {
            nomn: "дом".to_string(),
            gent: "дома".to_string(),
            datv: "дому".to_string(),
            accs: "дом".to_string(),
            ablt: "домом".to_string(),
            loct: "доме".to_string(),
            plural_nomn: Some("дома".to_string()),
        };
        formatter.format_cases("дом", &cases).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("дом\n"));
        assert!(output.contains("  ablt   домом\n"));
        assert!(output.contains("  plur   дома\n"));
    }

    #[test]
    fn test_repeats_with_source() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let repeats = RepeatsResponse {
            repeat_data: vec![RepeatGroupDTO {
                word: "он".to_string(),
                category: WordCategory::Ordinary,
                window_size: 10,
                repeats: vec![
                    RepeatDTO {
                        word: "Он".to_string(),
                        start_position: 0,
                        end_position: 1,
                        word_index: 0,
                    },
                    RepeatDTO {
                        word: "Он".to_string(),
                        start_position: 14,
                        end_position: 15,
                        word_index: 3,
                    },
                ],
            }],
        };
        formatter.format_repeats(Some("a.txt"), &repeats).unwrap();

        let output = buffer.contents();
        assert!(output.contains("== a.txt =="));
        assert!(output.contains("он (ordinary, window 10): Он [0-1], Он [14-15]"));
    }

    #[test]
    fn test_empty_cliches() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter
            .format_cliches(None, &ClichesResponse { data: vec![] })
            .unwrap();
        formatter
            .format_cliches(
                None,
                &ClichesResponse {
                    data: vec![ClicheDTO {
                        start: 4,
                        end: 22,
                        text: "играет важную роль".to_string(),
                        pattern: "играть <ADJF>? роль".to_string(),
                        pattern_id: "play-role".to_string(),
                    }],
                },
            )
            .unwrap();

        let output = buffer.contents();
        assert!(output.contains("No clichés"));
        assert!(output.contains("[4..22] играет важную роль (play-role: играть <ADJF>? роль)"));
    }
}
