//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// A text to analyze and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    /// File path, `<text>` or `<stdin>`
    pub name: String,
    pub text: String,
}

/// Gather the texts named on the command line
///
/// `--text` wins over `-i`; with neither, standard input is read.
pub fn collect_sources(inputs: &[String], text: Option<&str>) -> Result<Vec<TextSource>> {
    if let Some(text) = text {
        return Ok(vec![TextSource {
            name: "<text>".to_string(),
            text: text.to_string(),
        }]);
    }

    if inputs.is_empty() {
        return Ok(vec![TextSource {
            name: "<stdin>".to_string(),
            text: FileReader::read_stdin()?,
        }]);
    }

    let files = resolve_patterns(inputs)?;
    log::info!("Resolved {} input files", files.len());
    files
        .into_iter()
        .map(|path| {
            Ok(TextSource {
                text: FileReader::read_text(&path)?,
                name: path.display().to_string(),
            })
        })
        .collect()
}
