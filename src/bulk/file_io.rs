use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::error::{LookupError, Result};

/// Split text into card numbers, one per line.
///
/// Zero-length lines are dropped. Nothing is trimmed and duplicates are kept.
pub fn parse_cards(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_cards(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LookupError::io(path, e))?;
    let cards = parse_cards(&text);
    info!("Read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Write records to `path`, each followed by a newline. Overwrites the file.
pub fn write_records(path: impl AsRef<Path>, records: &[String]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LookupError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}", record).map_err(|e| LookupError::io(path, e))?;
    }
    writer.flush().map_err(|e| LookupError::io(path, e))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
