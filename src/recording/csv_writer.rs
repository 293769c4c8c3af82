//! CSV writer for game recordings.
//!
//! Format: game_id,turn,action,snake_length,search_ms,board

use crate::recording::game_record::TurnRow;
use crate::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Appends turn rows to a CSV file, writing the header only when the file is new.
pub struct CsvWriter {
    writer: csv::Writer<File>,
}

impl CsvWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let is_new = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        Ok(Self { writer })
    }

    pub fn write_turn(&mut self, row: &TurnRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for CsvWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Load recorded turns from a CSV file
pub fn load_turns_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TurnRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;

    fn row(game_id: &str, turn: usize, action: Direction) -> TurnRow {
        TurnRow {
            game_id: game_id.to_string(),
            turn,
            action,
            snake_length: 2,
            search_ms: 3,
            board: "1;2;0;-1".to_string(),
        }
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");

        let mut writer = CsvWriter::new(&path).unwrap();
        writer.write_turn(&row("g1", 1, Direction::East)).unwrap();
        writer.write_turn(&row("g1", 2, Direction::South)).unwrap();
        writer.flush().unwrap();

        let rows = load_turns_from_csv(&path).unwrap();
        assert_eq!(rows, vec![row("g1", 1, Direction::East), row("g1", 2, Direction::South)]);
    }

    #[test]
    fn test_append_keeps_single_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("games.csv");

        {
            let mut writer = CsvWriter::new(&path).unwrap();
            writer.write_turn(&row("g1", 1, Direction::North)).unwrap();
        }
        {
            let mut writer = CsvWriter::new(&path).unwrap();
            writer.write_turn(&row("g2", 1, Direction::West)).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("game_id").count(), 1);

        let rows = load_turns_from_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].game_id, "g2");
    }
}
