//! Game recording module.
//!
//! Persists every played turn to CSV so finished games can be replayed or analysed.
//!
//! # Components
//!
//! - `game_record`: row layout and game identifiers
//! - `csv_writer`: CSV output and loading

pub mod csv_writer;
pub mod game_record;

pub use csv_writer::{load_turns_from_csv, CsvWriter};
pub use game_record::{new_game_id, TurnRow};
