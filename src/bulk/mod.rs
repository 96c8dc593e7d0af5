pub mod file_io;

pub use file_io::{parse_cards, read_cards, write_records};
