mod album_scanner;
mod file_hasher;
mod path_validator;

pub use album_scanner::{CandidateFile, list_albums, scan_album_files};
pub use file_hasher::{calculate_file_hash, calculate_reader_hash};
pub use path_validator::{ensure_directory_exists, prepare_destination, validate_directory_exists};
