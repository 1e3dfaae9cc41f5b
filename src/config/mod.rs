pub mod file_type;
pub mod load;
pub mod types;

pub use file_type::{MediaCategory, MediaTypeTable, file_extension, normalize_extension};
pub use types::{
    ARCHIVE_FILE_NAME, ArchiveLayout, Config, DEFAULT_EXTENSIONS, DEFAULT_MAX_SIZE_BYTES,
    DEFAULT_MAX_TAKE, DEFAULT_MIN_TAKE, SelectionBudget, TakeMode,
};
