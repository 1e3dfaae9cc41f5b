//! 隨機相簿元件
//!
//! 從來源資料夾的各個相簿中，在大小預算內隨機選取照片與影片，
//! 複製到 `photos/`、`videos/` 後打包成 `archive.tar.gz`

mod archiver;
mod main;
mod selector;
mod verifier;

pub use archiver::{ArchiveReport, Archiver, archive_path_for};
pub use main::{ArchiveSummary, RandomAlbum, RunOutcome};
pub use selector::{BudgetGate, Selection, select_random_files, take_count};
pub use verifier::{VerifyReport, verify_archive};
