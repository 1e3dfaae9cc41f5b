use crate::config::{
    ArchiveLayout, DEFAULT_EXTENSIONS, DEFAULT_MAX_SIZE_BYTES, DEFAULT_MAX_TAKE, DEFAULT_MIN_TAKE,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 每個相簿的取樣策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TakeStrategy {
    /// 洗牌後逐一嘗試全部檔案
    All,
    /// 洗牌後隨機取 --min-take 到 --max-take 個
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "random-album",
    version,
    about = "Create a random album with size limits"
)]
pub struct Cli {
    /// Source directory; each subdirectory is an album
    pub source: PathBuf,

    /// Output directory for photos/ and videos/ (created if missing)
    pub destination: PathBuf,

    /// Maximum total size of the selection in bytes
    #[arg(long, visible_alias = "max_size", default_value_t = DEFAULT_MAX_SIZE_BYTES)]
    pub max_size: u64,

    /// Accepted file extensions (leading dot optional, case-insensitive)
    #[arg(long, num_args = 1.., value_delimiter = ',', default_values = DEFAULT_EXTENSIONS)]
    pub extensions: Vec<String>,

    /// How many files to consider from each album
    #[arg(long, value_enum, default_value_t = TakeStrategy::All)]
    pub take: TakeStrategy,

    /// Lower bound of files per album for --take random
    #[arg(long, default_value_t = DEFAULT_MIN_TAKE)]
    pub min_take: usize,

    /// Upper bound of files per album for --take random
    #[arg(long, default_value_t = DEFAULT_MAX_TAKE)]
    pub max_take: usize,

    /// Archive contents: category folders or a flat list of files
    #[arg(long, value_enum, default_value_t = ArchiveLayout::Tree)]
    pub layout: ArchiveLayout,

    /// Seed for a reproducible selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Re-read the archive and compare BLAKE3 digests with the sources
    #[arg(long)]
    pub verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
