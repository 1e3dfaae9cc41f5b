use crate::config::file_type::{MediaTypeTable, normalize_extension};
use anyhow::{Result, bail};
use clap::ValueEnum;
use std::collections::HashSet;
use std::path::PathBuf;

/// 預設預算 1 GiB
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1024 * 1024 * 1024;
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".mp4"];
pub const DEFAULT_MIN_TAKE: usize = 1;
pub const DEFAULT_MAX_TAKE: usize = 6;
/// 封存檔固定放在輸出資料夾的上一層
pub const ARCHIVE_FILE_NAME: &str = "archive.tar.gz";

/// 每個相簿要取多少個檔案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TakeMode {
    /// 依洗牌後的順序全部嘗試，直到超出預算
    #[default]
    All,
    /// 隨機取 `min..=max` 個
    Random { min: usize, max: usize },
}

impl TakeMode {
    /// 建立隨機取樣模式，需 `1 <= min <= max`
    pub fn random(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            bail!("無效的取樣範圍: --min-take {min} --max-take {max}（需 1 <= min <= max）");
        }
        Ok(Self::Random { min, max })
    }
}

/// 封存檔內容的排列方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArchiveLayout {
    /// `photos/` 與 `videos/` 兩個資料夾整個放入
    #[default]
    Tree,
    /// 所有選取的原始檔案直接放在封存檔根目錄
    Flat,
}

#[derive(Debug, Clone)]
pub struct SelectionBudget {
    pub max_bytes: u64,
    pub extensions: HashSet<String>,
    pub take: TakeMode,
}

impl SelectionBudget {
    pub fn new<I, S>(max_bytes: u64, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            max_bytes,
            extensions: extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            take: TakeMode::All,
        }
    }

    #[must_use]
    pub fn with_take(mut self, take: TakeMode) -> Self {
        self.take = take;
        self
    }
}

impl Default for SelectionBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE_BYTES, DEFAULT_EXTENSIONS)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub budget: SelectionBudget,
    pub layout: ArchiveLayout,
    pub seed: Option<u64>,
    pub verify: bool,
    pub media_type_table: MediaTypeTable,
}
