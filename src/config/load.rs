use crate::cli::{Cli, TakeStrategy};
use crate::config::file_type::MediaTypeTable;
use crate::config::types::{Config, SelectionBudget, TakeMode};
use anyhow::{Context, Result, bail};

/// 編譯時嵌入的媒體類型表（不需要外部檔案）
const MEDIA_TYPE_TABLE_JSON: &str = include_str!("../data/media_type_table.json");

impl Config {
    /// 由命令列參數建立設定，參數不合理時回傳錯誤
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.extensions.iter().all(|ext| ext.trim().is_empty()) {
            bail!("至少需要指定一個副檔名 (--extensions)");
        }

        let take = match cli.take {
            TakeStrategy::All => TakeMode::All,
            TakeStrategy::Random => TakeMode::random(cli.min_take, cli.max_take)?,
        };

        let extensions = cli.extensions.iter().filter(|ext| !ext.trim().is_empty());
        let budget = SelectionBudget::new(cli.max_size, extensions).with_take(take);

        Ok(Self {
            source: cli.source,
            destination: cli.destination,
            budget,
            layout: cli.layout,
            seed: cli.seed,
            verify: cli.verify,
            media_type_table: MediaTypeTable::embedded()?,
        })
    }
}

impl MediaTypeTable {
    /// 從編譯時嵌入的 JSON 載入媒體類型表
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(MEDIA_TYPE_TABLE_JSON).context("無法解析嵌入的媒體類型設定")
    }
}
