//! 封存檔驗證
//!
//! 重新讀取 `archive.tar.gz`，比對每個項目與來源檔案的 BLAKE3 hash。

use super::selector::Selection;
use crate::tools::{calculate_file_hash, calculate_reader_hash};
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct VerifyReport {
    /// 內容一致的檔案數
    pub verified: usize,
    /// 封存檔中找不到的檔名
    pub missing: Vec<String>,
    /// 內容不一致的檔名
    pub mismatched: Vec<String>,
    /// 被後選取的同名檔案覆蓋的來源檔案
    pub shadowed: Vec<PathBuf>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty()
    }
}

/// 讀取封存檔，回傳 檔名 -> hash；同名項目以最後一個為準
fn digest_entries(archive_path: &Path) -> Result<HashMap<String, String>> {
    let file = File::open(archive_path)
        .with_context(|| format!("無法開啟封存檔: {}", archive_path.display()))?;
    let mut archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));

    let mut digests = HashMap::new();
    let entries = archive
        .entries()
        .with_context(|| format!("讀取封存檔失敗: {}", archive_path.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("讀取封存檔失敗: {}", archive_path.display()))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let entry_path = entry.path()?.into_owned();
        let Some(name) = entry_path.file_name() else {
            continue;
        };
        let name = name.to_string_lossy().into_owned();
        let digest = calculate_reader_hash(entry)
            .with_context(|| format!("讀取封存項目失敗: {}", entry_path.display()))?;
        digests.insert(name, digest);
    }

    Ok(digests)
}

/// 驗證選取的檔案都在封存檔中且內容一致
pub fn verify_archive(archive_path: &Path, selection: &Selection) -> Result<VerifyReport> {
    let digests = digest_entries(archive_path)?;
    let mut report = VerifyReport::default();

    // 同名檔案複製時後者覆蓋前者，只有最後一個需要比對
    let mut last_by_name: HashMap<String, &Path> = HashMap::new();
    for file in &selection.files {
        if let Some(previous) = last_by_name.insert(file.file_name(), &file.path) {
            report.shadowed.push(previous.to_path_buf());
        }
    }

    for file in &selection.files {
        let name = file.file_name();
        if last_by_name.get(&name) != Some(&file.path.as_path()) {
            continue;
        }

        match digests.get(&name) {
            None => report.missing.push(name),
            Some(archived) => {
                if calculate_file_hash(&file.path)? == *archived {
                    report.verified += 1;
                } else {
                    report.mismatched.push(name);
                }
            }
        }
    }

    Ok(report)
}
