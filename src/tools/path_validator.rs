use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

/// 準備輸出資料夾：不存在就建立，已存在但不是資料夾則回傳錯誤
pub fn prepare_destination(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        bail!("輸出路徑必須是資料夾: {}", path.display());
    }
    ensure_directory_exists(path)
}
