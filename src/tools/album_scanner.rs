use crate::config::file_extension;
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub size: u64,
    /// 小寫副檔名，含 `.`
    pub extension: String,
}

impl CandidateFile {
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// 列出來源資料夾下第一層的子資料夾（不遞迴），依路徑排序
pub fn list_albums(source: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(source).with_context(|| format!("無法讀取來源資料夾: {}", source.display()))?;

    let mut albums = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("無法讀取來源資料夾: {}", source.display()))?;
        let path = entry.path();
        if path.is_dir() {
            albums.push(path);
        }
    }

    albums.sort();
    Ok(albums)
}

/// 遞迴掃描相簿，回傳副檔名符合且非隱藏檔的檔案，依路徑排序
pub fn scan_album_files(album: &Path, extensions: &HashSet<String>) -> Result<Vec<CandidateFile>> {
    let mut files: Vec<CandidateFile> = WalkDir::new(album)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("略過無法讀取的項目: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() || entry.path_is_symlink())
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|entry| {
            let extension = file_extension(entry.path())?;
            if !extensions.contains(&extension) {
                return None;
            }
            // 連結到檔案的符號連結也算候選檔案，大小取自連結目標
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!("無法取得檔案資訊 {}: {e}", entry.path().display());
                    return None;
                }
            };
            if !metadata.is_file() {
                return None;
            }
            Some(CandidateFile {
                path: entry.into_path(),
                size: metadata.len(),
                extension,
            })
        })
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
