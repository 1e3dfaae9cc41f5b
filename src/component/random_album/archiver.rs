use super::selector::Selection;
use crate::config::{ARCHIVE_FILE_NAME, ArchiveLayout, MediaCategory, MediaTypeTable};
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 封存結果
#[derive(Debug, Default)]
pub struct ArchiveReport {
    pub archive_path: PathBuf,
    /// 各分類複製的檔案數
    pub category_counts: HashMap<MediaCategory, usize>,
    /// 副檔名沒有對應分類、未被複製的檔案
    pub uncategorized: Vec<PathBuf>,
}

impl ArchiveReport {
    #[must_use]
    pub fn files_copied(&self) -> usize {
        self.category_counts.values().sum()
    }
}

/// 封存檔位置：輸出資料夾的上一層
#[must_use]
pub fn archive_path_for(destination: &Path) -> PathBuf {
    destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join(ARCHIVE_FILE_NAME)
}

pub struct Archiver<'a> {
    media_type_table: &'a MediaTypeTable,
    layout: ArchiveLayout,
}

impl<'a> Archiver<'a> {
    pub const fn new(media_type_table: &'a MediaTypeTable, layout: ArchiveLayout) -> Self {
        Self {
            media_type_table,
            layout,
        }
    }

    /// 將選取的檔案複製到分類資料夾，並建立 `archive.tar.gz`
    pub fn archive(&self, selection: &Selection, destination: &Path) -> Result<ArchiveReport> {
        ensure_directory_exists(destination)?;
        for category in MediaCategory::all_categories() {
            ensure_directory_exists(&destination.join(category.folder_name()))?;
        }

        let mut report = self.copy_to_categories(selection, destination)?;
        report.archive_path = archive_path_for(destination);

        self.write_archive(selection, destination, &report.archive_path)?;

        Ok(report)
    }

    fn copy_to_categories(
        &self,
        selection: &Selection,
        destination: &Path,
    ) -> Result<ArchiveReport> {
        let mut report = ArchiveReport::default();

        let progress_bar = ProgressBar::new(selection.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        progress_bar.set_message("複製檔案中...");

        for file in &selection.files {
            progress_bar.inc(1);

            let Some(category) = self.media_type_table.categorize(&file.path) else {
                warn!("沒有對應的分類資料夾，略過複製: {}", file.path.display());
                report.uncategorized.push(file.path.clone());
                continue;
            };

            let target_path = destination
                .join(category.folder_name())
                .join(file.path.file_name().unwrap_or_default());

            if target_path.exists() {
                debug!("覆寫同名檔案: {}", target_path.display());
            }

            fs::copy(&file.path, &target_path).with_context(|| {
                format!(
                    "複製檔案失敗: {} -> {}",
                    file.path.display(),
                    target_path.display()
                )
            })?;
            debug!(
                "複製檔案: {} -> {}",
                file.path.display(),
                target_path.display()
            );

            *report.category_counts.entry(category).or_insert(0) += 1;
        }

        progress_bar.finish_and_clear();
        Ok(report)
    }

    fn write_archive(
        &self,
        selection: &Selection,
        destination: &Path,
        archive_path: &Path,
    ) -> Result<()> {
        let file = File::create(archive_path)
            .with_context(|| format!("無法建立封存檔: {}", archive_path.display()))?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        match self.layout {
            ArchiveLayout::Tree => {
                for category in MediaCategory::all_categories() {
                    let folder_name = category.folder_name();
                    let folder = destination.join(folder_name);
                    debug!("Adding {} to archive...", folder.display());
                    builder
                        .append_dir_all(folder_name, &folder)
                        .with_context(|| format!("寫入封存檔失敗: {}", folder.display()))?;
                }
            }
            ArchiveLayout::Flat => {
                for file in &selection.files {
                    let name = file.path.file_name().unwrap_or_default();
                    debug!("Adding {} to archive...", file.path.display());
                    builder
                        .append_path_with_name(&file.path, name)
                        .with_context(|| format!("寫入封存檔失敗: {}", file.path.display()))?;
                }
            }
        }

        let encoder = builder
            .into_inner()
            .with_context(|| format!("寫入封存檔失敗: {}", archive_path.display()))?;
        let mut writer = encoder
            .finish()
            .with_context(|| format!("壓縮封存檔失敗: {}", archive_path.display()))?;
        writer
            .flush()
            .with_context(|| format!("寫入封存檔失敗: {}", archive_path.display()))?;

        Ok(())
    }
}
