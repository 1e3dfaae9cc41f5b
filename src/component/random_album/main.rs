use super::archiver::{ArchiveReport, Archiver};
use super::selector::{Selection, select_random_files};
use super::verifier::{VerifyReport, verify_archive};
use crate::config::{Config, MediaCategory};
use crate::tools::{list_albums, prepare_destination, scan_album_files, validate_directory_exists};
use anyhow::{Result, bail};
use console::style;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 一次執行的結果
#[derive(Debug)]
pub enum RunOutcome {
    /// 來源資料夾中沒有任何相簿
    NoAlbums,
    /// 預算內沒有選到任何檔案
    NothingSelected,
    Archived(ArchiveSummary),
}

#[derive(Debug)]
pub struct ArchiveSummary {
    pub selection: Selection,
    pub report: ArchiveReport,
    pub verification: Option<VerifyReport>,
}

/// 隨機相簿元件
pub struct RandomAlbum {
    config: Config,
}

impl RandomAlbum {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunOutcome> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                info!("使用固定亂數種子: {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(&mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunOutcome> {
        let config = &self.config;

        validate_directory_exists(&config.source)?;
        prepare_destination(&config.destination)?;

        let albums = list_albums(&config.source)?;
        debug!("Selected {} albums.", albums.len());
        if albums.is_empty() {
            error!("找不到任何相簿: {}", config.source.display());
            return Ok(RunOutcome::NoAlbums);
        }

        let selection = select_random_files(albums, &config.budget, rng, scan_album_files)?;
        if selection.is_empty() {
            warn!("沒有選到任何檔案，請嘗試提高 --max-size 或檢查 --extensions");
            return Ok(RunOutcome::NothingSelected);
        }

        info!("已選取 {} 個檔案", selection.len());
        info!(
            "相簿總大小: {:.2} GB",
            selection.total_size as f64 / 1024.0 / 1024.0 / 1024.0
        );

        let archiver = Archiver::new(&config.media_type_table, config.layout);
        let report = archiver.archive(&selection, &config.destination)?;
        info!("已建立封存檔: {}", report.archive_path.display());

        let verification = if config.verify {
            Some(self.verify(&report, &selection)?)
        } else {
            None
        };

        self.print_summary(&selection, &report);

        Ok(RunOutcome::Archived(ArchiveSummary {
            selection,
            report,
            verification,
        }))
    }

    fn verify(&self, report: &ArchiveReport, selection: &Selection) -> Result<VerifyReport> {
        let verification = verify_archive(&report.archive_path, selection)?;

        for path in &verification.shadowed {
            warn!("同名檔案已被覆蓋，未收錄於封存檔: {}", path.display());
        }
        for name in &verification.missing {
            warn!("封存檔中找不到: {name}");
        }
        if !verification.mismatched.is_empty() {
            bail!(
                "封存檔內容與來源不一致: {}",
                verification.mismatched.join(", ")
            );
        }

        info!("封存檔驗證完成: {} 個檔案一致", verification.verified);
        Ok(verification)
    }

    fn print_summary(&self, selection: &Selection, report: &ArchiveReport) {
        println!();
        println!("{}", style("=== 隨機相簿 ===").cyan().bold());
        println!(
            "  選取檔案: {} 個，{:.2} MB",
            style(selection.len()).green(),
            selection.total_size as f64 / 1024.0 / 1024.0
        );

        for category in MediaCategory::all_categories() {
            let count = report.category_counts.get(&category).copied().unwrap_or(0);
            println!(
                "  {} {} ({}): {} 個",
                style("→").dim(),
                style(category.folder_name()).cyan(),
                category.display_name(),
                count
            );
        }

        if !report.uncategorized.is_empty() {
            println!(
                "  未分類（未複製）: {} 個",
                style(report.uncategorized.len()).yellow()
            );
        }

        println!("  封存檔: {}", style(report.archive_path.display()).green());
    }
}
