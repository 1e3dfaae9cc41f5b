//! 預算內的隨機選取
//!
//! 先將相簿洗牌，再逐一將每個相簿內的檔案洗牌後依序加入，
//! 一旦某個檔案會讓累計大小超出預算就立即結束整個選取流程，
//! 不會跳過該檔案改試較小的檔案。

use crate::config::{SelectionBudget, TakeMode};
use crate::tools::CandidateFile;
use anyhow::Result;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// 選取結果，順序即選取順序
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub files: Vec<CandidateFile>,
    pub total_size: u64,
}

impl Selection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// 累計選取狀態：已選檔案、已造訪路徑與目前總大小
#[derive(Debug)]
pub struct BudgetGate {
    max_bytes: u64,
    selection: Selection,
    visited: HashSet<PathBuf>,
}

impl BudgetGate {
    #[must_use]
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            selection: Selection::default(),
            visited: HashSet::new(),
        }
    }

    #[must_use]
    pub fn has_visited(&self, path: &Path) -> bool {
        self.visited.contains(path)
    }

    /// 依序加入檔案；遇到第一個超出預算的檔案時回傳 `Break`，其後的檔案不再考慮
    pub fn offer_in_order<I>(&mut self, files: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = CandidateFile>,
    {
        for file in files {
            debug!(
                "{} size: {:.2} MB",
                file.file_name(),
                file.size as f64 / 1024.0 / 1024.0
            );

            let within_budget = self
                .selection
                .total_size
                .checked_add(file.size)
                .is_some_and(|total| total <= self.max_bytes);
            if !within_budget {
                debug!("超出預算，停止選取: {}", file.path.display());
                return ControlFlow::Break(());
            }

            debug!("Selected file {}", file.file_name());
            self.selection.total_size += file.size;
            self.visited.insert(file.path.clone());
            self.selection.files.push(file);
        }
        ControlFlow::Continue(())
    }

    #[must_use]
    pub fn into_selection(self) -> Selection {
        self.selection
    }
}

/// 依取樣模式決定此相簿要考慮幾個檔案
///
/// `max` 小於 `min` 時視為固定取 `min` 個。
pub fn take_count<R: Rng + ?Sized>(take: TakeMode, available: usize, rng: &mut R) -> usize {
    match take {
        TakeMode::All => available,
        TakeMode::Random { min, max } => rng.gen_range(min..=max.max(min)).min(available),
    }
}

/// 在預算內隨機選取檔案
///
/// `scan` 負責列出單一相簿的候選檔案，正式執行時為 [`crate::tools::scan_album_files`]。
/// 亂數來源由呼叫端注入，測試時可使用固定種子。
pub fn select_random_files<R, F>(
    mut albums: Vec<PathBuf>,
    budget: &SelectionBudget,
    rng: &mut R,
    mut scan: F,
) -> Result<Selection>
where
    R: Rng + ?Sized,
    F: FnMut(&Path, &HashSet<String>) -> Result<Vec<CandidateFile>>,
{
    albums.shuffle(rng);

    let mut gate = BudgetGate::new(budget.max_bytes);

    for album in &albums {
        let mut files: Vec<CandidateFile> = scan(album.as_path(), &budget.extensions)?
            .into_iter()
            .filter(|file| !gate.has_visited(&file.path))
            .collect();
        debug!("{} files in {}", files.len(), album.display());

        if files.is_empty() {
            debug!("{} has no files.", album.display());
            continue;
        }

        files.shuffle(rng);
        let count = take_count(budget.take, files.len(), rng);

        if gate.offer_in_order(files.into_iter().take(count)).is_break() {
            break;
        }
    }

    Ok(gate.into_selection())
}
