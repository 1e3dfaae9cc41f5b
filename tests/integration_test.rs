//! 整合測試 - 以暫存資料夾驗證掃描與選取
//!
//! 測試資料由 tempfile 即時建立，不依賴外部檔案

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use random_album::component::random_album::{Selection, select_random_files};
use random_album::config::{SelectionBudget, TakeMode};
use random_album::tools::{list_albums, scan_album_files};
use tempfile::TempDir;

/// 建立測試用相簿樹：
/// - `summer/`: 三張照片與一個影片，含一個隱藏檔與一個文字檔
/// - `winter/`: 兩張照片（其中一張在子資料夾）
/// - `empty/`: 沒有檔案
fn build_library(root: &Path) {
    let files: &[(&str, usize)] = &[
        ("summer/beach.jpg", 300),
        ("summer/sunset.JPEG", 200),
        ("summer/map.png", 100),
        ("summer/surf.mp4", 800),
        ("summer/.thumb.jpg", 10),
        ("summer/notes.txt", 50),
        ("winter/snow.jpg", 400),
        ("winter/day2/ski.jpg", 250),
    ];

    fs::create_dir_all(root.join("empty")).unwrap();
    for (relative, size) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, vec![b'x'; *size]).unwrap();
    }
}

fn run_selection(root: &Path, budget: &SelectionBudget, seed: u64) -> Selection {
    let albums = list_albums(root).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    select_random_files(albums, budget, &mut rng, scan_album_files).unwrap()
}

fn names(selection: &Selection) -> Vec<String> {
    selection.files.iter().map(|f| f.file_name()).collect()
}

/// 測試 1: 相簿列表只包含第一層資料夾
#[test]
fn test_album_listing() {
    let temp_dir = TempDir::new().unwrap();
    build_library(temp_dir.path());

    let albums = list_albums(temp_dir.path()).unwrap();
    let album_names: Vec<String> = albums
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(album_names, vec!["empty", "summer", "winter"]);
}

/// 測試 2: 副檔名過濾與隱藏檔排除
#[test]
fn test_extension_and_hidden_filtering() {
    let temp_dir = TempDir::new().unwrap();
    build_library(temp_dir.path());

    let budget = SelectionBudget::new(u64::MAX, [".jpg", ".jpeg"]);

    for seed in 0..20 {
        let selection = run_selection(temp_dir.path(), &budget, seed);
        let selected: HashSet<String> = names(&selection).into_iter().collect();

        assert_eq!(
            selected,
            HashSet::from(
                ["beach.jpg", "sunset.JPEG", "snow.jpg", "ski.jpg"].map(String::from)
            )
        );
        assert!(!selected.contains(".thumb.jpg"));
        assert!(!selected.contains("map.png"));
        assert!(!selected.contains("surf.mp4"));
    }
}

/// 測試 3: 任何預算下累計大小都不超過預算
#[test]
fn test_budget_invariant_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    build_library(temp_dir.path());

    for max_bytes in [0, 99, 100, 450, 1000, 2050] {
        let budget = SelectionBudget::new(max_bytes, [".jpg", ".jpeg", ".png", ".mp4"]);
        for seed in 0..25 {
            let selection = run_selection(temp_dir.path(), &budget, seed);
            let on_disk: u64 = selection
                .files
                .iter()
                .map(|f| fs::metadata(&f.path).unwrap().len())
                .sum();

            assert!(on_disk <= max_bytes);
            assert_eq!(on_disk, selection.total_size);
        }
    }
}

/// 測試 4: 相同種子產生相同結果
#[test]
fn test_seeded_selection_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    build_library(temp_dir.path());

    let budget = SelectionBudget::new(900, [".jpg", ".jpeg", ".png", ".mp4"]);

    let first = run_selection(temp_dir.path(), &budget, 2024);
    let second = run_selection(temp_dir.path(), &budget, 2024);

    assert_eq!(first.files, second.files);
}

/// 測試 5: 經由重疊的相簿路徑仍只選取一次
#[test]
fn test_overlapping_albums_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    build_library(temp_dir.path());

    let winter = temp_dir.path().join("winter");
    let albums: Vec<PathBuf> = vec![winter.clone(), winter.join("day2")];
    let budget = SelectionBudget::new(u64::MAX, [".jpg"]);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection =
            select_random_files(albums.clone(), &budget, &mut rng, scan_album_files).unwrap();

        let mut selected = names(&selection);
        selected.sort();
        assert_eq!(selected, vec!["ski.jpg", "snow.jpg"]);
        assert_eq!(selection.total_size, 650);
    }
}

/// 測試 6: 單一檔案超過預算時不選取任何檔案
#[test]
fn test_single_oversized_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("only")).unwrap();
    fs::write(temp_dir.path().join("only/big.mp4"), vec![0u8; 1500]).unwrap();

    let budget = SelectionBudget::new(1000, [".mp4"]);
    let selection = run_selection(temp_dir.path(), &budget, 9);

    assert!(selection.is_empty());
}

/// 測試 7: 隨機取樣模式下每個相簿最多取 max 個
#[test]
fn test_random_take_mode_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..12 {
        let path = temp_dir.path().join(format!("big_album/{i:02}.jpg"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    let budget =
        SelectionBudget::new(u64::MAX, [".jpg"]).with_take(TakeMode::Random { min: 1, max: 6 });

    for seed in 0..20 {
        let selection = run_selection(temp_dir.path(), &budget, seed);
        assert!((1..=6).contains(&selection.len()));
    }
}
