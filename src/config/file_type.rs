use serde::Deserialize;
use std::path::Path;

/// 媒體分類，每個分類對應輸出資料夾下的一個子資料夾
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    Photo,
    Video,
}

impl MediaCategory {
    #[must_use]
    pub const fn all_categories() -> [Self; 2] {
        [Self::Photo, Self::Video]
    }

    #[must_use]
    pub const fn folder_name(self) -> &'static str {
        match self {
            Self::Photo => "photos",
            Self::Video => "videos",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Photo => "照片",
            Self::Video => "影片",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaTypeTable {
    #[serde(rename = "PHOTO_FILE")]
    pub photo_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl MediaTypeTable {
    /// 依副檔名判斷分類，表中沒有的副檔名回傳 `None`
    #[must_use]
    pub fn categorize(&self, path: &Path) -> Option<MediaCategory> {
        let extension = file_extension(path)?;
        let matches =
            |list: &[String]| list.iter().any(|ext| normalize_extension(ext) == extension);

        if matches(self.photo_file.as_slice()) {
            Some(MediaCategory::Photo)
        } else if matches(self.video_file.as_slice()) {
            Some(MediaCategory::Video)
        } else {
            None
        }
    }
}

/// 統一副檔名格式：小寫並以 `.` 開頭
#[must_use]
pub fn normalize_extension(extension: &str) -> String {
    let lowered = extension.trim().to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{lowered}")
    }
}

/// 取得檔案的小寫副檔名（含 `.`），例如 `IMG_01.JPG` -> `.jpg`
#[must_use]
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_table() -> MediaTypeTable {
        MediaTypeTable {
            photo_file: vec![".jpg".to_string(), "JPEG".to_string(), ".png".to_string()],
            video_file: vec![".mp4".to_string()],
        }
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("jpg"), ".jpg");
        assert_eq!(normalize_extension(".JPG"), ".jpg");
        assert_eq!(normalize_extension(" .Mp4 "), ".mp4");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("/a/IMG_01.JPG")), Some(".jpg".to_string()));
        assert_eq!(file_extension(Path::new("/a/clip.tar.gz")), Some(".gz".to_string()));
        assert_eq!(file_extension(Path::new("/a/README")), None);
        // 隱藏檔沒有副檔名
        assert_eq!(file_extension(Path::new("/a/.jpg")), None);
    }

    #[test]
    fn test_categorize() {
        let table = test_table();

        assert_eq!(table.categorize(Path::new("a.JPG")), Some(MediaCategory::Photo));
        assert_eq!(table.categorize(Path::new("a.jpeg")), Some(MediaCategory::Photo));
        assert_eq!(table.categorize(Path::new("a.png")), Some(MediaCategory::Photo));
        assert_eq!(table.categorize(Path::new("a.mp4")), Some(MediaCategory::Video));
        assert_eq!(table.categorize(Path::new("a.gif")), None);
        assert_eq!(table.categorize(Path::new("noext")), None);
    }

    #[test]
    fn test_folder_names_are_distinct() {
        let [photo, video] = MediaCategory::all_categories();
        assert_eq!(photo.folder_name(), "photos");
        assert_eq!(video.folder_name(), "videos");
    }
}
