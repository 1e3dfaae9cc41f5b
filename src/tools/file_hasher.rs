use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 4 * 1024 * 1024; // 4MB buffer

pub fn calculate_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("無法開啟檔案: {}", path.display()))?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, file);
    calculate_reader_hash(reader).with_context(|| format!("讀取檔案失敗: {}", path.display()))
}

/// 計算任意串流的 BLAKE3 hash（例如封存檔中的項目）
pub fn calculate_reader_hash<R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}
