use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// 依 `--verbose` 建立 logger；`RUST_LOG` 仍可覆寫等級
///
/// 重複初始化（例如測試中）會被忽略。
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
