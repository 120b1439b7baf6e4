use std::str::FromStr;

use anyhow::Context;
use simple_log::info;

pub mod global;
pub mod sheet;
pub mod tracker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let (config_path, sheet_path, logger_path) = if args.len() >= 4 {
        (
            std::path::PathBuf::from_str(&args[1])?,
            std::path::PathBuf::from_str(&args[2])?,
            std::path::PathBuf::from_str(&args[3])?,
        )
    } else {
        (
            std::path::PathBuf::from_str("tracker_config.json")?,
            std::path::PathBuf::from_str("students.json")?,
            std::path::PathBuf::from_str("cf_tracker.log")?,
        )
    };

    global::init_config(config_path, logger_path).await?;
    let config = global::tracker_config();

    let provider = tracker::Codeforces::new(config)?;
    let mut sheet = sheet::JsonSheet::open(&sheet_path)
        .with_context(|| format!("无法打开表格文件 {}", sheet_path.display()))?;

    let summary =
        sheet::update_sheet(&mut sheet, &provider, config, chrono::Utc::now).await?;
    info!(
        "更新完成: {} 行成功, {} 行链接无效, {} 行 handle 无效, {} 行请求失败",
        summary.updated, summary.invalid_links, summary.invalid_handles, summary.errors
    );
    Ok(())
}
