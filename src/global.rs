use anyhow::{anyhow, Context};
use chrono::FixedOffset;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use simple_log::LogConfigBuilder;
use std::path::PathBuf;

static TRACKER_CONFIG: OnceCell<TrackerConfig> = OnceCell::new();

/// Codeforces 限制 API 调用频率, 两次调用之间至少间隔 1 秒
pub const MIN_REQUEST_DELAY_MILLIS: u64 = 1000;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetColumns {
    pub link: String,
    pub total_solved: String,
    pub solved_last_24h: String,
    pub last_online: String,
    pub handle: String,
}

impl Default for SheetColumns {
    fn default() -> Self {
        Self {
            link: "Codeforces Profile Link".into(),
            total_solved: "Total Solved".into(),
            solved_last_24h: "Solved 24h".into(),
            last_online: "Last Online".into(),
            handle: "Handle".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub request_delay_millis: u64,
    pub utc_offset_hours: i32,
    pub columns: SheetColumns,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: api_constant::BASE_URL.into(),
            request_timeout_secs: 10,
            request_delay_millis: MIN_REQUEST_DELAY_MILLIS,
            utc_offset_hours: 6,
            columns: SheetColumns::default(),
        }
    }
}

impl TrackerConfig {
    pub fn request_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_delay_millis.max(MIN_REQUEST_DELAY_MILLIS))
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }

    pub fn utc_offset(&self) -> anyhow::Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or_else(|| anyhow!("时区偏移无效: {} 小时", self.utc_offset_hours))
    }
}

pub async fn init_config(config_path: PathBuf, logger_path: PathBuf) -> anyhow::Result<()> {
    // 配置文件不存在时使用默认配置
    let config = if tokio::fs::try_exists(config_path.as_path()).await? {
        let config_file = tokio::fs::read(config_path.as_path())
            .await
            .with_context(|| format!("读取配置文件 {} 失败", config_path.display()))?;
        serde_json::from_slice::<TrackerConfig>(&config_file)
            .with_context(|| format!("解析配置文件 {} 失败", config_path.display()))?
    } else {
        TrackerConfig::default()
    };
    config.utc_offset()?;

    TRACKER_CONFIG
        .set(config)
        .map_err(|_| anyhow!("配置已经初始化"))?;

    //日志配置
    let log_config = LogConfigBuilder::builder()
        .path(logger_path.to_string_lossy())
        .level("info")
        .output_file()
        .output_console()
        .build();
    simple_log::new(log_config).map_err(|e| anyhow!("初始化日志失败: {}", e))?;

    Ok(())
}

pub fn tracker_config() -> &'static TrackerConfig {
    TRACKER_CONFIG.get_or_init(TrackerConfig::default)
}

pub mod api_constant {
    pub const BASE_URL: &str = "https://codeforces.com/api/";
    pub const PROFILE_MARKER: &str = "codeforces.com/profile/";
    pub const STATUS_OK: &str = "OK";

    pub mod methods {
        pub const USER_STATUS: &str = "user.status";
        pub const USER_INFO: &str = "user.info";
    }
}

/// 写入表格的状态文字
pub mod row_label {
    pub const INVALID_LINK: &str = "Invalid Link";
    pub const INVALID_HANDLE: &str = "Invalid Handle";
    pub const ERROR: &str = "Error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"utc_offset_hours": 8, "columns": {"handle": "CF"}}"#)
                .unwrap();
        assert_eq!(config.utc_offset_hours, 8);
        assert_eq!(config.api_base_url, api_constant::BASE_URL);
        assert_eq!(config.columns.handle, "CF");
        assert_eq!(config.columns.link, "Codeforces Profile Link");
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_request_delay_floor() {
        let mut config = TrackerConfig::default();
        config.request_delay_millis = 200;
        assert_eq!(config.request_delay(), std::time::Duration::from_secs(1));
        config.request_delay_millis = 2500;
        assert_eq!(config.request_delay(), std::time::Duration::from_millis(2500));
    }

    #[test]
    fn test_bad_offset() {
        let mut config = TrackerConfig::default();
        config.utc_offset_hours = 30;
        assert!(config.utc_offset().is_err());
    }
}
