use chrono::{DateTime, FixedOffset, Utc};

/// 按最粗的单位描述经过的秒数
pub fn describe_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}

/// 两个时间都换算到 `offset` 时区后求差, 上线时间晚于 `now` 时按 0 秒处理
pub fn format_last_online(
    last_online: DateTime<Utc>,
    now: DateTime<Utc>,
    offset: &FixedOffset,
) -> String {
    let last_online = last_online.with_timezone(offset);
    let now = now.with_timezone(offset);
    describe_elapsed((now - last_online).num_seconds())
}
