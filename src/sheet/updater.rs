use super::{RowUpdate, Sheet, UpdateSummary};
use crate::global::{row_label, TrackerConfig};
use crate::tracker::{collect_stats, extract_handle, FetchOutcome, StatsProvider};

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use simple_log::{error, info};

fn labelled(label: &str, handle: &str) -> RowUpdate {
    RowUpdate {
        total_solved: json!(label),
        solved_last_24h: json!(label),
        last_online: json!(label),
        handle: json!(handle),
    }
}

/// 逐行更新表格, 单行失败不影响其他行
///
/// `now` 每行读取一次, 请求之间的间隔由 provider 控制.
pub async fn update_sheet<S, P, C>(
    sheet: &mut S,
    provider: &P,
    config: &TrackerConfig,
    now: C,
) -> anyhow::Result<UpdateSummary>
where
    S: Sheet,
    P: ?Sized + StatsProvider,
    C: Fn() -> DateTime<Utc>,
{
    let offset = config.utc_offset()?;
    let mut summary = UpdateSummary::default();

    for (i, record) in sheet.records()?.into_iter().enumerate() {
        // 表头占第 1 行
        let row = i + 2;
        let link = record.get(&config.columns.link).unwrap_or(&Value::Null);

        let Some(handle) = extract_handle(link) else {
            info!("Row {} | 链接无效: {}", row, link);
            sheet.write_row(
                i,
                &RowUpdate {
                    total_solved: json!(row_label::INVALID_LINK),
                    solved_last_24h: json!(""),
                    last_online: json!(""),
                    handle: json!(""),
                },
            )?;
            summary.invalid_links += 1;
            continue;
        };

        let update = match collect_stats(provider, &handle, now(), &offset).await {
            FetchOutcome::Fetched(stats) => {
                info!(
                    "Row {} | {}: Solved = {}, Solved 24h = {}, Last Online = {}",
                    row, handle, stats.total_solved, stats.solved_last_24h, stats.last_online
                );
                summary.updated += 1;
                RowUpdate {
                    total_solved: json!(stats.total_solved),
                    solved_last_24h: json!(stats.solved_last_24h),
                    last_online: json!(stats.last_online),
                    handle: json!(handle),
                }
            }
            FetchOutcome::InvalidHandle => {
                info!("Row {} | {}: handle 无效", row, handle);
                summary.invalid_handles += 1;
                labelled(row_label::INVALID_HANDLE, &handle)
            }
            FetchOutcome::TransientError(e) => {
                error!("Row {} | {}: 获取失败: {}", row, handle, e);
                summary.errors += 1;
                labelled(row_label::ERROR, &handle)
            }
        };
        sheet.write_row(i, &update)?;
    }

    sheet.flush()?;
    Ok(summary)
}
