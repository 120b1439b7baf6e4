use super::aggregate::{solved_count, solved_in_window};
use super::last_online::format_last_online;
use super::provider::StatsProvider;
use super::{AggregateResult, FetchOutcome};

use chrono::{DateTime, FixedOffset, Utc};

/// 获取一个 handle 的统计结果
///
/// 提交记录只请求一次. 提交记录获取失败时直接返回, 不再请求用户信息.
pub async fn collect_stats<P: ?Sized + StatsProvider>(
    provider: &P,
    handle: &str,
    now: DateTime<Utc>,
    offset: &FixedOffset,
) -> FetchOutcome<AggregateResult> {
    let submissions = match provider.user_status(handle).await {
        FetchOutcome::Fetched(submissions) => submissions,
        FetchOutcome::InvalidHandle => return FetchOutcome::InvalidHandle,
        FetchOutcome::TransientError(e) => return FetchOutcome::TransientError(e),
    };
    let total_solved = solved_count(&submissions);
    let solved_last_24h = solved_in_window(&submissions, now);

    provider.user_info(handle).await.and_then(|user| {
        FetchOutcome::Fetched(AggregateResult {
            total_solved,
            solved_last_24h,
            last_online: format_last_online(user.last_online, now, offset),
        })
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tracker::{Problem, Submission, UserInfo, Verdict};
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 不访问网络的 provider, 记录每次调用
    #[derive(Default)]
    pub struct FakeProvider {
        pub status: HashMap<String, FetchOutcome<Vec<Submission>>>,
        pub info: HashMap<String, FetchOutcome<UserInfo>>,
        pub calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StatsProvider for FakeProvider {
        async fn user_status(&self, handle: &str) -> FetchOutcome<Vec<Submission>> {
            self.calls.lock().unwrap().push(format!("user.status {}", handle));
            self.status
                .get(handle)
                .cloned()
                .unwrap_or(FetchOutcome::InvalidHandle)
        }

        async fn user_info(&self, handle: &str) -> FetchOutcome<UserInfo> {
            self.calls.lock().unwrap().push(format!("user.info {}", handle));
            self.info
                .get(handle)
                .cloned()
                .unwrap_or(FetchOutcome::InvalidHandle)
        }
    }

    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    pub fn gmt6() -> FixedOffset {
        FixedOffset::east_opt(6 * 3600).unwrap()
    }

    pub fn accepted(contest_id: i64, index: &str, created_at: DateTime<Utc>) -> Submission {
        Submission {
            problem: Problem {
                contest_id: Some(contest_id),
                index: index.into(),
                name: String::new(),
            },
            verdict: Some(Verdict::Accepted),
            created_at,
        }
    }

    pub fn user(handle: &str, last_online: DateTime<Utc>) -> FetchOutcome<UserInfo> {
        FetchOutcome::Fetched(UserInfo {
            handle: handle.into(),
            last_online,
        })
    }

    #[tokio::test]
    async fn test_collect_stats() {
        let t = now();
        let mut rejected = accepted(2, "B", t - Duration::seconds(5));
        rejected.verdict = Some(Verdict::WrongAnswer);
        let mut provider = FakeProvider::default();
        provider.status.insert(
            "alice".into(),
            FetchOutcome::Fetched(vec![
                accepted(1, "A", t - Duration::seconds(10)),
                accepted(1, "A", t - Duration::hours(23)),
                rejected,
                accepted(3, "C", t - Duration::days(4)),
            ]),
        );
        provider
            .info
            .insert("alice".into(), user("alice", t - Duration::seconds(90)));

        let res = collect_stats(&provider, "alice", t, &gmt6()).await;
        assert_eq!(
            res,
            FetchOutcome::Fetched(AggregateResult {
                total_solved: 2,
                solved_last_24h: 1,
                last_online: "1 minutes ago".into(),
            })
        );
        assert_eq!(
            *provider.calls.lock().unwrap(),
            vec!["user.status alice", "user.info alice"]
        );
    }

    #[tokio::test]
    async fn test_status_failure_short_circuits() {
        let mut provider = FakeProvider::default();
        provider
            .status
            .insert("bob".into(), FetchOutcome::TransientError("timeout".into()));
        provider.info.insert("bob".into(), user("bob", now()));

        let res = collect_stats(&provider, "bob", now(), &gmt6()).await;
        assert_eq!(res, FetchOutcome::TransientError("timeout".into()));
        assert_eq!(*provider.calls.lock().unwrap(), vec!["user.status bob"]);

        let res = collect_stats(&provider, "nobody", now(), &gmt6()).await;
        assert_eq!(res, FetchOutcome::InvalidHandle);
    }

    #[tokio::test]
    async fn test_info_failure() {
        let mut provider = FakeProvider::default();
        provider
            .status
            .insert("carol".into(), FetchOutcome::Fetched(vec![]));
        provider
            .info
            .insert("carol".into(), FetchOutcome::TransientError("reset".into()));

        let res = collect_stats(&provider, "carol", now(), &gmt6()).await;
        assert_eq!(res, FetchOutcome::TransientError("reset".into()));
    }
}
