use super::{FetchOutcome, Submission, UserInfo};
use async_trait::async_trait;

#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// 用户的全部提交记录
    async fn user_status(&self, handle: &str) -> FetchOutcome<Vec<Submission>>;

    async fn user_info(&self, handle: &str) -> FetchOutcome<UserInfo>;
}
