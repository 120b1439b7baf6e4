use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Handle = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    #[serde(rename = "OK")]
    Accepted,
    Failed,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Other,
}

/// 题目唯一标识: (比赛编号, 题号)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKey {
    pub contest_id: Option<i64>,
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<i64>,
    pub index: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub problem: Problem,
    // 排队中的提交没有 verdict
    pub verdict: Option<Verdict>,
    #[serde(rename = "creationTimeSeconds", with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn problem_key(&self) -> ProblemKey {
        ProblemKey {
            contest_id: self.problem.contest_id,
            index: self.problem.index.clone(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict == Some(Verdict::Accepted)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub handle: Handle,
    #[serde(rename = "lastOnlineTimeSeconds", with = "chrono::serde::ts_seconds")]
    pub last_online: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub total_solved: usize,
    pub solved_last_24h: usize,
    pub last_online: String,
}

/// 单次远程调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Fetched(T),
    /// 接口有响应, 但返回的 status 不是 OK
    InvalidHandle,
    /// 网络错误, 超时, 或响应无法解析
    TransientError(String),
}

impl<T> FetchOutcome<T> {
    pub fn and_then<U, F: FnOnce(T) -> FetchOutcome<U>>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Fetched(v) => f(v),
            FetchOutcome::InvalidHandle => FetchOutcome::InvalidHandle,
            FetchOutcome::TransientError(e) => FetchOutcome::TransientError(e),
        }
    }
}
