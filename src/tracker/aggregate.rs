use super::{ProblemKey, Submission};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

pub fn trailing_window() -> Duration {
    Duration::hours(24)
}

/// 通过的不同题目数量, 同一题多次通过只算一次
pub fn solved_count(submissions: &[Submission]) -> usize {
    submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(Submission::problem_key)
        .collect::<HashSet<ProblemKey>>()
        .len()
}

/// `now` 之前 24 小时内通过的不同题目数量
pub fn solved_in_window(submissions: &[Submission], now: DateTime<Utc>) -> usize {
    let cutoff = now - trailing_window();
    submissions
        .iter()
        .filter(|s| s.is_accepted() && s.created_at >= cutoff && s.created_at <= now)
        .map(Submission::problem_key)
        .collect::<HashSet<ProblemKey>>()
        .len()
}
