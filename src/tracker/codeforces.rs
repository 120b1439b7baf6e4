use super::provider::StatsProvider;
use super::utils::ApiRequest;
use super::{FetchOutcome, Submission, UserInfo};
use crate::global::{api_constant as constant, TrackerConfig};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use simple_log::{error, info};

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    status: String,
    comment: Option<String>,
    result: Option<serde_json::Value>,
}

/// 解析 Codeforces API 的响应
///
/// status 不是 OK 时返回 `InvalidHandle`, 响应格式不对时返回 `TransientError`.
pub fn parse_envelope<T: DeserializeOwned>(text: &str) -> FetchOutcome<T> {
    let envelope = match serde_json::from_str::<ApiEnvelope>(text) {
        Ok(envelope) => envelope,
        Err(e) => return FetchOutcome::TransientError(format!("响应解析失败: {}", e)),
    };
    if envelope.status != constant::STATUS_OK {
        info!(
            "接口返回 {}: {}",
            envelope.status,
            envelope.comment.as_deref().unwrap_or("")
        );
        return FetchOutcome::InvalidHandle;
    }
    let Some(result) = envelope.result else {
        return FetchOutcome::TransientError("响应缺少 result".into());
    };
    match serde_json::from_value::<T>(result) {
        Ok(v) => FetchOutcome::Fetched(v),
        Err(e) => FetchOutcome::TransientError(format!("result 解析失败: {}", e)),
    }
}

pub struct Codeforces {
    req: ApiRequest,
}

impl Codeforces {
    pub fn new(config: &TrackerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            req: ApiRequest::new(
                &config.api_base_url,
                config.request_timeout(),
                config.request_delay(),
            )?,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> FetchOutcome<T> {
        match self.req.get_text(method, query).await {
            Ok(text) => parse_envelope(&text),
            Err(e) => {
                error!("调用 {} 失败: {}", method, e);
                FetchOutcome::TransientError(e.to_string())
            }
        }
    }
}

#[async_trait]
impl StatsProvider for Codeforces {
    async fn user_status(&self, handle: &str) -> FetchOutcome<Vec<Submission>> {
        self.call(constant::methods::USER_STATUS, &[("handle", handle)])
            .await
    }

    async fn user_info(&self, handle: &str) -> FetchOutcome<UserInfo> {
        let outcome: FetchOutcome<Vec<UserInfo>> = self
            .call(constant::methods::USER_INFO, &[("handles", handle)])
            .await;
        outcome.and_then(|users| match users.into_iter().next() {
            Some(user) => FetchOutcome::Fetched(user),
            None => FetchOutcome::InvalidHandle,
        })
    }
}
