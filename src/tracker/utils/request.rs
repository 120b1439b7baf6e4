use anyhow::anyhow;
use reqwest::{header, Client};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

fn default_header() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    [
        ("Accept", header::HeaderValue::from_static("application/json")),
        ("Connection", header::HeaderValue::from_static("keep-alive")),
    ]
    .into_iter()
    .for_each(|(x, y)| {
        headers.insert(x, y);
    });
    headers
}

/// 保证相邻两次调用之间至少间隔 `delay`
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    next: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let mut next = self.next.lock().await;
        if let Some(at) = *next {
            sleep_until(at).await;
        }
        *next = Some(Instant::now() + self.delay);
    }
}

#[derive(Debug)]
pub struct ApiRequest {
    pub client: Client,
    pub base_url: String,
    pacer: Pacer,
}

impl ApiRequest {
    pub fn new(base_url: &str, timeout: Duration, delay: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("cf-tracker/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .default_headers(default_header())
            .build()
            .map_err(|e| anyhow!("创建 client 失败: {}", e))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            pacer: Pacer::new(delay),
        })
    }

    pub fn get_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            return url.into();
        }

        let mut res = self.base_url.clone();

        if !res.ends_with('/') {
            res.push('/')
        }

        res.push_str(url.strip_prefix('/').unwrap_or(url));
        res
    }

    /// 不检查 HTTP 状态码, 由调用方解析响应内容
    pub async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> anyhow::Result<String> {
        self.pacer.wait().await;
        let resp = self.client.get(self.get_url(url)).query(query).send().await?;
        Ok(resp.text().await?)
    }
}
