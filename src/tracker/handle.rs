use super::Handle;
use crate::global::api_constant::PROFILE_MARKER;

/// 从个人主页链接中取出 handle, 链接无效时返回 None
pub fn extract_handle(link: &serde_json::Value) -> Option<Handle> {
    let link = link.as_str()?.trim();
    let pos = link.find(PROFILE_MARKER)? + PROFILE_MARKER.len();
    let token = link[pos..].trim_end_matches('/').rsplit('/').next()?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
