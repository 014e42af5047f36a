//! 待检测响应数据模型
//! 由调用方在每次匹配前构造，匹配期间不可变

use std::collections::HashMap;

use crate::utils::HeaderConverter;

/// HTTP响应数据（匹配输入）
/// Header名按约定大小写不敏感，匹配时统一归一化为小写查找视图
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub title: String,
    // 原始请求URL，仅重定向关联规则使用
    pub request_url: String,
}

impl HttpResponse {
    /// 从多值Header构造响应（每个Header取第一个非空值）
    pub fn from_multi_headers(
        status_code: u16,
        headers: &HashMap<String, Vec<String>>,
        body: &str,
        title: &str,
        request_url: &str,
    ) -> Self {
        Self {
            status_code,
            headers: HeaderConverter::to_single_value(headers),
            body: body.to_string(),
            title: title.to_string(),
            request_url: request_url.to_string(),
        }
    }
}
