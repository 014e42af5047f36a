//! 演示程序统一测试数据源
//! 提供标准化的样例响应，避免各演示程序重复构造

use std::collections::HashMap;

use rswafcheck::HttpResponse;

/// Cloudflare拦截页样例响应（Server头 + 错误码Body）
pub fn cloudflare_block_response() -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("Server".to_string(), "cloudflare".to_string());
    headers.insert("CF-RAY".to_string(), "8f2a1c-LAX".to_string());

    HttpResponse {
        status_code: 403,
        headers,
        body: "error code: 1020".to_string(),
        ..HttpResponse::default()
    }
}

/// Akamai拦截页样例响应（状态码 + Server头 + 精确标题）
pub fn akamai_block_response() -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("Server".to_string(), "AkamaiGHost".to_string());

    HttpResponse {
        status_code: 400,
        headers,
        body: "The requested URL \"[no URL]\", is invalid.".to_string(),
        title: "Invalid URL".to_string(),
        ..HttpResponse::default()
    }
}

/// 端口跳转样例响应（2052端口请求被301跳转到根路径）
pub fn port_redirect_response() -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("Location".to_string(), "https://example.com/".to_string());

    HttpResponse {
        status_code: 301,
        headers,
        request_url: "https://example.com:2052/".to_string(),
        ..HttpResponse::default()
    }
}
