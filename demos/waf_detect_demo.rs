//! WAF/CDN在线识别演示程序
//! 功能说明：
//! 1. 请求目标URL并采集状态码/Header/Body
//! 2. 用正则提取页面标题（标题提取属调用方职责，库本身不解析HTML）
//! 3. 将响应数据送入检测器，输出命中的WAF/CDN provider
//!
//! 运行命令：
//! cargo run --example waf_detect_demo

use std::collections::HashMap;
use std::error::Error;

use regex::Regex;
use rswafcheck::{HttpResponse, WafDetector};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // ========== 2. 构建检测器（内置规则库） ==========
    let detector = WafDetector::with_default_rules()?;

    // ========== 3. 目标URL列表 ==========
    let urls = vec!["http://example.com/"];
    let title_regex = Regex::new(r"<title[^>]*>([^<]+)</title>")?;

    for url in urls {
        // ========== 4. 请求目标并采集响应数据 ==========
        let resp = match reqwest::get(url).await {
            Ok(resp) => resp,
            Err(e) => {
                eprintln!("请求 {} 失败：{}", url, e);
                continue;
            }
        };

        let status_code = resp.status().as_u16();
        let request_url = resp.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in resp.headers() {
            headers.insert(
                name.as_str().to_string(),
                value.to_str().unwrap_or("").to_string(),
            );
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("读取 {} 响应体失败：{}", url, e);
                continue;
            }
        };

        // ========== 5. 标题提取（演示用正则） ==========
        let title = title_regex
            .captures(&body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        // ========== 6. 执行匹配并输出结果 ==========
        let response = HttpResponse {
            status_code,
            headers,
            body,
            title,
            request_url,
        };

        let matched = detector.match_response(&response);
        if matched.is_empty() {
            println!("{} -> 未识别到WAF/CDN", url);
        } else {
            println!("{} -> 识别到WAF/CDN：{:?}", url, matched);
        }
    }

    Ok(())
}
