//! 本地规则匹配演示程序
//! 功能说明：
//! 1. 演示内置规则库加载与检测器构建流程
//! 2. 演示内存规则文档的合并（add_rules，同名provider覆盖）
//! 3. 对标准化样例响应执行匹配并输出结果
//!
//! 运行命令：
//! cargo run --example local_rules_demo

use std::error::Error;

use rswafcheck::WafDetector;
use tracing_subscriber::EnvFilter;

// 统一测试数据源
mod test_data;

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // ========== 2. 构建检测器（内置规则库） ==========
    let mut detector = WafDetector::with_default_rules()?;
    println!("内置规则库加载完成，provider总数：{}", detector.rule_count());

    // ========== 3. 合并自定义规则（内存JSON文档） ==========
    // 同名provider整条覆盖；此处新增一个自定义Header标记规则
    let custom_rules = br#"{
        "services": {
            "demo-gateway": {
                "http_header": { "X-Demo-Gateway": "" }
            }
        }
    }"#;
    detector.add_rules(custom_rules)?;
    println!("自定义规则合并完成，provider总数：{}", detector.rule_count());

    // ========== 4. 对样例响应执行匹配 ==========
    let samples = vec![
        ("cloudflare拦截页", test_data::cloudflare_block_response()),
        ("akamai拦截页", test_data::akamai_block_response()),
        ("端口跳转", test_data::port_redirect_response()),
    ];

    for (label, response) in samples {
        let matched = detector.match_response(&response);
        if matched.is_empty() {
            println!("[{}] 未识别到WAF/CDN", label);
        } else {
            println!("[{}] 识别到WAF/CDN：{:?}", label, matched);
        }
    }

    Ok(())
}
