//! 检测模块：WAF/CDN匹配核心逻辑
pub mod global;
pub mod analyzer;
pub mod response;
pub mod detector;

// 导出核心接口
pub use self::global::{init_wafcheck, init_wafcheck_with_config};
pub use self::response::HttpResponse;
pub use self::detector::{WafDetector, match_waf_providers};
