//! rswafcheck - 规则驱动的WAF/CDN识别库
//! 输入一次HTTP响应（状态码/Header/Body/标题/原始请求URL），
//! 输出全部命中的防护服务provider标识

// 导出全局错误类型
pub use self::error::{RswafcheckError, RswResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{ProviderRule, CheckRedirect, RuleSet, RuleLoader};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRule, RuleCompiler};

// 导出工具模块核心接口
pub use self::utils::HeaderConverter;

// 导出检测模块核心接口（含基于全局单例的简化接口）
pub use self::detector::{
    HttpResponse,
    WafDetector,
    init_wafcheck,
    init_wafcheck_with_config,
    match_waf_providers,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
