//! 检测器核心：持有编译后规则集，输出命中的WAF/CDN provider
use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use super::analyzer::RuleAnalyzer;
use super::response::HttpResponse;
use crate::compiler::{CompiledRule, RuleCompiler};
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RswResult, RswafcheckError};
use crate::rule::RuleLoader;
use crate::utils::HeaderConverter;

/// WAF/CDN检测器
/// 构建完成后规则集只读；`add_rules` 期间的并发匹配需由调用方自行加锁
#[derive(Debug, Clone)]
pub struct WafDetector {
    rules: HashMap<String, CompiledRule>,
    config: GlobalConfig,
}

impl WafDetector {
    /// 创建检测器（按配置加载并编译规则集）
    pub fn new(config: GlobalConfig) -> RswResult<Self> {
        // 1. 加载声明式规则集
        let rule_set = RuleLoader::load(&config)?;

        // 2. 编译为可执行谓词集
        let rules = RuleCompiler::compile_set(&rule_set)?;

        Ok(Self { rules, config })
    }

    /// 创建检测器（内置默认规则库）
    pub fn with_default_rules() -> RswResult<Self> {
        Self::new(ConfigManager::get_default())
    }

    /// 创建检测器（规则来源字符串：空 -> 内置规则库，非空 -> 规则文件路径）
    pub fn from_rules_path(rules_path: &str) -> RswResult<Self> {
        let config = if rules_path.is_empty() {
            ConfigManager::get_default()
        } else {
            ConfigManager::custom()
                .rules_path(PathBuf::from(rules_path))
                .build()
        };
        Self::new(config)
    }

    /// 合并追加规则集（内存中的规则JSON文档）
    /// 同名provider整条覆盖旧规则；批次内非原子：某provider编译失败即中止，
    /// 该批次中更早合并成功的provider保持已安装状态
    pub fn add_rules(&mut self, data: &[u8]) -> RswResult<()> {
        let rule_set = RuleLoader::parse(data)?;

        for (provider, rule) in &rule_set.services {
            let compiled =
                RuleCompiler::compile(rule).map_err(|e| RswafcheckError::RuleCompileError {
                    provider: provider.clone(),
                    source: Box::new(e),
                })?;
            self.rules.insert(provider.clone(), compiled);
        }

        debug!("规则合并完成，当前provider总数：{}", self.rules.len());
        Ok(())
    }

    /// 核心匹配接口：返回全部命中的provider标识
    /// provider之间相互独立，可同时命中零个、一个或多个；从不返回错误
    pub fn match_response(&self, resp: &HttpResponse) -> Vec<String> {
        // Header归一化：小写Header名的大小写不敏感查找视图
        let normalized_headers = HeaderConverter::to_lowercase_keys(&resp.headers);

        let mut matched = Vec::new();
        for (provider, rule) in &self.rules {
            if RuleAnalyzer::matches(rule, resp, &normalized_headers) {
                debug!("WAF/CDN规则命中：provider={}", provider);
                matched.push(provider.clone());
            }
        }
        matched
    }

    /// 当前已安装规则的provider总数
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 当前已安装规则的provider标识列表
    pub fn providers(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// 检测器配置
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }
}

// 对外暴露的简化接口（基于全局检测器）
pub fn match_waf_providers(resp: &HttpResponse) -> RswResult<Vec<String>> {
    let detector = super::global::get_global_detector()?;
    Ok(detector.match_response(resp))
}
