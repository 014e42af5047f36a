//! 规则加载管理器
//! 负责从内置规则库或本地文件加载规则集

use std::fs;
use std::path::Path;

use tracing::debug;

use super::model::RuleSet;
use crate::config::GlobalConfig;
use crate::error::RswResult;

/// 内置默认规则库（随库发布，未指定外部规则文件时使用）
static DEFAULT_RULES: &str = include_str!("../../rules/waf_rules.json");

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 加载规则集（未配置规则路径时回退到内置规则库）
    pub fn load(config: &GlobalConfig) -> RswResult<RuleSet> {
        match &config.rules_path {
            Some(path) => {
                debug!("从本地文件加载规则集：{}", path.display());
                Self::load_from_file(path)
            }
            None => {
                debug!("未配置规则文件路径，加载内置规则库");
                Self::parse(DEFAULT_RULES.as_bytes())
            }
        }
    }

    /// 从本地文件加载规则集
    /// 读取失败与解析失败是两类独立错误（RuleReadError / RuleParseError）
    pub fn load_from_file(path: &Path) -> RswResult<RuleSet> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    /// 解析规则JSON文档
    pub fn parse(data: &[u8]) -> RswResult<RuleSet> {
        let rule_set: RuleSet = serde_json::from_slice(data)?;
        debug!("规则解析成功，provider总数：{}", rule_set.services.len());
        Ok(rule_set)
    }
}
