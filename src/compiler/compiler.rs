//! 规则编译器核心
//! 仅负责将声明式规则编译为可执行谓词集，正则在加载期一次性预编译

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use super::compiled::CompiledRule;
use crate::error::{RswResult, RswafcheckError};
use crate::rule::{ProviderRule, RuleSet};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译完整规则集（provider标识 -> 编译后规则）
    /// 任一provider编译失败即中止，并附带provider标识与底层原因
    pub fn compile_set(rule_set: &RuleSet) -> RswResult<HashMap<String, CompiledRule>> {
        let mut compiled = HashMap::with_capacity(rule_set.services.len());

        for (provider, rule) in &rule_set.services {
            let compiled_rule =
                Self::compile(rule).map_err(|e| RswafcheckError::RuleCompileError {
                    provider: provider.clone(),
                    source: Box::new(e),
                })?;
            compiled.insert(provider.clone(), compiled_rule);
        }

        debug!("规则编译完成，provider总数：{}", compiled.len());
        Ok(compiled)
    }

    /// 编译单条provider规则
    pub fn compile(rule: &ProviderRule) -> RswResult<CompiledRule> {
        let (status_min, status_max) =
            Self::compile_status_bounds(rule.http_status_code.as_deref())?;
        let headers = Self::compile_header_requirements(rule.http_header.as_ref());
        let body_regex = Self::compile_body_regex(rule.http_body_regex.as_deref())?;

        Ok(CompiledRule {
            status_min,
            status_max,
            headers,
            body_contains: rule.http_body.clone().unwrap_or_default(),
            body_regex,
            title_exact: rule.http_title.clone().unwrap_or_default(),
            redirect_check: rule.check_redirect.clone(),
        })
    }

    /// 解析状态码约束："N"（单值）或 "N-M"（闭区间）
    /// 单值解析失败、区间任一侧非正数时不施加约束（保持0哨兵）；
    /// 段数非法（如 "a-b-c"）为编译错误
    fn compile_status_bounds(spec: Option<&str>) -> RswResult<(u16, u16)> {
        let Some(spec) = spec.filter(|s| !s.is_empty()) else {
            return Ok((0, 0));
        };

        let parts: Vec<&str> = spec.split('-').collect();
        match parts.len() {
            1 => {
                let status = parts[0].parse::<u16>().unwrap_or(0);
                Ok((status, status))
            }
            2 => {
                let min = parts[0].parse::<u16>().unwrap_or(0);
                let max = parts[1].parse::<u16>().unwrap_or(0);
                if min > 0 && max > 0 {
                    Ok((min, max))
                } else {
                    Ok((0, 0))
                }
            }
            _ => Err(RswafcheckError::InvalidStatusFormat(spec.to_string())),
        }
    }

    /// 编译Header约束：Header名统一转小写作为键，值保留为必须包含的子串
    fn compile_header_requirements(
        headers: Option<&HashMap<String, String>>,
    ) -> HashMap<String, String> {
        let Some(headers) = headers else {
            return HashMap::new();
        };

        headers
            .iter()
            .map(|(name, required)| (name.to_lowercase(), required.clone()))
            .collect()
    }

    /// 预编译Body正则列表
    /// 任一模式编译失败即中止本条规则编译，不保留部分编译结果
    fn compile_body_regex(patterns: Option<&[String]>) -> RswResult<Vec<Regex>> {
        let Some(patterns) = patterns else {
            return Ok(Vec::new());
        };

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = Regex::new(pattern).map_err(|e| RswafcheckError::InvalidBodyRegex {
                pattern: pattern.clone(),
                source: e,
            })?;
            compiled.push(regex);
        }

        Ok(compiled)
    }
}
