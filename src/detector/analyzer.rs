//! 匹配分析器：按谓词类别拆分的匹配判定逻辑
//! 每类谓词独立判定，缺省约束恒为满足

use std::collections::HashMap;

use url::{ParseError, Url};

use super::response::HttpResponse;
use crate::compiler::CompiledRule;
use crate::rule::CheckRedirect;

/// 规则综合分析器：所有已配置谓词全部命中才算匹配（短路求值）
pub struct RuleAnalyzer;

impl RuleAnalyzer {
    /// 判定响应是否命中单条编译后规则
    /// `headers` 为小写Header名的归一化查找视图
    pub fn matches(
        rule: &CompiledRule,
        resp: &HttpResponse,
        headers: &HashMap<String, String>,
    ) -> bool {
        StatusAnalyzer::matches(rule, resp.status_code)
            && HeaderAnalyzer::matches(rule, headers)
            && BodyAnalyzer::matches(rule, &resp.body)
            && TitleAnalyzer::matches(rule, &resp.title)
            && rule
                .redirect_check
                .as_ref()
                .is_none_or(|check| RedirectAnalyzer::matches(check, resp, headers))
    }
}

/// 状态码分析器
pub struct StatusAnalyzer;

impl StatusAnalyzer {
    /// 判定状态码是否落入规则闭区间（0为无约束哨兵）
    pub fn matches(rule: &CompiledRule, status_code: u16) -> bool {
        if rule.status_min != 0 && status_code < rule.status_min {
            return false;
        }
        if rule.status_max != 0 && status_code > rule.status_max {
            return false;
        }
        true
    }
}

/// Header分析器
pub struct HeaderAnalyzer;

impl HeaderAnalyzer {
    /// 判定每个必需Header是否存在且值包含要求子串（子串区分大小写）
    pub fn matches(rule: &CompiledRule, headers: &HashMap<String, String>) -> bool {
        for (name, required) in &rule.headers {
            match headers.get(name) {
                Some(value) if value.contains(required) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Body分析器（子串 + 正则）
pub struct BodyAnalyzer;

impl BodyAnalyzer {
    /// 判定Body是否包含全部必需子串并命中全部正则（任意位置匹配）
    pub fn matches(rule: &CompiledRule, body: &str) -> bool {
        for required in &rule.body_contains {
            if !body.contains(required) {
                return false;
            }
        }
        for regex in &rule.body_regex {
            if !regex.is_match(body) {
                return false;
            }
        }
        true
    }
}

/// 标题分析器
pub struct TitleAnalyzer;

impl TitleAnalyzer {
    /// 判定标题精确匹配（空约束恒为满足）
    pub fn matches(rule: &CompiledRule, title: &str) -> bool {
        rule.title_exact.is_empty() || title == rule.title_exact
    }
}

/// 重定向关联分析器
/// 关联原始请求端口与重定向目标端口/路径，识别仅通过跳转暴露的防护服务
pub struct RedirectAnalyzer;

impl RedirectAnalyzer {
    /// 判定重定向关联谓词
    /// URL解析失败一律视为"谓词不满足"，绝不向调用方传播错误
    pub fn matches(
        check: &CheckRedirect,
        resp: &HttpResponse,
        headers: &HashMap<String, String>,
    ) -> bool {
        let Ok(original_url) = Url::parse(&resp.request_url) else {
            return false;
        };

        let source_port = Self::effective_port(&original_url);
        if !check.source_ports.contains(&source_port) {
            return false;
        }

        let Some(location) = headers.get("location") else {
            return false;
        };

        // 相对Location基于原始URL解析
        let resolved = match Url::parse(location) {
            Ok(absolute) => absolute,
            Err(ParseError::RelativeUrlWithoutBase) => match original_url.join(location) {
                Ok(joined) => joined,
                Err(_) => return false,
            },
            Err(_) => return false,
        };

        if check.redirect_to_root_host {
            let path = resolved.path();
            if path != "/" && !path.is_empty() {
                return false;
            }
        }

        check.target_ports.contains(&Self::effective_port(&resolved))
    }

    /// URL有效端口：显式端口 > scheme默认端口（https→443，http→80）> 0（未知）
    fn effective_port(url: &Url) -> u16 {
        url.port_or_known_default().unwrap_or(0)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn lowered(headers: &[(&str, &str)]) -> HashMap<String, String> {
        headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string()))
            .collect()
    }

    fn redirect_check(source: &[u16], target: &[u16], root: bool) -> CheckRedirect {
        CheckRedirect {
            source_ports: source.to_vec(),
            target_ports: target.to_vec(),
            redirect_to_root_host: root,
        }
    }

    #[test]
    fn test_status_bounds_inclusive() {
        // 测试场景：区间200-299为闭区间，200/299命中，199/300不命中
        let rule = CompiledRule {
            status_min: 200,
            status_max: 299,
            ..CompiledRule::default()
        };

        assert!(StatusAnalyzer::matches(&rule, 200));
        assert!(StatusAnalyzer::matches(&rule, 299));
        assert!(!StatusAnalyzer::matches(&rule, 199));
        assert!(!StatusAnalyzer::matches(&rule, 300));
    }

    #[test]
    fn test_status_unbounded_sentinel() {
        // 测试场景：0哨兵无约束，任意状态码命中
        let rule = CompiledRule::default();
        assert!(StatusAnalyzer::matches(&rule, 200));
        assert!(StatusAnalyzer::matches(&rule, 503));
    }

    #[test]
    fn test_header_name_insensitive_value_sensitive() {
        // 测试场景：Header名大小写不敏感（归一化后查找），值子串区分大小写
        let mut rule = CompiledRule::default();
        rule.headers
            .insert("server".to_string(), "cloudflare".to_string());

        // 响应Header名为大写SERVER，归一化后命中
        assert!(HeaderAnalyzer::matches(
            &rule,
            &lowered(&[("SERVER", "cloudflare-nginx")])
        ));
        // 值大小写不同，子串匹配失败
        assert!(!HeaderAnalyzer::matches(
            &rule,
            &lowered(&[("SERVER", "Cloudflare")])
        ));
        // Header缺失
        assert!(!HeaderAnalyzer::matches(&rule, &lowered(&[])));
    }

    #[test]
    fn test_body_regex_and_substring() {
        // 测试场景：正则"error code: \d+"命中，子串"nonexistent"不命中
        let mut rule = CompiledRule::default();
        rule.body_regex.push(Regex::new(r"error code: \d+").unwrap());
        assert!(BodyAnalyzer::matches(&rule, "error code: 1020"));

        let mut rule = CompiledRule::default();
        rule.body_contains.push("nonexistent".to_string());
        assert!(!BodyAnalyzer::matches(&rule, "error code: 1020"));
    }

    #[test]
    fn test_title_exact_match() {
        // 测试场景：标题精确匹配，空约束恒为满足
        let mut rule = CompiledRule::default();
        rule.title_exact = "Invalid URL".to_string();
        assert!(TitleAnalyzer::matches(&rule, "Invalid URL"));
        assert!(!TitleAnalyzer::matches(&rule, "Not Found"));

        assert!(TitleAnalyzer::matches(&CompiledRule::default(), "anything"));
    }

    #[test]
    fn test_redirect_correlation_full_match() {
        // 测试场景：源端口2052、目标443、跳转根路径，全链路命中
        let check = redirect_check(&[2052], &[443], true);
        let resp = HttpResponse {
            request_url: "https://example.com:2052/".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com/")]);

        assert!(RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_wrong_source_port() {
        // 测试场景：源端口不在配置集合，不命中
        let check = redirect_check(&[9999], &[443], true);
        let resp = HttpResponse {
            request_url: "https://example.com:2052/".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com/")]);

        assert!(!RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_wrong_target_port() {
        // 测试场景：跳转目标端口8080不在目标端口集合，不命中
        let check = redirect_check(&[2052], &[443], true);
        let resp = HttpResponse {
            request_url: "https://example.com:2052/".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com:8080/")]);

        assert!(!RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_non_root_path_with_root_required() {
        // 测试场景：要求跳转根路径但Location带路径，不命中
        let check = redirect_check(&[2052], &[443], true);
        let resp = HttpResponse {
            request_url: "https://example.com:2052/".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com/path")]);

        assert!(!RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_missing_location_header() {
        // 测试场景：无location头，不命中
        let check = redirect_check(&[2052], &[443], false);
        let resp = HttpResponse {
            request_url: "https://example.com:2052/".to_string(),
            ..HttpResponse::default()
        };

        assert!(!RedirectAnalyzer::matches(&check, &resp, &lowered(&[])));
    }

    #[test]
    fn test_redirect_relative_location_resolution() {
        // 测试场景：相对Location基于原始URL解析，端口沿用原始URL
        let check = redirect_check(&[8080], &[8080], true);
        let resp = HttpResponse {
            request_url: "http://example.com:8080/admin".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "/")]);

        assert!(RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_malformed_request_url() {
        // 测试场景：原始请求URL非法，谓词静默失败，不报错
        let check = redirect_check(&[80], &[443], false);
        let resp = HttpResponse {
            request_url: "::not a url::".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com/")]);

        assert!(!RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_redirect_scheme_default_ports() {
        // 测试场景：无显式端口时取scheme默认端口（http→80，https→443）
        let check = redirect_check(&[80], &[443], false);
        let resp = HttpResponse {
            request_url: "http://example.com/".to_string(),
            ..HttpResponse::default()
        };
        let headers = lowered(&[("Location", "https://example.com/login")]);

        assert!(RedirectAnalyzer::matches(&check, &resp, &headers));
    }

    #[test]
    fn test_vacuous_rule_matches_everything() {
        // 测试场景：全空规则对任意响应恒命中（空约束真值）
        let rule = CompiledRule::default();
        let resp = HttpResponse {
            status_code: 418,
            body: "arbitrary".to_string(),
            title: "whatever".to_string(),
            ..HttpResponse::default()
        };

        assert!(RuleAnalyzer::matches(&rule, &resp, &lowered(&[])));
    }
}
