//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 重定向关联检测配置
/// 源端口与重定向目标端口的关联关系（含"必须跳转到站点根路径"开关）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckRedirect {
    #[serde(default)]
    pub source_ports: Vec<u16>,
    #[serde(default)]
    pub target_ports: Vec<u16>,
    #[serde(default)]
    pub redirect_to_root_host: bool,
}

/// 单个provider的规则定义（从规则JSON解析）
/// 所有字段均可选，缺失字段不构成约束
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderRule {
    // 状态码约束："N" 或 "N-M"（闭区间）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<String>,
    // Header名 -> 值必须包含的子串（Header名大小写不敏感）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_header: Option<HashMap<String, String>>,
    // Body必须包含的子串列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_body: Option<Vec<String>>,
    // Body正则列表（加载时预编译）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_body_regex: Option<Vec<String>>,
    // 页面标题精确匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_title: Option<String>,
    // 重定向关联检测
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_redirect: Option<CheckRedirect>,
}

/// 完整规则集（规则文档顶层结构）
/// provider标识 -> 规则定义
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleSet {
    pub services: HashMap<String, ProviderRule>,
}
