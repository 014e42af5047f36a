//! 编译后规则模型
//! 规则编译完成后的可执行形态

use std::collections::HashMap;
use regex::Regex;

use crate::rule::CheckRedirect;

/// 编译后的provider规则
/// 每个字段对应一个独立谓词，缺省形态恒为满足（空约束）
#[derive(Debug, Clone, Default)]
pub struct CompiledRule {
    // 状态码闭区间下界/上界，0为"无约束"哨兵值
    pub status_min: u16,
    pub status_max: u16,
    // 小写Header名 -> 值必须包含的子串
    pub headers: HashMap<String, String>,
    // Body必须包含的子串（区分大小写）
    pub body_contains: Vec<String>,
    // 预编译的Body正则
    pub body_regex: Vec<Regex>,
    // 标题精确匹配，空字符串为"无约束"
    pub title_exact: String,
    // 重定向关联检测配置（原样携带）
    pub redirect_check: Option<CheckRedirect>,
}
