//! Header格式转换工具
//! 不同Header格式之间的转换与归一化

use std::collections::HashMap;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// Header名统一转小写，构建大小写不敏感查找视图（值原样保留）
    pub fn to_lowercase_keys(headers: &HashMap<String, String>) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(headers.len());
        for (key, value) in headers {
            map.insert(key.to_lowercase(), value.clone());
        }
        map
    }

    /// 将多值Header压平为单值（取第一个非空值）
    pub fn to_single_value(hashmap: &HashMap<String, Vec<String>>) -> HashMap<String, String> {
        let mut single_map = HashMap::new();
        for (key, values) in hashmap {
            if let Some(first_val) = values.iter().find(|v| !v.is_empty()) {
                single_map.insert(key.clone(), first_val.clone());
            }
        }
        single_map
    }
}
