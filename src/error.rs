//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RswafcheckError {
    // 规则加载相关错误
    #[error("规则文件读取失败：{0}")]
    RuleReadError(#[from] IoError),
    #[error("规则JSON解析失败：{0}")]
    RuleParseError(#[from] SerdeJsonError),

    // 规则编译相关错误
    #[error("状态码格式无效：{0}")]
    InvalidStatusFormat(String),
    #[error("Body正则编译失败 [{pattern}]：{source}")]
    InvalidBodyRegex {
        pattern: String,
        #[source]
        source: RegexError,
    },
    #[error("编译provider [{provider}] 规则失败：{source}")]
    RuleCompileError {
        provider: String,
        #[source]
        source: Box<RswafcheckError>,
    },

    // 检测相关错误
    #[error("检测器未初始化")]
    DetectorNotInitialized,
}

// 全局Result类型
pub type RswResult<T> = Result<T, RswafcheckError>;
