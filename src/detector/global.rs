//! 全局检测器单例管理
use once_cell::sync::OnceCell;

use super::detector::WafDetector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RswResult, RswafcheckError};

/// 全局检测器实例（初始化后只读）
static GLOBAL_DETECTOR: OnceCell<WafDetector> = OnceCell::new();

/// 初始化全局检测器（默认配置）
pub fn init_wafcheck() -> RswResult<()> {
    init_wafcheck_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器（幂等，重复调用直接返回）
pub fn init_wafcheck_with_config(config: GlobalConfig) -> RswResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        return Ok(());
    }

    let detector = WafDetector::new(config)?;
    GLOBAL_DETECTOR
        .set(detector)
        .map_err(|_| RswafcheckError::DetectorNotInitialized)?;

    Ok(())
}

/// 获取全局检测器
pub(crate) fn get_global_detector() -> RswResult<&'static WafDetector> {
    GLOBAL_DETECTOR
        .get()
        .ok_or(RswafcheckError::DetectorNotInitialized)
}
