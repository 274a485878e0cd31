//! 模擬請求模型

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{Result, SimError};

/// 班次工時上限（小時）
pub const MAX_SHIFT_HOURS: u32 = 24;

/// 模擬請求參數
///
/// 模擬司機是暫態的：只需要數量與全域班次約束，
/// 與持久化的司機實體無關。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// 模擬司機數量
    pub driver_count: u32,

    /// 班次開始時間
    pub start_time: NaiveTime,

    /// 班次最大工時（小時）
    pub max_hours: u32,
}

impl SimulationRequest {
    /// 創建新的模擬請求（不驗證範圍，由 `validate` 負責）
    pub fn new(driver_count: u32, start_time: NaiveTime, max_hours: u32) -> Self {
        Self {
            driver_count,
            start_time,
            max_hours,
        }
    }

    /// 從原始參數解析並驗證（時間格式 HH:MM）
    pub fn from_parts(driver_count: u32, start_time: &str, max_hours: u32) -> Result<Self> {
        let parsed = NaiveTime::parse_from_str(start_time, "%H:%M")
            .map_err(|_| SimError::Validation(format!("無法解析開始時間: {}", start_time)))?;

        let request = Self::new(driver_count, parsed, max_hours);
        request.validate()?;
        Ok(request)
    }

    /// 驗證參數範圍
    ///
    /// 在任何指派工作開始前快速失敗。
    pub fn validate(&self) -> Result<()> {
        if self.driver_count < 1 {
            return Err(SimError::Validation("司機數量必須至少為 1".to_string()));
        }

        if self.max_hours < 1 || self.max_hours > MAX_SHIFT_HOURS {
            return Err(SimError::Validation(format!(
                "最大工時必須介於 1 到 {} 小時之間: {}",
                MAX_SHIFT_HOURS, self.max_hours
            )));
        }

        Ok(())
    }

    /// 班次窗口長度（分鐘）
    pub fn window_minutes(&self) -> u32 {
        self.max_hours * 60
    }
}
