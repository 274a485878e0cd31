//! 錯誤回應映射

use fleet_core::SimError;
use serde::{Deserialize, Serialize};

/// 錯誤回應本體（4xx / 5xx）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 錯誤訊息
    pub error: String,
}

impl ErrorBody {
    /// 從引擎錯誤建立回應本體
    pub fn from_error(err: &SimError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// 引擎錯誤對應的 HTTP 狀態碼
///
/// 驗證錯誤是呼叫端問題（400）；計算超時對應閘道超時（504）；
/// 其餘視為伺服器內部不一致（500）。
pub fn http_status(err: &SimError) -> u16 {
    match err {
        SimError::Validation(_) => 400,
        SimError::Timeout(_) => 504,
        SimError::UnknownRoute(_) | SimError::Calculation(_) => 500,
    }
}
