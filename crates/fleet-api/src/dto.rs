//! 模擬端點資料傳輸物件

use fleet_calc::SimulationResult;
use fleet_core::{FuelCostBreakdown, Result, SimError, SimulationRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `POST /api/simulate` 請求本體
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequestDto {
    /// 模擬司機數量
    pub drivers: i64,

    /// 班次開始時間（HH:MM）
    #[serde(rename = "startTime")]
    pub start_time: String,

    /// 班次最大工時（小時）
    #[serde(rename = "maxHours")]
    pub max_hours: i64,
}

impl SimulateRequestDto {
    /// 轉換為核心模擬請求
    ///
    /// 範圍與時間格式錯誤一律回報為驗證錯誤，不會 panic。
    pub fn into_request(self) -> Result<SimulationRequest> {
        let drivers = u32::try_from(self.drivers)
            .map_err(|_| SimError::Validation(format!("司機數量無效: {}", self.drivers)))?;
        let max_hours = u32::try_from(self.max_hours)
            .map_err(|_| SimError::Validation(format!("最大工時無效: {}", self.max_hours)))?;

        SimulationRequest::from_parts(drivers, &self.start_time, max_hours)
    }
}

/// `POST /api/simulate` 回應本體
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponseDto {
    /// 總利潤（Rs）
    pub total_profit: Decimal,

    /// 效率分數（0-100）
    pub efficiency_score: u8,

    /// 準時配送數
    pub on_time_deliveries: u32,

    /// 遲到配送數
    pub late_deliveries: u32,

    /// 燃料成本分佈（Low/Medium/High）
    pub fuel_costs: FuelCostBreakdown,
}

impl From<&SimulationResult> for SimulateResponseDto {
    fn from(result: &SimulationResult) -> Self {
        Self {
            total_profit: result.total_profit,
            efficiency_score: result.efficiency_score,
            on_time_deliveries: result.on_time_deliveries,
            late_deliveries: result.late_deliveries,
            fuel_costs: result.fuel_costs.clone(),
        }
    }
}
