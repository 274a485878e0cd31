//! 儀表板統計報告

use chrono::{DateTime, Utc};
use fleet_calc::SimulationResult;
use fleet_core::{Driver, FuelCostBreakdown, Order, Route, SimulationConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::totals::CatalogTotals;

/// 績效摘要（取自最近一次模擬結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    /// 總利潤（Rs）
    pub profit: Decimal,

    /// 效率分數（0-100）
    pub efficiency: u8,

    /// 準時配送數
    #[serde(rename = "onTime")]
    pub on_time: u32,

    /// 遲到配送數
    pub late: u32,
}

impl PerformanceSnapshot {
    /// 尚無模擬結果時的零值摘要
    pub fn empty() -> Self {
        Self {
            profit: Decimal::ZERO,
            efficiency: 0,
            on_time: 0,
            late: 0,
        }
    }

    /// 從模擬結果擷取績效摘要
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            profit: result.total_profit,
            efficiency: result.efficiency_score,
            on_time: result.on_time_deliveries,
            late: result.late_deliveries,
        }
    }
}

/// 成本摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// 燃料成本分佈（按交通等級）
    pub fuel: FuelCostBreakdown,

    /// 固定維護成本（Rs）
    pub maintenance: Decimal,

    /// 固定人力成本（Rs）
    pub labor: Decimal,
}

/// 儀表板統計報告
///
/// 純粹由目錄與最近一次模擬結果推導，不持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// 目錄總量
    pub totals: CatalogTotals,

    /// 績效摘要
    pub performance: PerformanceSnapshot,

    /// 成本摘要
    pub costs: CostSummary,

    /// 產生時間（由呼叫端提供，此模組不讀取系統時鐘）
    pub timestamp: DateTime<Utc>,
}

impl StatsReport {
    /// 彙編儀表板統計
    pub fn compile(
        orders: &[Order],
        drivers: &[Driver],
        routes: &[Route],
        last_run: Option<&SimulationResult>,
        config: &SimulationConfig,
        generated_at: DateTime<Utc>,
    ) -> Self {
        tracing::debug!(
            "彙編儀表板統計：訂單 {} 筆，司機 {} 名，路線 {} 條",
            orders.len(),
            drivers.len(),
            routes.len()
        );

        let totals = CatalogTotals::collect(orders, drivers, routes);

        let performance = match last_run {
            Some(result) => PerformanceSnapshot::from_result(result),
            None => PerformanceSnapshot::empty(),
        };

        let costs = CostSummary {
            fuel: last_run
                .map(|result| result.fuel_costs.clone())
                .unwrap_or_default(),
            maintenance: config.maintenance_cost_rs,
            labor: config.labor_cost_rs,
        };

        Self {
            totals,
            performance,
            costs,
            timestamp: generated_at,
        }
    }
}
