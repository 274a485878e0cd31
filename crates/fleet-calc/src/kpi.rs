//! KPI 彙總

use fleet_core::{FuelCostBreakdown, SimulationConfig};
use rust_decimal::Decimal;

use crate::assignment::DriverSchedule;
use crate::timing::DeliveryOutcome;
use crate::SimulationResult;

/// KPI 彙總計算器
pub struct KpiAggregator;

impl KpiAggregator {
    /// 將各司機的配送結果彙總為 KPI 摘要
    ///
    /// 利潤 = 訂單金額 + 準時高額獎勵 − 遲到罰款 − 燃料成本 − 固定成本。
    /// 預設配置下獎勵與罰款皆為零，即金額減燃料減固定成本。
    pub fn aggregate(
        schedules: &[DriverSchedule],
        outcomes_by_driver: &[Vec<DeliveryOutcome>],
        fuel_costs: FuelCostBreakdown,
        config: &SimulationConfig,
    ) -> SimulationResult {
        let mut on_time = 0u32;
        let mut late = 0u32;
        let mut revenue = Decimal::ZERO;
        let mut bonus = Decimal::ZERO;
        let mut penalty = Decimal::ZERO;

        for (schedule, outcomes) in schedules.iter().zip(outcomes_by_driver) {
            for (order, outcome) in schedule.orders.iter().zip(outcomes) {
                revenue += order.value_rs;

                if outcome.on_time {
                    on_time += 1;
                    if config.high_value_bonus_rate > Decimal::ZERO
                        && order.is_high_value(config.high_value_threshold_rs)
                    {
                        bonus += order.value_rs * config.high_value_bonus_rate;
                    }
                } else {
                    late += 1;
                    penalty += config.late_penalty_rs;
                }
            }
        }

        // 空班次不計固定成本，空目錄必須回傳全零結果
        let fixed_costs = if on_time + late == 0 {
            Decimal::ZERO
        } else {
            config.labor_cost_rs + config.maintenance_cost_rs
        };

        let total_profit = revenue + bonus - penalty - fuel_costs.total() - fixed_costs;

        SimulationResult {
            total_profit,
            efficiency_score: Self::efficiency_score(on_time, on_time + late),
            on_time_deliveries: on_time,
            late_deliveries: late,
            fuel_costs,
            warnings: Vec::new(),
        }
    }

    /// 效率分數：準時比例換算為 0-100 整數（四捨五入）
    ///
    /// 總數為零時回傳 0，不產生除零。
    pub fn efficiency_score(on_time: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }

        let pct = Decimal::from(on_time as u64 * 100) / Decimal::from(total);
        pct.round().to_string().parse::<u8>().unwrap_or(0)
    }
}
