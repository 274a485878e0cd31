//! 配送時間評估

use std::collections::BTreeMap;

use chrono::NaiveTime;
use fleet_core::{Result, Route, ShiftClock, SimError, SimulationConfig, SimulationRequest};
use rust_decimal::Decimal;

use crate::assignment::DriverSchedule;

/// 單筆配送結果
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryOutcome {
    /// 訂單編號
    pub order_id: String,

    /// 預計配送時間（分鐘）
    pub duration_min: Decimal,

    /// 完成該筆後的累計工時（分鐘）
    pub cumulative_min: Decimal,

    /// 模擬完成時刻（跨日自動回繞）
    pub completed_at: NaiveTime,

    /// 是否準時
    pub on_time: bool,
}

/// 計算單筆路線的預計配送時間（分鐘）
///
/// 基礎運輸時間乘上交通等級乘數。
pub fn travel_time(route: &Route, config: &SimulationConfig) -> Decimal {
    Decimal::from(route.base_time_min) * config.traffic_multiplier(route.traffic_level)
}

/// 配送時間評估器
pub struct TimingEvaluator;

impl TimingEvaluator {
    /// 沿排程推進班次時鐘，逐筆判斷準時與否
    ///
    /// 完成該筆後累計工時嚴格超過班次窗口者記為遲到；
    /// 窗口只決定準時與否，不會中斷後續配送。
    pub fn evaluate(
        schedule: &DriverSchedule,
        routes: &BTreeMap<String, Route>,
        request: &SimulationRequest,
        config: &SimulationConfig,
    ) -> Result<Vec<DeliveryOutcome>> {
        let mut clock = ShiftClock::new(request.start_time, request.max_hours);
        let mut outcomes = Vec::with_capacity(schedule.orders.len());

        for order in &schedule.orders {
            let route_id = match order.route_id.as_deref() {
                Some(route_id) => route_id,
                None => continue, // 不可配送訂單不會進入排程
            };
            let route = routes
                .get(route_id)
                .ok_or_else(|| SimError::UnknownRoute(route_id.to_string()))?;

            let duration = travel_time(route, config);
            let cumulative = clock.advance(duration);

            outcomes.push(DeliveryOutcome {
                order_id: order.order_id.clone(),
                duration_min: duration,
                cumulative_min: cumulative,
                completed_at: clock.current_time(),
                on_time: clock.within_window(),
            });
        }

        Ok(outcomes)
    }
}
