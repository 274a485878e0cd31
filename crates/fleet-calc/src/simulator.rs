//! 模擬主計算器

use std::collections::BTreeMap;

use fleet_core::{Order, Result, Route, SimulationConfig, SimulationRequest};
use rayon::prelude::*;

use crate::assignment::{AssignmentPlanner, StepBudget};
use crate::fuel::FuelCalculator;
use crate::kpi::KpiAggregator;
use crate::timing::TimingEvaluator;
use crate::{SimulationResult, SimulationWarning};

/// 配送模擬計算器
///
/// 無共享可變狀態：每次呼叫只讀取輸入目錄並回傳新結果，
/// 相同輸入保證產生相同 KPI。
pub struct Simulator {
    /// 模擬配置
    config: SimulationConfig,
}

impl Simulator {
    /// 創建新的模擬計算器
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// 主模擬入口
    ///
    /// 參數不合法時在任何指派工作前失敗；
    /// 訂單目錄為空時回傳零值結果而非錯誤。
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        orders: &[Order],
        routes: &[Route],
    ) -> Result<SimulationResult> {
        // Step 0: 參數驗證（快速失敗）
        request.validate()?;

        tracing::info!(
            "開始配送模擬：司機 {} 名，訂單 {} 筆，路線 {} 條",
            request.driver_count,
            orders.len(),
            routes.len()
        );

        let start_time = std::time::Instant::now();

        if orders.is_empty() {
            tracing::info!("訂單目錄為空，回傳零值結果");
            return Ok(SimulationResult::empty());
        }

        // Step 1: 建立路線索引（BTreeMap 確保巡訪順序穩定）
        tracing::debug!("Step 1: 建立路線索引");
        let route_index = Self::index_routes(routes);

        // Step 2: 篩選可配送訂單
        tracing::debug!("Step 2: 篩選可配送訂單");
        let (routable, warnings) = Self::partition_routable(orders, &route_index);
        tracing::debug!("可配送訂單: {} / {}", routable.len(), orders.len());

        // Step 3: 指派訂單給模擬司機
        tracing::debug!("Step 3: 指派訂單");
        let mut budget = StepBudget::new(self.config.computation_cap);
        let schedules = AssignmentPlanner::assign(
            &routable,
            &route_index,
            request.driver_count,
            &self.config,
            &mut budget,
        )?;
        tracing::debug!("指派完成，消耗步數: {}", budget.used());

        // Step 4: 逐司機推進班次時鐘
        tracing::debug!("Step 4: 配送時間評估");
        let mut outcomes = Vec::with_capacity(schedules.len());
        for schedule in &schedules {
            outcomes.push(TimingEvaluator::evaluate(
                schedule,
                &route_index,
                request,
                &self.config,
            )?);
        }

        // Step 5: 燃料成本彙總
        tracing::debug!("Step 5: 燃料成本彙總");
        let fuel_costs = FuelCalculator::aggregate(&schedules, &route_index, &self.config)?;

        // Step 6: KPI 彙總
        tracing::debug!("Step 6: KPI 彙總");
        let mut result = KpiAggregator::aggregate(&schedules, &outcomes, fuel_costs, &self.config);
        result.warnings = warnings;

        tracing::info!("配送模擬完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "準時 {} 筆，遲到 {} 筆，效率 {}%",
            result.on_time_deliveries,
            result.late_deliveries,
            result.efficiency_score
        );

        Ok(result)
    }

    /// 批次模擬（多組參數的假設分析）
    ///
    /// 每組請求都是只依賴自身輸入的純計算，彼此獨立、可安全並行；
    /// 結果順序與請求順序一致。
    pub fn simulate_batch(
        &self,
        requests: &[SimulationRequest],
        orders: &[Order],
        routes: &[Route],
    ) -> Vec<Result<SimulationResult>> {
        requests
            .par_iter()
            .map(|request| self.simulate(request, orders, routes))
            .collect()
    }

    /// 取得模擬配置引用
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// 按路線編號建立索引
    fn index_routes(routes: &[Route]) -> BTreeMap<String, Route> {
        routes
            .iter()
            .map(|route| (route.route_id.clone(), route.clone()))
            .collect()
    }

    /// 篩選出指派了有效路線的訂單，其餘記為警告
    fn partition_routable(
        orders: &[Order],
        route_index: &BTreeMap<String, Route>,
    ) -> (Vec<Order>, Vec<SimulationWarning>) {
        let mut routable = Vec::with_capacity(orders.len());
        let mut warnings = Vec::new();

        for order in orders {
            match order.route_id.as_deref() {
                None => warnings.push(SimulationWarning::missing_route(order.order_id.clone())),
                Some(route_id) if !route_index.contains_key(route_id) => {
                    warnings.push(SimulationWarning::unknown_route(
                        order.order_id.clone(),
                        route_id,
                    ));
                }
                Some(_) => routable.push(order.clone()),
            }
        }

        (routable, warnings)
    }
}
