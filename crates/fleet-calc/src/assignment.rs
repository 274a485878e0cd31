//! 訂單指派

use std::collections::BTreeMap;

use fleet_core::{AssignmentStrategy, Order, Result, Route, SimError, SimulationConfig};
use rust_decimal::Decimal;

/// 單一司機的配送排程（依配送順序排列的訂單）
#[derive(Debug, Clone)]
pub struct DriverSchedule {
    /// 司機序號（0 起算）
    pub driver_index: usize,

    /// 指派訂單（依配送順序）
    pub orders: Vec<Order>,
}

impl DriverSchedule {
    fn new(driver_index: usize) -> Self {
        Self {
            driver_index,
            orders: Vec::new(),
        }
    }

    /// 排程內訂單數
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// 檢查排程是否為空
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// 計算步數預算
///
/// 每一次指派計入一步；超出上限時以 Timeout 失敗，
/// 讓病態大目錄的模擬可被設定上限而不會無限執行。
#[derive(Debug)]
pub struct StepBudget {
    used: u64,
    cap: Option<u64>,
}

impl StepBudget {
    /// 創建新的預算（None 表示不限制）
    pub fn new(cap: Option<u64>) -> Self {
        Self { used: 0, cap }
    }

    /// 消耗一步
    pub fn consume(&mut self) -> Result<()> {
        self.used += 1;
        if let Some(cap) = self.cap {
            if self.used > cap {
                return Err(SimError::Timeout(format!("指派步數超出上限 {}", cap)));
            }
        }
        Ok(())
    }

    /// 已消耗步數
    pub fn used(&self) -> u64 {
        self.used
    }
}

/// 訂單指派計算器
pub struct AssignmentPlanner;

impl AssignmentPlanner {
    /// 將可配送訂單分配給模擬司機
    ///
    /// 訂單先依訂單編號排序，使指派結果與目錄的輸入順序無關；
    /// 班次工時不限制指派本身，超出窗口的訂單在時間評估時記為遲到。
    pub fn assign(
        orders: &[Order],
        routes: &BTreeMap<String, Route>,
        driver_count: u32,
        config: &SimulationConfig,
        budget: &mut StepBudget,
    ) -> Result<Vec<DriverSchedule>> {
        let mut sorted: Vec<&Order> = orders.iter().collect();
        sorted.sort_by(|a, b| a.order_id.cmp(&b.order_id));

        match config.assignment_strategy {
            AssignmentStrategy::RoundRobin => Self::round_robin(&sorted, driver_count, budget),
            AssignmentStrategy::GreedyByRoute => {
                Self::greedy_by_route(&sorted, routes, driver_count, config, budget)
            }
        }
    }

    /// 輪流指派：第 k 筆訂單交給第 k mod n 位司機
    fn round_robin(
        orders: &[&Order],
        driver_count: u32,
        budget: &mut StepBudget,
    ) -> Result<Vec<DriverSchedule>> {
        let mut schedules: Vec<DriverSchedule> =
            (0..driver_count as usize).map(DriverSchedule::new).collect();

        for (idx, order) in orders.iter().copied().enumerate() {
            budget.consume()?;
            schedules[idx % driver_count as usize]
                .orders
                .push(order.clone());
        }

        Ok(schedules)
    }

    /// 按路線貪婪指派
    ///
    /// 訂單按路線分組（BTreeMap 確保巡訪順序穩定），
    /// 每組整批交給目前累計配送時間最少的司機，同值取序號最小者。
    fn greedy_by_route(
        orders: &[&Order],
        routes: &BTreeMap<String, Route>,
        driver_count: u32,
        config: &SimulationConfig,
        budget: &mut StepBudget,
    ) -> Result<Vec<DriverSchedule>> {
        let mut groups: BTreeMap<&str, Vec<&Order>> = BTreeMap::new();
        for order in orders.iter().copied() {
            match order.route_id.as_deref() {
                Some(route_id) => groups.entry(route_id).or_default().push(order),
                None => continue, // 不可配送訂單不會進入指派
            }
        }

        let mut schedules: Vec<DriverSchedule> =
            (0..driver_count as usize).map(DriverSchedule::new).collect();
        let mut loads: Vec<Decimal> = vec![Decimal::ZERO; driver_count as usize];

        for (route_id, group) in groups {
            let route = routes
                .get(route_id)
                .ok_or_else(|| SimError::UnknownRoute(route_id.to_string()))?;
            let per_order_min = crate::timing::travel_time(route, config);

            let mut target = 0;
            for i in 1..loads.len() {
                if loads[i] < loads[target] {
                    target = i;
                }
            }

            for order in group {
                budget.consume()?;
                schedules[target].orders.push(order.clone());
                loads[target] += per_order_min;
            }
        }

        Ok(schedules)
    }
}
