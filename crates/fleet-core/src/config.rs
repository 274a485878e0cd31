//! 模擬配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::route::TrafficLevel;

/// 訂單指派策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStrategy {
    /// 輪流指派 - 依訂單編號排序後逐一輪流分配
    RoundRobin,

    /// 按路線貪婪指派 - 同路線訂單集中交給目前負載最輕的司機
    GreedyByRoute,
}

/// 模擬參數配置（費率、乘數與成本模型）
///
/// 所有常數都是顯式配置，預設值即是營運方公布的費率表；
/// 相同配置搭配相同目錄保證產生相同 KPI。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 低交通時間乘數
    pub low_traffic_multiplier: Decimal,

    /// 中交通時間乘數
    pub medium_traffic_multiplier: Decimal,

    /// 高交通時間乘數
    pub high_traffic_multiplier: Decimal,

    /// 燃料基礎費率（Rs/km）
    pub fuel_base_rate: Decimal,

    /// 中交通附加費率（Rs/km）
    pub medium_traffic_surcharge: Decimal,

    /// 高交通附加費率（Rs/km）
    pub high_traffic_surcharge: Decimal,

    /// 遲到罰款（Rs/單）
    pub late_penalty_rs: Decimal,

    /// 高額訂單門檻（Rs）
    pub high_value_threshold_rs: Decimal,

    /// 高額訂單準時獎勵比例（0.10 = 10%）
    pub high_value_bonus_rate: Decimal,

    /// 固定人力成本（Rs/次模擬）
    pub labor_cost_rs: Decimal,

    /// 固定維護成本（Rs/次模擬）
    pub maintenance_cost_rs: Decimal,

    /// 訂單指派策略
    pub assignment_strategy: AssignmentStrategy,

    /// 計算步數上限
    /// - None: 不限制（預設）
    /// - Some(n): 指派步數超過 n 時以 Timeout 失敗，避免病態目錄卡死
    pub computation_cap: Option<u64>,
}

impl SimulationConfig {
    /// 營運方激勵方案：遲到罰款 Rs 50、高額訂單（>1000 Rs）準時獎勵 10%
    pub fn incentive_scheme() -> Self {
        Self::default()
            .with_late_penalty(Decimal::from(50))
            .with_high_value_bonus(Decimal::from(1000), Decimal::new(10, 2))
    }

    /// 建構器模式：設置指派策略
    pub fn with_assignment_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.assignment_strategy = strategy;
        self
    }

    /// 建構器模式：設置計算步數上限
    pub fn with_computation_cap(mut self, cap: u64) -> Self {
        self.computation_cap = Some(cap);
        self
    }

    /// 建構器模式：設置遲到罰款
    pub fn with_late_penalty(mut self, penalty_rs: Decimal) -> Self {
        self.late_penalty_rs = penalty_rs;
        self
    }

    /// 建構器模式：設置高額訂單獎勵
    pub fn with_high_value_bonus(mut self, threshold_rs: Decimal, bonus_rate: Decimal) -> Self {
        self.high_value_threshold_rs = threshold_rs;
        self.high_value_bonus_rate = bonus_rate;
        self
    }

    /// 建構器模式：設置固定成本
    pub fn with_fixed_costs(mut self, labor_rs: Decimal, maintenance_rs: Decimal) -> Self {
        self.labor_cost_rs = labor_rs;
        self.maintenance_cost_rs = maintenance_rs;
        self
    }

    /// 建構器模式：設置燃料費率
    pub fn with_fuel_rates(
        mut self,
        base_rate: Decimal,
        medium_surcharge: Decimal,
        high_surcharge: Decimal,
    ) -> Self {
        self.fuel_base_rate = base_rate;
        self.medium_traffic_surcharge = medium_surcharge;
        self.high_traffic_surcharge = high_surcharge;
        self
    }

    /// 建構器模式：設置交通時間乘數
    pub fn with_traffic_multipliers(mut self, low: Decimal, medium: Decimal, high: Decimal) -> Self {
        self.low_traffic_multiplier = low;
        self.medium_traffic_multiplier = medium;
        self.high_traffic_multiplier = high;
        self
    }

    /// 取得指定交通等級的時間乘數
    pub fn traffic_multiplier(&self, level: TrafficLevel) -> Decimal {
        match level {
            TrafficLevel::Low => self.low_traffic_multiplier,
            TrafficLevel::Medium => self.medium_traffic_multiplier,
            TrafficLevel::High => self.high_traffic_multiplier,
        }
    }

    /// 取得指定交通等級的燃料費率（Rs/km，含附加費）
    pub fn fuel_rate(&self, level: TrafficLevel) -> Decimal {
        let surcharge = match level {
            TrafficLevel::Low => Decimal::ZERO,
            TrafficLevel::Medium => self.medium_traffic_surcharge,
            TrafficLevel::High => self.high_traffic_surcharge,
        };
        self.fuel_base_rate + surcharge
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // 乘數由低到高遞增
            low_traffic_multiplier: Decimal::ONE,
            medium_traffic_multiplier: Decimal::new(125, 2), // 1.25
            high_traffic_multiplier: Decimal::new(15, 1),    // 1.50
            // 燃料 5 Rs/km，高交通加收 2 Rs/km
            fuel_base_rate: Decimal::from(5),
            medium_traffic_surcharge: Decimal::ZERO,
            high_traffic_surcharge: Decimal::from(2),
            // 激勵方案預設關閉
            late_penalty_rs: Decimal::ZERO,
            high_value_threshold_rs: Decimal::ZERO,
            high_value_bonus_rate: Decimal::ZERO,
            // 固定成本觀測預設為零
            labor_cost_rs: Decimal::ZERO,
            maintenance_cost_rs: Decimal::ZERO,
            assignment_strategy: AssignmentStrategy::RoundRobin,
            computation_cap: None,
        }
    }
}
