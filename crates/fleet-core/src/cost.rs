//! 成本模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::route::TrafficLevel;

/// 燃料成本分佈（按交通等級分組）
///
/// 序列化鍵使用對外 API 的等級名稱（Low/Medium/High）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelCostBreakdown {
    /// 低交通燃料成本（Rs）
    #[serde(rename = "Low")]
    pub low: Decimal,

    /// 中交通燃料成本（Rs）
    #[serde(rename = "Medium")]
    pub medium: Decimal,

    /// 高交通燃料成本（Rs）
    #[serde(rename = "High")]
    pub high: Decimal,
}

impl FuelCostBreakdown {
    /// 創建全零分佈
    pub fn zero() -> Self {
        Self::default()
    }

    /// 累加指定等級的成本
    pub fn add(&mut self, level: TrafficLevel, cost: Decimal) {
        match level {
            TrafficLevel::Low => self.low += cost,
            TrafficLevel::Medium => self.medium += cost,
            TrafficLevel::High => self.high += cost,
        }
    }

    /// 取得指定等級的成本
    pub fn get(&self, level: TrafficLevel) -> Decimal {
        match level {
            TrafficLevel::Low => self.low,
            TrafficLevel::Medium => self.medium,
            TrafficLevel::High => self.high,
        }
    }

    /// 總燃料成本
    pub fn total(&self) -> Decimal {
        self.low + self.medium + self.high
    }
}
