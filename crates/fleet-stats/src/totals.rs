//! 目錄總量統計

use fleet_core::{Driver, Order, Route};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 目錄總量（訂單 / 司機 / 路線）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTotals {
    /// 訂單數
    pub orders: u64,

    /// 司機數
    pub drivers: u64,

    /// 路線數
    pub routes: u64,

    /// 平均訂單金額（Rs）
    pub average_order_value: Decimal,

    /// 訂單總金額（Rs）
    pub total_order_value: Decimal,
}

impl CatalogTotals {
    /// 彙總目錄總量
    ///
    /// 無訂單時平均值為 0，不產生除零。
    pub fn collect(orders: &[Order], drivers: &[Driver], routes: &[Route]) -> Self {
        let total_order_value: Decimal = orders.iter().map(|order| order.value_rs).sum();

        let average_order_value = if orders.is_empty() {
            Decimal::ZERO
        } else {
            total_order_value / Decimal::from(orders.len() as u64)
        };

        Self {
            orders: orders.len() as u64,
            drivers: drivers.len() as u64,
            routes: routes.len() as u64,
            average_order_value,
            total_order_value,
        }
    }
}
