//! 訂單模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 配送訂單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: Uuid,

    /// 訂單編號（業務代碼）
    pub order_id: String,

    /// 訂單金額（Rs）
    pub value_rs: Decimal,

    /// 指派路線（業務代碼，未指派時為空）
    pub route_id: Option<String>,

    /// 配送完成時間（配送前為空）
    pub delivery_timestamp: Option<DateTime<Utc>>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(order_id: String, value_rs: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            value_rs,
            route_id: None,
            delivery_timestamp: None,
        }
    }

    /// 建構器模式：指派路線
    pub fn with_route_id(mut self, route_id: String) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// 建構器模式：設置配送完成時間
    pub fn with_delivery_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.delivery_timestamp = Some(timestamp);
        self
    }

    /// 檢查是否已指派路線
    pub fn is_routable(&self) -> bool {
        self.route_id.is_some()
    }

    /// 檢查是否為高額訂單
    pub fn is_high_value(&self, threshold: Decimal) -> bool {
        self.value_rs > threshold
    }
}
