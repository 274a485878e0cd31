//! 目錄文件解析（外部 CRUD 服務的 JSON 形狀）

use chrono::{DateTime, Utc};
use fleet_core::{Driver, Order, Result, Route, SimError, TrafficLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單內嵌的路線引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRefDoc {
    /// 文件ID
    #[serde(rename = "_id")]
    pub id: String,

    /// 路線編號
    #[serde(rename = "routeId")]
    pub route_id: String,
}

/// `GET /orders` 訂單文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDoc {
    /// 文件ID
    #[serde(rename = "_id")]
    pub id: String,

    /// 訂單編號
    #[serde(rename = "orderId")]
    pub order_id: String,

    /// 訂單金額（Rs）
    #[serde(rename = "valueRs")]
    pub value_rs: Decimal,

    /// 指派路線（可能未指派）
    #[serde(default)]
    pub route: Option<RouteRefDoc>,

    /// 配送完成時間
    #[serde(rename = "deliveryTimestamp", default)]
    pub delivery_timestamp: Option<DateTime<Utc>>,
}

impl OrderDoc {
    /// 轉換為核心訂單實體
    pub fn into_order(self) -> Order {
        let mut order = Order::new(self.order_id, self.value_rs);
        if let Some(route_ref) = self.route {
            order = order.with_route_id(route_ref.route_id);
        }
        if let Some(timestamp) = self.delivery_timestamp {
            order = order.with_delivery_timestamp(timestamp);
        }
        order
    }
}

/// `GET /routes` 路線文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDoc {
    /// 文件ID
    #[serde(rename = "_id")]
    pub id: String,

    /// 路線編號
    #[serde(rename = "routeId")]
    pub route_id: String,

    /// 距離（公里）
    #[serde(rename = "distanceKm")]
    pub distance_km: Decimal,

    /// 交通等級
    #[serde(rename = "trafficLevel")]
    pub traffic_level: TrafficLevel,

    /// 基礎運輸時間（分鐘）
    #[serde(rename = "baseTimeMin")]
    pub base_time_min: u32,
}

impl RouteDoc {
    /// 轉換為核心路線實體
    pub fn into_route(self) -> Route {
        Route::new(
            self.route_id,
            self.distance_km,
            self.traffic_level,
            self.base_time_min,
        )
    }
}

/// `GET /api/drivers` 司機文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDoc {
    /// 文件ID
    #[serde(rename = "_id")]
    pub id: String,

    /// 姓名
    pub name: String,

    /// 本班次已工作時數
    #[serde(rename = "currentShiftHours", default)]
    pub current_shift_hours: Decimal,

    /// 過去一週每日工時
    #[serde(rename = "pastWeekHours", default)]
    pub past_week_hours: Vec<Decimal>,
}

impl DriverDoc {
    /// 轉換為核心司機實體
    pub fn into_driver(self) -> Driver {
        Driver::new(self.name)
            .with_current_shift_hours(self.current_shift_hours)
            .with_past_week_hours(self.past_week_hours)
    }
}

/// 解析 `GET /orders` 回應載荷
pub fn parse_orders(payload: &str) -> Result<Vec<Order>> {
    let docs: Vec<OrderDoc> = serde_json::from_str(payload)
        .map_err(|err| SimError::Validation(format!("無法解析訂單目錄: {}", err)))?;
    Ok(docs.into_iter().map(OrderDoc::into_order).collect())
}

/// 解析 `GET /routes` 回應載荷
pub fn parse_routes(payload: &str) -> Result<Vec<Route>> {
    let docs: Vec<RouteDoc> = serde_json::from_str(payload)
        .map_err(|err| SimError::Validation(format!("無法解析路線目錄: {}", err)))?;
    Ok(docs.into_iter().map(RouteDoc::into_route).collect())
}

/// 解析 `GET /api/drivers` 回應載荷
pub fn parse_drivers(payload: &str) -> Result<Vec<Driver>> {
    let docs: Vec<DriverDoc> = serde_json::from_str(payload)
        .map_err(|err| SimError::Validation(format!("無法解析司機目錄: {}", err)))?;
    Ok(docs.into_iter().map(DriverDoc::into_driver).collect())
}
