//! 路線模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 交通等級
///
/// 影響路線的運輸時間與燃料費率。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrafficLevel {
    /// 低
    Low,
    /// 中
    Medium,
    /// 高
    High,
}

impl TrafficLevel {
    /// 所有交通等級（由低到高）
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];

    /// 對外 API 使用的名稱
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "Low",
            TrafficLevel::Medium => "Medium",
            TrafficLevel::High => "High",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 配送路線（引擎的不可變參考資料）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// 路線ID
    pub id: Uuid,

    /// 路線編號（業務代碼）
    pub route_id: String,

    /// 距離（公里）
    pub distance_km: Decimal,

    /// 交通等級
    pub traffic_level: TrafficLevel,

    /// 基礎運輸時間（分鐘）
    pub base_time_min: u32,
}

impl Route {
    /// 創建新的路線
    pub fn new(
        route_id: String,
        distance_km: Decimal,
        traffic_level: TrafficLevel,
        base_time_min: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            route_id,
            distance_km,
            traffic_level,
            base_time_min,
        }
    }

    /// 檢查是否為高交通路線
    pub fn is_high_traffic(&self) -> bool {
        self.traffic_level == TrafficLevel::High
    }
}
