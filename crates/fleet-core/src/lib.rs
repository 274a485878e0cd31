//! # Fleet Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod cost;
pub mod driver;
pub mod order;
pub mod request;
pub mod route;
pub mod shift;

// Re-export 主要類型
pub use config::{AssignmentStrategy, SimulationConfig};
pub use cost::FuelCostBreakdown;
pub use driver::Driver;
pub use order::Order;
pub use request::{SimulationRequest, MAX_SHIFT_HOURS};
pub use route::{Route, TrafficLevel};
pub use shift::ShiftClock;

/// 模擬引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("無效的模擬參數: {0}")]
    Validation(String),

    #[error("找不到路線: {0}")]
    UnknownRoute(String),

    #[error("計算超出限制: {0}")]
    Timeout(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
