//! # Fleet API
//!
//! 模擬服務的 JSON 邊界（DTO 與轉換，不含路由框架）

pub mod catalog;
pub mod dto;
pub mod error;

// Re-export 主要類型
pub use catalog::{parse_drivers, parse_orders, parse_routes, DriverDoc, OrderDoc, RouteDoc};
pub use dto::{SimulateRequestDto, SimulateResponseDto};
pub use error::{http_status, ErrorBody};
