//! # Fleetsim
//!
//! 配送物流模擬與 KPI 引擎

// Re-export 主要類型
pub use fleet_api::{ErrorBody, SimulateRequestDto, SimulateResponseDto};
pub use fleet_calc::{SimulationResult, SimulationWarning, Simulator};
pub use fleet_core::{
    AssignmentStrategy, Driver, FuelCostBreakdown, Order, Route, ShiftClock, SimError,
    SimulationConfig, SimulationRequest, TrafficLevel,
};
pub use fleet_session::{CatalogTracker, RefreshCycle};
pub use fleet_stats::{CatalogTotals, StatsReport};
