//! # Fleet Session
//!
//! 呼叫端持有的模擬會話狀態（自動重跑週期與目錄變更追蹤）

pub mod refresh;
pub mod staleness;

// Re-export 主要類型
pub use refresh::{RefreshCycle, RefreshState};
pub use staleness::CatalogTracker;
