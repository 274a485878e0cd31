//! 司機模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 司機（持久化實體）
///
/// 僅作為目錄統計的輸入；模擬本身只取司機數量與全域班次參數，
/// 不使用個別司機的配置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// 司機ID
    pub id: Uuid,

    /// 姓名
    pub name: String,

    /// 本班次已工作時數
    pub current_shift_hours: Decimal,

    /// 過去一週每日工時
    pub past_week_hours: Vec<Decimal>,
}

impl Driver {
    /// 創建新的司機
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            current_shift_hours: Decimal::ZERO,
            past_week_hours: Vec::new(),
        }
    }

    /// 建構器模式：設置本班次工時
    pub fn with_current_shift_hours(mut self, hours: Decimal) -> Self {
        self.current_shift_hours = hours;
        self
    }

    /// 建構器模式：設置過去一週工時
    pub fn with_past_week_hours(mut self, hours: Vec<Decimal>) -> Self {
        self.past_week_hours = hours;
        self
    }

    /// 過去一週總工時
    pub fn total_week_hours(&self) -> Decimal {
        self.past_week_hours.iter().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_driver() {
        let driver = Driver::new("Amit".to_string());

        assert_eq!(driver.name, "Amit");
        assert_eq!(driver.current_shift_hours, Decimal::ZERO);
        assert!(driver.past_week_hours.is_empty());
    }

    #[test]
    fn test_driver_builder() {
        let driver = Driver::new("Priya".to_string())
            .with_current_shift_hours(Decimal::from(6))
            .with_past_week_hours(vec![
                Decimal::from(8),
                Decimal::new(75, 1), // 7.5
                Decimal::from(9),
            ]);

        assert_eq!(driver.current_shift_hours, Decimal::from(6));
        assert_eq!(driver.past_week_hours.len(), 3);
        assert_eq!(driver.total_week_hours(), Decimal::new(245, 1));
    }
}
