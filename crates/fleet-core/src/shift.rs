//! 班次時鐘

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// 模擬司機的班次時鐘
///
/// 從班次開始時間起逐單累計配送時間，
/// 用於判斷累計工時是否仍在班次窗口內。
#[derive(Debug, Clone)]
pub struct ShiftClock {
    /// 班次開始時間
    start_time: NaiveTime,

    /// 班次窗口（分鐘）
    window_min: Decimal,

    /// 已累計時間（分鐘）
    elapsed_min: Decimal,
}

impl ShiftClock {
    /// 創建新的班次時鐘
    pub fn new(start_time: NaiveTime, max_hours: u32) -> Self {
        Self {
            start_time,
            window_min: Decimal::from(max_hours * 60),
            elapsed_min: Decimal::ZERO,
        }
    }

    /// 推進時鐘並返回累計時間（分鐘）
    pub fn advance(&mut self, duration_min: Decimal) -> Decimal {
        self.elapsed_min += duration_min;
        self.elapsed_min
    }

    /// 已累計時間（分鐘）
    pub fn elapsed_min(&self) -> Decimal {
        self.elapsed_min
    }

    /// 班次窗口（分鐘）
    pub fn window_min(&self) -> Decimal {
        self.window_min
    }

    /// 檢查累計時間是否仍在班次窗口內
    ///
    /// 剛好等於窗口算準時，嚴格超過才算遲到。
    pub fn within_window(&self) -> bool {
        self.elapsed_min <= self.window_min
    }

    /// 班次開始時間
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// 當前時刻（開始時間加上累計分鐘，跨日自動回繞）
    pub fn current_time(&self) -> NaiveTime {
        let whole_min = self
            .elapsed_min
            .trunc()
            .to_string()
            .parse::<i64>()
            .unwrap_or(0);
        self.start_time + chrono::Duration::minutes(whole_min)
    }
}
