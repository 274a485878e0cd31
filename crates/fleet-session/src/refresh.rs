//! 自動重跑週期

use fleet_core::SimulationRequest;

/// 重跑週期狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// 閒置（未排程）
    Idle,

    /// 已排程，等待下一次執行
    Armed,

    /// 執行中
    InFlight,
}

/// 自動重跑週期
///
/// 由呼叫端持有的顯式狀態，取代模組層級的「上次參數」快取：
/// 成功後重新排程、卸載時取消、絕不重疊執行。
#[derive(Debug, Clone)]
pub struct RefreshCycle {
    state: RefreshState,
    request: Option<SimulationRequest>,
}

impl RefreshCycle {
    /// 創建閒置的週期
    pub fn new() -> Self {
        Self {
            state: RefreshState::Idle,
            request: None,
        }
    }

    /// 排程下一次執行
    ///
    /// 手動執行會取代既有排程參數；執行中的批次不受影響，
    /// 完成後以新參數重新排程。
    pub fn arm(&mut self, request: SimulationRequest) {
        self.request = Some(request);
        if self.state != RefreshState::InFlight {
            self.state = RefreshState::Armed;
        }
    }

    /// 取出待執行的請求並進入執行狀態
    ///
    /// 已有執行中的批次時回傳 None，確保不會有重疊的重複請求。
    pub fn begin(&mut self) -> Option<SimulationRequest> {
        if self.state != RefreshState::Armed {
            return None;
        }

        match self.request.clone() {
            Some(request) => {
                self.state = RefreshState::InFlight;
                Some(request)
            }
            None => None,
        }
    }

    /// 回報執行成功，以相同參數重新排程
    pub fn complete(&mut self) {
        if self.state != RefreshState::InFlight {
            return;
        }

        self.state = match self.request {
            Some(_) => RefreshState::Armed,
            None => RefreshState::Idle,
        };
    }

    /// 取消週期（元件卸載時呼叫）
    pub fn cancel(&mut self) {
        self.state = RefreshState::Idle;
        self.request = None;
    }

    /// 當前狀態
    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// 檢查是否有執行中的批次
    pub fn is_in_flight(&self) -> bool {
        self.state == RefreshState::InFlight
    }

    /// 取得待執行的請求引用
    pub fn pending_request(&self) -> Option<&SimulationRequest> {
        self.request.as_ref()
    }
}

impl Default for RefreshCycle {
    fn default() -> Self {
        Self::new()
    }
}
