//! 首页汇总状态
//!
//! 首页激活时并发发出五个 `list` 命令，每条结果单独填入对应的槽位。

use std::collections::HashMap;

use crate::message::{DashboardEvent, DashboardSource, SourceSummary};

/// 单个来源的显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySlot {
    Loading,
    Ready(SourceSummary),
    Failed,
}

/// 首页状态
#[derive(Debug, Default)]
pub struct DashboardState {
    ticket: u64,
    slots: HashMap<DashboardSource, SummarySlot>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始新一轮加载，所有槽位回到加载中
    pub fn begin_load(&mut self) -> u64 {
        self.ticket += 1;
        for source in DashboardSource::all() {
            self.slots.insert(*source, SummarySlot::Loading);
        }
        self.ticket
    }

    /// 填入一条结果；过期结果返回 false
    pub fn apply(&mut self, event: &DashboardEvent) -> bool {
        if event.ticket != self.ticket {
            return false;
        }
        let slot = match &event.result {
            Ok(summary) => SummarySlot::Ready(*summary),
            Err(_) => SummarySlot::Failed,
        };
        self.slots.insert(event.source, slot);
        true
    }

    pub fn slot(&self, source: DashboardSource) -> &SummarySlot {
        self.slots.get(&source).unwrap_or(&SummarySlot::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ServiceError;

    fn event(ticket: u64, result: Result<SourceSummary, ServiceError>) -> DashboardEvent {
        DashboardEvent {
            ticket,
            source: DashboardSource::Classes,
            result,
        }
    }

    #[test]
    fn test_stale_batch_is_ignored() {
        let mut state = DashboardState::new();
        let old = state.begin_load();
        let current = state.begin_load();
        let summary = SourceSummary {
            total: 3,
            pending: None,
        };

        assert!(!state.apply(&event(old, Ok(summary))));
        assert_eq!(state.slot(DashboardSource::Classes), &SummarySlot::Loading);
        assert!(state.apply(&event(current, Ok(summary))));
        assert_eq!(
            state.slot(DashboardSource::Classes),
            &SummarySlot::Ready(summary)
        );
    }

    #[test]
    fn test_failure_marks_slot() {
        let mut state = DashboardState::new();
        let ticket = state.begin_load();
        let err = ServiceError::Failed {
            operation: "list classes".to_string(),
            message: "Storage error: disk".to_string(),
            expected: false,
        };
        assert!(state.apply(&event(ticket, Err(err))));
        assert_eq!(state.slot(DashboardSource::Classes), &SummarySlot::Failed);
    }
}
