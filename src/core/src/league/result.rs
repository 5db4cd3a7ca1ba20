use crate::league::ScheduleItem;
use serde::Serialize;

/// Fixtures of one tour as they stand after being played.
#[derive(Debug, Clone, Serialize)]
pub struct TourResult {
    pub week: u16,
    pub items: Vec<ScheduleItem>,
}

impl TourResult {
    pub fn new(week: u16, items: Vec<ScheduleItem>) -> Self {
        TourResult { week, items }
    }

    pub fn total_goals(&self) -> u32 {
        self.items
            .iter()
            .filter_map(|i| i.result)
            .map(|s| s.total_goals())
            .sum()
    }
}
