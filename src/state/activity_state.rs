//! ActivityState - Recent Activity Feed

use crate::domain::activity::RecentActivity;
use crate::store::fixtures;
use crate::utils::bounded::BoundedDeque;

/// Rows shown per dashboard page
pub const ACTIVITY_PAGE_SIZE: usize = 5;

#[derive(Debug)]
pub struct ActivityState {
    entries: BoundedDeque<RecentActivity>,
}

impl ActivityState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
        }
    }

    /// Feed preloaded with the fixture entries
    pub fn seeded(capacity: usize) -> Self {
        let mut state = Self::new(capacity);
        for activity in fixtures::recent_activity() {
            state.record(activity);
        }
        state
    }

    pub fn record(&mut self, activity: RecentActivity) {
        self.entries.push(activity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(ACTIVITY_PAGE_SIZE).max(1)
    }

    /// Newest first; `page` is zero-based and clamped to the last page
    pub fn page(&self, page: usize) -> Vec<&RecentActivity> {
        let page = page.min(self.page_count() - 1);
        self.entries
            .iter_newest()
            .skip(page * ACTIVITY_PAGE_SIZE)
            .take(ACTIVITY_PAGE_SIZE)
            .collect()
    }
}

impl Default for ActivityState {
    fn default() -> Self {
        Self::seeded(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::ActivityAction;
    use crate::domain::record::EntityKind;

    #[test]
    fn test_seeded_feed_lists_newest_first() {
        let state = ActivityState::default();
        let names: Vec<_> = state.page(0).iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Enterprise Suite", "Basic Plan"]);
    }

    #[test]
    fn test_pages_of_five() {
        let mut state = ActivityState::new(20);
        for i in 0..7 {
            state.record(RecentActivity::now(
                EntityKind::Module,
                format!("Module {i}"),
                None,
                ActivityAction::Updated,
            ));
        }

        assert_eq!(state.page_count(), 2);
        assert_eq!(state.page(0).len(), 5);
        assert_eq!(state.page(0)[0].name, "Module 6");
        assert_eq!(state.page(1).len(), 2);
        assert_eq!(state.page(9).len(), 2, "clamped to the last page");
    }
}
