use serde::Serialize;

use crate::aggregate::{completion_rate, count_by_theme, count_by_trainer, leadership_count, sum_hours};
use crate::catalog::SessionStore;
use crate::config::HoursPool;

/// Headline numbers shown above every view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub upcoming_sessions: usize,
    /// Percentage of the merged pool that is completed.
    pub completion_rate: f64,
    /// Hours across completed and upcoming sessions.
    pub training_hours: f64,
    /// Hours across upcoming sessions only.
    pub upcoming_hours: f64,
    /// Leadership sessions in the upcoming plan.
    pub leadership_sessions: usize,
    pub trainer_count: usize,
    pub theme_count: usize,
}

impl DashboardStats {
    pub fn compute(store: &SessionStore) -> Self {
        let all = store.all_sessions();
        let upcoming = store.upcoming();

        let stats = Self {
            total_sessions: all.len(),
            completed_sessions: store.completed().len(),
            upcoming_sessions: upcoming.len(),
            completion_rate: completion_rate(store.completed(), all),
            training_hours: sum_hours(all),
            upcoming_hours: sum_hours(upcoming.iter().copied()),
            leadership_sessions: leadership_count(upcoming.iter().copied()),
            trainer_count: count_by_trainer(all).len(),
            theme_count: count_by_theme(all).len(),
        };
        tracing::debug!(
            total = stats.total_sessions,
            completed = stats.completed_sessions,
            rate = stats.completion_rate,
            "dashboard stats computed"
        );
        stats
    }

    /// The figure labelled "Training Hours" for the configured pool.
    pub fn headline_hours(&self, pool: HoursPool) -> f64 {
        match pool {
            HoursPool::All => self.training_hours,
            HoursPool::Upcoming => self.upcoming_hours,
        }
    }
}
