//! # Deadline Scheduler
//!
//! Expands the taxonomy's recurring legal-task rules into concrete due
//! dates for the calendar period containing "today", filtered by
//! enterprise scale. A "season" is a fixed 3-month quarter (Jan–Mar,
//! Apr–Jun, Jul–Sep, Oct–Dec), not a fiscal year.
//!
//! The clock is injectable: callers pass `today` explicitly, so repeated
//! generation for the same date is deterministic and idempotent. Task
//! identifiers are copied verbatim from the rules; deduplication against
//! already-persisted tasks is the caller's job.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use counsel_core::{EnterpriseProfile, LegalTask, TaskStatus};
use counsel_taxonomy::DeadlineRule;

use crate::RuleEngine;

impl RuleEngine {
    /// Generate legal tasks relative to the system clock's current date.
    pub fn generate_legal_tasks_today(&self, profile: &EnterpriseProfile) -> Vec<LegalTask> {
        self.generate_legal_tasks(profile, Utc::now().date_naive())
    }

    /// Generate legal tasks for the period containing `today`.
    ///
    /// Rules whose `applies_to_scale` does not include the profile's
    /// scale are skipped, as are rules with an unrecognized deadline
    /// tag — a taxonomy data-quality issue, not a runtime error.
    pub fn generate_legal_tasks(
        &self,
        profile: &EnterpriseProfile,
        today: NaiveDate,
    ) -> Vec<LegalTask> {
        let mut tasks = Vec::new();
        for rule in self.taxonomy().recurring_tasks() {
            if !rule
                .applies_to_scales
                .iter()
                .any(|scale| scale == &profile.scale_name)
            {
                continue;
            }

            let due_date = match rule.deadline_rule {
                DeadlineRule::EndOfMonth => end_of_month(today),
                DeadlineRule::FifteenDaysAfterSeasonEnd => {
                    season_end(today) + Duration::days(15)
                }
                DeadlineRule::FortyFiveDaysAfterSeasonEnd => {
                    season_end(today) + Duration::days(45)
                }
                DeadlineRule::Unknown => {
                    tracing::warn!(
                        task_id = %rule.task_id,
                        "unrecognized deadline rule tag, skipping task"
                    );
                    continue;
                }
            };

            tasks.push(LegalTask {
                task_id: rule.task_id.clone(),
                title: rule.title.clone(),
                responsible_body: rule.responsible_body.clone(),
                due_date,
                status: TaskStatus::Pending,
            });
        }
        tasks
    }
}

/// Last calendar day of the month containing `date`.
fn end_of_month(date: NaiveDate) -> NaiveDate {
    last_day_of_month(date.year(), date.month())
}

/// Last calendar day of the 3-month quarter containing `date`.
fn season_end(date: NaiveDate) -> NaiveDate {
    let quarter_end_month = ((date.month() - 1) / 3) * 3 + 3;
    last_day_of_month(date.year(), quarter_end_month)
}

/// The last day of a month is the day before the first of the next one.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MIN)
}
