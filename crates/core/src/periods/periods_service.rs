use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::periods::periods_model::{CategorizedPeriods, EvaluationPeriod, PeriodStatus};

/// Returns the period the backend marks as current, if any.
pub fn current_period(periods: &[EvaluationPeriod]) -> Option<&EvaluationPeriod> {
    periods.iter().find(|p| p.is_current())
}

/// Picks the period a dashboard should load.
///
/// A requested id that is not in `periods` falls back to the current period,
/// then to the first available one. Only an empty list is an error.
pub fn resolve_period(
    periods: &[EvaluationPeriod],
    requested: Option<&str>,
) -> Result<EvaluationPeriod> {
    if let Some(requested_id) = requested {
        if let Some(period) = periods.iter().find(|p| p.id == requested_id) {
            return Ok(period.clone());
        }
        warn!(
            "[Periods] Requested evaluation period '{}' not found, falling back",
            requested_id
        );
    }

    let fallback = current_period(periods)
        .or_else(|| periods.first())
        .cloned()
        .ok_or(Error::NoEvaluationPeriod)?;

    debug!(
        "[Periods] Using evaluation period '{}' ({})",
        fallback.name, fallback.id
    );
    Ok(fallback)
}

/// Splits periods into current / upcoming / past, keeping the input order
/// within each group.
pub fn categorize_periods(periods: &[EvaluationPeriod]) -> CategorizedPeriods {
    let mut categorized = CategorizedPeriods::default();
    for period in periods {
        match period.status {
            PeriodStatus::Active if categorized.current.is_none() => {
                categorized.current = Some(period.clone());
            }
            // A second active period is a backend inconsistency; list it as upcoming.
            PeriodStatus::Active | PeriodStatus::Draft => categorized.upcoming.push(period.clone()),
            PeriodStatus::Completed | PeriodStatus::Cancelled => {
                categorized.past.push(period.clone())
            }
        }
    }
    categorized
}
