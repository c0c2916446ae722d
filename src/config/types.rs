//! Configuration types for working-time calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `settings.yaml` and from the persisted ledger.

use serde::{Deserialize, Serialize};

/// Default pause threshold: 9:15 worked.
pub const DEFAULT_PAUSE_THRESHOLD_MINUTES: u32 = 555;
/// Default break deducted at or below the threshold.
pub const DEFAULT_SHORT_PAUSE_MINUTES: u32 = 30;
/// Default break deducted above the threshold.
pub const DEFAULT_LONG_PAUSE_MINUTES: u32 = 45;

/// The break-deduction rule and the non-work day option.
///
/// Every calculation takes the rules as an explicit argument. Changing them
/// changes every recomputed result, including weeks stored earlier.
///
/// # Example
///
/// ```
/// use worktime_engine::config::PauseRules;
///
/// let rules = PauseRules::default();
/// assert_eq!(rules.threshold_minutes, 555);
/// assert_eq!(rules.pause_for(555), 30);
/// assert_eq!(rules.pause_for(556), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseRules {
    /// Raw-minute boundary; the short pause applies at or below it.
    #[serde(alias = "pause_threshold_min")]
    pub threshold_minutes: u32,
    /// Break deducted when raw minutes are at or below the threshold.
    #[serde(alias = "pause_short_min")]
    pub short_pause_minutes: u32,
    /// Break deducted when raw minutes exceed the threshold.
    #[serde(alias = "pause_long_min")]
    pub long_pause_minutes: u32,
    /// Whether vacation, sick and holiday days are credited toward the target.
    #[serde(alias = "count_vacation_as_work")]
    pub count_non_work_as_work: bool,
    /// Fixed credit per non-work day. When unset, a fifth of the weekly target is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_work_day_credit_minutes: Option<u32>,
}

impl Default for PauseRules {
    fn default() -> Self {
        Self {
            threshold_minutes: DEFAULT_PAUSE_THRESHOLD_MINUTES,
            short_pause_minutes: DEFAULT_SHORT_PAUSE_MINUTES,
            long_pause_minutes: DEFAULT_LONG_PAUSE_MINUTES,
            count_non_work_as_work: false,
            non_work_day_credit_minutes: None,
        }
    }
}

impl PauseRules {
    /// The break for a day with `raw_minutes` worked (> 0).
    pub fn pause_for(&self, raw_minutes: i64) -> i64 {
        if raw_minutes <= i64::from(self.threshold_minutes) {
            i64::from(self.short_pause_minutes)
        } else {
            i64::from(self.long_pause_minutes)
        }
    }
}

/// Settings file structure (`settings.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    /// Pause rule section; missing keys take their defaults.
    #[serde(default)]
    pub pause_rules: PauseRules,
}
