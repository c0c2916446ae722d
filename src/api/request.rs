//! Request types for the working-time API.
//!
//! Durations typed by a person (weekly target, opening balance) arrive as
//! `HH:MM` text and are validated here before they reach the roster. Day
//! times are checked the same way before a week record is stored.

use serde::{Deserialize, Serialize};

use crate::calculation::{MAX_DURATION_MINUTES, parse_clock, parse_duration};
use crate::config::PauseRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeDraft, WeekRecord};

/// Request body for the `/calculate` endpoint.
///
/// Computes one week without touching the ledger. When `pause_rules` is
/// absent the ledger's current settings are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee whose target is reconciled against.
    pub employee: Employee,
    /// The week to compute.
    pub week: WeekRecord,
    /// Optional rule override for this calculation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_rules: Option<PauseRules>,
}

/// Employee fields as entered on the add/edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Display name.
    pub name: String,
    /// Weekly target as `HH:MM`, e.g. `38:30`.
    pub weekly_target: String,
    /// Whether the employee is active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Running balance as signed `HH:MM`, e.g. `-02:15`. Blank is zero.
    #[serde(default)]
    pub balance: String,
}

fn default_active() -> bool {
    true
}

impl TryFrom<EmployeeRequest> for EmployeeDraft {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        let target = parse_duration(&req.weekly_target)?;
        let weekly_target_minutes =
            u32::try_from(target).map_err(|_| EngineError::InvalidEmployee {
                field: "weekly_target".to_string(),
                message: format!("'{}' must not be negative", req.weekly_target.trim()),
            })?;
        let balance_minutes = parse_duration(&req.balance)?;

        Ok(EmployeeDraft {
            name: req.name,
            weekly_target_minutes,
            active: req.active,
            balance_minutes,
        })
    }
}

/// One employee's row in a week save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveWeekRow {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The edited record.
    pub week: WeekRecord,
}

/// Request body for `POST /weeks/:year/:week/save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveWeekRequest {
    /// Every row shown in the week editor.
    pub rows: Vec<SaveWeekRow>,
}

impl SaveWeekRequest {
    /// Validates every row and returns them as `(employee_id, record)` pairs.
    pub fn into_rows(self) -> EngineResult<Vec<(String, WeekRecord)>> {
        self.rows
            .into_iter()
            .map(|row| {
                validate_entered_times(&row.week)?;
                Ok((row.employee_id, row.week))
            })
            .collect()
    }
}

/// Rejects a week record whose day times are not valid clock times, or whose
/// carried balance lies beyond what a duration can hold.
///
/// Blank and absent times are allowed; they make their span count as zero.
pub fn validate_entered_times(record: &WeekRecord) -> EngineResult<()> {
    if record.carry_prev_minutes.unsigned_abs() > MAX_DURATION_MINUTES.unsigned_abs() {
        return Err(EngineError::ValueOutOfRange {
            field: "carry_prev_minutes".to_string(),
            value: record.carry_prev_minutes,
        });
    }
    for entry in record.days.values() {
        for (start, end) in entry.spans() {
            for text in [start, end].into_iter().flatten() {
                if parse_clock(text)? < 0 {
                    return Err(EngineError::InvalidTimeFormat {
                        text: text.trim().to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
