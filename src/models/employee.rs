//! Employee model and the draft used to create or edit one.
//!
//! The roster owns exactly one [`Employee`] per id. Reconciliation only ever
//! proposes a new running balance; writing it back is the caller's decision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents an employee whose weekly hours are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, opaque identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contractual weekly target in minutes.
    #[serde(default, alias = "weekly_target_min")]
    pub weekly_target_minutes: u32,
    /// Whether the employee appears in week planning and reports.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Running balance in minutes carried from the last reconciled week.
    #[serde(default, alias = "balance_min")]
    pub balance_minutes: i64,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Creates an employee with a freshly generated id from a validated draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_engine::models::{Employee, EmployeeDraft};
    ///
    /// let draft = EmployeeDraft {
    ///     name: "  Mia Keller ".to_string(),
    ///     weekly_target_minutes: 2310,
    ///     active: true,
    ///     balance_minutes: 0,
    /// };
    /// let employee = Employee::from_draft(draft).unwrap();
    /// assert!(employee.id.starts_with("emp_"));
    /// assert_eq!(employee.name, "Mia Keller");
    /// ```
    pub fn from_draft(draft: EmployeeDraft) -> EngineResult<Self> {
        let draft = draft.validated()?;
        Ok(Self {
            id: Self::generate_id(),
            name: draft.name,
            weekly_target_minutes: draft.weekly_target_minutes,
            active: draft.active,
            balance_minutes: draft.balance_minutes,
        })
    }

    /// Overwrites every editable field with the values of a validated draft.
    pub fn apply_draft(&mut self, draft: EmployeeDraft) -> EngineResult<()> {
        let draft = draft.validated()?;
        self.name = draft.name;
        self.weekly_target_minutes = draft.weekly_target_minutes;
        self.active = draft.active;
        self.balance_minutes = draft.balance_minutes;
        Ok(())
    }

    /// Returns the weekly target as signed minutes for balance arithmetic.
    pub fn weekly_target(&self) -> i64 {
        i64::from(self.weekly_target_minutes)
    }

    fn generate_id() -> String {
        format!("emp_{}", Uuid::new_v4().simple())
    }
}

/// The editable fields of an employee, as supplied on add or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// Display name; surrounding whitespace is trimmed.
    pub name: String,
    /// Contractual weekly target in minutes.
    pub weekly_target_minutes: u32,
    /// Whether the employee is active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Opening or corrected running balance in minutes.
    #[serde(default)]
    pub balance_minutes: i64,
}

impl EmployeeDraft {
    fn validated(mut self) -> EngineResult<Self> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        self.name = trimmed.to_string();
        Ok(self)
    }
}
