//! The roster, the week sheets and the current pause rules in one document.
//!
//! A [`Ledger`] is what the data file holds. It owns the employees, every
//! stored week record (keyed by ISO week, then by employee id) and the
//! settings used for all recomputation. The save workflow lives here: store
//! the records, reconcile them, and commit the new running balances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::{WeeklyReportRow, build_report_row, reconcile};
use crate::config::PauseRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeDraft, WeekKey, WeekRecord, WeeklyResult};

/// All week records stored for one ISO week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSheet {
    /// Records by employee id.
    #[serde(default)]
    pub employees: BTreeMap<String, WeekRecord>,
}

/// The persisted state of the engine.
///
/// # Examples
///
/// ```
/// use worktime_engine::config::PauseRules;
/// use worktime_engine::models::{DayEntry, EmployeeDraft, WeekKey, WeekRecord, WorkWeekday};
/// use worktime_engine::store::Ledger;
///
/// let mut ledger = Ledger::new(PauseRules::default());
/// let mia = ledger
///     .add_employee(EmployeeDraft {
///         name: "Mia".to_string(),
///         weekly_target_minutes: 2310,
///         active: true,
///         balance_minutes: 0,
///     })
///     .unwrap();
///
/// let mut week = WeekRecord::default();
/// for day in WorkWeekday::ALL {
///     week = week.with_day(day, DayEntry::workday("08:00", "16:30"));
/// }
/// let key = WeekKey::new(2026, 3).unwrap();
/// let results = ledger.save_week(key, vec![(mia.id.clone(), week)]).unwrap();
///
/// assert_eq!(results[0].new_balance_minutes, 90);
/// assert_eq!(ledger.employee(&mia.id).unwrap().balance_minutes, 90);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    weeks: BTreeMap<WeekKey, WeekSheet>,
    #[serde(default)]
    settings: PauseRules,
}

impl Ledger {
    /// Creates an empty ledger with the given pause rules.
    pub fn new(settings: PauseRules) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The pause rules applied to every calculation.
    pub fn settings(&self) -> &PauseRules {
        &self.settings
    }

    /// Replaces the pause rules.
    ///
    /// Stored week records are not touched; every later calculation of any
    /// week uses the new rules.
    pub fn update_settings(&mut self, settings: PauseRules) {
        info!(
            threshold_minutes = settings.threshold_minutes,
            short_pause_minutes = settings.short_pause_minutes,
            long_pause_minutes = settings.long_pause_minutes,
            count_non_work_as_work = settings.count_non_work_as_work,
            "Pause rules updated"
        );
        self.settings = settings;
    }

    /// Every employee on the roster, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Employees that take part in week planning and reports.
    pub fn active_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.active)
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    fn employee_mut(&mut self, id: &str) -> EngineResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Adds an employee with a freshly generated id and returns it.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> EngineResult<Employee> {
        let employee = Employee::from_draft(draft)?;
        info!(
            employee_id = %employee.id,
            name = %employee.name,
            weekly_target_minutes = employee.weekly_target_minutes,
            "Employee added"
        );
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Overwrites an employee's editable fields and returns the result.
    pub fn update_employee(&mut self, id: &str, draft: EmployeeDraft) -> EngineResult<Employee> {
        let employee = self.employee_mut(id)?;
        employee.apply_draft(draft)?;
        info!(
            employee_id = %employee.id,
            balance_minutes = employee.balance_minutes,
            active = employee.active,
            "Employee updated"
        );
        Ok(employee.clone())
    }

    /// Removes an employee from the roster.
    ///
    /// Week records already stored for the employee are kept.
    pub fn remove_employee(&mut self, id: &str) -> EngineResult<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        let removed = self.employees.remove(index);
        info!(employee_id = %removed.id, "Employee removed");
        Ok(removed)
    }

    /// The stored record, if any.
    pub fn week_record(&self, employee_id: &str, key: WeekKey) -> Option<&WeekRecord> {
        self.weeks
            .get(&key)
            .and_then(|sheet| sheet.employees.get(employee_id))
    }

    /// The stored record with all five days present, or a default record.
    ///
    /// Nothing is written; a week never stored reads as zero carry and five
    /// empty workdays.
    pub fn week_record_or_default(&self, employee_id: &str, key: WeekKey) -> WeekRecord {
        self.week_record(employee_id, key)
            .cloned()
            .map(WeekRecord::normalized)
            .unwrap_or_default()
    }

    /// The record to show when opening a week for editing.
    ///
    /// A zero carry is replaced by the employee's running balance when that
    /// is non-zero, so a new week starts from where the last one ended.
    pub fn prefilled_week_record(&self, employee_id: &str, key: WeekKey) -> EngineResult<WeekRecord> {
        let employee = self.employee(employee_id)?;
        let mut record = self.week_record_or_default(employee_id, key);
        if record.carry_prev_minutes == 0 && employee.balance_minutes != 0 {
            debug!(
                employee_id = %employee_id,
                week = %key,
                balance_minutes = employee.balance_minutes,
                "Prefilling carry from running balance"
            );
            record.carry_prev_minutes = employee.balance_minutes;
        }
        Ok(record)
    }

    /// Stores a record, replacing any previous one for the same employee and week.
    pub fn put_week_record(&mut self, employee_id: &str, key: WeekKey, record: WeekRecord) -> EngineResult<()> {
        self.employee(employee_id)?;
        self.store_record(employee_id, key, record);
        Ok(())
    }

    fn store_record(&mut self, employee_id: &str, key: WeekKey, record: WeekRecord) {
        self.weeks
            .entry(key)
            .or_default()
            .employees
            .insert(employee_id.to_string(), record.normalized());
    }

    /// Stores every row of a week, reconciles it and commits the balances.
    ///
    /// All employee ids are checked before anything is written, so an
    /// unknown id leaves the ledger untouched.
    pub fn save_week(
        &mut self,
        key: WeekKey,
        rows: Vec<(String, WeekRecord)>,
    ) -> EngineResult<Vec<WeeklyResult>> {
        for (employee_id, _) in &rows {
            self.employee(employee_id)?;
        }

        let mut results = Vec::with_capacity(rows.len());
        for (employee_id, record) in rows {
            self.store_record(&employee_id, key, record);
            let record = self.week_record_or_default(&employee_id, key);
            let settings = self.settings.clone();
            let employee = self.employee_mut(&employee_id)?;
            let result = reconcile(&record, employee, &settings);
            employee.balance_minutes = result.new_balance_minutes;

            info!(
                employee_id = %employee_id,
                week = %key,
                weekly_total = result.weekly_total_minutes,
                difference = result.difference_minutes,
                new_balance = result.new_balance_minutes,
                "Week saved"
            );
            results.push(result);
        }
        Ok(results)
    }

    /// Report rows for every active employee, computed from the stored records.
    pub fn weekly_report(&self, key: WeekKey) -> Vec<WeeklyReportRow> {
        self.active_employees()
            .map(|employee| {
                let record = self.week_record_or_default(&employee.id, key);
                let result = reconcile(&record, employee, &self.settings);
                build_report_row(employee, key, &result)
            })
            .collect()
    }
}
