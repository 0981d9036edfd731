//! Session-scoped store of all twelve month records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffplan_shared::types::Month;

use super::error::StoreError;
use super::types::{Language, MAX_SOLUTIONS, MonthRecord, OverheadRow, Role, SolutionRow};
use crate::drivers::normalize_fraction;

/// The twelve month records of one planning session.
///
/// Records are created eagerly with zeroed rows and are never removed. The
/// store has no interior mutability: one session owns one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStore {
    records: Vec<MonthRecord>,
}

impl MonthStore {
    /// Creates a store with a zeroed record for every month.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Month::ALL.into_iter().map(MonthRecord::new).collect(),
        }
    }

    /// Record of a month.
    #[must_use]
    pub fn record(&self, month: Month) -> &MonthRecord {
        &self.records[month.index()]
    }

    /// Mutable record of a month.
    pub fn record_mut(&mut self, month: Month) -> &mut MonthRecord {
        &mut self.records[month.index()]
    }

    /// All records in calendar order.
    pub fn records(&self) -> impl Iterator<Item = &MonthRecord> {
        self.records.iter()
    }

    /// Sets or clears the FX override of a month.
    pub fn set_fx(&mut self, month: Month, fx: Option<Decimal>) {
        self.record_mut(month).inputs.fx = fx;
    }

    /// Sets or clears the worked-hours override of a month.
    pub fn set_worked_hours(&mut self, month: Month, worked_hours: Option<Decimal>) {
        self.record_mut(month).inputs.worked_hours = worked_hours;
    }

    /// Sets or clears the shrinkage override of a month.
    ///
    /// Values above 1 are read as whole percentages.
    pub fn set_shrinkage(&mut self, month: Month, shrinkage: Option<Decimal>) {
        self.record_mut(month).inputs.shrinkage = shrinkage.map(normalize_fraction);
    }

    /// A solution row, if the language has that many solutions.
    #[must_use]
    pub fn solution(&self, month: Month, language: Language, index: usize) -> Option<&SolutionRow> {
        self.record(month).language(language).solutions.get(index)
    }

    /// Mutable solution row, if the language has that many solutions.
    pub fn solution_mut(
        &mut self,
        month: Month,
        language: Language,
        index: usize,
    ) -> Option<&mut SolutionRow> {
        self.record_mut(month)
            .language_mut(language)
            .solutions
            .get_mut(index)
    }

    /// Mutable overhead row of a role.
    pub fn overhead_mut(&mut self, month: Month, role: Role) -> &mut OverheadRow {
        self.record_mut(month).role_mut(role)
    }

    /// Grows or shrinks a language's solution list.
    ///
    /// New solutions are appended zeroed; removal truncates from the end.
    /// Existing solutions keep their index and values either way.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SolutionLimit` if `count` exceeds
    /// [`MAX_SOLUTIONS`]; the record is left unchanged.
    pub fn set_solution_count(
        &mut self,
        month: Month,
        language: Language,
        count: usize,
    ) -> Result<(), StoreError> {
        if count > MAX_SOLUTIONS {
            return Err(StoreError::SolutionLimit {
                language,
                requested: count,
                max: MAX_SOLUTIONS,
            });
        }
        self.record_mut(month)
            .language_mut(language)
            .solutions
            .resize(count, SolutionRow::default());
        Ok(())
    }
}

impl Default for MonthStore {
    fn default() -> Self {
        Self::new()
    }
}
