//! Workbook import.
//!
//! The import is a sparse overlay: blank cells keep the stored value. All
//! rows are applied to a staged copy, which is swapped into the store only
//! when the whole workbook has been read without error.

use std::io::Cursor;

use calamine::{Reader, Xlsx, open_workbook_from_rs};
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::cell::{Row, Table, parse_index};
use super::error::WorkbookError;
use super::report::{ImportReport, SkipReason, SkippedRow};
use super::schema::{self, inputs, overhead, production};
use crate::drivers::normalize_fraction;
use crate::store::{Language, MAX_SOLUTIONS, MonthStore, Role, SolutionRow, Staffing};

/// Reads a workbook into `store`.
///
/// # Errors
///
/// Returns `WorkbookError::Schema` naming every missing required sheet,
/// `WorkbookError::MissingColumn` if a key column is absent,
/// `WorkbookError::Parse` for a non-numeric or oversized value in a numeric
/// column, and
/// `WorkbookError::Read` if the bytes are not a workbook. On any error the
/// store is left untouched.
pub fn import_workbook(bytes: &[u8], store: &mut MonthStore) -> Result<ImportReport, WorkbookError> {
    let mut workbook = open_workbook_from_rs::<Xlsx<_>, _>(Cursor::new(bytes))
        .map_err(|e| WorkbookError::Read(e.to_string()))?;

    let names = workbook.sheet_names();
    let missing: Vec<String> = schema::REQUIRED_SHEETS
        .iter()
        .filter(|required| !names.iter().any(|name| name == *required))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "Rejected workbook with missing sheets");
        return Err(WorkbookError::Schema { missing });
    }

    let inputs_table = load_table(&mut workbook, schema::INPUTS)?;
    let production_table = load_table(&mut workbook, schema::PRODUCTION)?;
    let overhead_table = load_table(&mut workbook, schema::OVERHEAD)?;
    inputs_table.require(&[schema::MONTH])?;
    production_table.require(&[schema::MONTH, production::LANGUAGE])?;
    overhead_table.require(&[schema::MONTH, overhead::ROLE])?;

    let mut staged = store.clone();
    let mut report = ImportReport::default();
    apply_inputs(&inputs_table, &mut staged, &mut report)?;
    apply_production(&production_table, &mut staged, &mut report)?;
    apply_overhead(&overhead_table, &mut staged, &mut report)?;

    *store = staged;
    info!(
        rows_applied = report.rows_applied,
        rows_skipped = report.skipped.len(),
        "Imported workbook"
    );
    Ok(report)
}

fn load_table(
    workbook: &mut Xlsx<Cursor<&[u8]>>,
    name: &'static str,
) -> Result<Table, WorkbookError> {
    let range = workbook
        .worksheet_range(name)
        .map_err(|e| WorkbookError::Read(e.to_string()))?;
    Ok(Table::new(name, range))
}

fn skip(report: &mut ImportReport, row: &Row<'_>, sheet: &'static str, reason: SkipReason) {
    warn!(sheet, row = row.number(), %reason, "Skipped workbook row");
    report.skipped.push(SkippedRow {
        sheet,
        row: row.number(),
        reason,
    });
}

/// Scales a percentage down and checks the result lies in `[0, 1)`.
///
/// A full 100% shrinkage or attrition would leave no productive or
/// surviving heads, so such rows are reported instead of applied.
fn rate(value: Decimal) -> Option<Decimal> {
    let value = normalize_fraction(value);
    (Decimal::ZERO..Decimal::ONE).contains(&value).then_some(value)
}

fn out_of_range(column: &'static str, value: Decimal) -> SkipReason {
    SkipReason::OutOfRange {
        column,
        value: value.to_string(),
    }
}

fn apply_inputs(
    table: &Table,
    store: &mut MonthStore,
    report: &mut ImportReport,
) -> Result<(), WorkbookError> {
    for row in table.rows() {
        let Some(month) = row.month(schema::MONTH) else {
            skip(report, &row, table.name(), SkipReason::UnknownMonth(row.text(schema::MONTH)));
            continue;
        };

        let fx = row.decimal(inputs::FX)?;
        let worked_hours = row.decimal(inputs::WORKED_HOURS)?;
        let shrinkage = match row.decimal(inputs::SHRINKAGE)? {
            Some(raw) => match rate(raw) {
                Some(shrinkage) => Some(shrinkage),
                None => {
                    skip(report, &row, table.name(), out_of_range(inputs::SHRINKAGE, raw));
                    continue;
                }
            },
            None => None,
        };

        let overrides = &mut store.record_mut(month).inputs;
        if fx.is_some() {
            overrides.fx = fx;
        }
        if worked_hours.is_some() {
            overrides.worked_hours = worked_hours;
        }
        if shrinkage.is_some() {
            overrides.shrinkage = shrinkage;
        }
        report.rows_applied += 1;
    }
    Ok(())
}

/// Numeric fields of one production row, `None` where the cell was blank.
struct ProductionCells {
    hc: Option<Decimal>,
    salary: Option<Decimal>,
    unit_price: Option<Decimal>,
    unit_price_training: Option<Decimal>,
    secondary_unit_price: Option<Decimal>,
    secondary_share: Option<Decimal>,
    opening_hc: Option<Decimal>,
    hires: Option<Decimal>,
    attrition_pct: Option<Decimal>,
    training_hc: Option<Decimal>,
}

impl ProductionCells {
    fn read(row: &Row<'_>) -> Result<Self, WorkbookError> {
        Ok(Self {
            hc: row.decimal(production::HC)?,
            salary: row.decimal(production::SALARY)?,
            unit_price: row.decimal(production::UNIT_PRICE)?,
            unit_price_training: row.decimal(production::UNIT_PRICE_TRAINING)?,
            secondary_unit_price: row.decimal(production::SECONDARY_UNIT_PRICE)?,
            secondary_share: row.decimal(production::SECONDARY_SHARE)?.map(normalize_fraction),
            opening_hc: row.decimal(production::OPENING_HC)?,
            hires: row.decimal(production::HIRES)?,
            attrition_pct: row.decimal(production::ATTRITION_PCT)?,
            training_hc: row.decimal(production::TRAINING_HC)?,
        })
    }

    fn has_flow(&self) -> bool {
        self.opening_hc.is_some()
            || self.hires.is_some()
            || self.attrition_pct.is_some()
            || self.training_hc.is_some()
    }

    /// Overlays the non-blank cells onto `target`.
    fn overlay(&self, target: &mut SolutionRow) {
        if self.has_flow() {
            let (opening_hc, hires, attrition_pct, training_hc) = match target.staffing {
                Staffing::Flow {
                    opening_hc,
                    hires,
                    attrition_pct,
                    training_hc,
                } => (opening_hc, hires, attrition_pct, training_hc),
                Staffing::Flat { .. } => (Decimal::ZERO, Decimal::ZERO, None, Decimal::ZERO),
            };
            target.staffing = Staffing::Flow {
                opening_hc: self.opening_hc.unwrap_or(opening_hc),
                hires: self.hires.unwrap_or(hires),
                attrition_pct: self.attrition_pct.or(attrition_pct),
                training_hc: self.training_hc.unwrap_or(training_hc),
            };
        } else if let Some(headcount) = self.hc {
            target.staffing = Staffing::Flat { headcount };
        }

        let fields = [
            (&mut target.base_salary, self.salary),
            (&mut target.unit_price, self.unit_price),
            (&mut target.unit_price_training, self.unit_price_training),
            (&mut target.secondary_unit_price, self.secondary_unit_price),
            (&mut target.secondary_share, self.secondary_share),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

fn apply_production(
    table: &Table,
    store: &mut MonthStore,
    report: &mut ImportReport,
) -> Result<(), WorkbookError> {
    for row in table.rows() {
        let Some(month) = row.month(schema::MONTH) else {
            skip(report, &row, table.name(), SkipReason::UnknownMonth(row.text(schema::MONTH)));
            continue;
        };
        let language_text = row.text(production::LANGUAGE);
        let Ok(language) = language_text.parse::<Language>() else {
            skip(report, &row, table.name(), SkipReason::UnknownLanguage(language_text));
            continue;
        };
        let solution = match row.cell(production::SOLUTION) {
            None | Some(calamine::Data::Empty) => Some(1),
            Some(cell) => parse_index(cell).filter(|i| *i <= MAX_SOLUTIONS),
        };
        let Some(solution) = solution else {
            skip(
                report,
                &row,
                table.name(),
                SkipReason::InvalidSolution(row.text(production::SOLUTION)),
            );
            continue;
        };

        let mut cells = ProductionCells::read(&row)?;
        if let Some(raw) = cells.attrition_pct {
            let Some(attrition_pct) = rate(raw) else {
                skip(report, &row, table.name(), out_of_range(production::ATTRITION_PCT, raw));
                continue;
            };
            cells.attrition_pct = Some(attrition_pct);
        }

        let solutions = &mut store.record_mut(month).language_mut(language).solutions;
        if solutions.len() < solution {
            solutions.resize(solution, SolutionRow::default());
        }
        cells.overlay(&mut solutions[solution - 1]);
        report.rows_applied += 1;
    }
    Ok(())
}

fn apply_overhead(
    table: &Table,
    store: &mut MonthStore,
    report: &mut ImportReport,
) -> Result<(), WorkbookError> {
    for row in table.rows() {
        let Some(month) = row.month(schema::MONTH) else {
            skip(report, &row, table.name(), SkipReason::UnknownMonth(row.text(schema::MONTH)));
            continue;
        };
        let role_text = row.text(overhead::ROLE);
        let Ok(role) = role_text.parse::<Role>() else {
            skip(report, &row, table.name(), SkipReason::UnknownRole(role_text));
            continue;
        };

        let headcount = row.decimal(overhead::HC)?;
        let salary = row.decimal(overhead::SALARY)?;

        let target = store.overhead_mut(month, role);
        if let Some(headcount) = headcount {
            target.headcount = headcount;
        }
        if let Some(salary) = salary {
            target.base_salary = salary;
        }
        report.rows_applied += 1;
    }
    Ok(())
}
