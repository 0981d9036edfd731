//! Workbook export.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use super::error::WorkbookError;
use super::schema::{self, inputs, overhead, production, summary};
use crate::drivers::GlobalDrivers;
use crate::engine::ComputeEngine;
use crate::store::{MonthStore, Staffing};

/// Writes the store as a workbook.
///
/// Unset overrides are left blank so they stay unset on re-import; explicit
/// zeros are written. Resolved inputs and the `Summary` sheet are for
/// reading only and are ignored by [`import_workbook`](super::import_workbook).
///
/// # Errors
///
/// Returns `WorkbookError::Write` if the workbook cannot be assembled.
pub fn export_workbook(store: &MonthStore, drivers: &GlobalDrivers) -> Result<Vec<u8>, WorkbookError> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    write_inputs(sheet(&mut workbook, schema::INPUTS, &inputs::HEADERS, &header)?, store, drivers)?;
    write_production(
        sheet(&mut workbook, schema::PRODUCTION, &production::HEADERS, &header)?,
        store,
    )?;
    write_overhead(
        sheet(&mut workbook, schema::OVERHEAD, &overhead::HEADERS, &header)?,
        store,
    )?;
    write_summary(
        sheet(&mut workbook, schema::SUMMARY, &summary::HEADERS, &header)?,
        store,
        drivers,
    )?;

    let buffer = workbook.save_to_buffer()?;
    info!(bytes = buffer.len(), "Exported workbook");
    Ok(buffer)
}

/// Adds a named sheet with a bold header row.
fn sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    headers: &[&str],
    format: &Format,
) -> Result<&'a mut Worksheet, WorkbookError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;
    for (col, title) in (0u16..).zip(headers) {
        sheet.write_string_with_format(0, col, *title, format)?;
    }
    Ok(sheet)
}

fn number(sheet: &mut Worksheet, row: u32, col: u16, value: Decimal) -> Result<(), WorkbookError> {
    sheet.write_number(row, col, value.to_f64().unwrap_or_default())?;
    Ok(())
}

/// Writes `value` or leaves the cell blank.
fn optional(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<Decimal>,
) -> Result<(), WorkbookError> {
    match value {
        Some(value) => number(sheet, row, col, value),
        None => Ok(()),
    }
}

fn write_inputs(
    sheet: &mut Worksheet,
    store: &MonthStore,
    drivers: &GlobalDrivers,
) -> Result<(), WorkbookError> {
    for (row, record) in (1u32..).zip(store.records()) {
        let resolved = record.resolve(drivers);
        sheet.write_string(row, 0, record.month.short_name())?;
        optional(sheet, row, 1, record.inputs.fx)?;
        optional(sheet, row, 2, record.inputs.worked_hours)?;
        optional(sheet, row, 3, record.inputs.shrinkage)?;
        number(sheet, row, 4, resolved.fx)?;
        number(sheet, row, 5, resolved.worked_hours)?;
        number(sheet, row, 6, resolved.shrinkage)?;
    }
    Ok(())
}

fn write_production(sheet: &mut Worksheet, store: &MonthStore) -> Result<(), WorkbookError> {
    let mut row = 1u32;
    for record in store.records() {
        for lang in &record.production {
            for (index, solution) in (1u32..).zip(&lang.solutions) {
                sheet.write_string(row, 0, record.month.short_name())?;
                sheet.write_string(row, 1, lang.language.code())?;
                sheet.write_number(row, 2, f64::from(index))?;
                match solution.staffing {
                    Staffing::Flat { headcount } => number(sheet, row, 3, headcount)?,
                    Staffing::Flow {
                        opening_hc,
                        hires,
                        attrition_pct,
                        training_hc,
                    } => {
                        number(sheet, row, 9, opening_hc)?;
                        number(sheet, row, 10, hires)?;
                        optional(sheet, row, 11, attrition_pct)?;
                        number(sheet, row, 12, training_hc)?;
                    }
                }
                number(sheet, row, 4, solution.base_salary)?;
                number(sheet, row, 5, solution.unit_price)?;
                number(sheet, row, 6, solution.unit_price_training)?;
                number(sheet, row, 7, solution.secondary_unit_price)?;
                number(sheet, row, 8, solution.secondary_share)?;
                row += 1;
            }
        }
    }
    Ok(())
}

fn write_overhead(sheet: &mut Worksheet, store: &MonthStore) -> Result<(), WorkbookError> {
    let rows = store
        .records()
        .flat_map(|record| record.overhead.iter().map(move |o| (record.month, o)));
    for (row, (month, line)) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, month.short_name())?;
        sheet.write_string(row, 1, line.role.label())?;
        number(sheet, row, 2, line.headcount)?;
        number(sheet, row, 3, line.base_salary)?;
    }
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    store: &MonthStore,
    drivers: &GlobalDrivers,
) -> Result<(), WorkbookError> {
    for (row, totals) in (1u32..).zip(ComputeEngine::compute_year(store, drivers)) {
        sheet.write_string(row, 0, totals.month.short_name())?;
        number(sheet, row, 1, totals.revenue)?;
        number(sheet, row, 2, totals.cost)?;
        number(sheet, row, 3, totals.production_cost)?;
        number(sheet, row, 4, totals.overhead_cost)?;
        number(sheet, row, 5, totals.margin)?;
        number(sheet, row, 6, totals.gm_pct)?;
    }
    Ok(())
}
