//! Cell coercion for imported sheets.

use std::collections::HashMap;
use std::str::FromStr;

use calamine::{Data, DataType, Range};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use staffplan_shared::types::Month;

use super::error::WorkbookError;

/// A sheet with its header row resolved to column positions.
pub struct Table {
    name: &'static str,
    columns: HashMap<String, usize>,
    range: Range<Data>,
}

impl Table {
    /// Reads the header row of `range`.
    pub fn new(name: &'static str, range: Range<Data>) -> Self {
        let columns = range
            .rows()
            .next()
            .map(|header| {
                header
                    .iter()
                    .enumerate()
                    .filter_map(|(i, cell)| match cell {
                        Data::String(s) => Some((s.trim().to_string(), i)),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            name,
            columns,
            range,
        }
    }

    /// Sheet name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fails unless every key column is present.
    pub fn require(&self, columns: &[&'static str]) -> Result<(), WorkbookError> {
        match columns.iter().find(|c| !self.columns.contains_key(**c)) {
            Some(column) => Err(WorkbookError::MissingColumn {
                sheet: self.name,
                column: *column,
            }),
            None => Ok(()),
        }
    }

    /// Data rows (header excluded), skipping rows with no content at all.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let first_row = self.range.start().map_or(0, |(row, _)| row);
        self.range
            .rows()
            .zip(first_row..)
            .skip(1)
            .filter(|(cells, _)| cells.iter().any(|c| !c.is_empty()))
            .map(move |(cells, index)| Row {
                table: self,
                cells,
                number: index + 1,
            })
    }
}

/// One data row of a [`Table`].
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [Data],
    number: u32,
}

impl Row<'_> {
    /// One-based spreadsheet row number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Cell under `column`, if the column exists.
    pub fn cell(&self, column: &str) -> Option<&Data> {
        self.table
            .columns
            .get(column)
            .and_then(|&i| self.cells.get(i))
    }

    /// Cell content as display text, for diagnostics.
    pub fn text(&self, column: &str) -> String {
        self.cell(column).map(ToString::to_string).unwrap_or_default()
    }

    /// Month key of the row, if recognizable.
    pub fn month(&self, column: &str) -> Option<Month> {
        self.cell(column).and_then(parse_month)
    }

    /// Numeric cell. Blank or absent is `None`; anything non-numeric fails.
    pub fn decimal(&self, column: &'static str) -> Result<Option<Decimal>, WorkbookError> {
        let Some(cell) = self.cell(column) else {
            return Ok(None);
        };
        parse_decimal(cell).map_err(|()| WorkbookError::Parse {
            sheet: self.table.name,
            row: self.number,
            column,
            value: cell.to_string(),
        })
    }
}

/// Largest magnitude accepted from a numeric cell. Products of two such
/// values, and their sums across a year, stay well inside `Decimal`.
const MAX_MAGNITUDE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Reads a numeric cell. `Ok(None)` for blanks.
fn parse_decimal(cell: &Data) -> Result<Option<Decimal>, ()> {
    let value = match cell {
        Data::Empty => Ok(None),
        Data::Int(i) => Ok(Some(Decimal::from(*i))),
        Data::Float(f) => Decimal::from_f64(*f).map(Some).ok_or(()),
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .map(Some)
                .map_err(|_| ())
        }
        _ => Err(()),
    }?;
    match value {
        Some(v) if v.abs() > MAX_MAGNITUDE => Err(()),
        _ => Ok(value),
    }
}

/// Reads a month key from a name, a 1-based number or a date.
pub fn parse_month(cell: &Data) -> Option<Month> {
    match cell {
        Data::String(s) => s.parse::<Month>().ok().or_else(|| month_of_date_text(s)),
        Data::Int(i) => u32::try_from(*i).ok().and_then(Month::from_number),
        Data::Float(f) => {
            let value = Decimal::from_f64(*f)?;
            if !value.fract().is_zero() {
                return None;
            }
            value.to_u32().and_then(Month::from_number)
        }
        Data::DateTime(_) => cell.as_date().and_then(|d| Month::from_number(d.month())),
        Data::DateTimeIso(s) => month_of_date_text(s),
        _ => None,
    }
}

fn month_of_date_text(text: &str) -> Option<Month> {
    let text = text.trim();
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })?;
    Month::from_number(date.month())
}

/// Reads a one-based positive integer, e.g. a solution index.
pub fn parse_index(cell: &Data) -> Option<usize> {
    match cell {
        Data::Int(i) => usize::try_from(*i).ok().filter(|i| *i >= 1),
        Data::Float(f) => {
            let value = Decimal::from_f64(*f)?;
            if !value.fract().is_zero() {
                return None;
            }
            value.to_usize().filter(|i| *i >= 1)
        }
        Data::String(s) => s.trim().parse::<usize>().ok().filter(|i| *i >= 1),
        _ => None,
    }
}
