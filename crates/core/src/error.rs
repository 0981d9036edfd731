//! Conversions from module errors into the application error.

use staffplan_shared::AppError;

use crate::drivers::DriverError;
use crate::store::StoreError;
use crate::workbook::WorkbookError;

impl From<DriverError> for AppError {
    fn from(err: DriverError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<WorkbookError> for AppError {
    fn from(err: WorkbookError) -> Self {
        match err {
            WorkbookError::Write(_) => Self::Export(err.to_string()),
            _ => Self::Import(err.to_string()),
        }
    }
}
