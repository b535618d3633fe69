//! Form → [`QuotationRequest`] adapter.
//!
//! Field names match the HTML form served by the quotation service.

use crate::error::CoreError;
use crate::form::FormFields;
use crate::models::quotation::{ColumnHeaders, QuotationRequest, RowRecord};

pub const TO_COMPANY: &str = "to_company";
pub const TO_LOCATION: &str = "to_location";
pub const HEADERS: &str = "headers[]";
pub const VEHICLE: &str = "vehicle[]";
pub const RATE1: &str = "rate1[]";
pub const RATE2: &str = "rate2[]";
pub const RATE3: &str = "rate3[]";
pub const NOTES: &str = "notes[]";

/// Build a [`QuotationRequest`] from submitted form fields.
///
/// Header count problems are corrected silently (see
/// [`ColumnHeaders::from_submitted`]). Missing recipient fields and rate
/// columns that don't line up with the vehicle column are errors.
pub fn adapt(fields: &FormFields) -> Result<QuotationRequest, CoreError> {
    let recipient_company = required(fields, TO_COMPANY)?;
    let recipient_location = required(fields, TO_LOCATION)?;

    let column_headers = ColumnHeaders::from_submitted(fields.all(HEADERS));
    let rows = zip_rows(fields)?;

    let notes = fields
        .all(NOTES)
        .filter(|note| !note.trim().is_empty())
        .map(str::to_string)
        .collect();

    Ok(QuotationRequest {
        recipient_company,
        recipient_location,
        column_headers,
        rows,
        notes,
    })
}

fn required(fields: &FormFields, name: &str) -> Result<String, CoreError> {
    match fields.first(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(CoreError::MissingField(name.to_string())),
    }
}

fn zip_rows(fields: &FormFields) -> Result<Vec<RowRecord>, CoreError> {
    let vehicles: Vec<&str> = fields.all(VEHICLE).collect();
    let rate1 = rate_column(fields, RATE1, vehicles.len())?;
    let rate2 = rate_column(fields, RATE2, vehicles.len())?;
    let rate3 = rate_column(fields, RATE3, vehicles.len())?;

    let rows = vehicles
        .iter()
        .zip(rate1)
        .zip(rate2)
        .zip(rate3)
        .map(|(((vehicle, rate1), rate2), rate3)| RowRecord {
            vehicle: vehicle.to_string(),
            rate1: rate1.to_string(),
            rate2: rate2.to_string(),
            rate3: rate3.to_string(),
        })
        .collect();

    Ok(rows)
}

fn rate_column<'a>(
    fields: &'a FormFields,
    name: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, CoreError> {
    let values: Vec<&str> = fields.all(name).collect();
    if values.len() != expected {
        return Err(CoreError::RowLengthMismatch {
            field: name.to_string(),
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}
