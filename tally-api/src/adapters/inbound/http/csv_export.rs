//! CSV rendering of activity and production listings.

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::domain::models::{ActivityProgress, ProductionListing};

pub const ACTIVITY_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "date",
    "description",
    "goal_points",
    "completed",
    "percent",
    "created_at",
];

pub const PRODUCTION_COLUMNS: [&str; 7] = [
    "id",
    "title",
    "quantity",
    "description",
    "activity_id",
    "activity_name",
    "created_at",
];

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Activities with progress. A missing goal is written as `0`; an undefined
/// percent and missing text are written as empty fields.
pub fn activities_csv(rows: &[ActivityProgress]) -> Result<Vec<u8>, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ACTIVITY_COLUMNS)?;

    for row in rows {
        let activity = &row.activity;
        writer.write_record([
            activity.id.to_string(),
            activity.name.clone(),
            text(&activity.date),
            text(&activity.description),
            activity.goal_points.unwrap_or(0).to_string(),
            row.completed.to_string(),
            number(row.percent),
            timestamp(activity.created_at)?,
        ])?;
    }

    finish(writer)
}

/// Productions with their activity name; unset values are empty fields.
pub fn productions_csv(rows: &[ProductionListing]) -> Result<Vec<u8>, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(PRODUCTION_COLUMNS)?;

    for row in rows {
        let production = &row.production;
        writer.write_record([
            production.id.to_string(),
            production.title.clone(),
            number(production.quantity),
            text(&production.description),
            production.activity_id.to_string(),
            text(&row.activity_name),
            timestamp(production.created_at)?,
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, CsvExportError> {
    writer.into_inner().map_err(|err| err.into_error().into())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn timestamp(value: OffsetDateTime) -> Result<String, time::error::Format> {
    value.format(&Rfc3339)
}
