//! Trip CSV input and result output

use std::io::{Read, Write};

use domain::entities::{BatchSummary, TripResult, TripRow};
use serde::Serialize;

/// Column holding the trip origin
pub const ORIGIN_COLUMN: &str = "Type of Asset";
/// Column holding the vehicle description
pub const VEHICLE_COLUMN: &str = "Type of vehicle";
/// Column holding the trip destination
pub const DESTINATION_COLUMN: &str = "Location";
/// Column holding the fuel description
pub const FUEL_COLUMN: &str = "Type of fuel";

const REQUIRED_COLUMNS: [&str; 4] = [
    ORIGIN_COLUMN,
    VEHICLE_COLUMN,
    DESTINATION_COLUMN,
    FUEL_COLUMN,
];

/// Errors raised while reading trip rows
#[derive(Debug, thiserror::Error)]
pub enum CsvInputError {
    /// The header lacks one or more required columns
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Malformed CSV
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read trip rows from CSV with a header line
///
/// Extra columns are ignored; cell values are trimmed.
pub fn read_trip_rows<R: Read>(reader: R) -> Result<Vec<TripRow>, CsvInputError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| position(name).is_none())
        .map(ToString::to_string)
        .collect();
    let [Some(origin), Some(vehicle), Some(destination), Some(fuel)] =
        REQUIRED_COLUMNS.map(position)
    else {
        return Err(CsvInputError::MissingColumns(missing));
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |index: usize| record.get(index).unwrap_or_default();
        rows.push(TripRow::new(
            cell(origin),
            cell(destination),
            cell(vehicle),
            cell(fuel),
        ));
    }
    Ok(rows)
}

/// Output header, in `OutputRecord` field order
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "From (Asset)",
    "To (Location)",
    VEHICLE_COLUMN,
    FUEL_COLUMN,
    "short_route_km",
    "long_route_km",
    "emissions_WTW_short_kg",
    "emissions_WTW_long_kg",
    "ors_profile",
    "error",
];

/// One output line per processed row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "From (Asset)")]
    pub from: String,
    #[serde(rename = "To (Location)")]
    pub to: String,
    #[serde(rename = "Type of vehicle")]
    pub vehicle_type: String,
    #[serde(rename = "Type of fuel")]
    pub fuel_type: String,
    pub short_route_km: Option<f64>,
    pub long_route_km: Option<f64>,
    #[serde(rename = "emissions_WTW_short_kg")]
    pub emissions_wtw_short_kg: Option<f64>,
    #[serde(rename = "emissions_WTW_long_kg")]
    pub emissions_wtw_long_kg: Option<f64>,
    /// Routing profile, only set for successful rows
    pub ors_profile: Option<String>,
    /// Failure description, only set for failed rows
    pub error: Option<String>,
}

impl From<&TripResult> for OutputRecord {
    fn from(result: &TripResult) -> Self {
        let row = result.row();
        let route = result.route();
        let emissions = result.emissions();

        Self {
            from: row.origin.clone(),
            to: row.destination.clone(),
            vehicle_type: row.vehicle_type.clone(),
            fuel_type: row.fuel_type.clone(),
            short_route_km: route.short_distance_km,
            long_route_km: route.long_distance_km,
            emissions_wtw_short_kg: emissions.short_kg,
            emissions_wtw_long_kg: emissions.long_kg,
            ors_profile: result
                .is_success()
                .then(|| result.profile().to_string()),
            error: result.failure().map(ToString::to_string),
        }
    }
}

/// Write results as CSV with a header line
///
/// The header is written even when there are no results.
pub fn write_csv<W: Write>(writer: W, results: &[TripResult]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    if results.is_empty() {
        writer.write_record(OUTPUT_COLUMNS)?;
    }
    for result in results {
        writer.serialize(OutputRecord::from(result))?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<OutputRecord>,
    summary: &'a BatchSummary,
}

/// Write results and the batch summary as pretty JSON
pub fn write_json<W: Write>(
    writer: W,
    results: &[TripResult],
    summary: &BatchSummary,
) -> Result<(), serde_json::Error> {
    let report = JsonReport {
        results: results.iter().map(OutputRecord::from).collect(),
        summary,
    };
    serde_json::to_writer_pretty(writer, &report)
}
