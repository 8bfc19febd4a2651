//! Collection boundary: raw store documents become typed records here.
//!
//! A document that fails to deserialize or validate is logged and counted,
//! never propagated, so one bad record cannot sink a whole report.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{CountryRecord, MatchRecord, PlayerRecord};
use std::fmt;
use validator::Validate;

/// Why a document was left out.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Malformed(String),
    Invalid(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed(msg) => write!(f, "malformed document: {}", msg),
            SkipReason::Invalid(msg) => write!(f, "invalid document: {}", msg),
        }
    }
}

/// A skipped document, identified by its store id when it had one.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub document: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub struct IngestReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> IngestReport<T> {
    pub fn skipped_count(&self) -> u32 {
        self.skipped.len() as u32
    }
}

/// Deserializes and validates one document.
pub fn parse_document<T>(document: Value) -> Result<T, SkipReason>
where
    T: DeserializeOwned + Validate,
{
    let record: T =
        serde_json::from_value(document).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    record
        .validate()
        .map_err(|e| SkipReason::Invalid(e.to_string()))?;
    Ok(record)
}

fn document_label(document: &Value, position: usize) -> String {
    document
        .get("_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", position))
}

fn ingest<T>(collection: &str, documents: Vec<Value>) -> IngestReport<T>
where
    T: DeserializeOwned + Validate,
{
    let mut records = Vec::with_capacity(documents.len());
    let mut skipped = Vec::new();

    for (position, document) in documents.into_iter().enumerate() {
        let label = document_label(&document, position);
        match parse_document::<T>(document) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!("Omitiendo documento {} de {}: {}", label, collection, reason);
                skipped.push(SkippedRecord {
                    document: label,
                    reason,
                });
            }
        }
    }

    IngestReport { records, skipped }
}

pub fn ingest_matches(documents: Vec<Value>) -> IngestReport<MatchRecord> {
    ingest("historial", documents)
}

pub fn ingest_players(documents: Vec<Value>) -> IngestReport<PlayerRecord> {
    ingest("jugadores", documents)
}

pub fn ingest_countries(documents: Vec<Value>) -> IngestReport<CountryRecord> {
    ingest("paises", documents)
}
