use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::quiz::catalog::Area;

pub const CSV_HEADER: [&str; 7] = [
    "timestamp",
    "area",
    "tema",
    "tipo",
    "correcto",
    "usuario",
    "resultado",
];
pub const CSV_FILE_NAME: &str = "smartform_historial.csv";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptKind {
    /// Single-topic practice outside the quiz.
    #[serde(rename = "Ejercicio")]
    Exercise,
    #[serde(rename = "PRUEBATE")]
    Quiz,
}

impl AttemptKind {
    pub fn label(&self) -> &'static str {
        match self {
            AttemptKind::Exercise => "Ejercicio",
            AttemptKind::Quiz => "PRUEBATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "ACIERTO")]
    Correct,
    #[serde(rename = "ERROR")]
    Incorrect,
}

impl Outcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Correct => "ACIERTO",
            Outcome::Incorrect => "ERROR",
        }
    }
}

/// One graded attempt. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub area: Area,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "tipo")]
    pub kind: AttemptKind,
    #[serde(rename = "correcto", serialize_with = "six_decimals")]
    pub expected: f64,
    #[serde(rename = "usuario", serialize_with = "six_decimals")]
    pub user_answer: f64,
    #[serde(rename = "resultado")]
    pub outcome: Outcome,
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} · {} · {} · {} · correcto {:.6} · tu respuesta {:.6} · {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.area,
            self.topic,
            self.kind.label(),
            self.expected,
            self.user_answer,
            self.outcome.label(),
        )
    }
}

/// Append-only log of graded attempts for one session.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    pub fn record(
        &mut self,
        area: Area,
        topic: &str,
        kind: AttemptKind,
        expected: f64,
        user_answer: f64,
        correct: bool,
    ) -> &HistoryRecord {
        self.records.push(HistoryRecord {
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            area,
            topic: topic.to_string(),
            kind,
            expected: round6(expected),
            user_answer: round6(user_answer),
            outcome: Outcome::from_correct(correct),
        });
        &self.records[self.records.len() - 1]
    }

    /// Every record in insertion order; empty slice when nothing was logged.
    pub fn snapshot(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write history row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush history csv: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes records as UTF-8 CSV. The header row is always present,
/// so an empty history still yields a valid file.
pub fn to_csv(records: &[HistoryRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.into_inner().map_err(|err| err.into_error().into())
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.6}"))
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
