//! Structs and methods for loading race results.
use crate::errors::RelayError;
use serde::Deserialize;
use std::fs::File;

/// Holder struct to read race result records from csv.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Overall finish place.
    pub place: i32,
    /// Division label, e.g. "M4049".
    pub division: String,
    /// Clock time from the starting gun.
    pub gun_time: String,
    /// Chip time from crossing the start mat.
    pub net_time: String,
    /// Net pace in minutes per mile, written "M:SS".
    pub pace: String,
}

impl Record {
    /// Convert csv records to Record structs.
    pub fn read(path: &str) -> Result<Vec<Record>, RelayError> {
        let mut record = Vec::new();
        let var = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(var);
        for result in rdr.records() {
            let row = result?;
            let row: Record = row.deserialize(None)?;
            record.push(row);
        }
        log::info!("Read {} result records.", record.len());
        Ok(record)
    }

    /// Average speed in miles per hour derived from the pace field.
    /// A pace of "M:SS" minutes per mile converts to `60 / (M + SS/60)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relay::prelude::*;
    /// let rec = Record {
    ///     place: 1,
    ///     division: "M2039".to_string(),
    ///     gun_time: "46:35".to_string(),
    ///     net_time: "46:33".to_string(),
    ///     pace: "7:30".to_string(),
    /// };
    /// assert_eq!(8.0, rec.speed().unwrap());
    /// ```
    pub fn speed(&self) -> Result<f64, RelayError> {
        let parts: Vec<&str> = self.pace.split(':').collect();
        if parts.len() != 2 {
            return Err(RelayError::ParseError);
        }
        let minutes: f64 = parts[0].parse()?;
        let seconds: f64 = parts[1].parse()?;
        let minutes_per_mile = minutes + seconds / 60.0;
        if !(minutes_per_mile > 0.0) {
            return Err(RelayError::ParseError);
        }
        Ok(60.0 / minutes_per_mile)
    }
}

/// Extract average speeds from a result set, in record order.
/// Fails on the first record with a malformed pace.
pub fn speeds(records: &[Record]) -> Result<Vec<f64>, RelayError> {
    let mut spd = Vec::with_capacity(records.len());
    for rec in records {
        spd.push(rec.speed()?);
    }
    Ok(spd)
}
