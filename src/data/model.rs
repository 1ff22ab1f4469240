use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Indicator – one of the selectable index columns
// ---------------------------------------------------------------------------

/// The agro-climatic index shown in the chart and used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Indicator {
    /// Vegetation Condition Index.
    #[default]
    Vci,
    /// Temperature Condition Index.
    Tci,
    /// Vegetation Health Index.
    Vhi,
}

impl Indicator {
    /// Selection domain, in display order.
    pub const ALL: [Indicator; 3] = [Indicator::Vci, Indicator::Tci, Indicator::Vhi];

    /// Column name as it appears in the input file.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Vci => "VCI",
            Indicator::Tci => "TCI",
            Indicator::Vhi => "VHI",
        }
    }

    /// Read this indicator's value from a record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Indicator::Vci => record.vci,
            Indicator::Tci => record.tci,
            Indicator::Vhi => record.vhi,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the input CSV
// ---------------------------------------------------------------------------

/// A single (region, year, week) observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Year", deserialize_with = "integral")]
    pub year: i32,
    #[serde(rename = "Week", deserialize_with = "integral")]
    pub week: u32,
    /// Numeric region code, see [`super::regions`].
    #[serde(deserialize_with = "integral")]
    pub area: i64,
    #[serde(rename = "SMN", deserialize_with = "measurement")]
    pub smn: f64,
    #[serde(rename = "SMT", deserialize_with = "measurement")]
    pub smt: f64,
    #[serde(rename = "VCI", deserialize_with = "measurement")]
    pub vci: f64,
    #[serde(rename = "TCI", deserialize_with = "measurement")]
    pub tci: f64,
    #[serde(rename = "VHI", deserialize_with = "measurement")]
    pub vhi: f64,
}

/// Accept integral columns written either as `1982` or as `1982.0`
/// (files exported from a float-typed dataframe use the latter).
fn integral<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    let whole = match raw.parse::<i64>() {
        Ok(i) => i,
        Err(_) => {
            let f: f64 = raw
                .parse()
                .map_err(|_| D::Error::custom(format!("'{raw}' is not a number")))?;
            if f.fract() != 0.0 || !f.is_finite() {
                return Err(D::Error::custom(format!("'{raw}' is not an integer")));
            }
            f as i64
        }
    };
    T::try_from(whole).map_err(|_| D::Error::custom(format!("'{raw}' is out of range")))
}

/// Measurement columns: an empty cell is a missing value and reads as NaN.
fn measurement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse()
        .map_err(|_| D::Error::custom(format!("'{raw}' is not a number")))
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records in load order. Read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_reads_matching_column() {
        let r = Record {
            year: 2000,
            week: 1,
            area: 1,
            smn: 0.1,
            smt: 270.0,
            vci: 10.0,
            tci: 20.0,
            vhi: 30.0,
        };
        assert_eq!(Indicator::Vci.value(&r), 10.0);
        assert_eq!(Indicator::Tci.value(&r), 20.0);
        assert_eq!(Indicator::Vhi.value(&r), 30.0);
    }

    #[test]
    fn labels_match_csv_headers() {
        let labels: Vec<_> = Indicator::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(labels, ["VCI", "TCI", "VHI"]);
        assert_eq!(Indicator::default(), Indicator::Vci);
    }
}
