//! Observation table of a radial file.
//!
//! Rows are whitespace separated numbers, one record per line; anything
//! after a `%` on a line is a comment. The table is stored column-major with
//! missing cells as NaN, and every record shares the file's capture time.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use radial_common::{RadialError, RadialResult};
use tracing::debug;

/// A named table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Observations of one radial file.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    time: DateTime<Utc>,
    columns: Vec<Column>,
    rows: usize,
}

impl ObservationTable {
    /// Build a table from columns of equal length with unique names.
    pub fn new(time: DateTime<Utc>, columns: Vec<Column>) -> RadialResult<Self> {
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(RadialError::InvalidTable {
                    line: 0,
                    message: format!("duplicate column '{}'", column.name),
                });
            }
            if column.values.len() != rows {
                return Err(RadialError::InvalidTable {
                    line: 0,
                    message: format!(
                        "column '{}' has {} values, expected {}",
                        column.name,
                        column.values.len(),
                        rows
                    ),
                });
            }
        }

        Ok(Self {
            time,
            columns,
            rows,
        })
    }

    /// Parse table rows out of file text.
    ///
    /// Header and footer lines are comments and are skipped along with blank
    /// lines. A row shorter than `names` is padded with NaN; a longer row or a
    /// cell that is not a number is an error.
    pub fn parse(content: &str, names: &[String], time: DateTime<Utc>) -> RadialResult<Self> {
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

        for (index, line) in content.lines().enumerate() {
            let data = line.split('%').next().unwrap_or_default();
            let tokens: Vec<&str> = data.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() > names.len() {
                return Err(RadialError::InvalidTable {
                    line: index + 1,
                    message: format!(
                        "{} fields for {} declared columns",
                        tokens.len(),
                        names.len()
                    ),
                });
            }

            for (column, slot) in values.iter_mut().enumerate() {
                let value = match tokens.get(column) {
                    Some(token) => token.parse::<f64>().map_err(|_| RadialError::InvalidTable {
                        line: index + 1,
                        message: format!("'{}' in column {} is not a number", token, names[column]),
                    })?,
                    None => f64::NAN,
                };
                slot.push(value);
            }
        }

        let columns = names
            .iter()
            .zip(values)
            .map(|(name, values)| Column::new(name.clone(), values))
            .collect();
        let table = Self::new(time, columns)?;

        debug!(rows = table.len(), columns = names.len(), "Parsed observation table");
        Ok(table)
    }

    /// Read and parse the table of a file.
    pub fn from_path(
        path: impl AsRef<Path>,
        names: &[String],
        time: DateTime<Utc>,
    ) -> RadialResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::parse(&String::from_utf8_lossy(&bytes), names, time)
    }

    /// Capture time shared by every record.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// A column that must exist.
    pub fn require(&self, name: &str) -> RadialResult<&[f64]> {
        self.column(name)
            .ok_or_else(|| RadialError::MissingColumn(name.to_string()))
    }

    /// Number of distinct values in a column; 0 when it is absent.
    ///
    /// Undefined cells count once, as a single extra value.
    pub fn unique_count(&self, name: &str) -> usize {
        let Some(values) = self.column(name) else {
            return 0;
        };
        let mut defined: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let undefined = usize::from(defined.len() < values.len());
        defined.sort_by(f64::total_cmp);
        defined.dedup();
        defined.len() + undefined
    }

    /// Reject a table whose coordinates are all undefined.
    ///
    /// Both LATD and LOND must be NaN (or absent) on every row for this to
    /// fail; such a file cannot be placed on any grid.
    pub fn check_coordinates(&self) -> RadialResult<()> {
        let undefined = |name: &str| {
            self.column(name)
                .map(|values| values.iter().all(|v| v.is_nan()))
                .unwrap_or(true)
        };
        if undefined("LATD") && undefined("LOND") {
            return Err(RadialError::MalformedCoordinates(
                "all LATD and LOND values are undefined, unable to reindex".to_string(),
            ));
        }
        Ok(())
    }
}
