//! Labeled in-memory dataset built from a re-indexed radial table.

use chrono::{DateTime, Utc};
use radial_common::{long_name, Metadata};
use radial_grid::{CoordinateSystem, GridIndex, IndexedTable};
use radial_parser::{Dialect, Origin};
use serde::Serialize;

use crate::config::IngestConfig;
use crate::error::Result;
use crate::time::encode_time;

/// A named dimension and its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub name: String,
    pub size: usize,
}

/// A data variable over some of the dataset's dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataVariable {
    pub name: String,
    pub dims: Vec<String>,
    /// Values in dimension order, NaN where empty
    pub values: Vec<f64>,
    /// Human-readable label, when the name is a known column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
}

impl DataVariable {
    fn new(name: impl Into<String>, dims: Vec<String>, values: Vec<f64>) -> Self {
        let name = name.into();
        Self {
            long_name: long_name(&name).map(str::to_string),
            name,
            dims,
            values,
        }
    }
}

/// One radial file as a coordinate-indexed dataset.
#[derive(Debug, Clone, Serialize)]
pub struct RadialDataset {
    /// Name of the time dimension
    pub time_variable: String,
    /// CF units of `time_value`
    pub time_units: String,
    /// Capture time of the file
    pub time: DateTime<Utc>,
    /// Capture time encoded in `time_units`
    pub time_value: f64,
    pub dialect: Dialect,
    /// Grid axes; the time axis holds `time` alone
    pub index: GridIndex,
    /// Table columns over (time, first, second), then OLAT, OLON and ANTB
    /// over time
    pub variables: Vec<DataVariable>,
    /// Header fields
    pub attributes: Metadata,
    /// Observations placed on the grid
    pub observations: usize,
    /// Observations that fell outside the grid
    pub dropped: usize,
}

/// Serializable overview of a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub coordinate_system: CoordinateSystem,
    pub dialect: Dialect,
    pub time: DateTime<Utc>,
    pub dimensions: Vec<Dimension>,
    pub variables: Vec<String>,
    pub attributes: usize,
    pub observations: usize,
    pub dropped: usize,
}

impl RadialDataset {
    /// Lay out a re-indexed table with its site variables and attributes.
    pub fn assemble(
        config: &IngestConfig,
        indexed: IndexedTable,
        attributes: Metadata,
        dialect: Dialect,
        origin: Option<Origin>,
        antenna_bearing: Option<f64>,
    ) -> Result<Self> {
        let observations = indexed.placed();
        let dropped = indexed.dropped();
        let (index, columns) = indexed.into_parts();

        let time_value = encode_time(index.time, &config.cf_time_units)?;
        let grid_dims = vec![
            config.time_variable.clone(),
            index.first.name.clone(),
            index.second.name.clone(),
        ];
        let time_dims = vec![config.time_variable.clone()];

        let mut variables: Vec<DataVariable> = columns
            .into_iter()
            .map(|column| DataVariable::new(column.name, grid_dims.clone(), column.values))
            .collect();

        let site = [
            ("OLAT", origin.map(|o| o.lat)),
            ("OLON", origin.map(|o| o.lon)),
            ("ANTB", antenna_bearing),
        ];
        for (name, value) in site {
            variables.push(DataVariable::new(
                name,
                time_dims.clone(),
                vec![value.unwrap_or(f64::NAN)],
            ));
        }

        Ok(Self {
            time_variable: config.time_variable.clone(),
            time_units: config.cf_time_units.clone(),
            time: index.time,
            time_value,
            dialect,
            index,
            variables,
            attributes,
            observations,
            dropped,
        })
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.index.coordinate_system
    }

    /// Dimensions in order: time, then the two grid axes.
    pub fn dimensions(&self) -> Vec<Dimension> {
        let (time, first, second) = self.index.shape();
        vec![
            Dimension {
                name: self.time_variable.clone(),
                size: time,
            },
            Dimension {
                name: self.index.first.name.clone(),
                size: first,
            },
            Dimension {
                name: self.index.second.name.clone(),
                size: second,
            },
        ]
    }

    pub fn variable(&self, name: &str) -> Option<&DataVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Values of a coordinate variable (the time or a grid axis).
    pub fn coordinate(&self, name: &str) -> Option<Vec<f64>> {
        if name == self.time_variable {
            Some(vec![self.time_value])
        } else if name == self.index.first.name {
            Some(self.index.first.labels.to_f64())
        } else if name == self.index.second.name {
            Some(self.index.second.labels.to_f64())
        } else {
            None
        }
    }

    /// Label of a variable or coordinate, when it has one.
    pub fn long_name(&self, name: &str) -> Option<&str> {
        if name == self.time_variable {
            return long_name("TIME");
        }
        match self.variable(name) {
            Some(variable) => variable.long_name.as_deref(),
            None => long_name(name),
        }
    }

    /// Value of a grid variable at a cell.
    pub fn value(&self, name: &str, first: usize, second: usize) -> Option<f64> {
        let offset = self.index.offset(first, second)?;
        let variable = self.variable(name)?;
        (variable.dims.len() == 3).then(|| variable.values[offset])
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            coordinate_system: self.coordinate_system(),
            dialect: self.dialect,
            time: self.time,
            dimensions: self.dimensions(),
            variables: self.variables.iter().map(|v| v.name.clone()).collect(),
            attributes: self.attributes.len(),
            observations: self.observations,
            dropped: self.dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use radial_grid::{Axis, IndexedTable};
    use radial_parser::{Column, ObservationTable};

    fn indexed() -> IndexedTable {
        let time = Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap();
        let table = ObservationTable::new(
            time,
            vec![
                Column::new("BEAR", vec![5.0, 10.0]),
                Column::new("RNGE", vec![1.5, 1.5]),
                Column::new("VELO", vec![-3.0, 4.0]),
            ],
        )
        .unwrap();
        let index = GridIndex::new(
            CoordinateSystem::RangeBearing,
            time,
            Axis::coordinates("BEAR", vec![5.0, 10.0]),
            Axis::coordinates("RNGE", vec![1.5, 3.0]),
        );
        IndexedTable::scatter(index, &table, &[Some((0, 0)), Some((1, 0))], &["BEAR", "RNGE"])
            .unwrap()
    }

    fn dataset() -> RadialDataset {
        let mut attributes = Metadata::new();
        attributes.insert("Site", "AMAG \"\"");
        RadialDataset::assemble(
            &IngestConfig::default(),
            indexed(),
            attributes,
            Dialect::Codar,
            Some(Origin {
                lat: 40.9693333,
                lon: -72.1237,
            }),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_dimensions_and_coordinates() {
        let ds = dataset();
        let dims: Vec<(String, usize)> = ds
            .dimensions()
            .into_iter()
            .map(|d| (d.name, d.size))
            .collect();
        assert_eq!(
            dims,
            vec![
                ("time".to_string(), 1),
                ("BEAR".to_string(), 2),
                ("RNGE".to_string(), 2)
            ]
        );
        assert_eq!(ds.coordinate("RNGE"), Some(vec![1.5, 3.0]));
        assert_eq!(ds.coordinate("time"), Some(vec![1_518_566_400.0]));
        assert_eq!(ds.coordinate("VELO"), None);
    }

    #[test]
    fn test_site_variables() {
        let ds = dataset();
        let olat = ds.variable("OLAT").unwrap();
        assert_eq!(olat.dims, vec!["time"]);
        assert_eq!(olat.values, vec![40.9693333]);
        assert!(ds.variable("ANTB").unwrap().values[0].is_nan());
        assert_eq!(ds.value("OLAT", 0, 0), None);
    }

    #[test]
    fn test_labels() {
        let ds = dataset();
        assert_eq!(ds.long_name("VELO"), Some("Velocity (cm/s)"));
        assert_eq!(ds.long_name("BEAR"), Some("Bearing (True)"));
        assert_eq!(ds.long_name("time"), Some("time"));
        assert_eq!(ds.long_name("OLON"), Some("Origin Longitude"));
    }

    #[test]
    fn test_values_and_summary() {
        let ds = dataset();
        assert_eq!(ds.value("VELO", 1, 0), Some(4.0));
        assert!(ds.value("VELO", 1, 1).unwrap().is_nan());

        let summary = ds.summary();
        assert_eq!(summary.variables, vec!["VELO", "OLAT", "OLON", "ANTB"]);
        assert_eq!(summary.attributes, 1);
        assert_eq!(summary.observations, 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["coordinate_system"], "range_bearing");
        assert_eq!(json["dialect"], "codar");
    }
}
