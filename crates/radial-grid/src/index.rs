//! Dense grid index and the table laid out over it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use radial_common::{RadialError, RadialResult};
use radial_parser::{Column, ObservationTable};
use serde::Serialize;
use tracing::warn;

use crate::selector::CoordinateSystem;

/// Most cells a grid index may span.
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// Reject a `first` × `second` grid larger than [`MAX_GRID_CELLS`].
pub fn check_grid_size(first: (&str, usize), second: (&str, usize)) -> RadialResult<()> {
    match first.1.checked_mul(second.1) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(RadialError::MalformedCoordinates(format!(
            "{} {} × {} {} cells exceed the limit of {}",
            first.1, first.0, second.1, second.0, MAX_GRID_CELLS
        ))),
    }
}

/// Labels of one grid axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisLabels {
    /// Integer slot numbers (lat/lon grids)
    Slots(Vec<i64>),
    /// Coordinate values (range/bearing grids)
    Coordinates(Vec<f64>),
}

impl AxisLabels {
    pub fn len(&self) -> usize {
        match self {
            AxisLabels::Slots(v) => v.len(),
            AxisLabels::Coordinates(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels as floats.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            AxisLabels::Slots(v) => v.iter().map(|&s| s as f64).collect(),
            AxisLabels::Coordinates(v) => v.clone(),
        }
    }
}

/// A named grid axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub name: String,
    pub labels: AxisLabels,
}

impl Axis {
    pub fn slots(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            labels: AxisLabels::Slots((0..count as i64).collect()),
        }
    }

    pub fn coordinates(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            labels: AxisLabels::Coordinates(values),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Full Cartesian product (time) × first × second.
///
/// The time axis always holds the single capture time of the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridIndex {
    pub coordinate_system: CoordinateSystem,
    pub time: DateTime<Utc>,
    pub first: Axis,
    pub second: Axis,
}

impl GridIndex {
    pub fn new(
        coordinate_system: CoordinateSystem,
        time: DateTime<Utc>,
        first: Axis,
        second: Axis,
    ) -> Self {
        Self {
            coordinate_system,
            time,
            first,
            second,
        }
    }

    /// (time, first, second) lengths.
    pub fn shape(&self) -> (usize, usize, usize) {
        (1, self.first.len(), self.second.len())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.first.len() * self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat offset of a cell, first axis major.
    pub fn offset(&self, first: usize, second: usize) -> Option<usize> {
        (first < self.first.len() && second < self.second.len())
            .then(|| first * self.second.len() + second)
    }
}

/// Table columns laid out densely in index order, NaN where no observation
/// fell.
#[derive(Debug, Clone)]
pub struct IndexedTable {
    index: GridIndex,
    columns: Vec<Column>,
    placed: usize,
    dropped: usize,
}

impl IndexedTable {
    /// Scatter table rows into the index.
    ///
    /// `cells` holds the (first, second) position of every row, `None` for a
    /// row that has no place on the grid; such rows are dropped. Columns named
    /// in `exclude` are index columns and are not carried as data. Two rows in
    /// one cell are an error.
    pub fn scatter(
        index: GridIndex,
        table: &ObservationTable,
        cells: &[Option<(usize, usize)>],
        exclude: &[&str],
    ) -> RadialResult<Self> {
        check_grid_size(
            (&index.first.name, index.first.len()),
            (&index.second.name, index.second.len()),
        )?;
        let size = index.len();
        let mut columns: Vec<Column> = table
            .columns()
            .iter()
            .filter(|c| !exclude.contains(&c.name.as_str()))
            .map(|c| Column::new(c.name.clone(), vec![f64::NAN; size]))
            .collect();

        let mut occupied = HashSet::new();
        let mut placed = 0;
        let mut dropped = 0;

        for (row, cell) in cells.iter().copied().enumerate() {
            let Some((a, b, offset)) =
                cell.and_then(|(a, b)| index.offset(a, b).map(|offset| (a, b, offset)))
            else {
                dropped += 1;
                continue;
            };
            if !occupied.insert(offset) {
                return Err(RadialError::DuplicateCell(format!(
                    "({}={}, {}={})",
                    index.first.name, a, index.second.name, b
                )));
            }

            let source = table
                .columns()
                .iter()
                .filter(|c| !exclude.contains(&c.name.as_str()));
            for (target, column) in columns.iter_mut().zip(source) {
                target.values[offset] = column.values[row];
            }
            placed += 1;
        }

        if dropped > 0 {
            warn!(
                dropped,
                placed,
                coordinate_system = %index.coordinate_system,
                "Observations outside the grid were dropped"
            );
        }

        Ok(Self {
            index,
            columns,
            placed,
            dropped,
        })
    }

    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Value of a column at a cell.
    pub fn value(&self, name: &str, first: usize, second: usize) -> Option<f64> {
        let offset = self.index.offset(first, second)?;
        self.column(name).map(|values| values[offset])
    }

    /// Rows placed on the grid.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Rows that fell outside the grid.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_parts(self) -> (GridIndex, Vec<Column>) {
        (self.index, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 2, 14, 0, 0, 0).unwrap()
    }

    fn index() -> GridIndex {
        GridIndex::new(
            CoordinateSystem::LatLon,
            time(),
            Axis::slots("i", 3),
            Axis::slots("j", 2),
        )
    }

    fn table() -> ObservationTable {
        ObservationTable::new(
            time(),
            vec![
                Column::new("LOND", vec![1.0, 2.0, 3.0]),
                Column::new("VELO", vec![10.0, 20.0, 30.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_offsets() {
        let index = index();
        assert_eq!(index.shape(), (1, 3, 2));
        assert_eq!(index.offset(2, 1), Some(5));
        assert_eq!(index.offset(3, 0), None);
    }

    #[test]
    fn test_scatter_fills_gaps_with_nan() {
        let cells = [Some((0, 0)), Some((2, 1)), None];
        let indexed = IndexedTable::scatter(index(), &table(), &cells, &[]).unwrap();
        assert_eq!(indexed.value("VELO", 0, 0), Some(10.0));
        assert_eq!(indexed.value("VELO", 2, 1), Some(20.0));
        assert!(indexed.value("VELO", 1, 0).unwrap().is_nan());
        assert_eq!((indexed.placed(), indexed.dropped()), (2, 1));
    }

    #[test]
    fn test_scatter_excludes_index_columns() {
        let cells = [Some((0, 0)), Some((0, 1)), Some((1, 0))];
        let indexed = IndexedTable::scatter(index(), &table(), &cells, &["LOND"]).unwrap();
        assert!(indexed.column("LOND").is_none());
        assert_eq!(indexed.columns().len(), 1);
    }

    #[test]
    fn test_scatter_rejects_duplicates() {
        let cells = [Some((1, 1)), Some((1, 1)), None];
        let err = IndexedTable::scatter(index(), &table(), &cells, &[]).unwrap_err();
        assert!(matches!(err, RadialError::DuplicateCell(_)));
    }

    #[test]
    fn test_grid_size_limit() {
        assert!(check_grid_size(("i", 1000), ("j", 1000)).is_ok());
        let err = check_grid_size(("i", 19), ("j", 103_644)).unwrap_err();
        assert_eq!(err.code(), "MalformedCoordinates");
        assert!(check_grid_size(("i", usize::MAX), ("j", 2)).is_err());

        let index = GridIndex::new(
            CoordinateSystem::LatLon,
            time(),
            Axis::slots("i", 2000),
            Axis::slots("j", 1000),
        );
        let err = IndexedTable::scatter(index, &table(), &[None, None, None], &[]).unwrap_err();
        assert!(matches!(err, RadialError::MalformedCoordinates(_)));
    }

    #[test]
    fn test_out_of_range_cells_are_dropped() {
        let cells = [Some((5, 0)), None, None];
        let indexed = IndexedTable::scatter(index(), &table(), &cells, &[]).unwrap();
        assert_eq!(indexed.dropped(), 3);
    }
}
