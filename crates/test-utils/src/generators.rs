//! Generators for synthetic radial tables.
//!
//! Both generators lay observations exactly on a regular grid so tests can
//! check that a dense re-index puts every value back where it came from.
//! Individual cells can be left out to exercise gap handling.

use crate::fixtures::{
    CODAR_FOOTER, CODAR_HEADER, CODAR_ORIGIN, CODAR_RANGE_RESOLUTION_KM, WERA_FOOTER,
    WERA_HEADER, WERA_ORIGIN,
};

/// Kilometers per degree of latitude used for the flat-earth positions.
const KM_PER_DEGREE: f64 = 111.0;

/// Radial velocity written for a cell, in cm/s.
///
/// Deterministic in the cell indices so that tests can recompute it.
pub fn cell_velocity(outer: usize, inner: usize) -> f64 {
    ((outer * 7 + inner * 3) % 50) as f64 - 25.0
}

/// A regular range/bearing sampling, as a CODAR SeaSonde produces.
#[derive(Debug, Clone)]
pub struct CodarGrid {
    /// Antenna site (lat, lon)
    pub origin: (f64, f64),
    /// Sampled bearings (degrees)
    pub bearings: Vec<f64>,
    /// Sampled range cell numbers; range = cell * resolution
    pub range_cells: Vec<usize>,
    /// Range resolution (km)
    pub range_resolution_km: f64,
    /// (bearing index, range index) pairs left out of the table
    pub missing: Vec<(usize, usize)>,
}

impl CodarGrid {
    /// AMAG-like sampling: bearings 100..=250 every 5 degrees, cells 2..=20.
    pub fn amag() -> Self {
        Self {
            origin: CODAR_ORIGIN,
            bearings: (20..=50).map(|k| k as f64 * 5.0).collect(),
            range_cells: (2..=20).collect(),
            range_resolution_km: CODAR_RANGE_RESOLUTION_KM,
            missing: Vec::new(),
        }
    }

    /// Leave a cell out of the generated table.
    pub fn without(mut self, bearing_index: usize, range_index: usize) -> Self {
        self.missing.push((bearing_index, range_index));
        self
    }

    /// Range in km of a range index, as written to the table.
    pub fn range_km(&self, range_index: usize) -> f64 {
        let text = format!(
            "{:.4}",
            self.range_cells[range_index] as f64 * self.range_resolution_km
        );
        text.parse().unwrap_or(f64::NAN)
    }

    /// Number of rows the table will hold.
    pub fn row_count(&self) -> usize {
        self.bearings.len() * self.range_cells.len() - self.missing.len()
    }

    /// Table rows in CODAR column order.
    pub fn rows(&self) -> Vec<String> {
        let (lat0, lon0) = self.origin;
        let mut rows = Vec::with_capacity(self.row_count());

        for (bi, &bearing) in self.bearings.iter().enumerate() {
            for (ri, &cell) in self.range_cells.iter().enumerate() {
                if self.missing.contains(&(bi, ri)) {
                    continue;
                }
                let range = cell as f64 * self.range_resolution_km;
                let (sin_b, cos_b) = bearing.to_radians().sin_cos();
                let lat = lat0 + range * cos_b / KM_PER_DEGREE;
                let lon = lon0 + range * sin_b / (KM_PER_DEGREE * lat0.to_radians().cos());
                let velo = cell_velocity(bi, ri);
                let head = (bearing + 180.0) % 360.0;
                let (sin_h, cos_h) = head.to_radians().sin_cos();

                rows.push(format!(
                    "{:>12.7} {:>11.7} {:>8.3} {:>8.3} {:>6} {:>10.3} {:>10.3} {:>8.3} {:>8.3} {:>4} {:>4} {:>10.4} {:>10.4} {:>8.4} {:>6.1} {:>8.3} {:>6.1} {:>4}",
                    lon,
                    lat,
                    velo * sin_h,
                    velo * cos_h,
                    0,
                    999.0,
                    0.5,
                    velo + 1.0,
                    velo - 1.0,
                    1,
                    3,
                    range * sin_b,
                    range * cos_b,
                    range,
                    bearing,
                    velo,
                    head,
                    cell,
                ));
            }
        }
        rows
    }
}

/// Complete CODAR file text for a grid.
pub fn codar_file(grid: &CodarGrid) -> String {
    let mut text = String::from(CODAR_HEADER);
    for row in grid.rows() {
        text.push_str(&row);
        text.push('\n');
    }
    text.push_str(CODAR_FOOTER);
    text
}

/// A regular lat/lon sampling, as a WERA produces.
#[derive(Debug, Clone)]
pub struct WeraGrid {
    /// Antenna site (lat, lon)
    pub origin: (f64, f64),
    /// Longitude of the first column (degrees)
    pub first_lon: f64,
    /// Latitude of the first row (degrees)
    pub first_lat: f64,
    /// Grid pitch in longitude (degrees)
    pub lon_step: f64,
    /// Grid pitch in latitude (degrees)
    pub lat_step: f64,
    /// Number of longitude columns
    pub nx: usize,
    /// Number of latitude rows
    pub ny: usize,
    /// (i, j) cells left out of the table
    pub missing: Vec<(usize, usize)>,
}

impl WeraGrid {
    /// GTN-like sampling: 25 x 20 cells at 0.03 degrees off the coast.
    pub fn gtn() -> Self {
        Self {
            origin: WERA_ORIGIN,
            first_lon: -79.5,
            first_lat: 32.5,
            lon_step: 0.03,
            lat_step: 0.03,
            nx: 25,
            ny: 20,
            missing: Vec::new(),
        }
    }

    /// Leave a cell out of the generated table.
    pub fn without(mut self, i: usize, j: usize) -> Self {
        self.missing.push((i, j));
        self
    }

    /// Longitude of column `i`, as written to the table.
    pub fn lon(&self, i: usize) -> f64 {
        round_text(self.first_lon + i as f64 * self.lon_step, 7)
    }

    /// Latitude of row `j`, as written to the table.
    pub fn lat(&self, j: usize) -> f64 {
        round_text(self.first_lat + j as f64 * self.lat_step, 7)
    }

    pub fn row_count(&self) -> usize {
        self.nx * self.ny - self.missing.len()
    }

    /// Table rows in WERA column order.
    pub fn rows(&self) -> Vec<String> {
        let (lat0, lon0) = self.origin;
        let mut rows = Vec::with_capacity(self.row_count());

        for i in 0..self.nx {
            for j in 0..self.ny {
                if self.missing.contains(&(i, j)) {
                    continue;
                }
                let lon = self.lon(i);
                let lat = self.lat(j);
                let x = (lon - lon0) * KM_PER_DEGREE * lat0.to_radians().cos();
                let y = (lat - lat0) * KM_PER_DEGREE;
                let range = x.hypot(y);
                let bearing = x.atan2(y).to_degrees().rem_euclid(360.0);
                let velo = cell_velocity(i, j);
                let head = (bearing + 180.0) % 360.0;
                let (sin_h, cos_h) = head.to_radians().sin_cos();

                rows.push(format!(
                    "{:>12.7} {:>11.7} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>10.4} {:>10.4} {:>8.4} {:>6.1} {:>8.3} {:>6.1}",
                    lon,
                    lat,
                    velo * sin_h,
                    velo * cos_h,
                    2.5,
                    1.5,
                    x,
                    y,
                    range,
                    bearing,
                    velo,
                    head,
                ));
            }
        }
        rows
    }
}

/// Complete WERA file text for a grid.
pub fn wera_file(grid: &WeraGrid) -> String {
    let mut text = String::from(WERA_HEADER);
    for row in grid.rows() {
        text.push_str(&row);
        text.push('\n');
    }
    text.push_str(WERA_FOOTER);
    text
}

fn round_text(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codar_rows_have_all_columns() {
        let grid = CodarGrid::amag();
        let rows = grid.rows();
        assert_eq!(rows.len(), 31 * 19);
        for row in &rows {
            assert_eq!(row.split_whitespace().count(), 18);
        }
    }

    #[test]
    fn test_missing_cells_are_left_out() {
        let grid = CodarGrid::amag().without(0, 0).without(3, 7);
        assert_eq!(grid.rows().len(), 31 * 19 - 2);
    }

    #[test]
    fn test_wera_rows_have_all_columns() {
        let grid = WeraGrid::gtn();
        let rows = grid.rows();
        assert_eq!(rows.len(), 25 * 20);
        assert!(rows.iter().all(|r| r.split_whitespace().count() == 12));
    }

    #[test]
    fn test_file_text_wraps_rows() {
        let text = codar_file(&CodarGrid::amag());
        assert!(text.starts_with("%CTF: 1.00"));
        assert!(text.trim_end().ends_with("%End:"));
    }
}
