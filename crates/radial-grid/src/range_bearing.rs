//! Range/bearing re-indexing.
//!
//! Range and bearing axes are rebuilt from the observed extremes by stepping
//! at the declared resolution: down towards zero, across the observed span,
//! and up to the maximum range (or the full circle for bearings).

use std::collections::HashMap;

use radial_common::{RadialError, RadialResult};
use radial_parser::ObservationTable;
use serde::Serialize;
use tracing::{debug, warn};

use crate::axis::{
    arange, arange_len, gaps, is_multiple, is_multiple_at, key, min_gap, round_to,
    unique_sorted, MAX_AXIS_LEN,
};
use crate::index::{Axis, GridIndex, IndexedTable};
use crate::selector::CoordinateSystem;

/// Decimals bearings are compared at.
const BEARING_DECIMALS: u32 = 7;

/// Upper stop of the bearing axis, just past a full turn.
const BEARING_STOP: f64 = 360.1;

/// Slack past the maximum range so the last cell is kept.
const RANGE_SLACK_KM: f64 = 0.01;

/// Inputs of the range/bearing re-indexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBearingParams {
    /// Bearing step (degrees); `None` or zero uses the smallest observed gap
    pub angular_resolution: Option<f64>,
    /// Range step (km)
    pub range_resolution_km: f64,
    /// Decimals ranges are compared at
    pub range_precision: u32,
    /// Maximum range (km)
    pub max_range_km: f64,
    /// Length of the range axis
    pub range_cells: usize,
}

/// Re-index a table on (time, BEAR, RNGE).
///
/// BEAR and RNGE become the index and are removed from the data columns.
pub fn reindex_range_bearing(
    table: &ObservationTable,
    params: &RangeBearingParams,
) -> RadialResult<IndexedTable> {
    let bearings = table.require("BEAR")?;
    let ranges = table.require("RNGE")?;

    let unique_bearings = unique_sorted(bearings);
    let unique_ranges = unique_sorted(ranges);
    if unique_bearings.is_empty() || unique_ranges.is_empty() {
        return Err(RadialError::MalformedCoordinates(
            "no defined BEAR/RNGE values".to_string(),
        ));
    }

    let declared = params.angular_resolution.filter(|a| *a != 0.0);
    let angular_resolution = match declared {
        Some(a) => a,
        None => min_gap(&unique_bearings).ok_or_else(|| {
            RadialError::MalformedCoordinates(
                "angular resolution unknown and fewer than two distinct bearings".to_string(),
            )
        })?,
    };
    if !(angular_resolution > 0.0 && angular_resolution.is_finite()) {
        return Err(RadialError::invalid_metadata(
            "AngularResolution",
            format!("must be positive, found {}", angular_resolution),
        ));
    }
    if !(params.range_resolution_km > 0.0 && params.range_resolution_km.is_finite()) {
        return Err(RadialError::invalid_metadata(
            "RangeResolutionKMeters",
            format!("must be positive, found {}", params.range_resolution_km),
        ));
    }
    check_axis_lengths(
        params,
        angular_resolution,
        declared.is_some(),
        &unique_bearings,
        &unique_ranges,
    )?;

    for gap in gaps(&unique_ranges) {
        let gap = round_to(gap, params.range_precision);
        if !is_multiple_at(gap, params.range_resolution_km, params.range_precision) {
            return Err(RadialError::grid_spacing("RNGE", gap, params.range_resolution_km));
        }
    }
    for gap in gaps(&unique_bearings) {
        if !is_multiple(gap, angular_resolution) {
            return Err(RadialError::grid_spacing("BEAR", gap, angular_resolution));
        }
    }

    let range_labels = range_axis(&unique_ranges, params);
    let bearing_labels = bearing_axis(&unique_bearings, angular_resolution);

    debug!(
        angular_resolution,
        range_resolution_km = params.range_resolution_km,
        range_precision = params.range_precision,
        bearings = bearing_labels.len(),
        ranges = range_labels.len(),
        "Range/bearing grid"
    );

    let bearing_slots = lookup(&bearing_labels, BEARING_DECIMALS);
    let range_slots = lookup(&range_labels, params.range_precision);
    let cells: Vec<Option<(usize, usize)>> = bearings
        .iter()
        .zip(ranges)
        .map(|(&bearing, &range)| {
            if bearing.is_nan() || range.is_nan() {
                return None;
            }
            let b = bearing_slots.get(&key(bearing, BEARING_DECIMALS))?;
            let r = range_slots.get(&key(range, params.range_precision))?;
            Some((*b, *r))
        })
        .collect();

    let index = GridIndex::new(
        CoordinateSystem::RangeBearing,
        table.time(),
        Axis::coordinates("BEAR", bearing_labels),
        Axis::coordinates("RNGE", range_labels),
    );
    IndexedTable::scatter(index, table, &cells, &["BEAR", "RNGE"])
}

/// Range labels: `range_cells` steps of the range resolution covering the
/// observed ranges.
///
/// `observed` must be sorted and non-empty.
pub fn range_axis(observed: &[f64], params: &RangeBearingParams) -> Vec<f64> {
    let step = params.range_resolution_km;
    let precision = params.range_precision;
    let (Some(&rmin), Some(&rmax)) = (observed.first(), observed.last()) else {
        return Vec::new();
    };

    let down = arange(rmin, 0.0, -step)
        .into_iter()
        .skip(1)
        .filter(|r| round_to(*r, precision) > 0.0);
    let across = arange(rmin, rmax, step);
    let up = arange(rmax, params.max_range_km + RANGE_SLACK_KM, step);

    let mut axis: Vec<f64> = down
        .chain(across)
        .chain(up)
        .map(|r| round_to(r, precision))
        .collect();
    axis.sort_by(f64::total_cmp);
    axis.dedup();
    axis.truncate(params.range_cells);

    if axis.len() < params.range_cells {
        warn!(
            generated = axis.len(),
            range_cells = params.range_cells,
            "Range axis extended past the maximum range"
        );
        let mut last = axis.last().copied().unwrap_or(rmin - step);
        while axis.len() < params.range_cells {
            last += step;
            axis.push(round_to(last, precision));
        }
    }
    axis
}

/// Bearing labels: every step of `resolution` through the observed bearings,
/// from just above 0° to 360°.
///
/// `observed` must be sorted and non-empty.
pub fn bearing_axis(observed: &[f64], resolution: f64) -> Vec<f64> {
    let (Some(&bmin), Some(&bmax)) = (observed.first(), observed.last()) else {
        return Vec::new();
    };

    let down = arange(bmin, 0.0, -resolution).into_iter().skip(1);
    let across = arange(bmin, bmax, resolution);
    let up = arange(bmax, BEARING_STOP, resolution);

    let mut axis: Vec<f64> = down
        .chain(across)
        .chain(up)
        .map(|b| round_to(b, BEARING_DECIMALS))
        .collect();
    axis.sort_by(f64::total_cmp);
    axis.dedup();
    axis
}

/// Reject resolutions and cell counts that would generate oversized axes.
///
/// `bearings` and `ranges` are the sorted, non-empty observed values.
fn check_axis_lengths(
    params: &RangeBearingParams,
    angular_resolution: f64,
    declared: bool,
    bearings: &[f64],
    ranges: &[f64],
) -> RadialResult<()> {
    let bmin = bearings.first().copied().unwrap_or(0.0).min(0.0);
    let bmax = bearings.last().copied().unwrap_or(0.0).max(BEARING_STOP);
    let rmin = ranges.first().copied().unwrap_or(0.0).min(0.0);
    let rmax = ranges.last().copied().unwrap_or(0.0);

    let bearing_count = arange_len(bmin, bmax, angular_resolution);
    if bearing_count > MAX_AXIS_LEN as f64 {
        let message = format!(
            "angular resolution {} gives {} bearings, more than {}",
            angular_resolution, bearing_count, MAX_AXIS_LEN
        );
        return Err(if declared {
            RadialError::invalid_metadata("AngularResolution", message)
        } else {
            RadialError::MalformedCoordinates(message)
        });
    }

    let span = params.max_range_km + RANGE_SLACK_KM;
    let range_count = arange_len(rmin, span.max(rmax), params.range_resolution_km);
    if range_count > MAX_AXIS_LEN as f64 {
        let message = format!(
            "{} km steps from {} km to {} km give {} ranges, more than {}",
            params.range_resolution_km,
            rmin,
            span.max(rmax),
            range_count,
            MAX_AXIS_LEN
        );
        return Err(if rmax > span || rmin < 0.0 {
            RadialError::MalformedCoordinates(message)
        } else {
            RadialError::invalid_metadata("RangeResolutionKMeters", message)
        });
    }
    if params.range_cells > MAX_AXIS_LEN {
        return Err(RadialError::invalid_metadata(
            "RangeCells",
            format!("{} is more than {}", params.range_cells, MAX_AXIS_LEN),
        ));
    }
    Ok(())
}

fn lookup(labels: &[f64], digits: u32) -> HashMap<i64, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(slot, &label)| (key(label, digits), slot))
        .collect()
}
