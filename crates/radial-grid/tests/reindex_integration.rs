//! End-to-end re-indexing of synthetic CODAR and WERA files.

use radial_grid::{
    detect, max_range, reindex_table, AxisLabels, CoordinateSystem, IndexedTable,
};
use radial_parser::{
    capture_time, column_types, extract_metadata, origin, Metadata, MetadataMode,
    ObservationTable,
};
use test_utils::{assert_approx_eq, cell_velocity, codar_file, wera_file, CodarGrid, WeraGrid};

fn reindex_text(text: &str) -> (ObservationTable, IndexedTable) {
    let metadata = extract_metadata(text, MetadataMode::Numeric);
    let names = column_types(&metadata).unwrap();
    let time = capture_time(&metadata).unwrap();
    let table = ObservationTable::parse(text, &names, time).unwrap();
    let indexed = reindex_table(&table, &metadata, origin(&metadata).unwrap()).unwrap();
    (table, indexed)
}

fn coordinates(labels: &AxisLabels) -> &[f64] {
    match labels {
        AxisLabels::Coordinates(values) => values,
        AxisLabels::Slots(_) => panic!("expected coordinate labels"),
    }
}

#[test]
fn test_codar_is_range_bearing() {
    let text = codar_file(&CodarGrid::amag());
    let (table, indexed) = reindex_text(&text);
    assert_eq!(detect(&table), CoordinateSystem::RangeBearing);
    assert_eq!(
        indexed.index().coordinate_system,
        CoordinateSystem::RangeBearing
    );
}

#[test]
fn test_codar_axes() {
    let (_, indexed) = reindex_text(&codar_file(&CodarGrid::amag()));
    let index = indexed.index();

    let bearings = coordinates(&index.first.labels);
    assert_eq!(index.first.name, "BEAR");
    assert_eq!(bearings.len(), 72);
    assert!(bearings.windows(2).all(|w| w[0] < w[1]));
    assert!(bearings.iter().all(|b| b % 5.0 == 0.0));

    // RangeCells: 49
    let ranges = coordinates(&index.second.labels);
    assert_eq!(index.second.name, "RNGE");
    assert_eq!(ranges.len(), 49);
    assert_approx_eq!(ranges[0], 5.8249, 1e-12);
    assert_approx_eq!(ranges[48], 49.0 * 5.8249, 1e-9);

    assert_eq!(index.shape(), (1, 72, 49));
}

#[test]
fn test_codar_round_trip() {
    let grid = CodarGrid::amag().without(4, 7).without(30, 18);
    let (table, indexed) = reindex_text(&codar_file(&grid));
    assert_eq!(indexed.placed(), table.len());
    assert_eq!(indexed.dropped(), 0);

    for (bi, bearing) in grid.bearings.iter().enumerate() {
        for (ri, cell) in grid.range_cells.iter().enumerate() {
            // axes start at 5 degrees and at one range cell
            let b = (*bearing / 5.0) as usize - 1;
            let r = cell - 1;
            let velo = indexed.value("VELO", b, r).unwrap();
            if grid.missing.contains(&(bi, ri)) {
                assert!(velo.is_nan(), "cell ({}, {}) should be empty", bi, ri);
            } else {
                assert_eq!(velo, cell_velocity(bi, ri));
                assert_eq!(indexed.value("SPRC", b, r), Some(*cell as f64));
            }
        }
    }
}

#[test]
fn test_codar_cells_outside_data_are_empty() {
    let (_, indexed) = reindex_text(&codar_file(&CodarGrid::amag()));
    // bearing 5 degrees, first range cell: never sampled
    assert!(indexed.value("VELO", 0, 0).unwrap().is_nan());
    let velo = indexed.column("VELO").unwrap();
    assert_eq!(velo.iter().filter(|v| !v.is_nan()).count(), 31 * 19);
}

#[test]
fn test_wera_is_lat_lon() {
    let (table, indexed) = reindex_text(&wera_file(&WeraGrid::gtn()));
    assert_eq!(detect(&table), CoordinateSystem::LatLon);

    // 2000 / 8.348 km from the GTN site reaches 98 lon and 101 lat slots
    let index = indexed.index();
    assert_eq!((index.first.name.as_str(), index.second.name.as_str()), ("i", "j"));
    assert_eq!(index.shape(), (1, 98, 101));
    assert_eq!(index.len(), 98 * 101);
    assert_eq!(indexed.column("VELO").unwrap().len(), 98 * 101);
}

#[test]
fn test_wera_round_trip() {
    let grid = WeraGrid::gtn().without(0, 0).without(12, 7);
    let (table, indexed) = reindex_text(&wera_file(&grid));
    assert_eq!(indexed.placed(), table.len());

    for i in 0..grid.nx {
        for j in 0..grid.ny {
            let velo = indexed.value("VELO", i, j).unwrap();
            if grid.missing.contains(&(i, j)) {
                assert!(velo.is_nan());
            } else {
                assert_eq!(velo, cell_velocity(i, j));
                assert_eq!(indexed.value("LOND", i, j), Some(grid.lon(i)));
                assert_eq!(indexed.value("LATD", i, j), Some(grid.lat(j)));
            }
        }
    }
}

#[test]
fn test_max_range_from_headers() {
    let codar = extract_metadata(&codar_file(&CodarGrid::amag()), MetadataMode::Numeric);
    assert_approx_eq!(max_range(&codar).unwrap(), 443.1642, 1e-4);

    let mut without_frequency = Metadata::new();
    for (key, value) in codar.iter() {
        if key != "TransmitCenterFreqMHz" {
            without_frequency.insert(key, value.clone());
        }
    }
    assert_eq!(max_range(&without_frequency).unwrap(), 250.0);
}
