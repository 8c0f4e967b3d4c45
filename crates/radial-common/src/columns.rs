//! Human-readable labels for radial table columns.

/// Column name to `long_name` label.
pub const COLUMN_LONG_NAMES: &[(&str, &str)] = &[
    ("TIME", "time"),
    ("LOND", "Longitude (deg)"),
    ("LATD", "Latitude (deg)"),
    ("VELU", "U comp (cm/s)"),
    ("VELV", "V comp (cm/s)"),
    ("VFLG", "VectorFlag (GridCode)"),
    ("ESPC", "Spatial Quality"),
    ("ETMP", "Temporal Quality"),
    ("MAXV", "Velocity Maximum"),
    ("MINV", "Velocity Minimum"),
    ("ERSC", "Spatial Count"),
    ("ERTC", "Temporal Count"),
    ("XDST", "X Distance (km)"),
    ("YDST", "Y Distance (km)"),
    ("RNGE", "Range (km)"),
    ("BEAR", "Bearing (True)"),
    ("VELO", "Velocity (cm/s)"),
    ("HEAD", "Direction (True)"),
    ("SPRC", "Spectra RngCell"),
    ("OLAT", "Origin Latitude"),
    ("OLON", "Origin Longitude"),
    ("ANTB", "Antenna Bearing"),
];

/// Look up the label for a column name.
pub fn long_name(column: &str) -> Option<&'static str> {
    COLUMN_LONG_NAMES
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_name_lookup() {
        assert_eq!(long_name("LOND"), Some("Longitude (deg)"));
        assert_eq!(long_name("ANTB"), Some("Antenna Bearing"));
        assert_eq!(long_name("EACC"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, (name, _)) in COLUMN_LONG_NAMES.iter().enumerate() {
            assert!(
                COLUMN_LONG_NAMES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate label entry for {}",
                name
            );
        }
    }
}
