//! Maximum sensing range of the instrument.
//!
//! Ground-wave range shrinks with frequency, roughly
//! `range (km) * frequency (MHz) = 2000`:
//!
//! | Frequency | Range  |
//! |-----------|--------|
//! | 32 MHz    | 60 km  |
//! | 16 MHz    | 125 km |
//! | 8 MHz     | 250 km |

use radial_common::{Metadata, RadialError, RadialResult};
use tracing::debug;

/// Standard range classes (km) a computed range is snapped up to.
pub const RANGE_LADDER_KM: [f64; 4] = [60.0, 125.0, 250.0, 500.0];

/// Largest range class (km); also the fallback when nothing is known.
pub const RANGE_CEILING_KM: f64 = 500.0;

/// Range-frequency product of HF ground-wave propagation (km * MHz).
const RANGE_FREQUENCY_PRODUCT: f64 = 2000.0;

/// Maximum range in km derived from numeric metadata.
///
/// 1. `TransmitCenterFreqMHz` numeric and positive: `2000 / freq`.
/// 2. `RangeEnd` and `RangeResolutionKMeters` numeric: their product, snapped
///    up to the next value of [`RANGE_LADDER_KM`]. A product at or above the
///    ceiling is an error.
/// 3. Otherwise [`RANGE_CEILING_KM`].
pub fn max_range(metadata: &Metadata) -> RadialResult<f64> {
    if let Some(freq) = metadata
        .get_f64("TransmitCenterFreqMHz")
        .filter(|f| *f > 0.0)
    {
        let range = RANGE_FREQUENCY_PRODUCT / freq;
        debug!(freq_mhz = freq, max_range_km = range, "Max range from frequency");
        return Ok(range);
    }

    let range_end = metadata.get_f64("RangeEnd");
    let resolution = metadata.get_f64("RangeResolutionKMeters");
    if let (Some(end), Some(km)) = (range_end, resolution) {
        let computed = end * km;
        let range = RANGE_LADDER_KM
            .iter()
            .copied()
            .find(|step| *step > computed)
            .ok_or(RadialError::UnboundedRange {
                computed,
                ceiling: RANGE_CEILING_KM,
            })?;
        debug!(computed_km = computed, max_range_km = range, "Max range from range cells");
        return Ok(range);
    }

    debug!(max_range_km = RANGE_CEILING_KM, "Max range defaulted");
    Ok(RANGE_CEILING_KM)
}
