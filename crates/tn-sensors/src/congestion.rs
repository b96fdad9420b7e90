//! Congestion aggregation across a route's sensors.

use crate::Sensor;

/// Rounded arithmetic mean of the given sensors' congestion values.
///
/// Returns 0 for an empty input.  Half rounds up, so two sensors reading 0
/// and 3 average to 2.  The result is always in `[0, 100]` because every
/// per-sensor value is.
pub fn average_congestion<'a>(sensors: impl IntoIterator<Item = &'a Sensor>) -> u8 {
    let (mut sum, mut count) = (0u64, 0u64);
    for sensor in sensors {
        sum += u64::from(sensor.congestion());
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    ((2 * sum + count) / (2 * count)) as u8
}
