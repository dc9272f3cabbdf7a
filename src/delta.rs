use crate::fix::{MotionDelta, RawFix};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in meters between two lat/lon points (degrees)
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_KM * c * 1000.0;

    // Squared then rooted to keep output bit-compatible with existing consumers
    distance.powi(2).sqrt()
}

/// Distance in meters between two fixes
pub fn distance_between(from: &RawFix, to: &RawFix) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Motion delta of `fix` relative to `baseline`.
///
/// `delta_time` is not clamped: out-of-order sources yield a negative value,
/// and extreme timestamps wrap rather than panic.
pub fn compute_delta(fix: &RawFix, baseline: &RawFix) -> MotionDelta {
    MotionDelta {
        delta_distance: distance_between(fix, baseline),
        delta_time: fix.time.wrapping_sub(baseline.time),
    }
}
