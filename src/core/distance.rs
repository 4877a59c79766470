use crate::models::Point;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. Coordinates are not range-checked, so
/// out-of-range degrees still yield a number.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers between two points
#[inline]
pub fn calculate_distance(from: &Point, to: &Point) -> f64 {
    haversine_distance(from.lat, from.lng, to.lat, to.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london = Point::new(51.5074, -0.1278);
        let paris = Point::new(48.8566, 2.3522);

        let distance = calculate_distance(&london, &paris);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_quarter_equator() {
        let distance = calculate_distance(&Point::new(0.0, 0.0), &Point::new(0.0, 90.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;

        assert!((distance - expected).abs() < 1e-6);
        assert!((distance - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Point::new(-33.8688, 151.2093);
        assert_eq!(calculate_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_out_of_range_still_numeric() {
        let distance = calculate_distance(&Point::new(200.0, 400.0), &Point::new(-95.0, 0.0));
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }
}
