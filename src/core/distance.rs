use crate::models::BoundingBox;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the haversine great-circle distance between two points in
/// kilometers.
///
/// Symmetric in its arguments and zero for identical points. Every distance
/// decision in the service (check-in geofence, nearby listing) goes through
/// this function, so storage-level approximations must converge on it.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point.
///
/// A pre-filter only: callers must still apply `haversine_distance` to every
/// candidate inside the box. 1° latitude ≈ 111 km, 1° longitude ≈ 111 km ·
/// cos(latitude).
pub fn calculate_bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;
    let lon_delta = radius_km / (111.0 * lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(lat: f64, lon: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat && lat <= bbox.max_lat && lon >= bbox.min_lon && lon <= bbox.max_lon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_identical_points_is_zero() {
        let distance = haversine_distance(23.5429495, -46.6331956, 23.5429495, -46.6331956);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let forward = haversine_distance(23.5429495, -46.6331956, 23.5506254, -46.6330654);
        let backward = haversine_distance(23.5506254, -46.6330654, 23.5429495, -46.6331956);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_haversine_downtown_block() {
        // Two gyms ~0.85 km apart in the same neighborhood
        let distance = haversine_distance(23.5429495, -46.6331956, 23.5506254, -46.6330654);
        assert!(distance > 0.5 && distance < 1.5, "got {}", distance);
    }

    #[test]
    fn test_haversine_london_to_paris() {
        // London to Paris is approximately 344 km
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 344.0).abs() < 10.0, "got {}", distance);
    }

    #[test]
    fn test_bounding_box_surrounds_center() {
        let bbox = calculate_bounding_box(23.5429495, -46.6331956, 10.0);

        assert!(bbox.min_lat < 23.5429495);
        assert!(bbox.max_lat > 23.5429495);
        assert!(bbox.min_lon < -46.6331956);
        assert!(bbox.max_lon > -46.6331956);

        // 10 km radius => ~0.18 degrees of latitude span
        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 0.18).abs() < 0.02);
    }

    #[test]
    fn test_bounding_box_never_excludes_points_in_radius() {
        let bbox = calculate_bounding_box(23.5429495, -46.6331956, 10.0);

        // A point well inside the radius must be inside the box, otherwise
        // the pre-filter would drop gyms the exact distance keeps.
        assert!(is_within_bounding_box(23.5506254, -46.6330654, &bbox));
        // A point far outside the radius falls outside the box.
        assert!(!is_within_bounding_box(-23.5632096, -46.7152497, &bbox));
    }
}
