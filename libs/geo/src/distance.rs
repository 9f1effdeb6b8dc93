use crate::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos()
            * to.lat.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCHAREST: Coordinates = Coordinates::new(44.4268, 26.1025);
    const CLUJ: Coordinates = Coordinates::new(46.7712, 23.6236);

    #[test]
    fn test_identical_points_are_zero_apart() {
        assert!(haversine_km(BUCHAREST, BUCHAREST).abs() < 1e-9);
        let pole = Coordinates::new(90.0, 0.0);
        assert!(haversine_km(pole, pole).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_km(BUCHAREST, CLUJ);
        let back = haversine_km(CLUJ, BUCHAREST);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_bucharest_to_cluj() {
        // roughly 324 km as the crow flies
        let km = haversine_km(BUCHAREST, CLUJ);
        assert!((320.0..330.0).contains(&km), "got {km}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let km = haversine_km(
            Coordinates::new(0.0, 0.0),
            Coordinates::new(1.0, 0.0),
        );
        assert!((km - 111.195).abs() < 0.01, "got {km}");
    }
}
