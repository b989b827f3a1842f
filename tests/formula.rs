use surface_model::earth;
use surface_model::formula::{eccentricity_squared, flattening, geocentric_radius, mean_radius};
use surface_model::sphere::Sphere;
use surface_model::spheroid::Spheroid;

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn wgs84_spheroid() {
    let spheroid = Spheroid::<f64>::default();

    assert!(close(mean_radius(&spheroid), earth::RADIUS_MEAN, 1e-6));
    assert!(close(1.0 / flattening(&spheroid), 298.257223563, 1e-6));
    assert!(close(eccentricity_squared(&spheroid), 0.00669437999014, 1e-12));
}

#[test]
fn spheroid_geocentric_radius() {
    let spheroid = Spheroid::<f64>::default();

    assert!(close(geocentric_radius(&spheroid, 0.0), earth::RADIUS_EQUATORIAL, 1e-6));
    assert!(close(geocentric_radius(&spheroid, 90.0), earth::RADIUS_POLAR, 1e-6));
    assert!(close(geocentric_radius(&spheroid, -90.0), earth::RADIUS_POLAR, 1e-6));

    let middle = geocentric_radius(&spheroid, 45.0);
    assert!(middle < earth::RADIUS_EQUATORIAL && middle > earth::RADIUS_POLAR);
}

#[test]
fn sphere_is_round() {
    let sphere = Sphere::new(6371008.7714);

    assert!(close(mean_radius(&sphere), 6371008.7714, 1e-6));
    assert_eq!(flattening(&sphere), 0.0);
    assert_eq!(eccentricity_squared(&sphere), 0.0);
    for latitude in [-90.0, -30.0, 0.0, 12.5, 60.0, 90.0] {
        assert!(close(geocentric_radius(&sphere, latitude), 6371008.7714, 1e-6));
    }
}

#[test]
fn single_precision() {
    let spheroid = Spheroid::<f32>::default();

    assert!((1.0 / flattening(&spheroid) - 298.257).abs() < 0.5);
}
