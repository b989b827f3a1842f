use surface_model::earth;
use surface_model::sphere::Sphere;

fn assert_all(sphere: &Sphere<f64>, r: f64) {
    assert_eq!(sphere.get_radius::<0>(), r);
    assert_eq!(sphere.get_radius::<1>(), r);
    assert_eq!(sphere.get_radius::<2>(), r);
}

#[test]
fn every_index_reads_radius() {
    assert_all(&Sphere::new(6371008.7714), 6371008.7714);
}

#[test]
fn default_is_wgs84_mean() {
    assert_eq!(Sphere::<f64>::default(), Sphere::new((2.0 * 6378137.0 + 6356752.314245) / 3.0));
    assert_eq!(Sphere::<f64>::default(), Sphere::new(earth::RADIUS_MEAN));
    assert!((earth::RADIUS_MEAN - 6371008.7714).abs() < 1e-3);
}

#[test]
fn every_index_writes_radius() {
    let mut sphere = Sphere::<f64>::default();

    sphere.set_radius::<0>(1.0);
    assert_all(&sphere, 1.0);

    sphere.set_radius::<1>(2.0);
    assert_all(&sphere, 2.0);

    sphere.set_radius::<2>(3.0);
    assert_all(&sphere, 3.0);
}

#[test]
fn default_f32() {
    let sphere = Sphere::<f32>::default();

    assert_eq!(sphere.get_radius::<2>(), earth::RADIUS_MEAN as f32);
}
