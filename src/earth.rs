/// Equatorial radius of Earth in meters
/// From https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84
pub const RADIUS_EQUATORIAL: f64 = 6378137.0;

/// Polar radius of Earth in meters
/// From https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84
pub const RADIUS_POLAR: f64 = 6356752.314245;

/// Mean radius of Earth in meters, (2a + b) / 3
/// From https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
pub const RADIUS_MEAN: f64 = (2.0 * RADIUS_EQUATORIAL + RADIUS_POLAR) / 3.0;
