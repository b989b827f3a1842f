//! Quantities derived from the radii of any model
//!
//! Only the registry is used here, so a sphere and a spheroid (or any other
//! registered model) go through the same code.

use num_traits::{Float, One};

use crate::model::{get_radius, RadiusAccess, RadiusOf};

/// Mean radius in the same unit as the radii, (2a + b) / 3
///
/// From https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius
pub fn mean_radius<S>(model: &S) -> RadiusOf<S>
where
    S: RadiusAccess<0> + RadiusAccess<2>,
    RadiusOf<S>: Float,
{
    let a = get_radius::<0, S>(model);
    let b = get_radius::<2, S>(model);
    let one = RadiusOf::<S>::one();

    (a + a + b) / (one + one + one)
}

/// Flattening, (a - b) / a
pub fn flattening<S>(model: &S) -> RadiusOf<S>
where
    S: RadiusAccess<0> + RadiusAccess<2>,
    RadiusOf<S>: Float,
{
    let a = get_radius::<0, S>(model);
    let b = get_radius::<2, S>(model);

    (a - b) / a
}

/// Squared first eccentricity, (a² - b²) / a²
pub fn eccentricity_squared<S>(model: &S) -> RadiusOf<S>
where
    S: RadiusAccess<0> + RadiusAccess<2>,
    RadiusOf<S>: Float,
{
    let a = get_radius::<0, S>(model);
    let b = get_radius::<2, S>(model);

    (a.powi(2) - b.powi(2)) / a.powi(2)
}

/// Distance from the center to the surface at a geodetic latitude in degrees
///
/// Adapted from https://en.wikipedia.org/wiki/Earth_radius#Geocentric_radius
pub fn geocentric_radius<S>(model: &S, latitude: RadiusOf<S>) -> RadiusOf<S>
where
    S: RadiusAccess<0> + RadiusAccess<2>,
    RadiusOf<S>: Float,
{
    let a = get_radius::<0, S>(model);
    let b = get_radius::<2, S>(model);
    let f = latitude.to_radians();

    (
        ((a.powi(2) * f.cos()).powi(2) + (b.powi(2) * f.sin()).powi(2))
        /
        ((a * f.cos()).powi(2) + (b * f.sin()).powi(2))
    ).sqrt()
}
