//! Reference surface models of a planet, a [`Sphere`](sphere::Sphere) and an
//! ellipsoid of revolution ([`Spheroid`](spheroid::Spheroid)), and the
//! [`model`] registry that lets generic code read and write the radii of any
//! registered model.

pub mod earth;
pub mod formula;
pub mod model;
pub mod sphere;
pub mod spheroid;
pub mod tag;
