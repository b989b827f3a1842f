//! Capability registry for reference surface models
//!
//! Algorithms are written against [`Model`] and [`RadiusAccess`] only, never
//! against a concrete model. Any type, including one defined in another crate,
//! becomes a model by implementing these traits:
//!
//! ```
//! use surface_model::model::{self, Model, RadiusAccess};
//! use surface_model::tag::ReferenceSphereTag;
//!
//! struct Moon {
//!     radius: f32,
//! }
//!
//! impl Model for Moon {
//!     type Tag = ReferenceSphereTag;
//!     type Radius = f32;
//! }
//!
//! impl RadiusAccess<0> for Moon {
//!     fn get(&self) -> f32 { self.radius }
//!     fn set(&mut self, value: f32) { self.radius = value; }
//! }
//!
//! let mut moon = Moon { radius: 1737400.0 };
//! model::set_radius::<0, _>(&mut moon, 1738100.0);
//! assert_eq!(model::get_radius::<0, _>(&moon), 1738100.0);
//! ```
//!
//! An index the model has not registered does not build:
//!
//! ```compile_fail
//! use surface_model::model;
//! use surface_model::spheroid::Spheroid;
//!
//! let spheroid = Spheroid::<f64>::default();
//! model::get_radius::<3, _>(&spheroid);
//! ```
//!
//! ```compile_fail
//! use surface_model::model;
//! use surface_model::sphere::Sphere;
//!
//! let mut sphere = Sphere::<f64>::default();
//! model::set_radius::<3, _>(&mut sphere, 1.0);
//! ```

use crate::tag::ModelTag;

/// Number of logical radius indices a model exposes
pub const DIMENSIONS: usize = 3;

/// A reference surface model
pub trait Model {
    /// Category of the model
    type Tag: ModelTag;

    /// Numeric type of the radii
    type Radius: Copy;
}

/// Access to the radius at logical index `I`
///
/// Implemented once per index the model supports. Built-in models implement
/// it for 0, 1 and 2.
pub trait RadiusAccess<const I: usize>: Model {
    fn get(&self) -> Self::Radius;

    fn set(&mut self, value: Self::Radius);
}

/// Category tag of model `S`
pub type TagOf<S> = <S as Model>::Tag;

/// Radius type of model `S`
pub type RadiusOf<S> = <S as Model>::Radius;

/// Get the radius at index `I` of any model
#[inline]
pub fn get_radius<const I: usize, S>(model: &S) -> RadiusOf<S>
where
    S: RadiusAccess<I>,
{
    <S as RadiusAccess<I>>::get(model)
}

/// Set the radius at index `I` of any model
#[inline]
pub fn set_radius<const I: usize, S>(model: &mut S, value: RadiusOf<S>)
where
    S: RadiusAccess<I>,
{
    <S as RadiusAccess<I>>::set(model, value)
}

/// Radius index chosen at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    First,
    Second,
    Third,
}

impl Axis {
    pub const ALL: [Axis; DIMENSIONS] = [Axis::First, Axis::Second, Axis::Third];

    /// Return the logical index of the axis
    pub fn index(&self) -> usize {
        match *self {
            Axis::First => 0,
            Axis::Second => 1,
            Axis::Third => 2,
        }
    }

    /// Find the axis for a logical index, `None` if it is out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Runtime indexed access, for every model registering all three indices
pub trait Radii: RadiusAccess<0> + RadiusAccess<1> + RadiusAccess<2> {
    /// Get the radius along an axis
    fn radius_at(&self, axis: Axis) -> <Self as Model>::Radius {
        match axis {
            Axis::First => <Self as RadiusAccess<0>>::get(self),
            Axis::Second => <Self as RadiusAccess<1>>::get(self),
            Axis::Third => <Self as RadiusAccess<2>>::get(self),
        }
    }

    /// Set the radius along an axis
    fn set_radius_at(&mut self, axis: Axis, value: <Self as Model>::Radius) {
        match axis {
            Axis::First => <Self as RadiusAccess<0>>::set(self, value),
            Axis::Second => <Self as RadiusAccess<1>>::set(self, value),
            Axis::Third => <Self as RadiusAccess<2>>::set(self, value),
        }
    }
}

impl<S> Radii for S where S: RadiusAccess<0> + RadiusAccess<1> + RadiusAccess<2> {}

/// Compile time bound on a radius index
pub(crate) struct Index<const I: usize>;

impl<const I: usize> Index<I> {
    /// Fails constant evaluation, and with it the build, when `I` is out of range
    pub(crate) const VALID: () = assert!(I < DIMENSIONS, "radius index out of range");
}

/// Register a model's inherent `get_radius`/`set_radius` for the given indices
macro_rules! forward_radius_access {
    ($model:ident, $($index:literal),+) => {
        $(
            impl<R: Copy> $crate::model::RadiusAccess<$index> for $model<R> {
                #[inline]
                fn get(&self) -> R {
                    self.get_radius::<$index>()
                }

                #[inline]
                fn set(&mut self, value: R) {
                    self.set_radius::<$index>(value)
                }
            }
        )+
    };
}

pub(crate) use forward_radius_access;
