use num_traits::AsPrimitive;

use crate::earth;
use crate::model::{forward_radius_access, Index, Model};
use crate::tag::ReferenceSpheroidTag;

/// Ellipsoid of revolution
///
/// Indices 0 and 1 both read and write the equatorial radius `a`, index 2 the
/// polar radius `b`. No relation between `a` and `b` is enforced.
///
/// Indices past 2 do not build:
///
/// ```compile_fail
/// use surface_model::spheroid::Spheroid;
///
/// Spheroid::<f64>::default().get_radius::<3>();
/// ```
///
/// ```compile_fail
/// use surface_model::spheroid::Spheroid;
///
/// Spheroid::<f64>::default().set_radius::<3>(1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Spheroid<R> {
    a: R,
    b: R,
}

impl<R> Spheroid<R> {
    /// Create a Spheroid from equatorial radius `a` and polar radius `b`
    pub fn new(a: R, b: R) -> Self {
        Self {
            a,
            b,
        }
    }
}

impl<R: Copy> Spheroid<R> {
    /// Radius at index `I`: equatorial for 0 and 1, polar for 2
    #[inline]
    pub fn get_radius<const I: usize>(&self) -> R {
        let () = Index::<I>::VALID;

        if I < 2 {
            self.a
        } else {
            self.b
        }
    }

    /// Set radius at index `I`, 0 and 1 write the same equatorial radius
    #[inline]
    pub fn set_radius<const I: usize>(&mut self, radius: R) {
        let () = Index::<I>::VALID;

        if I < 2 {
            self.a = radius;
        } else {
            self.b = radius;
        }
    }
}

impl<R> Default for Spheroid<R>
where
    R: Copy + 'static,
    f64: AsPrimitive<R>,
{
    /// WGS84 equatorial and polar radii
    fn default() -> Self {
        Self::new(earth::RADIUS_EQUATORIAL.as_(), earth::RADIUS_POLAR.as_())
    }
}

impl<R: Copy> Model for Spheroid<R> {
    type Tag = ReferenceSpheroidTag;
    type Radius = R;
}

forward_radius_access!(Spheroid, 0, 1, 2);
