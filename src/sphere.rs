use num_traits::AsPrimitive;

use crate::earth;
use crate::model::{forward_radius_access, Index, Model};
use crate::tag::ReferenceSphereTag;

/// Sphere with a single radius behind all three indices
///
/// ```compile_fail
/// use surface_model::sphere::Sphere;
///
/// Sphere::<f64>::default().get_radius::<3>();
/// ```
///
/// ```compile_fail
/// use surface_model::sphere::Sphere;
///
/// Sphere::<f64>::default().set_radius::<3>(1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Sphere<R> {
    r: R,
}

impl<R> Sphere<R> {
    /// Create a Sphere with radius `r`
    pub fn new(r: R) -> Self {
        Self {
            r,
        }
    }
}

impl<R: Copy> Sphere<R> {
    #[inline]
    pub fn get_radius<const I: usize>(&self) -> R {
        let () = Index::<I>::VALID;

        self.r
    }

    /// Overwrite the radius, whichever index is used
    #[inline]
    pub fn set_radius<const I: usize>(&mut self, radius: R) {
        let () = Index::<I>::VALID;

        self.r = radius;
    }
}

impl<R> Default for Sphere<R>
where
    R: Copy + 'static,
    f64: AsPrimitive<R>,
{
    /// WGS84 mean radius
    fn default() -> Self {
        Self::new(earth::RADIUS_MEAN.as_())
    }
}

impl<R: Copy> Model for Sphere<R> {
    type Tag = ReferenceSphereTag;
    type Radius = R;
}

forward_radius_access!(Sphere, 0, 1, 2);
