use std::fmt;

mod private {
    pub trait Sealed {}
}

/// Category of a reference surface model
///
/// Only the two categories below exist. New models pick one of them, new
/// categories cannot be added from outside this crate.
pub trait ModelTag: private::Sealed + Copy + Default + fmt::Debug + 'static {}

/// Model with one radius shared by every axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReferenceSphereTag;

/// Ellipsoid of revolution, equatorial radius on axes 0 and 1, polar radius on axis 2
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReferenceSpheroidTag;

impl private::Sealed for ReferenceSphereTag {}
impl private::Sealed for ReferenceSpheroidTag {}

impl ModelTag for ReferenceSphereTag {}
impl ModelTag for ReferenceSpheroidTag {}
