use crate::num_traits::IsFinite;
use core::fmt::{Debug, Formatter};
use uniform_array_derive::UniformArray;

/// A raw orientation sample as delivered by the sensor stream, in
/// x, y, z, w component order.
///
/// This is a plain value type; whether the components actually describe
/// a unit quaternion is only established once the sample is accepted by
/// the display filter.
#[derive(UniformArray, Copy)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct OrientationReading<T> {
    /// The x component of the orientation quaternion.
    pub x: T,
    /// The y component of the orientation quaternion.
    pub y: T,
    /// The z component of the orientation quaternion.
    pub z: T,
    /// The w (scalar) component of the orientation quaternion.
    pub w: T,
}

impl<T> OrientationReading<T> {
    /// Initializes a new [`OrientationReading`] instance.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Determines whether every component is a finite number.
    ///
    /// Samples with NaN or infinite components must not enter the
    /// orientation pipeline; see [`SampleError`](crate::SampleError).
    pub fn is_finite(&self) -> bool
    where
        T: IsFinite,
    {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl<T> Default for OrientationReading<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
        )
    }
}

impl<T> Clone for OrientationReading<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            w: self.w.clone(),
        }
    }
}

impl<T> Debug for OrientationReading<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("OrientationReading")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .field(&self.w)
            .finish()
    }
}
