use crate::num_traits::{Abs, ArcCos, Cosine, Scalar, Sine, SquareRoot, Tolerance};
use crate::types::{EulerAngles, OrientationReading, Vector3};
use core::fmt::{Debug, Formatter};
use core::ops::{Add, Mul, Neg};
use num_traits::{One, Zero};
use uniform_array_derive::UniformArray;

/// A quaternion in x, y, z, w component order.
///
/// Unit quaternions represent pure rotations. Operations that could
/// denormalize a unit quaternion (composition, interpolation) normalize
/// their result, so orientations stay on the unit hypersphere.
#[derive(UniformArray, Copy)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quaternion<T> {
    /// Initializes a new [`Quaternion`] instance from its components.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation.
    #[inline(always)]
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T> Quaternion<T> {
    /// Calculates the squared norm.
    #[inline(always)]
    #[doc(alias = "length")]
    pub fn norm_sq(&self) -> T
    where
        T: Clone + Mul<T, Output = T> + Add<T, Output = T>,
    {
        (self.x.clone() * self.x.clone())
            + (self.y.clone() * self.y.clone())
            + (self.z.clone() * self.z.clone())
            + (self.w.clone() * self.w.clone())
    }

    /// Calculates the norm.
    #[inline(always)]
    pub fn norm(&self) -> T
    where
        T: Scalar + SquareRoot<T, Output = T>,
    {
        self.norm_sq().square_root()
    }

    /// Returns a normalized version of the quaternion.
    ///
    /// The norm must be nonzero; degenerate inputs are the caller's
    /// responsibility (the display filter rejects them up front).
    pub fn normalized(&self) -> Self
    where
        T: Scalar + SquareRoot<T, Output = T>,
    {
        let norm = self.norm();
        Self::new(
            self.x / norm,
            self.y / norm,
            self.z / norm,
            self.w / norm,
        )
    }

    /// Calculates the dot product with another quaternion.
    #[inline(always)]
    pub fn dot(&self, rhs: &Self) -> T
    where
        T: Clone + Mul<T, Output = T> + Add<T, Output = T>,
    {
        (self.x.clone() * rhs.x.clone())
            + (self.y.clone() * rhs.y.clone())
            + (self.z.clone() * rhs.z.clone())
            + (self.w.clone() * rhs.w.clone())
    }

    /// Returns the conjugate, i.e. the quaternion with the vector part
    /// negated. For unit quaternions this is the inverse rotation.
    #[inline(always)]
    pub fn conjugate(&self) -> Self
    where
        T: Copy + Neg<Output = T>,
    {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the multiplicative inverse.
    ///
    /// The norm must be nonzero; degenerate inputs are the caller's
    /// responsibility.
    pub fn inverse(&self) -> Self
    where
        T: Scalar,
    {
        let norm_sq = self.norm_sq();
        Self::new(
            -self.x / norm_sq,
            -self.y / norm_sq,
            -self.z / norm_sq,
            self.w / norm_sq,
        )
    }

    /// Constructs the rotation of `angle` radians about `axis`.
    ///
    /// The axis does not need to be normalized.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self
    where
        T: Scalar + SquareRoot<T, Output = T> + Sine<T, Output = T> + Cosine<T, Output = T>,
    {
        let axis = axis.normalized();
        let two = T::one() + T::one();
        let half = angle / two;
        let sin_half = half.sine();
        Self::new(
            axis.x * sin_half,
            axis.y * sin_half,
            axis.z * sin_half,
            half.cosine(),
        )
    }

    /// Constructs a rotation from Euler angles, applied about the
    /// x, y and z axes in that order.
    pub fn from_euler(angles: &EulerAngles<T>) -> Self
    where
        T: Scalar + Sine<T, Output = T> + Cosine<T, Output = T>,
    {
        let two = T::one() + T::one();
        let half_roll = angles.roll_phi / two;
        let half_pitch = angles.pitch_theta / two;
        let half_yaw = angles.yaw_psi / two;

        let (s1, c1) = (half_roll.sine(), half_roll.cosine());
        let (s2, c2) = (half_pitch.sine(), half_pitch.cosine());
        let (s3, c3) = (half_yaw.sine(), half_yaw.cosine());

        Self::new(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Spherically interpolates from `self` toward `rhs` by `t` along
    /// the shortest great-circle arc.
    ///
    /// Antipodal representations of the same rotation are handled by
    /// flipping the sign of `rhs` when the dot product is negative.
    /// Nearly parallel inputs fall back to a linear blend. The result
    /// is normalized.
    ///
    /// ## Arguments
    /// * `rhs` - The interpolation target; a unit quaternion.
    /// * `t` - The interpolation factor in `0..=1`.
    pub fn slerp(&self, rhs: &Self, t: T) -> Self
    where
        T: Scalar
            + SquareRoot<T, Output = T>
            + Sine<T, Output = T>
            + ArcCos<T, Output = T>
            + Tolerance,
    {
        let mut to = *rhs;
        let mut cos_half_theta = self.dot(rhs);
        if cos_half_theta < T::zero() {
            to = -to;
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta > T::one() - T::EPSILON {
            // Arc too short for the spherical weights to be well-defined.
            let remainder = T::one() - t;
            return Self::new(
                self.x * remainder + to.x * t,
                self.y * remainder + to.y * t,
                self.z * remainder + to.z * t,
                self.w * remainder + to.w * t,
            )
            .normalized();
        }

        let half_theta = cos_half_theta.arccos();
        let sin_half_theta = (T::one() - cos_half_theta * cos_half_theta).square_root();
        let ratio_from = ((T::one() - t) * half_theta).sine() / sin_half_theta;
        let ratio_to = (t * half_theta).sine() / sin_half_theta;

        Self::new(
            self.x * ratio_from + to.x * ratio_to,
            self.y * ratio_from + to.y * ratio_to,
            self.z * ratio_from + to.z * ratio_to,
            self.w * ratio_from + to.w * ratio_to,
        )
        .normalized()
    }

    /// Calculates the angular distance to another unit quaternion, in
    /// radians. Accounts for the double cover, so `q` and `-q` are at
    /// distance zero.
    pub fn angle_to(&self, rhs: &Self) -> T
    where
        T: Scalar + Abs<T, Output = T> + ArcCos<T, Output = T>,
    {
        let two = T::one() + T::one();
        let mut dot = self.dot(rhs).abs();
        if dot > T::one() {
            dot = T::one();
        }
        two * dot.arccos()
    }
}

impl<T> Default for Quaternion<T>
where
    T: Zero + One,
{
    /// The default quaternion is the identity rotation, not the zero
    /// element.
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Clone for Quaternion<T>
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

impl<T> Debug for Quaternion<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Quaternion")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .field(&self.w)
            .finish()
    }
}

/// The Hamilton product. `a * b` is the rotation `b` followed by `a`,
/// matching the composition order of the display filter's offsets.
impl<T> Mul<Quaternion<T>> for Quaternion<T>
where
    T: Copy
        + Add<T, Output = T>
        + core::ops::Sub<T, Output = T>
        + Mul<T, Output = T>,
{
    type Output = Quaternion<T>;

    fn mul(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T> Neg for Quaternion<T>
where
    T: Neg<Output = T>,
{
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T> From<&OrientationReading<T>> for Quaternion<T>
where
    T: Clone,
{
    #[inline]
    fn from(value: &OrientationReading<T>) -> Self {
        Self {
            x: value.x.clone(),
            y: value.y.clone(),
            z: value.z.clone(),
            w: value.w.clone(),
        }
    }
}

impl<T> From<OrientationReading<T>> for Quaternion<T> {
    #[inline]
    fn from(value: OrientationReading<T>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            w: value.w,
        }
    }
}
