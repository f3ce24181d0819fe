use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// The arithmetic surface shared by all scalar types used in this crate.
pub trait Scalar:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialOrd
        + Zero
        + One
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Mul<T, Output = T>
        + Div<T, Output = T>
        + Neg<Output = T>
{
}

pub trait Tolerance {
    /// Cutoff below which a squared norm counts as degenerate, and above
    /// which `1 - |q₁·q₂|` counts as parallel during interpolation.
    const EPSILON: Self;
}

impl Tolerance for f32 {
    const EPSILON: f32 = 1e-6;
}

impl Tolerance for f64 {
    const EPSILON: f64 = 1e-9;
}

pub trait SquareRoot<T> {
    type Output;

    fn square_root(self) -> Self::Output;
}

pub trait Sine<T> {
    type Output;

    fn sine(self) -> Self::Output;
}

pub trait Cosine<T> {
    type Output;

    fn cosine(self) -> Self::Output;
}

pub trait ArcCos<T> {
    type Output;

    fn arccos(self) -> Self::Output;
}

pub trait Abs<T> {
    type Output;

    fn abs(self) -> Self::Output;
}

pub trait IsFinite {
    /// Determines whether the value is neither infinite nor NaN.
    fn is_finite(&self) -> bool;
}

impl IsFinite for f32 {
    #[inline(always)]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl IsFinite for f64 {
    #[inline(always)]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

#[cfg(feature = "std")]
impl SquareRoot<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn square_root(self) -> Self::Output {
        f32::sqrt(self)
    }
}

#[cfg(feature = "std")]
impl SquareRoot<f64> for f64 {
    type Output = f64;

    #[inline(always)]
    fn square_root(self) -> Self::Output {
        f64::sqrt(self)
    }
}

#[cfg(feature = "std")]
impl Sine<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn sine(self) -> Self::Output {
        f32::sin(self)
    }
}

#[cfg(feature = "std")]
impl Sine<f64> for f64 {
    type Output = f64;

    #[inline(always)]
    fn sine(self) -> Self::Output {
        f64::sin(self)
    }
}

#[cfg(feature = "std")]
impl Cosine<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn cosine(self) -> Self::Output {
        f32::cos(self)
    }
}

#[cfg(feature = "std")]
impl Cosine<f64> for f64 {
    type Output = f64;

    #[inline(always)]
    fn cosine(self) -> Self::Output {
        f64::cos(self)
    }
}

#[cfg(feature = "std")]
impl ArcCos<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn arccos(self) -> Self::Output {
        f32::acos(self)
    }
}

#[cfg(feature = "std")]
impl ArcCos<f64> for f64 {
    type Output = f64;

    #[inline(always)]
    fn arccos(self) -> Self::Output {
        f64::acos(self)
    }
}

#[cfg(feature = "std")]
impl Abs<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn abs(self) -> Self::Output {
        f32::abs(self)
    }
}

#[cfg(feature = "std")]
impl Abs<f64> for f64 {
    type Output = f64;

    #[inline(always)]
    fn abs(self) -> Self::Output {
        f64::abs(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "micromath"))]
impl SquareRoot<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn square_root(self) -> Self::Output {
        micromath::F32Ext::sqrt(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "micromath"))]
impl Sine<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn sine(self) -> Self::Output {
        micromath::F32Ext::sin(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "micromath"))]
impl Cosine<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn cosine(self) -> Self::Output {
        micromath::F32Ext::cos(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "micromath"))]
impl ArcCos<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn arccos(self) -> Self::Output {
        micromath::F32Ext::acos(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "micromath"))]
impl Abs<f32> for f32 {
    type Output = f32;

    #[inline(always)]
    fn abs(self) -> Self::Output {
        micromath::F32Ext::abs(self)
    }
}
