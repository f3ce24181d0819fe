/// Default smoothing constants for a scalar type.
///
/// The values mirror the tuning of the digital-twin viewer this crate
/// was built for: a slow factor for steady tracking, a fast factor for
/// catching up after large jumps, and the absolute-dot-product
/// threshold that separates the two regimes.
pub trait SmoothingDefaults: Sized {
    /// Interpolation factor while tracking a nearby target.
    const SLOW: Self;

    /// Interpolation factor while catching up to a distant target.
    const FAST: Self;

    /// Absolute dot product below which the target counts as distant.
    const CATCH_UP_THRESHOLD: Self;
}

impl SmoothingDefaults for f32 {
    const SLOW: f32 = 0.08;
    const FAST: f32 = 0.35;
    const CATCH_UP_THRESHOLD: f32 = 0.90;
}

impl SmoothingDefaults for f64 {
    const SLOW: f64 = 0.08;
    const FAST: f64 = 0.35;
    const CATCH_UP_THRESHOLD: f64 = 0.90;
}

/// Per-frame interpolation factor selection for the display filter.
///
/// Two variants exist in the wild: a constant factor, and a two-bucket
/// adaptive low-pass that snaps quickly across large angular distances
/// while keeping small corrections smooth. The adaptive variant is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingStrategy<T> {
    /// A constant interpolation factor per frame tick.
    Fixed {
        /// The interpolation factor in `0..=1`.
        factor: T,
    },
    /// A two-bucket adaptive factor chosen by angular distance.
    Adaptive {
        /// Factor applied while the displayed orientation is close to
        /// the target.
        slow: T,
        /// Factor applied while the displayed orientation lags far
        /// behind the target.
        fast: T,
        /// Absolute dot product below which `fast` applies.
        threshold: T,
    },
}

impl<T> SmoothingStrategy<T> {
    /// A constant-factor strategy.
    pub const fn fixed(factor: T) -> Self {
        Self::Fixed { factor }
    }

    /// An adaptive two-bucket strategy.
    pub const fn adaptive(slow: T, fast: T, threshold: T) -> Self {
        Self::Adaptive {
            slow,
            fast,
            threshold,
        }
    }

    /// Selects the interpolation factor for a frame tick.
    ///
    /// ## Arguments
    /// * `dot_abs` - The absolute dot product between the displayed and
    ///   the target orientation. Taking the absolute value resolves the
    ///   double-cover ambiguity of unit quaternions.
    pub fn factor(&self, dot_abs: T) -> T
    where
        T: Copy + PartialOrd,
    {
        match self {
            Self::Fixed { factor } => *factor,
            Self::Adaptive {
                slow,
                fast,
                threshold,
            } => {
                if dot_abs < *threshold {
                    *fast
                } else {
                    *slow
                }
            }
        }
    }
}

impl<T> Default for SmoothingStrategy<T>
where
    T: SmoothingDefaults,
{
    fn default() -> Self {
        Self::Adaptive {
            slow: T::SLOW,
            fast: T::FAST,
            threshold: T::CATCH_UP_THRESHOLD,
        }
    }
}
