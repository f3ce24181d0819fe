use crate::errors::SampleError;
use crate::num_traits::{Abs, ArcCos, IsFinite, Scalar, Sine, SquareRoot, Tolerance};
use crate::smoothing::{SmoothingDefaults, SmoothingStrategy};
use crate::types::{OrientationReading, Quaternion};

/// A display-rate orientation filter with generic type `T`.
///
/// The filter consumes a stream of orientation samples, applies a fixed
/// mounting correction and a user-triggered recentring correction, and
/// smooths the corrected orientation toward its target once per display
/// frame. The smoothed orientation is what a renderer should apply to
/// the model.
///
/// All state lives in the instance; samples, recentring requests and
/// frame ticks are expected to arrive from a single execution context.
pub struct OrientationDisplayFilter<T> {
    /// Fixed correction for the physical orientation of the sensor
    /// relative to the rendered model.
    mounting_offset: Quaternion<T>,
    /// User-triggered correction that maps the current physical pose to
    /// the displayed zero orientation. Identity until recentred.
    dynamic_offset: Quaternion<T>,
    /// The most recently accepted sensor sample.
    last_sample: Option<Quaternion<T>>,
    /// The corrected orientation the display is converging toward.
    target: Quaternion<T>,
    /// The orientation currently applied to the display.
    displayed: Quaternion<T>,
    smoothing: SmoothingStrategy<T>,
}

impl<T> OrientationDisplayFilter<T> {
    /// Initializes a new [`OrientationDisplayFilter`] instance with the
    /// default adaptive smoothing strategy.
    ///
    /// ## Arguments
    /// * `mounting_offset` - The fixed rotation of the sensor relative
    ///   to the model's reference frame. Must be a rotation, i.e. have
    ///   nonzero norm.
    pub fn new(mounting_offset: Quaternion<T>) -> Self
    where
        T: Scalar + SquareRoot<T, Output = T> + SmoothingDefaults,
    {
        Self::with_smoothing(mounting_offset, SmoothingStrategy::default())
    }

    /// Initializes a new [`OrientationDisplayFilter`] instance with an
    /// explicit smoothing strategy.
    ///
    /// ## Arguments
    /// * `mounting_offset` - The fixed rotation of the sensor relative
    ///   to the model's reference frame. Must be a rotation, i.e. have
    ///   nonzero norm.
    /// * `smoothing` - The per-frame interpolation factor selection.
    pub fn with_smoothing(mounting_offset: Quaternion<T>, smoothing: SmoothingStrategy<T>) -> Self
    where
        T: Scalar + SquareRoot<T, Output = T>,
    {
        Self {
            mounting_offset: mounting_offset.normalized(),
            dynamic_offset: Quaternion::identity(),
            last_sample: None,
            target: Quaternion::identity(),
            displayed: Quaternion::identity(),
            smoothing,
        }
    }
}

impl<T> OrientationDisplayFilter<T> {
    /// Applies a newly received orientation sample.
    ///
    /// The sample is validated first: non-finite components or a
    /// near-zero norm reject it with a logged warning, leaving the
    /// previous target in effect. Accepted samples are normalized,
    /// stored, and folded with the two offsets into a new target
    /// orientation.
    ///
    /// ## Arguments
    /// * `reading` - The orientation sample from the sensor stream.
    pub fn update(&mut self, reading: &OrientationReading<T>) -> Result<(), SampleError>
    where
        T: Scalar + SquareRoot<T, Output = T> + IsFinite + Tolerance,
    {
        if !reading.is_finite() {
            log::warn!("discarding orientation sample: non-finite component");
            return Err(SampleError::NotFinite);
        }

        let sample = Quaternion::from(reading);
        if sample.norm_sq() <= T::EPSILON {
            log::warn!("discarding orientation sample: degenerate quaternion");
            return Err(SampleError::Degenerate);
        }

        let sample = sample.normalized();
        self.last_sample = Some(sample);
        self.target = (self.dynamic_offset * self.mounting_offset * sample).normalized();
        Ok(())
    }

    /// Recentres the display on the current physical pose.
    ///
    /// Sets the dynamic offset such that the next target computed from
    /// the current sensor orientation is the identity, i.e. the pose
    /// held at the time of the call becomes the visual zero. A no-op
    /// until the first sample has been accepted. The target is not
    /// recomputed here; it changes with the next sample.
    #[doc(alias = "calibrate")]
    pub fn recenter(&mut self)
    where
        T: Scalar,
    {
        let Some(sample) = self.last_sample else {
            log::debug!("recentre requested before the first sample; ignoring");
            return;
        };

        let total = self.mounting_offset * sample;
        self.dynamic_offset = total.inverse();
        log::debug!("display recentred on the current sensor pose");
    }

    /// Advances the displayed orientation by one frame tick and returns
    /// it for the renderer.
    ///
    /// The displayed orientation is spherically interpolated toward the
    /// target by the factor the smoothing strategy selects from their
    /// absolute dot product.
    #[doc(alias = "tick")]
    pub fn advance(&mut self) -> Quaternion<T>
    where
        T: Scalar
            + SquareRoot<T, Output = T>
            + Sine<T, Output = T>
            + ArcCos<T, Output = T>
            + Abs<T, Output = T>
            + Tolerance,
    {
        let dot_abs = self.displayed.dot(&self.target).abs();
        let factor = self.smoothing.factor(dot_abs);
        self.displayed = self.displayed.slerp(&self.target, factor);
        self.displayed
    }
}

impl<T> OrientationDisplayFilter<T> {
    /// The fixed mounting correction.
    pub fn mounting_offset(&self) -> Quaternion<T>
    where
        T: Copy,
    {
        self.mounting_offset
    }

    /// The current recentring correction. Identity until the first
    /// [`recenter`](Self::recenter) call takes effect.
    pub fn dynamic_offset(&self) -> Quaternion<T>
    where
        T: Copy,
    {
        self.dynamic_offset
    }

    /// The most recently accepted sensor sample, if any.
    pub fn last_sample(&self) -> Option<Quaternion<T>>
    where
        T: Copy,
    {
        self.last_sample
    }

    /// The orientation the display is converging toward.
    pub fn target(&self) -> Quaternion<T>
    where
        T: Copy,
    {
        self.target
    }

    /// The orientation currently applied to the display.
    pub fn displayed(&self) -> Quaternion<T>
    where
        T: Copy,
    {
        self.displayed
    }

    /// The active smoothing strategy.
    pub fn smoothing(&self) -> SmoothingStrategy<T>
    where
        T: Copy,
    {
        self.smoothing
    }

    /// Replaces the smoothing strategy.
    pub fn set_smoothing(&mut self, smoothing: SmoothingStrategy<T>) {
        self.smoothing = smoothing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EulerAngles, Vector3};
    use core::f32::consts::{FRAC_PI_2, PI};

    /// The mounting correction used by the digital-twin viewer.
    fn mounting() -> Quaternion<f32> {
        Quaternion::from_euler(&EulerAngles::new(-FRAC_PI_2, 0.0, -FRAC_PI_2))
    }

    fn reading_from(quat: &Quaternion<f32>) -> OrientationReading<f32> {
        OrientationReading::new(quat.x, quat.y, quat.z, quat.w)
    }

    #[test]
    fn test_starts_at_identity() {
        let filter = OrientationDisplayFilter::<f32>::new(mounting());
        assert!(filter.displayed().angle_to(&Quaternion::identity()) < 1e-6);
        assert!(filter.target().angle_to(&Quaternion::identity()) < 1e-6);
        assert!(filter.dynamic_offset().angle_to(&Quaternion::identity()) < 1e-6);
        assert!(filter.last_sample().is_none());
    }

    #[test]
    fn test_target_is_unit() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let samples = [
            Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 1.0),
            Quaternion::from_axis_angle(&Vector3::new(-1.0, 0.0, 1.0), 2.5),
            Quaternion::from_axis_angle(&Vector3::new(0.5, -0.5, 0.25), -0.75),
        ];
        for sample in &samples {
            filter.update(&reading_from(sample)).unwrap();
            assert!((filter.target().norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_target_composition_without_offsets() {
        let mut filter = OrientationDisplayFilter::<f32>::new(Quaternion::identity());

        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        filter.update(&reading_from(&sample)).unwrap();
        assert!(filter.target().angle_to(&sample) < 1e-5);
    }

    #[test]
    fn test_update_normalizes_input() {
        let mut filter = OrientationDisplayFilter::<f32>::new(Quaternion::identity());

        // Twice the length of a unit quaternion, same rotation.
        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), 1.0);
        let scaled = OrientationReading::new(
            sample.x + sample.x,
            sample.y + sample.y,
            sample.z + sample.z,
            sample.w + sample.w,
        );
        filter.update(&scaled).unwrap();
        assert!((filter.last_sample().unwrap().norm() - 1.0).abs() < 1e-6);
        assert!(filter.target().angle_to(&sample) < 1e-5);
    }

    #[test]
    fn test_recenter_before_first_sample_is_noop() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());
        filter.recenter();

        let identity = Quaternion::<f32>::identity();
        assert_eq!(filter.dynamic_offset().x, identity.x);
        assert_eq!(filter.dynamic_offset().y, identity.y);
        assert_eq!(filter.dynamic_offset().z, identity.z);
        assert_eq!(filter.dynamic_offset().w, identity.w);
    }

    #[test]
    fn test_recenter_zeroes_next_target() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let sample = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 1.0);
        filter.update(&reading_from(&sample)).unwrap();
        filter.recenter();

        // The same physical pose, delivered again, now maps to zero.
        filter.update(&reading_from(&sample)).unwrap();
        assert!(filter.target().angle_to(&Quaternion::identity()) < 1e-4);
    }

    #[test]
    fn test_recenter_does_not_touch_current_target() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), 0.8);
        filter.update(&reading_from(&sample)).unwrap();
        let target = filter.target();

        filter.recenter();
        assert_eq!(filter.target().x, target.x);
        assert_eq!(filter.target().y, target.y);
        assert_eq!(filter.target().z, target.z);
        assert_eq!(filter.target().w, target.w);
    }

    #[test]
    fn test_recenter_is_idempotent() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let sample = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 1.0), 1.3);
        filter.update(&reading_from(&sample)).unwrap();

        filter.recenter();
        let first = filter.dynamic_offset();
        filter.recenter();
        let second = filter.dynamic_offset();

        assert_eq!(first.x, second.x);
        assert_eq!(first.y, second.y);
        assert_eq!(first.z, second.z);
        assert_eq!(first.w, second.w);
    }

    #[test]
    fn test_rejects_non_finite_sample() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.5);
        filter.update(&reading_from(&sample)).unwrap();
        let target = filter.target();

        let malformed = OrientationReading::new(f32::NAN, 0.0, 0.0, 1.0);
        assert_eq!(filter.update(&malformed), Err(SampleError::NotFinite));

        // The previous target stays in effect.
        assert_eq!(filter.target().x, target.x);
        assert_eq!(filter.target().y, target.y);
        assert_eq!(filter.target().z, target.z);
        assert_eq!(filter.target().w, target.w);
    }

    #[test]
    fn test_rejects_degenerate_sample() {
        let mut filter = OrientationDisplayFilter::<f32>::new(mounting());

        let degenerate = OrientationReading::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(filter.update(&degenerate), Err(SampleError::Degenerate));
        assert!(filter.last_sample().is_none());
    }

    #[test]
    fn test_convergence_without_overshoot() {
        let mut filter = OrientationDisplayFilter::<f64>::with_smoothing(
            Quaternion::identity(),
            SmoothingStrategy::fixed(0.1),
        );

        let sample = Quaternion::from_axis_angle(
            &Vector3::new(0.0, 0.0, 1.0),
            core::f64::consts::FRAC_PI_2,
        );
        filter.update(&reading_from_f64(&sample)).unwrap();

        let mut previous = filter.displayed().angle_to(&filter.target());
        for _ in 0..200 {
            filter.advance();
            let angle = filter.displayed().angle_to(&filter.target());
            assert!(angle <= previous + 1e-7, "displayed orientation overshot");
            previous = angle;
        }
        assert!(previous < 1e-6);
    }

    fn reading_from_f64(quat: &Quaternion<f64>) -> OrientationReading<f64> {
        OrientationReading::new(quat.x, quat.y, quat.z, quat.w)
    }

    #[test]
    fn test_adaptive_catch_up_on_first_tick() {
        let mut filter = OrientationDisplayFilter::<f32>::new(Quaternion::identity());

        // 180 degrees away: the dot product is zero, the fast bucket applies.
        let sample = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), PI);
        filter.update(&reading_from(&sample)).unwrap();

        let displayed = filter.advance();
        let expected = 0.35 * PI;
        assert!((displayed.angle_to(&Quaternion::identity()) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_adaptive_tracks_slowly_near_target() {
        let mut filter = OrientationDisplayFilter::<f32>::new(Quaternion::identity());

        // Five degrees away: the dot product is far above the threshold.
        let five_degrees = 5.0_f32.to_radians();
        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), five_degrees);
        filter.update(&reading_from(&sample)).unwrap();

        let displayed = filter.advance();
        let expected = 0.08 * five_degrees;
        assert!((displayed.angle_to(&Quaternion::identity()) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_smoothing_can_be_replaced() {
        let mut filter = OrientationDisplayFilter::<f32>::new(Quaternion::identity());
        filter.set_smoothing(SmoothingStrategy::fixed(0.5));
        assert_eq!(filter.smoothing(), SmoothingStrategy::fixed(0.5));

        let sample = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), 1.0);
        filter.update(&reading_from(&sample)).unwrap();

        let displayed = filter.advance();
        assert!((displayed.angle_to(&Quaternion::identity()) - 0.5).abs() < 1e-4);
    }
}
