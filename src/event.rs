use crate::accuracy::SensorAccuracy;
use crate::types::OrientationReading;

/// The payload of an orientation event from the sensor push channel.
///
/// Events carry the quaternion components in x, y, z, w order and,
/// optionally, the sensor's calibration quality as a raw 0–3 level.
/// With the `serde` feature enabled the type deserializes directly
/// from the JSON shape the device emits, e.g.
/// `{"x":0.0,"y":0.0,"z":0.7,"w":0.7,"calib":3}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationEvent<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    /// Raw calibration quality, if the device reported one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub calib: Option<u8>,
}

impl<T> OrientationEvent<T> {
    /// Initializes a new [`OrientationEvent`] instance.
    pub const fn new(x: T, y: T, z: T, w: T, calib: Option<u8>) -> Self {
        Self { x, y, z, w, calib }
    }

    /// The orientation sample carried by this event.
    pub fn reading(&self) -> OrientationReading<T>
    where
        T: Clone,
    {
        OrientationReading::new(
            self.x.clone(),
            self.y.clone(),
            self.z.clone(),
            self.w.clone(),
        )
    }

    /// The calibration quality carried by this event, if any. Raw
    /// levels outside the defined 0–3 range yield `None`.
    pub fn accuracy(&self) -> Option<SensorAccuracy> {
        self.calib.and_then(SensorAccuracy::from_level)
    }
}
