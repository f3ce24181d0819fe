// Enable no_std mode.
#![cfg_attr(not(feature = "std"), no_std)]
// Ensure allow(unsafe_code) / forbid(unsafe_code) markers.
#![cfg_attr(feature = "unsafe", allow(unsafe_code))]
#![cfg_attr(not(feature = "unsafe"), forbid(unsafe_code))]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod accuracy;
mod errors;
mod event;
mod filter;
mod num_traits;
mod smoothing;
pub mod telemetry;
pub mod types;

pub use crate::accuracy::SensorAccuracy;
pub use crate::errors::SampleError;
pub use crate::event::OrientationEvent;
pub use crate::filter::OrientationDisplayFilter;
pub use crate::smoothing::{SmoothingDefaults, SmoothingStrategy};
pub use crate::types::{EulerAngles, OrientationReading, Quaternion, Vector3};

pub use crate::num_traits::*;
