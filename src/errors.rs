use thiserror::Error;

/// Reasons an orientation sample is rejected before it reaches the
/// orientation pipeline.
///
/// Rejected samples are discarded; the previously computed target
/// orientation stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// At least one quaternion component is NaN or infinite.
    #[error("orientation sample contains non-finite components")]
    NotFinite,
    /// The quaternion has a near-zero norm and cannot be normalized.
    #[error("orientation sample is degenerate and cannot be normalized")]
    Degenerate,
}
