/// Configuration errors reported when a recognizer is constructed.
///
/// Geometry bounds are checked once, up front, so a malformed configuration
/// fails loudly instead of silently producing degenerate per-frame output.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecognizerConfigError {
    #[error("profile '{profile}': area bounds must satisfy min < max (min={min}, max={max})")]
    InvalidAreaBounds {
        profile: String,
        min: f32,
        max: f32,
    },

    #[error(
        "profile '{profile}': ratio tolerance must satisfy 0 < tolerance < target ratio \
         (target={target}, tolerance={tolerance})"
    )]
    InvalidRatioBand {
        profile: String,
        target: f32,
        tolerance: f32,
    },

    #[error("x-separation bounds must satisfy 0 <= min < max (min={min}, max={max})")]
    InvalidXSeparation { min: f32, max: f32 },

    #[error("max y-separation must be positive (got {max})")]
    InvalidYSeparation { max: f32 },

    #[error("midpoint tolerance must be non-negative (got {tolerance})")]
    InvalidMidpointTolerance { tolerance: f32 },
}
