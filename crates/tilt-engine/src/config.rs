//! Engine configuration and validation.
//!
//! [`EngineConfig`] is the builder input for a [`TransformGrid`]. It is
//! checked against the supplied grid once, at construction.
//!
//! [`TransformGrid`]: crate::TransformGrid

use tilt_core::ConfigError;

pub use crate::sweep::SweepCollision;

/// Configuration for a [`TransformGrid`](crate::TransformGrid).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// How bulk shifts treat an occupied destination. Default: `Merge`.
    pub sweep_collision: SweepCollision,
    /// Largest grid width the engine accepts. `None` = unbounded.
    ///
    /// Each rotation allocates four scratch buffers of `width * width`
    /// cells, so embedders with untrusted input may want a cap.
    pub max_width: Option<usize>,
}

impl EngineConfig {
    /// Check this configuration against a grid of the given width.
    pub fn validate(&self, width: usize) -> Result<(), ConfigError> {
        match self.max_width {
            Some(0) => Err(ConfigError::ZeroWidthLimit),
            Some(max) if width > max => Err(ConfigError::WidthExceedsLimit { width, max }),
            _ => Ok(()),
        }
    }
}
