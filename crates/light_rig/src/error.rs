//! Error types shared by the registry and the binder

use crate::config::ConfigError;
use crate::render::texture_manager::TextureError;
use crate::ui::WidgetId;

/// Light rig errors
#[derive(thiserror::Error, Debug)]
pub enum RigError {
    /// A light declaration is malformed; only that light is skipped
    #[error("invalid descriptor for {light}: {reason}")]
    InvalidDescriptor {
        /// Descriptor name
        light: String,
        /// What is wrong
        reason: String,
    },

    /// A control refers to a field the target cannot provide; only that control is skipped
    #[error("cannot bind {target}.{field}: {reason}")]
    InvalidBinding {
        /// Target type name
        target: String,
        /// Field name
        field: String,
        /// What is wrong
        reason: String,
    },

    /// A widget event arrived for a widget no binding owns
    #[error("no control is bound to {0}")]
    UnknownWidget(WidgetId),

    /// Texture load failure
    #[error(transparent)]
    Texture(#[from] TextureError),

    /// Rig file failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for rig operations
pub type RigResult<T> = Result<T, RigError>;
