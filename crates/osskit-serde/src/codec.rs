//! The configuration-carrying front end of the serde layer.

use osskit_core::{SerdeConfig, SerdeResult};
use osskit_model::{OperationInput, OperationOutput};

/// Hook run after a request has been assembled.
pub type InputSerializer<R> = fn(&Codec, &R, &mut OperationInput) -> SerdeResult<()>;

/// Hook run while a response is disassembled.
pub type OutputDeserializer<R> = fn(&Codec, &mut R, &mut OperationOutput) -> SerdeResult<()>;

/// Assembles requests and disassembles responses under one [`SerdeConfig`].
///
/// The assembler lives in `assemble.rs` and the disassembler in
/// `disassemble.rs`; both are `impl Codec` blocks so every hook receives the
/// codec that invoked it.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: SerdeConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: SerdeConfig) -> Self {
        Self { config }
    }

    /// Create a codec configured from `OSS_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SerdeConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SerdeConfig {
        &self.config
    }
}
