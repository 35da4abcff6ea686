use core::fmt;

use uefi_snake_gfx::GfxError;

/// Errors that end a run early. Losing and winning are outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Gfx(GfxError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Gfx(e) => write!(f, "graphics: {}", e),
        }
    }
}

impl From<GfxError> for EngineError {
    fn from(e: GfxError) -> Self {
        EngineError::Gfx(e)
    }
}
