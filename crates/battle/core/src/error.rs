//! Error classification shared by `ProcessError`, `BattleError` and the
//! content crate's builder errors.
//!
//! Only broken contracts are errors. A dead or protected target and a failed
//! accuracy roll are ordinary outcomes carried in results.

/// Who is at fault when an error surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A collaborator broke its promise: an exhausted move was chosen, or
    /// a chooser returned nothing.
    Validation,

    /// The engine's own bookkeeping is inconsistent.
    Internal,
}

impl ErrorSeverity {
    /// Lowercase label used in log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error enum in the battle crates.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier such as `PROCESS_MOVE_EXHAUSTED`. Falls back to the
    /// type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
