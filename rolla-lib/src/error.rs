/// Text that does not conform to `NdS[k#][+M|-M]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Syntax {
    #[error("expected NdS[k#][+M|-M]")]
    Grammar,
    #[error("invalid modifier")]
    Modifier,
}

/// Well-formed text carrying an out-of-bounds value
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Range {
    #[error("dice count out of range")]
    Count,
    #[error("die sides out of range")]
    Sides,
    #[error("keep out of range")]
    Keep,
    #[error("modifier out of range")]
    Modifier,
}

/// Crate Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] Syntax),
    #[error(transparent)]
    Range(#[from] Range),
}

impl Error {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
