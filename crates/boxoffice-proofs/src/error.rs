/// Verification-input error, independent of any contract error type.
#[derive(Debug, Clone)]
pub enum ProofError {
    InvalidInput(String),
}

impl std::fmt::Display for ProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ProofError {}
