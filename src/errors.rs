use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolymerError {
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("invalid monomer: {0}")]
    InvalidMonomer(String),
    #[error("malformed copy {copy}: expected exactly two connection points, found {found}")]
    MalformedCopy { copy: usize, found: usize },
    #[error(
        "disconnected connection point in copy {copy}: atom {atom} has {neighbors} neighbors, expected 1"
    )]
    DisconnectedConnectionPoint {
        copy: usize,
        atom: usize,
        neighbors: usize,
    },
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PolymerError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        PolymerError::ParseError(msg.into())
    }

    pub fn invalid_monomer<T: Into<String>>(msg: T) -> Self {
        PolymerError::InvalidMonomer(msg.into())
    }

    pub fn invalid_structure<T: Into<String>>(msg: T) -> Self {
        PolymerError::InvalidStructure(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        PolymerError::InvalidInput(msg.into())
    }

    /// Stable tag used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            PolymerError::ParseError(_) => "parse_error",
            PolymerError::InvalidMonomer(_) => "invalid_monomer",
            PolymerError::MalformedCopy { .. } => "malformed_copy",
            PolymerError::DisconnectedConnectionPoint { .. } => "disconnected_connection_point",
            PolymerError::InvalidStructure(_) => "invalid_structure",
            PolymerError::InvalidInput(_) => "invalid_input",
        }
    }
}
