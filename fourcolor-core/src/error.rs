#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Expected point of form \"<x>,<y>\", found {0:?}")]
    InvalidPoint(String),

    #[error("Invalid coordinate {text:?}")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Unknown command {0:?}")]
    UnknownCommand(String),
}
