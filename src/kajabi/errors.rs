use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownstreamOrderError {
    Request(String),
    Status { status: u16, body: String },
}

impl fmt::Display for DownstreamOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "request to kajabi failed: {e}"),
            Self::Status { status, body } => write!(f, "kajabi responded {status}: {body}"),
        }
    }
}

impl std::error::Error for DownstreamOrderError {}
