use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    MissingHeader,
    MalformedHeader,
    NoSignatures,
    Mismatch,
    TimestampOutsideTolerance,
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "No stripe-signature header value was provided."),
            Self::MalformedHeader => {
                write!(f, "Unable to extract timestamp and signatures from header")
            }
            Self::NoSignatures => {
                write!(f, "No signatures found with expected scheme")
            }
            Self::Mismatch => write!(
                f,
                "No signatures found matching the expected signature for payload"
            ),
            Self::TimestampOutsideTolerance => write!(f, "Timestamp outside the tolerance zone"),
        }
    }
}

impl std::error::Error for SignatureError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFetchError {
    Request(String),
    Status { status: u16, body: String },
    Decode(String),
    MissingUnitAmount(String),
}

impl fmt::Display for UpstreamFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "request to stripe failed: {e}"),
            Self::Status { status, body } => write!(f, "stripe responded {status}: {body}"),
            Self::Decode(e) => write!(f, "unexpected stripe response: {e}"),
            Self::MissingUnitAmount(id) => {
                write!(f, "subscription {id} has no priced line item")
            }
        }
    }
}

impl std::error::Error for UpstreamFetchError {}
