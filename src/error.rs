use std::fmt;

use crate::frame::StreamId;

/// Error type for h2mux-proto
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum Error {
    MissingAuthority,
    BadHeader(String),
    ListenersFrozen,
    StreamsExhausted,
    UnknownStream(StreamId),
    NotSendingBody(StreamId),
    BodyContentAfterFinish,
    OrderingViolation(StreamId),
    WindowUpdateOverflow,
    ZeroWindowIncrement,
    Transport(String),
    PeerReset(u32),
    LocalCancel,
    Timeout,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Transport(value.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingAuthority => write!(f, "request uri has no authority"),
            Error::BadHeader(v) => write!(f, "bad header: {}", v),
            Error::ListenersFrozen => {
                write!(f, "listener registration after first stream started")
            }
            Error::StreamsExhausted => write!(f, "no more stream ids on this connection"),
            Error::UnknownStream(id) => write!(f, "no active stream {}", id),
            Error::NotSendingBody(id) => {
                write!(f, "stream {} is not in a body sending state", id)
            }
            Error::BodyContentAfterFinish => {
                write!(f, "attempt to write body after final chunk")
            }
            Error::OrderingViolation(id) => {
                write!(f, "protocol ordering violation on stream {}", id)
            }
            Error::WindowUpdateOverflow => write!(f, "window update overflows max window size"),
            Error::ZeroWindowIncrement => write!(f, "window update with zero increment"),
            Error::Transport(v) => write!(f, "transport failure: {}", v),
            Error::PeerReset(code) => write!(f, "stream reset by peer (error code {})", code),
            Error::LocalCancel => write!(f, "stream cancelled locally"),
            Error::Timeout => write!(f, "stream timed out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_stream_id() {
        let err = Error::UnknownStream(StreamId(7));
        assert_eq!(err.to_string(), "no active stream 7");
    }

    #[test]
    fn display_carries_peer_code() {
        let err = Error::PeerReset(8);
        assert_eq!(err.to_string(), "stream reset by peer (error code 8)");
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Transport(_)));
    }
}
