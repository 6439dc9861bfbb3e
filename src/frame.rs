use std::fmt;
use std::io;

use http::{HeaderMap, Request, Response};

/// Identifier of one logical exchange on the connection.
///
/// Assigned when the request begins and never reused while the connection
/// lives. Client initiated streams are odd and numerically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(
    /// The raw protocol-level id.
    pub u32,
);

impl StreamId {
    /// Stream id 0 addresses the connection itself, e.g. for the
    /// connection-level flow-control window.
    pub const CONNECTION: StreamId = StreamId(0);

    /// First stream id a client may use.
    pub(crate) const FIRST_CLIENT: StreamId = StreamId(1);

    pub(crate) fn next_client(&self) -> Option<StreamId> {
        self.0.checked_add(2).map(StreamId)
    }

    /// Tell if this id addresses the connection rather than a stream.
    pub fn is_connection(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability contract of the external frame encoder.
///
/// The wire format (HPACK, frame layout) is out of scope for this crate; an
/// implementation of this trait is assumed RFC-compliant. Emission either
/// completes against the transport's internal queue or fails; it must not
/// block the calling context.
pub trait FrameSink {
    /// Emit a HEADERS frame for the request prelude.
    fn emit_headers(
        &mut self,
        id: StreamId,
        request: &Request<()>,
        end_stream: bool,
    ) -> io::Result<()>;

    /// Emit a DATA frame.
    fn emit_data(&mut self, id: StreamId, data: &[u8], end_stream: bool) -> io::Result<()>;

    /// Emit a trailer HEADERS frame. Trailers always end the stream.
    fn emit_trailers(&mut self, id: StreamId, trailers: &HeaderMap) -> io::Result<()>;

    /// Emit RST_STREAM for a locally terminated stream.
    fn emit_reset(&mut self, id: StreamId, error_code: u32) -> io::Result<()>;

    /// Flush the connection.
    fn flush(&mut self) -> io::Result<()>;
}

/// Events handed back to the caller side.
///
/// [`MuxChannel::poll_event()`][crate::MuxChannel::poll_event] drains these
/// in the order they were produced. `Response` appears at most once per
/// stream (the one-shot completion signal), `Data`/`End` stream the response
/// body, `Failed` replaces `Response` when the exchange errored before
/// response headers arrived.
#[derive(Debug)]
pub enum Event {
    /// Response headers arrived.
    Response {
        /// The stream the response belongs to.
        id: StreamId,
        /// Status and headers. The body, if any, follows as `Data` events.
        response: Response<()>,
    },

    /// A chunk of response body.
    Data {
        /// The stream the data belongs to.
        id: StreamId,
        /// The chunk.
        data: Vec<u8>,
    },

    /// The response ended normally.
    End {
        /// The stream that ended.
        id: StreamId,
    },

    /// The exchange failed. No further events follow for this stream.
    Failed {
        /// The stream that failed.
        id: StreamId,
        /// What ended the exchange.
        error: crate::Error,
    },
}
