//! Per-stream state machine record.

use std::collections::VecDeque;
use std::fmt;

use http::HeaderMap;

use crate::frame::StreamId;
use crate::holder::OutboundMsgHolder;
use crate::reason::EndReason;
use crate::windows::SendWindow;

/// States of one stream, client send side first.
///
/// ```text
///  Idle ──▶ SendingHeaders ──▶ SendingEntityBody ──▶ RequestCompleted
///                │                     │                    │
///                │    (early response) │                    ▼
///                │                     └────────▶ ReceivingHeaders
///                │                                          │
///                │                                          ▼
///                │                                ReceivingEntityBody
///                │                                          │
///                ▼                                          ▼
///              Closed ◀─────────── (reset/timeout) ──────  Closed
/// ```
///
/// `Closed` is reachable from every state. A peer that answers before the
/// request body is fully sent is a legitimate race on a multiplexed
/// connection; `SendingEntityBody` hands the inbound event off to
/// `ReceivingHeaders` rather than dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderState {
    /// Created, no frame emitted yet.
    Idle,
    /// HEADERS frame being emitted.
    SendingHeaders,
    /// Between start and end of outbound request entity body write.
    SendingEntityBody,
    /// End-of-stream emitted for the send direction.
    RequestCompleted,
    /// Response headers being processed.
    ReceivingHeaders,
    /// Response body streaming in.
    ReceivingEntityBody,
    /// Terminal. No further frames accepted in either direction.
    Closed(EndReason),
}

impl SenderState {
    pub(crate) fn is_closed(&self) -> bool {
        matches!(self, SenderState::Closed(_))
    }
}

impl fmt::Display for SenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderState::Idle => write!(f, "Idle"),
            SenderState::SendingHeaders => write!(f, "SendingHeaders"),
            SenderState::SendingEntityBody => write!(f, "SendingEntityBody"),
            SenderState::RequestCompleted => write!(f, "RequestCompleted"),
            SenderState::ReceivingHeaders => write!(f, "ReceivingHeaders"),
            SenderState::ReceivingEntityBody => write!(f, "ReceivingEntityBody"),
            SenderState::Closed(r) => write!(f, "Closed ({})", r.explain()),
        }
    }
}

/// A chunk deferred by flow control, kept in emission order.
#[derive(Debug)]
pub(crate) struct PendingData {
    pub data: Vec<u8>,
    /// This chunk was the caller's final one.
    pub last: bool,
    /// Non-empty trailers attached to the final chunk.
    pub trailers: Option<HeaderMap>,
}

/// One logical request/response exchange.
///
/// Owned by the channel's stream map; the id is the back-reference, there is
/// no cyclic ownership.
#[derive(Debug)]
pub(crate) struct Stream {
    pub id: StreamId,
    pub state: SenderState,
    pub holder: OutboundMsgHolder,
    pub send_window: SendWindow,
    pub pending: VecDeque<PendingData>,
}

impl Stream {
    pub fn new(id: StreamId, initial_window: u32) -> Self {
        Stream {
            id,
            state: SenderState::Idle,
            holder: OutboundMsgHolder::new(),
            send_window: SendWindow::new(initial_window),
            pending: VecDeque::new(),
        }
    }

    /// Transition to `next`, logging the edge.
    pub fn transition(&mut self, next: SenderState) {
        debug!("stream {}: {} -> {}", self.id, self.state, next);
        self.state = next;
    }

    /// Terminal transition. Buffered-but-unsent payloads are released.
    pub fn close(&mut self, reason: EndReason) {
        if self.state.is_closed() {
            return;
        }
        self.pending.clear();
        self.transition(SenderState::Closed(reason));
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
