//! Per-stream record of request completion and the pending response.

use http::Response;

use crate::Error;

/// Outcome completing a stream's response slot.
pub(crate) type StreamOutcome = Result<Response<()>, Error>;

/// Per-stream outbound message record.
///
/// Single-writer-per-field discipline: `request_written` is set exactly once
/// by the state machine on the terminal send transition; the response slot
/// is set exactly once from the receive path. The slot is the only field
/// mutated from the inbound direction while the stream can still be sending.
#[derive(Debug, Default)]
pub(crate) struct OutboundMsgHolder {
    request_written: bool,
    slot: ResponseSlot,
}

impl OutboundMsgHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_request_written(&self) -> bool {
        self.request_written
    }

    /// Mark the request fully written. Happens during the single transition
    /// that also moves the state to `RequestCompleted`, never before, never
    /// twice.
    pub fn set_request_written(&mut self) {
        debug_assert!(!self.request_written, "request marked written twice");
        self.request_written = true;
    }

    pub fn slot_mut(&mut self) -> &mut ResponseSlot {
        &mut self.slot
    }
}

/// Single-assignment response cell.
///
/// Set at most once; a second fulfillment is a programming defect upstream
/// and is dropped with a diagnostic rather than overwriting the first value.
#[derive(Debug, Default)]
pub(crate) struct ResponseSlot {
    value: Option<StreamOutcome>,
}

impl ResponseSlot {
    /// Fulfill the slot. Returns `true` if this call set the value.
    pub fn fulfill(&mut self, outcome: StreamOutcome) -> bool {
        if self.value.is_some() {
            error!("response slot fulfilled twice, keeping first value");
            return false;
        }
        trace!("response slot fulfilled: ok={}", outcome.is_ok());
        self.value = Some(outcome);
        true
    }

    #[cfg(test)]
    pub fn is_fulfilled(&self) -> bool {
        self.value.is_some()
    }

    #[cfg(test)]
    pub fn get(&self) -> Option<&StreamOutcome> {
        self.value.as_ref()
    }
}
