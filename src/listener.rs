//! Observers invoked before each outbound DATA frame write.

use crate::frame::StreamId;

/// Observer of outbound DATA frame writes.
///
/// Listeners are registered once at connection setup, before the first
/// stream starts, and are invoked for every stream on that connection in
/// registration order.
pub trait DataEventListener {
    /// Called before a DATA frame is written.
    ///
    /// Return `true` to observe and let the default write continue. Return
    /// `false` to take ownership of emitting (or deferring) this frame: the
    /// chain short-circuits and the channel does not default-emit.
    fn on_data_write(&mut self, id: StreamId, data: &[u8], end_stream: bool) -> bool;
}

/// Run the chain in registration order.
///
/// Returns `true` if the default write should go ahead, `false` if some
/// listener claimed the frame. A veto short-circuits the remaining chain.
pub(crate) fn dispatch(
    listeners: &mut [Box<dyn DataEventListener>],
    id: StreamId,
    data: &[u8],
    end_stream: bool,
) -> bool {
    for listener in listeners.iter_mut() {
        if !listener.on_data_write(id, data, end_stream) {
            return false;
        }
    }
    true
}
