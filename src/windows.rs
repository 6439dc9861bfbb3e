//! Flow-control windows for outbound DATA.
//!
//! The client only tracks the send direction here: credit is decremented by
//! bytes emitted and replenished by peer WINDOW_UPDATE frames. A grant never
//! exceeds the smaller of the per-stream and the connection-level window.

use crate::Error;

/// Largest legal window size, RFC 9113 section 6.9.1.
pub(crate) const MAX_WINDOW_SIZE: i32 = i32::MAX;

/// Send-direction byte credit for one stream or for the connection.
///
/// The size can go negative when the peer shrinks INITIAL_WINDOW_SIZE after
/// data was emitted; `available()` clamps to zero so a grant never drives
/// the outstanding count negative.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SendWindow {
    size: i32,
}

impl SendWindow {
    pub fn new(size: u32) -> Self {
        SendWindow { size: size as i32 }
    }

    pub fn available(&self) -> usize {
        if self.size < 0 {
            0
        } else {
            self.size as usize
        }
    }

    /// Decrement credit for emitted bytes. Callers only consume what a
    /// previous `reserve` granted.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.available());
        self.size -= n as i32;
    }

    /// Replenish credit from a peer WINDOW_UPDATE.
    pub fn replenish(&mut self, increment: u32) -> Result<(), Error> {
        if increment == 0 {
            return Err(Error::ZeroWindowIncrement);
        }
        // An increment above the maximum window size would wrap the i32
        // cast into a negative delta.
        if increment > MAX_WINDOW_SIZE as u32 {
            return Err(Error::WindowUpdateOverflow);
        }
        let (next, overflow) = self.size.overflowing_add(increment as i32);
        if overflow || next > MAX_WINDOW_SIZE {
            return Err(Error::WindowUpdateOverflow);
        }
        self.size = next;
        Ok(())
    }
}

/// Bound a grant by both the stream window and the connection window.
///
/// Returns how many of the `requested` bytes may be emitted right now. May
/// be less than requested, which triggers a partial write with the rest
/// queued on the stream.
pub(crate) fn reserve(stream: &SendWindow, connection: &SendWindow, requested: usize) -> usize {
    requested.min(stream.available()).min(connection.available())
}
