/// Reasons a stream reached its terminal state.
///
/// Once a stream carries one of these, no further frames are accepted in
/// either direction. Late inbound frames are discarded with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Both directions completed normally.
    Finished,

    /// Peer sent RST_STREAM with the given error code.
    PeerReset(u32),

    /// The local side cancelled the exchange.
    LocalCancel,

    /// An idle/read timeout fired.
    ///
    /// Treated identically to a local reset for state purposes: the pending
    /// response slot is completed with a timeout error and the stream is
    /// terminal.
    Timeout,

    /// Frame emission failed in the transport.
    ///
    /// Fatal for this stream only. A retry, if any, is an external policy
    /// applied by issuing a new stream.
    TransportFailed,
}

impl EndReason {
    pub(crate) fn explain(&self) -> &'static str {
        match self {
            EndReason::Finished => "exchange finished",
            EndReason::PeerReset(_) => "peer sent RST_STREAM",
            EndReason::LocalCancel => "locally cancelled",
            EndReason::Timeout => "idle/read timeout",
            EndReason::TransportFailed => "transport failure during emission",
        }
    }
}
