//! HTTP/2 client stream multiplexing core.
//!
//! Sans-IO protocol impl, which means no sockets, no TLS and no async
//! runtime in here. The crate owns the per-stream state machine of a
//! multiplexed client connection: which frame-level operation is legal
//! right now, how flow-control credit gates outbound DATA, and how the
//! race between "still sending the request body" and "the peer already
//! answered" resolves. Frame encoding/decoding is an external collaborator
//! behind the [`FrameSink`] trait.
//!
//! Each stream walks the sender states:
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────────┐
//! │       Idle       │────▶│  SendingHeaders  │──┬─▶│  SendingEntityBody   │
//! └──────────────────┘     └──────────────────┘  │  └──────────────────────┘
//!                                                │        │         │
//!                                   (no body)    │        │         │ (early
//!                                                ▼        ▼         │ response)
//!                          ┌──────────────────────────────────┐     │
//!                          │         RequestCompleted         │     │
//!                          └──────────────────────────────────┘     │
//!                                                │                  │
//!                                                ▼                  ▼
//!                          ┌──────────────────┐     ┌──────────────────────┐
//!                          │ ReceivingEntity  │◀────│   ReceivingHeaders   │
//!                          │       Body       │     └──────────────────────┘
//!                          └──────────────────┘
//! ```
//!
//! `Closed` is reachable from every state through peer reset, local
//! cancellation, timeout or transport failure.
//!
//! All streams of one connection are owned by a [`MuxChannel`], which is
//! driven from a single execution context: the caller side invokes
//! `begin_request`/`write_chunk`, the connection side dispatches inbound
//! frames via the `recv_*` operations, and completions come back through
//! [`MuxChannel::poll_event()`].
//!
//! # Example
//!
//! ```
//! use h2mux_proto::{ChannelConfig, Event, FrameSink, MuxChannel, StreamId};
//! use h2mux_proto::http::{HeaderMap, Request, Response};
//! use std::io;
//!
//! // A sink that discards frames. A real one hands them to the
//! // connection's HTTP/2 frame encoder.
//! struct NullSink;
//!
//! impl FrameSink for NullSink {
//!     fn emit_headers(&mut self, _: StreamId, _: &Request<()>, _: bool) -> io::Result<()> {
//!         Ok(())
//!     }
//!     fn emit_data(&mut self, _: StreamId, _: &[u8], _: bool) -> io::Result<()> {
//!         Ok(())
//!     }
//!     fn emit_trailers(&mut self, _: StreamId, _: &HeaderMap) -> io::Result<()> {
//!         Ok(())
//!     }
//!     fn emit_reset(&mut self, _: StreamId, _: u32) -> io::Result<()> {
//!         Ok(())
//!     }
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut channel = MuxChannel::new(NullSink, ChannelConfig::default());
//!
//! // Caller side: begin the request and stream the body.
//! let request = Request::post("https://example.test/upload").body(()).unwrap();
//! let id = channel.begin_request(request, true).unwrap();
//!
//! channel.write_chunk(id, b"part1".to_vec(), false, None).unwrap();
//! channel.write_chunk(id, b"part2".to_vec(), true, None).unwrap();
//!
//! // Connection side: the peer answers.
//! let response = Response::builder().status(200).body(()).unwrap();
//! channel.recv_headers(id, response, true).unwrap();
//!
//! match channel.poll_event() {
//!     Some(Event::Response { response, .. }) => assert_eq!(response.status(), 200),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # In scope:
//!
//! * Per-stream sender state machine with explicit, legal-per-state operations
//! * Flow-control gating of DATA frames (per-stream and connection window)
//! * Trailer framing on the final chunk
//! * Data event listener chain with veto semantics
//! * One-shot response completion per stream
//!
//! # Out of scope:
//!
//! * Opening/closing sockets, TLS
//! * Frame wire format (HPACK, frame layout)
//! * Connection pooling, handshake/upgrade
//! * Server push
//! * HTTP/1.1 semantics
//!
//! # The http crate
//!
//! Based on the [http crate](https://crates.io/crates/http) - a unified HTTP API for Rust.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![deny(missing_docs)]

#[macro_use]
extern crate log;

mod channel;
mod error;
mod frame;
mod holder;
mod listener;
mod reason;
mod stream;
mod util;
mod windows;

pub use channel::{ChannelConfig, MuxChannel, Strictness};
pub use error::Error;
pub use frame::{Event, FrameSink, StreamId};
pub use listener::DataEventListener;
pub use reason::EndReason;
pub use stream::SenderState;

// Re-export the basis for this crate.
pub use http;

#[cfg(test)]
mod test;
