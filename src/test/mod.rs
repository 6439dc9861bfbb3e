//! Scenario tests driving a full channel against a recording sink.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use http::{HeaderMap, Request, Response};

use crate::{ChannelConfig, FrameSink, MuxChannel, StreamId};


/// What the sink was asked to emit, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FrameRec {
    Headers {
        id: StreamId,
        end_stream: bool,
    },
    Data {
        id: StreamId,
        data: Vec<u8>,
        end_stream: bool,
    },
    Trailers {
        id: StreamId,
        trailers: HeaderMap,
    },
    Reset {
        id: StreamId,
        code: u32,
    },
}

/// Frame sink recording every emission. Writes can be made to fail to
/// simulate a broken transport.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingSink {
    pub frames: Rc<RefCell<Vec<FrameRec>>>,
    pub flushes: Rc<Cell<usize>>,
    pub fail_writes: Rc<Cell<bool>>,
}

impl RecordingSink {
    fn record(&self, frame: FrameRec) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection lost"));
        }
        self.frames.borrow_mut().push(frame);
        Ok(())
    }

    /// Take the frames recorded since the last call.
    pub fn taken(&self) -> Vec<FrameRec> {
        self.frames.borrow_mut().split_off(0)
    }
}

impl FrameSink for RecordingSink {
    fn emit_headers(
        &mut self,
        id: StreamId,
        _request: &Request<()>,
        end_stream: bool,
    ) -> io::Result<()> {
        self.record(FrameRec::Headers { id, end_stream })
    }

    fn emit_data(&mut self, id: StreamId, data: &[u8], end_stream: bool) -> io::Result<()> {
        self.record(FrameRec::Data {
            id,
            data: data.to_vec(),
            end_stream,
        })
    }

    fn emit_trailers(&mut self, id: StreamId, trailers: &HeaderMap) -> io::Result<()> {
        self.record(FrameRec::Trailers {
            id,
            trailers: trailers.clone(),
        })
    }

    fn emit_reset(&mut self, id: StreamId, error_code: u32) -> io::Result<()> {
        self.record(FrameRec::Reset {
            id,
            code: error_code,
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.set(self.flushes.get() + 1);
        Ok(())
    }
}

pub(crate) fn channel() -> (MuxChannel<RecordingSink>, RecordingSink) {
    channel_with(ChannelConfig::default())
}

pub(crate) fn channel_with(config: ChannelConfig) -> (MuxChannel<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    let channel = MuxChannel::new(sink.clone(), config);
    (channel, sink)
}

pub(crate) fn post() -> Request<()> {
    Request::post("https://x.test/upload").body(()).unwrap()
}

pub(crate) fn get() -> Request<()> {
    Request::get("https://x.test/page").body(()).unwrap()
}

pub(crate) fn response(status: u16) -> Response<()> {
    Response::builder().status(status).body(()).unwrap()
}
