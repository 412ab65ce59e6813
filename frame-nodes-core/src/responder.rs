//! Immediate-response capability.
//!
//! A node may answer the host's pending HTTP request with the first item's
//! result before the rest of the workflow runs. The host injects a
//! [`Responder`]; the batch executor wraps it in a [`ResponseSlot`] so it is
//! used at most once per batch.

use frame_types::HttpResponse;
use std::io::Write;
use tracing::debug;

use crate::error::NodeError;

/// Delivers an immediate response to whoever triggered the workflow.
pub trait Responder {
    fn send_response(&mut self, response: HttpResponse) -> Result<(), NodeError>;
}

/// Keeps every response in memory.
#[derive(Debug, Default)]
pub struct CollectingResponder {
    pub responses: Vec<HttpResponse>,
}

impl CollectingResponder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Responder for CollectingResponder {
    fn send_response(&mut self, response: HttpResponse) -> Result<(), NodeError> {
        self.responses.push(response);
        Ok(())
    }
}

/// Writes the response as an HTTP/1.1 message to any writer.
pub struct WriterResponder<W: Write> {
    writer: W,
}

impl<W: Write> WriterResponder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Responder for WriterResponder<W> {
    fn send_response(&mut self, response: HttpResponse) -> Result<(), NodeError> {
        let body = response.body.to_wire_string();
        let reason = if response.status_code == 200 { "OK" } else { "" };

        write!(self.writer, "HTTP/1.1 {} {}\r\n", response.status_code, reason)?;
        for (name, value) in &response.headers {
            write!(self.writer, "{}: {}\r\n", name, value)?;
        }
        write!(self.writer, "content-length: {}\r\n\r\n", body.len())?;
        self.writer.write_all(body.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// One batch's use of a responder: the first `send` goes through, any later
/// one fails with [`NodeError::ResponseAlreadySent`].
pub struct ResponseSlot<'r, R: Responder + ?Sized> {
    responder: &'r mut R,
    sent: bool,
}

impl<'r, R: Responder + ?Sized> ResponseSlot<'r, R> {
    pub fn new(responder: &'r mut R) -> Self {
        Self {
            responder,
            sent: false,
        }
    }

    pub fn send(&mut self, response: HttpResponse) -> Result<(), NodeError> {
        if self.sent {
            return Err(NodeError::ResponseAlreadySent);
        }
        debug!(
            status = response.status_code,
            content_type = response.content_type().unwrap_or_default(),
            "Sending immediate response"
        );
        // Marked before delivery: a failed attempt still counts as the one.
        self.sent = true;
        self.responder.send_response(response)
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slot_is_single_use() {
        let mut collector = CollectingResponder::new();
        {
            let mut slot = ResponseSlot::new(&mut collector);
            slot.send(HttpResponse::html("<html></html>")).unwrap();
            assert!(slot.is_sent());
            assert!(matches!(
                slot.send(HttpResponse::html("again")),
                Err(NodeError::ResponseAlreadySent)
            ));
        }
        assert_eq!(collector.responses.len(), 1);
    }

    #[test]
    fn test_writer_responder_format() {
        let mut responder = WriterResponder::new(Vec::new());
        responder
            .send_response(HttpResponse::json(json!({ "ok": true })))
            .unwrap();
        let text = String::from_utf8(responder.into_inner()).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("content-type: application/json; charset=utf-8\r\n"));
        assert!(text.contains("content-length: 11\r\n"));
        assert!(text.ends_with("\r\n\r\n{\"ok\":true}"));
    }
}
