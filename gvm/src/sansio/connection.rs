//! Connection state machine for a single request/response exchange.
//!
//! This module implements the client-side exchange logic without any I/O operations.

use std::mem;

use log::trace;

use super::assembler::XmlAssembler;
use super::types::{ParseResult, Request, Response};
use crate::error::{Error, Result};
use crate::xml::parse_xml;

/// Connection state
#[derive(Debug, Clone)]
pub enum ConnectionState {
    /// Ready to send a request
    Initial,
    /// A request was sent, no response data received yet
    AwaitingResponse {
        /// The request waiting for its response
        request: Request,
    },
    /// Response data is being received
    ReceivingData {
        /// The request waiting for its response
        request: Request,
        /// All response bytes received so far
        buffer: Vec<u8>,
        /// Tracks when the response root element is complete
        assembler: XmlAssembler,
    },
    /// Invalid response data was received; only `close()` is allowed
    Error,
}

/// Sans-IO connection for the GMP and OSP request/response protocols.
///
/// Exactly one request may be outstanding at any time.
#[derive(Debug)]
pub struct Connection {
    state: ConnectionState,
}

impl Connection {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Initial,
        }
    }

    /// Start an exchange.
    ///
    /// # Returns
    ///
    /// The bytes to transmit. Fails with [`Error::InvalidState`] unless the
    /// connection is in its initial state.
    pub fn send(&mut self, request: Request) -> Result<Vec<u8>> {
        match self.state {
            ConnectionState::Initial => {
                let data = request.as_bytes().to_vec();
                self.state = ConnectionState::AwaitingResponse { request };
                Ok(data)
            }
            ConnectionState::Error => Err(Error::error_state()),
            _ => Err(Error::invalid_state()),
        }
    }

    /// Process a chunk of response data.
    ///
    /// # Returns
    ///
    /// `Some(Response)` once the response root element is complete and the
    /// received bytes form a well-formed document. The connection is then back
    /// in its initial state. Malformed data fails with [`Error::Xml`] and moves
    /// the connection into its error state.
    pub fn receive_data(&mut self, data: &[u8]) -> Result<Option<Response>> {
        let (request, mut buffer, mut assembler) =
            match mem::replace(&mut self.state, ConnectionState::Initial) {
                ConnectionState::AwaitingResponse { request } => {
                    (request, Vec::new(), XmlAssembler::new())
                }
                ConnectionState::ReceivingData {
                    request,
                    buffer,
                    assembler,
                } => (request, buffer, assembler),
                ConnectionState::Initial => return Err(Error::invalid_state()),
                ConnectionState::Error => {
                    self.state = ConnectionState::Error;
                    return Err(Error::error_state());
                }
            };

        buffer.extend_from_slice(data);
        match assembler.feed(data) {
            Ok(ParseResult::Complete { consumed }) => {
                trace!(
                    "response complete after {} of {} bytes",
                    consumed,
                    buffer.len()
                );
                match parse_xml(&buffer) {
                    Ok(root) => Ok(Some(Response::with_root(request, buffer, root))),
                    Err(e) => {
                        self.state = ConnectionState::Error;
                        Err(with_chunk(e, data))
                    }
                }
            }
            Ok(ParseResult::Incomplete) => {
                self.state = ConnectionState::ReceivingData {
                    request,
                    buffer,
                    assembler,
                };
                Ok(None)
            }
            Err(e) => {
                self.state = ConnectionState::Error;
                Err(e)
            }
        }
    }

    /// Reset to the initial state, discarding any partial response.
    pub fn close(&mut self) {
        self.state = ConnectionState::Initial;
    }

    /// Get the current state of the connection.
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_initial(&self) -> bool {
        matches!(self.state, ConnectionState::Initial)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, ConnectionState::Error)
    }
}

/// Attach the offending chunk to an XML error.
fn with_chunk(error: Error, data: &[u8]) -> Error {
    match error {
        Error::Xml { message, .. } => Error::xml(message, Some(data)),
        e => e,
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ERROR_STATE_MESSAGE;

    fn request() -> Request {
        Request::from_xml_str("<get_version/>").unwrap()
    }

    #[test]
    fn test_connection_new() {
        assert!(Connection::new().is_initial());
    }

    #[test]
    fn test_send_returns_request_bytes() {
        let mut connection = Connection::new();
        assert_eq!(connection.send(request()).unwrap(), b"<get_version/>");
        assert!(matches!(
            connection.state(),
            ConnectionState::AwaitingResponse { .. }
        ));
    }

    #[test]
    fn test_send_twice_is_invalid_state() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();
        let err = connection.send(request()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid State");
    }

    #[test]
    fn test_receive_without_request_is_invalid_state() {
        let mut connection = Connection::new();
        let err = connection.receive_data(b"<a/>").unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
        assert!(connection.is_initial());
    }

    #[test]
    fn test_receive_in_chunks() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();

        assert!(connection
            .receive_data(b"<get_version_response status=\"200\">")
            .unwrap()
            .is_none());
        assert!(matches!(
            connection.state(),
            ConnectionState::ReceivingData { .. }
        ));
        assert!(connection.receive_data(b"<version>22.").unwrap().is_none());

        let response = connection
            .receive_data(b"6</version></get_version_response>")
            .unwrap()
            .unwrap();
        assert_eq!(
            response.data(),
            &b"<get_version_response status=\"200\"><version>22.6</version></get_version_response>"[..]
        );
        assert_eq!(response.request(), &request());
        assert!(connection.is_initial());

        // ready for the next exchange
        connection.send(request()).unwrap();
    }

    #[test]
    fn test_invalid_data_enters_error_state() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();

        let err = connection.receive_data(b"<response<>").unwrap_err();
        assert!(matches!(err, Error::Xml { .. }));
        assert!(connection.is_error());

        let err = connection.send(request()).unwrap_err();
        assert_eq!(err.to_string(), ERROR_STATE_MESSAGE);
        let err = connection.receive_data(b"<a/>").unwrap_err();
        assert_eq!(err.to_string(), ERROR_STATE_MESSAGE);
        assert!(connection.is_error());

        connection.close();
        assert!(connection.is_initial());
        connection.send(request()).unwrap();
    }

    #[test]
    fn test_close_discards_partial_response() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();
        connection.receive_data(b"<get_version_response>").unwrap();
        connection.close();
        assert!(connection.is_initial());
    }

    #[test]
    fn test_response_split_inside_start_tag() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();

        assert!(connection.receive_data(b"<response").unwrap().is_none());
        let response = connection
            .receive_data(b" status=\"200\"/>")
            .unwrap()
            .unwrap();
        assert_eq!(response.status_code(), Some(200));
        assert!(response.is_success());
        assert!(connection.is_initial());
    }

    fn assert_not_well_formed(data: &[u8]) {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();

        match connection.receive_data(data) {
            Err(Error::Xml { chunk, .. }) => assert_eq!(chunk.as_deref(), Some(data)),
            other => panic!("{:?} accepted: {:?}", String::from_utf8_lossy(data), other),
        }
        assert!(connection.is_error());
        let err = connection.send(request()).unwrap_err();
        assert_eq!(err.to_string(), ERROR_STATE_MESSAGE);
    }

    #[test]
    fn test_bare_ampersand_is_rejected() {
        assert_not_well_formed(b"<r status=\"200\">a & b</r>");
    }

    #[test]
    fn test_unknown_entity_is_rejected() {
        assert_not_well_formed(b"<r status=\"200\">&bogus;</r>");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert_not_well_formed(b"<r status=\"200\">\xff\xfe</r>");
    }

    #[test]
    fn test_duplicate_attribute_is_rejected() {
        assert_not_well_formed(b"<r a=\"1\" a=\"2\" status=\"200\"/>");
    }

    #[test]
    fn test_invalid_element_name_is_rejected() {
        assert_not_well_formed(b"<1r status=\"200\"/>");
    }

    #[test]
    fn test_content_after_root_is_rejected() {
        assert_not_well_formed(b"<a/>junk");
        assert_not_well_formed(b"<a/><b/>");
    }

    #[test]
    fn test_error_chunk_is_the_last_chunk() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();
        connection.receive_data(b"<r status=\"200\">a &").unwrap();
        match connection.receive_data(b" b</r>").unwrap_err() {
            Error::Xml { chunk, .. } => assert_eq!(chunk.as_deref(), Some(&b" b</r>"[..])),
            e => panic!("unexpected error {:?}", e),
        }
        assert!(connection.is_error());
    }

    #[test]
    fn test_trailing_whitespace_and_escapes_are_accepted() {
        let mut connection = Connection::new();
        connection.send(request()).unwrap();
        let response = connection
            .receive_data(b"<r status=\"200\">a &amp; b &#x41;</r>\n")
            .unwrap()
            .unwrap();
        assert_eq!(response.xml().unwrap().text(), "a & b A");
        assert!(response.is_success());
    }
}
