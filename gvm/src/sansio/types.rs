//! Core types exchanged through the sans-io state machine.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::xml::{parse_xml, XmlCommand, XmlElement};

/// Result of feeding bytes into the [`XmlAssembler`](super::XmlAssembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    /// The root element was closed
    Complete {
        /// Bytes consumed since the first chunk, up to the closing `>` of the root
        consumed: usize,
    },
    /// More data is needed to close the root element
    Incomplete,
}

/// A serialized protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    data: Vec<u8>,
}

impl Request {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a request from a raw XML command string.
    ///
    /// The string must be a well-formed XML document, otherwise
    /// [`Error::InvalidArgument`] is returned.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        parse_xml(xml.as_bytes()).map_err(|e| {
            Error::invalid_message("send_command", "xml", format!("Invalid XML command: {}", e))
        })?;
        Ok(Self::new(xml.as_bytes().to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<XmlCommand> for Request {
    fn from(command: XmlCommand) -> Self {
        Self::new(command.to_bytes())
    }
}

impl AsRef<[u8]> for Request {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

/// A complete response together with the request it answers.
///
/// The XML tree is parsed on first access and cached.
#[derive(Debug, Clone)]
pub struct Response {
    request: Request,
    data: Vec<u8>,
    root: OnceLock<std::result::Result<XmlElement, String>>,
}

impl Response {
    pub fn new(request: Request, data: Vec<u8>) -> Self {
        Self {
            request,
            data,
            root: OnceLock::new(),
        }
    }

    /// A response whose bytes were already parsed into `root`.
    pub(crate) fn with_root(request: Request, data: Vec<u8>, root: XmlElement) -> Self {
        Self {
            request,
            data,
            root: OnceLock::from(Ok(root)),
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    /// The raw response bytes, exactly as received.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The parsed root element of the response.
    pub fn xml(&self) -> Result<&XmlElement> {
        self.root
            .get_or_init(|| parse_xml(&self.data).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|message| Error::xml(message.clone(), None))
    }

    /// The `status` attribute of the root element, if present and numeric.
    pub fn status_code(&self) -> Option<u16> {
        self.xml()
            .ok()?
            .attribute("status")
            .and_then(|status| status.trim().parse().ok())
    }

    pub fn status_text(&self) -> Option<&str> {
        self.xml().ok()?.attribute("status_text")
    }

    /// `true` for a status code in the range 200 to 299.
    pub fn is_success(&self) -> bool {
        matches!(self.status_code(), Some(200..=299))
    }

    /// Fail with [`Error::Status`] unless [`is_success`](Self::is_success).
    pub fn raise_for_status(&self) -> Result<&Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Status(Box::new(self.clone())))
        }
    }
}

impl PartialEq for Response {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request && self.data == other.data
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        Request::from_xml_str("<get_version/>").unwrap()
    }

    #[test]
    fn request_from_command() {
        let request = Request::from(XmlCommand::new("get_version"));
        assert_eq!(request.as_bytes(), b"<get_version/>");
        assert_eq!(request.to_string(), "<get_version/>");
    }

    #[test]
    fn request_rejects_malformed_xml() {
        let err = Request::from_xml_str("<get_version>").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn status_accessors() {
        let response = Response::new(
            request(),
            br#"<get_version_response status="200" status_text="OK"/>"#.to_vec(),
        );
        assert_eq!(response.status_code(), Some(200));
        assert_eq!(response.status_text(), Some("OK"));
        assert!(response.is_success());
        assert!(response.raise_for_status().is_ok());
    }

    #[test]
    fn missing_or_malformed_status_is_unset() {
        let response = Response::new(request(), b"<get_version_response/>".to_vec());
        assert_eq!(response.status_code(), None);
        assert!(!response.is_success());

        let response =
            Response::new(request(), br#"<get_version_response status="OK"/>"#.to_vec());
        assert_eq!(response.status_code(), None);
    }

    #[test]
    fn raise_for_status_carries_response() {
        let response = Response::new(
            request(),
            br#"<authenticate_response status="400" status_text="Authentication failed"/>"#
                .to_vec(),
        );
        let err = response.raise_for_status().unwrap_err();
        assert_eq!(err.response().and_then(Response::status_code), Some(400));
        assert_eq!(
            err.to_string(),
            "Response error with status 400: Authentication failed"
        );
    }

    #[test]
    fn invalid_xml_only_fails_on_access() {
        let response = Response::new(request(), b"<a><b></a>".to_vec());
        assert_eq!(response.to_string(), "<a><b></a>");
        assert!(matches!(response.xml(), Err(Error::Xml { .. })));
        assert_eq!(response.status_code(), None);
    }
}
