//! Sans-IO implementation of the GMP/OSP request/response exchange.
//!
//! The state machine in this module never touches a socket. It turns a
//! [`Request`] into bytes to transmit and assembles incoming chunks until one
//! complete XML response element has been received:
//!
//! - `send()`: serialize a request and start waiting for its response
//! - `receive_data()`: feed received bytes, yields a [`Response`] once complete
//! - `close()`: reset the state machine for the next exchange
//!
//! # Example
//!
//! ```
//! use gvm::sansio::{Connection, Request};
//!
//! let mut connection = Connection::new();
//! let request = Request::from_xml_str("<get_version/>")?;
//!
//! let _bytes_to_send = connection.send(request)?;
//!
//! // Chunks arrive in arbitrary pieces from the transport.
//! assert!(connection.receive_data(b"<get_version_response status=\"200\">")?.is_none());
//! let response = connection
//!     .receive_data(b"<version>22.6</version></get_version_response>")?
//!     .expect("complete response");
//!
//! assert!(response.is_success());
//! assert!(connection.is_initial());
//! # Ok::<(), gvm::Error>(())
//! ```

pub mod assembler;
pub mod connection;
pub mod types;

pub use self::assembler::XmlAssembler;
pub use self::connection::{Connection, ConnectionState};
pub use self::types::{ParseResult, Request, Response};
