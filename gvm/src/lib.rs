//! Client support for the [Greenbone Management Protocol] (GMP) and the
//! Open Scanner Protocol (OSP).
//!
//! Both protocols exchange single XML elements over a byte stream. The crate is
//! layered the same way the protocols are:
//!
//! - [`xml`]: building request elements and reading response trees
//! - [`sansio`]: the I/O free state machine framing one request/response exchange
//! - [`transport`]: byte channels (TCP, Unix domain sockets, or your own)
//! - [`protocol`]: the session façade pairing a transport with the state machine
//! - [`protocols`]: the GMP and OSP request catalogues and version negotiation
//!
//! # Example
//!
//! ```no_run
//! use gvm::protocols::gmp::{Gmp, GmpDialect};
//! use gvm::transport::UnixSocketTransport;
//!
//! let transport = UnixSocketTransport::default();
//! let mut gmp = Gmp::new(transport).open()?;
//! gmp.authenticate("admin", "admin")?;
//!
//! let tasks = match &mut gmp {
//!     GmpDialect::V228(gmp) => gmp.get_agents(&Default::default())?,
//!     gmp => gmp.get_tasks(&Default::default())?,
//! };
//! println!("{}", tasks);
//! # Ok::<(), gvm::Error>(())
//! ```
//!
//! [Greenbone Management Protocol]: https://docs.greenbone.net/API/GMP/gmp.html

pub mod error;
pub mod protocol;
pub mod protocols;
pub mod sansio;
pub mod transform;
pub mod transport;
pub mod xml;

pub use crate::error::{Error, Result};
pub use crate::protocol::GvmProtocol;
pub use crate::sansio::{Connection, Request, Response};
pub use crate::transform::{
    CheckStatusTransform, FnTransform, ResponseTransform, StrTransform, XmlCheckStatusTransform,
    XmlTransform,
};
pub use crate::transport::Transport;
