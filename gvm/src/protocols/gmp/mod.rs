//! The Greenbone Management Protocol.
//!
//! [`Gmp`] asks the manager for its protocol version and hands back the
//! matching [`GmpDialect`]. Each dialect session type exposes the operations of
//! its version; newer sessions dereference to the previous one, so every
//! operation of 22.4 is reachable from a 22.8 session.

use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::protocol::GvmProtocol;
use crate::transform::{ResponseTransform, StrTransform};
use crate::transport::Transport;

/// Wraps the session type of the previous dialect.
macro_rules! dialect {
    ($(#[$meta:meta])* $name:ident: $inner:ident, ($major:expr, $minor:expr)) => {
        $(#[$meta])*
        pub struct $name<
            T: $crate::transport::Transport,
            F: $crate::transform::ResponseTransform = $crate::transform::StrTransform,
        > {
            inner: $inner<T, F>,
        }

        impl<T: $crate::transport::Transport> $name<T, $crate::transform::StrTransform> {
            pub fn new(transport: T) -> Self {
                Self::from_protocol($crate::protocol::GvmProtocol::new(transport))
            }
        }

        impl<T: $crate::transport::Transport, F: $crate::transform::ResponseTransform> $name<T, F> {
            pub fn with_transform(transport: T, transform: F) -> Self {
                Self::from_protocol($crate::protocol::GvmProtocol::with_transform(
                    transport, transform,
                ))
            }

            pub(crate) fn from_protocol(protocol: $crate::protocol::GvmProtocol<T, F>) -> Self {
                Self {
                    inner: $inner::from_protocol(protocol),
                }
            }

            pub fn protocol_version(&self) -> (u32, u32) {
                ($major, $minor)
            }
        }

        impl<T: $crate::transport::Transport, F: $crate::transform::ResponseTransform>
            ::std::ops::Deref for $name<T, F>
        {
            type Target = $inner<T, F>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl<T: $crate::transport::Transport, F: $crate::transform::ResponseTransform>
            ::std::ops::DerefMut for $name<T, F>
        {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.inner
            }
        }
    };
}

pub mod requests;

mod v224;
mod v225;
mod v226;
mod v227;
mod v228;

pub use self::v224::GmpV224;
pub use self::v225::GmpV225;
pub use self::v226::GmpV226;
pub use self::v227::GmpV227;
pub use self::v228::GmpV228;

const SUPPORTED_VERSIONS: &str = "22.4, 22.5, 22.6, 22.7, 22.8";

/// A session of the dialect the manager announced.
pub enum GmpDialect<T: Transport, F: ResponseTransform = StrTransform> {
    V224(GmpV224<T, F>),
    V225(GmpV225<T, F>),
    V226(GmpV226<T, F>),
    V227(GmpV227<T, F>),
    V228(GmpV228<T, F>),
}

impl<T: Transport, F: ResponseTransform> GmpDialect<T, F> {
    /// Pick the dialect for a manager version.
    ///
    /// Minor versions past 22.8 use the 22.8 dialect.
    pub fn for_version(
        major: u32,
        minor: u32,
        protocol: GvmProtocol<T, F>,
    ) -> Result<Self> {
        let dialect = match (major, minor) {
            (22, 4) => GmpDialect::V224(GmpV224::from_protocol(protocol)),
            (22, 5) => GmpDialect::V225(GmpV225::from_protocol(protocol)),
            (22, 6) => GmpDialect::V226(GmpV226::from_protocol(protocol)),
            (22, 7) => GmpDialect::V227(GmpV227::from_protocol(protocol)),
            (22, minor) if minor >= 8 => {
                if minor > 8 {
                    warn!(
                        "Remote manager version 22.{} is newer than 22.8, using GMP 22.8",
                        minor
                    );
                }
                GmpDialect::V228(GmpV228::from_protocol(protocol))
            }
            (major, minor) => {
                return Err(Error::gvm(format!(
                    "Remote manager version {}.{} is not supported, supported versions are {}",
                    major, minor, SUPPORTED_VERSIONS
                )))
            }
        };
        Ok(dialect)
    }

    pub fn protocol_version(&self) -> (u32, u32) {
        match self {
            GmpDialect::V224(gmp) => gmp.protocol_version(),
            GmpDialect::V225(gmp) => gmp.protocol_version(),
            GmpDialect::V226(gmp) => gmp.protocol_version(),
            GmpDialect::V227(gmp) => gmp.protocol_version(),
            GmpDialect::V228(gmp) => gmp.protocol_version(),
        }
    }
}

impl<T: Transport, F: ResponseTransform> Deref for GmpDialect<T, F> {
    type Target = GmpV224<T, F>;

    fn deref(&self) -> &Self::Target {
        match self {
            GmpDialect::V224(gmp) => gmp,
            GmpDialect::V225(gmp) => &**gmp,
            GmpDialect::V226(gmp) => &***gmp,
            GmpDialect::V227(gmp) => &****gmp,
            GmpDialect::V228(gmp) => &*****gmp,
        }
    }
}

impl<T: Transport, F: ResponseTransform> DerefMut for GmpDialect<T, F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            GmpDialect::V224(gmp) => gmp,
            GmpDialect::V225(gmp) => &mut **gmp,
            GmpDialect::V226(gmp) => &mut ***gmp,
            GmpDialect::V227(gmp) => &mut ****gmp,
            GmpDialect::V228(gmp) => &mut *****gmp,
        }
    }
}

/// Version negotiation.
///
/// ```no_run
/// use gvm::protocols::gmp::Gmp;
/// use gvm::transport::TcpTransport;
///
/// let gmp = Gmp::new(TcpTransport::with_address("127.0.0.1", 9390)).open()?;
/// assert_eq!(gmp.protocol_version().0, 22);
/// # Ok::<(), gvm::Error>(())
/// ```
pub struct Gmp<T: Transport, F: ResponseTransform = StrTransform> {
    protocol: GvmProtocol<T, F>,
}

impl<T: Transport> Gmp<T, StrTransform> {
    pub fn new(transport: T) -> Self {
        Self {
            protocol: GvmProtocol::new(transport),
        }
    }
}

impl<T: Transport, F: ResponseTransform> Gmp<T, F> {
    pub fn with_transform(transport: T, transform: F) -> Self {
        Self {
            protocol: GvmProtocol::with_transform(transport, transform),
        }
    }

    /// Query the manager version and open a session of the matching dialect.
    ///
    /// The version query runs on its own connection which is closed before
    /// the dialect session connects.
    pub fn open(mut self) -> Result<GmpDialect<T, F>> {
        let (major, minor) = self.remote_version()?;
        let mut dialect = GmpDialect::for_version(major, minor, self.protocol)?;
        dialect.connect()?;
        let (dialect_major, dialect_minor) = dialect.protocol_version();
        debug!(
            "Using GMP {}.{} for remote manager version {}.{}",
            dialect_major, dialect_minor, major, minor
        );
        Ok(dialect)
    }

    /// Ask the manager for its version without selecting a dialect.
    pub fn remote_version(&mut self) -> Result<(u32, u32)> {
        self.protocol.connect()?;
        let response = self.protocol.send_request(requests::v224::get_version());
        let disconnected = self.protocol.disconnect();
        let response = response?;
        disconnected?;
        response.raise_for_status()?;

        let version = response.xml()?.find_text("version").unwrap_or_default();
        parse_version(version)
    }
}

/// Split `MAJOR.MINOR` into numbers. Anything after the minor number is ignored.
pub(crate) fn parse_version(version: &str) -> Result<(u32, u32)> {
    let invalid = || Error::gvm(format!("Invalid protocol version {:?}", version));
    let version = version.trim();
    if version.is_empty() {
        return Err(Error::gvm("Remote manager did not announce a version"));
    }
    let (major, rest) = version.split_once('.').ok_or_else(invalid)?;
    let minor = rest.split('.').next().unwrap_or_default();
    let major = major.parse().map_err(|_| invalid())?;
    let minor = minor.parse().map_err(|_| invalid())?;
    Ok((major, minor))
}
