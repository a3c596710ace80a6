//! The Open Scanner Protocol.
//!
//! OSP scanners answer one request per connection, so [`OspV1`] connects for
//! every exchange and disconnects again afterwards.

use log::debug;

use crate::error::{Error, Result};
use crate::protocol::GvmProtocol;
use crate::protocols::gmp::requests::EntityId;
use crate::sansio::{Request, Response};
use crate::transform::{ResponseTransform, StrTransform};
use crate::transport::Transport;

pub mod requests;

use self::requests::{GetScans, StartScan};

const SUPPORTED_MAJOR_VERSIONS: [u32; 2] = [21, 22];

/// Version negotiation for OSP scanners.
pub struct Osp<T: Transport, F: ResponseTransform = StrTransform> {
    protocol: GvmProtocol<T, F>,
}

impl<T: Transport> Osp<T, StrTransform> {
    pub fn new(transport: T) -> Self {
        Self {
            protocol: GvmProtocol::new(transport),
        }
    }
}

impl<T: Transport, F: ResponseTransform> Osp<T, F> {
    pub fn with_transform(transport: T, transform: F) -> Self {
        Self {
            protocol: GvmProtocol::with_transform(transport, transform),
        }
    }

    /// Check the scanner protocol version and return a session for it.
    pub fn open(mut self) -> Result<OspV1<T, F>> {
        let response = self.protocol.send_request(requests::get_version());
        let disconnected = self.protocol.disconnect();
        let response = response?;
        disconnected?;
        response.raise_for_status()?;

        let version = response
            .xml()?
            .find_text("protocol/version")
            .unwrap_or_default()
            .to_string();
        let (major, minor) = crate::protocols::gmp::parse_version(&version)?;
        if !SUPPORTED_MAJOR_VERSIONS.contains(&major) {
            return Err(Error::gvm(format!(
                "Remote scanner protocol version {}.{} is not supported, \
                 supported major versions are 21 and 22",
                major, minor
            )));
        }
        debug!("Using OSP 1 for remote protocol version {}.{}", major, minor);
        Ok(OspV1 {
            protocol: self.protocol,
        })
    }
}

/// An OSP session.
pub struct OspV1<T: Transport, F: ResponseTransform = StrTransform> {
    protocol: GvmProtocol<T, F>,
}

impl<T: Transport> OspV1<T, StrTransform> {
    pub fn new(transport: T) -> Self {
        Self {
            protocol: GvmProtocol::new(transport),
        }
    }
}

impl<T: Transport, F: ResponseTransform> OspV1<T, F> {
    pub fn with_transform(transport: T, transform: F) -> Self {
        Self {
            protocol: GvmProtocol::with_transform(transport, transform),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.protocol.is_connected()
    }

    /// Send a request on a fresh connection which is closed afterwards.
    pub fn send_request(&mut self, request: Request) -> Result<Response> {
        self.protocol.connect()?;
        let response = self.protocol.send_request(request);
        let disconnected = self.protocol.disconnect();
        let response = response?;
        disconnected?;
        Ok(response)
    }

    pub fn send_request_and_transform(&mut self, request: Request) -> Result<F::Output> {
        let response = self.send_request(request)?;
        self.protocol.transform(response)
    }

    /// Send a raw XML command.
    pub fn send_command(&mut self, xml: &str) -> Result<F::Output> {
        self.send_request_and_transform(Request::from_xml_str(xml)?)
    }

    pub fn protocol(&self) -> &GvmProtocol<T, F> {
        &self.protocol
    }

    operations! {
        requests;
        fn get_version();
        fn help();
        fn get_scanner_details();
        fn get_vts(vt_id: Option<&str>);
        fn get_scans(args: &GetScans);
        fn delete_scan(scan_id: impl EntityId);
        fn stop_scan(scan_id: impl EntityId);
        fn start_scan(args: &StartScan);
    }
}
