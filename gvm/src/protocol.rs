//! The session façade driving the sans-io [`Connection`] over a [`Transport`].

use log::{debug, warn};

use crate::error::Result;
use crate::sansio::{Connection, Request, Response};
use crate::transform::{ResponseTransform, StrTransform};
use crate::transport::Transport;

/// A protocol session.
///
/// The session connects lazily on the first request. Any failure during an
/// exchange disconnects the transport and resets the state machine, so the
/// session stays usable for the next request. Dropping the session
/// disconnects it.
pub struct GvmProtocol<T: Transport, F: ResponseTransform = StrTransform> {
    transport: T,
    connection: Connection,
    transform: F,
    connected: bool,
}

impl<T: Transport> GvmProtocol<T, StrTransform> {
    pub fn new(transport: T) -> Self {
        Self::with_transform(transport, StrTransform)
    }
}

impl<T: Transport, F: ResponseTransform> GvmProtocol<T, F> {
    pub fn with_transform(transport: T, transform: F) -> Self {
        Self {
            transport,
            connection: Connection::new(),
            transform,
            connected: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connect the transport if not connected yet.
    pub fn connect(&mut self) -> Result<()> {
        if !self.connected {
            self.transport.connect()?;
            self.connected = true;
        }
        Ok(())
    }

    /// Disconnect the transport and reset the state machine.
    pub fn disconnect(&mut self) -> Result<()> {
        let result = if self.connected {
            self.connected = false;
            self.transport.disconnect()
        } else {
            Ok(())
        };
        self.connection.close();
        result
    }

    /// Send a request and wait for the complete response.
    pub fn send_request(&mut self, request: Request) -> Result<Response> {
        let result = self.exchange(request);
        if let Err(e) = &result {
            debug!("request failed, disconnecting: {}", e);
            if let Err(e) = self.disconnect() {
                warn!("failed to disconnect after error: {}", e);
            }
        }
        result
    }

    fn exchange(&mut self, request: Request) -> Result<Response> {
        let data = self.connection.send(request)?;
        self.connect()?;
        self.transport.send(&data)?;

        loop {
            let chunk = self.transport.read()?;
            if let Some(response) = self.connection.receive_data(&chunk)? {
                return Ok(response);
            }
        }
    }

    /// Send a request and apply the session transform to its response.
    pub fn send_request_and_transform(&mut self, request: Request) -> Result<F::Output> {
        let response = self.send_request(request)?;
        self.transform.transform(response)
    }

    /// Send a raw XML command, e.g. `<get_version/>`.
    pub fn send_command(&mut self, xml: &str) -> Result<F::Output> {
        let request = Request::from_xml_str(xml)?;
        self.send_request_and_transform(request)
    }

    pub fn transform(&self, response: Response) -> Result<F::Output> {
        self.transform.transform(response)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

impl<T: Transport, F: ResponseTransform> Drop for GvmProtocol<T, F> {
    fn drop(&mut self) {
        if self.connected {
            if let Err(e) = self.disconnect() {
                warn!("failed to disconnect: {}", e);
            }
        }
    }
}

impl<T, F> std::fmt::Debug for GvmProtocol<T, F>
where
    T: Transport + std::fmt::Debug,
    F: ResponseTransform + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GvmProtocol")
            .field("transport", &self.transport)
            .field("connection", &self.connection)
            .field("transform", &self.transform)
            .field("connected", &self.connected)
            .finish()
    }
}
