//! Byte channels carrying the XML exchange.
//!
//! A [`Transport`] only moves bytes. Framing is handled by the
//! [`Connection`](crate::sansio::Connection) state machine, so any stream (TLS,
//! SSH tunnels, test doubles) can be plugged in by implementing the trait.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
#[cfg(unix)]
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::error::{display_chunk, Error, Result};

pub const DEFAULT_READ_CHUNK_SIZE: usize = 16 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_GVM_PORT: u16 = 9390;
pub const DEFAULT_UNIX_SOCKET_PATH: &str = "/run/gvmd/gvmd.sock";

/// A connection-oriented byte channel.
pub trait Transport {
    /// Open the channel. Calling it on an open channel is a no-op.
    fn connect(&mut self) -> Result<()>;
    /// Close the channel. Closing a closed channel succeeds.
    fn disconnect(&mut self) -> Result<()>;
    /// Write all of `data`.
    fn send(&mut self, data: &[u8]) -> Result<()>;
    /// Block until at least one byte is available and return what was read.
    fn read(&mut self) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn disconnect(&mut self) -> Result<()> {
        (**self).disconnect()
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        (**self).read()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn disconnect(&mut self) -> Result<()> {
        (**self).disconnect()
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        (**self).read()
    }
}

trait Stream: Read + Write {
    fn shutdown(&mut self) -> io::Result<()>;
    fn set_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;
}

impl Stream for TcpStream {
    #[inline]
    fn shutdown(&mut self) -> io::Result<()> {
        TcpStream::shutdown(self, Shutdown::Both)
    }

    #[inline]
    fn set_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.set_read_timeout(timeout)?;
        self.set_write_timeout(timeout)
    }
}

#[cfg(unix)]
impl Stream for UnixStream {
    #[inline]
    fn shutdown(&mut self) -> io::Result<()> {
        UnixStream::shutdown(self, Shutdown::Both)
    }

    #[inline]
    fn set_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.set_read_timeout(timeout)?;
        self.set_write_timeout(timeout)
    }
}

fn not_connected() -> Error {
    Error::gvm("Transport is not connected")
}

fn timeout(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|s| *s > 0).map(Duration::from_secs)
}

fn send_all<S: Stream>(stream: Option<&mut S>, data: &[u8]) -> Result<()> {
    let stream = stream.ok_or_else(not_connected)?;
    stream.write_all(data)?;
    stream.flush()?;
    Ok(())
}

fn read_chunk<S: Stream>(stream: Option<&mut S>, size: usize) -> Result<Vec<u8>> {
    let stream = stream.ok_or_else(not_connected)?;
    // A zero sized read would look like a closed connection.
    let mut buf = vec![0; size.max(1)];
    let n = stream.read(&mut buf)?;
    if n == 0 {
        return Err(Error::gvm("Remote closed the connection"));
    }
    buf.truncate(n);
    Ok(buf)
}

fn shutdown<S: Stream>(stream: Option<S>) {
    if let Some(mut stream) = stream {
        if let Err(e) = stream.shutdown() {
            debug!("ignoring error while shutting down the stream: {}", e);
        }
    }
}

/// Settings of a [`TcpTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    pub hostname: String,
    pub port: u16,
    /// Connect, read and write timeout in seconds. `None` or `0` blocks forever.
    pub timeout_secs: Option<u64>,
    pub read_chunk_size: usize,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.into(),
            port: DEFAULT_GVM_PORT,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// Plain TCP transport.
#[derive(Debug)]
pub struct TcpTransport {
    config: TcpConfig,
    stream: Option<TcpStream>,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    pub fn with_address(hostname: impl Into<String>, port: u16) -> Self {
        Self::new(TcpConfig {
            hostname: hostname.into(),
            port,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &TcpConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(TcpConfig::default())
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }

        let timeout = timeout(self.config.timeout_secs);
        let mut last_error = None;
        for address in (self.config.hostname.as_str(), self.config.port).to_socket_addrs()? {
            let connected = match timeout {
                Some(timeout) => TcpStream::connect_timeout(&address, timeout),
                None => TcpStream::connect(address),
            };
            match connected {
                Ok(mut stream) => {
                    stream.set_timeout(timeout)?;
                    debug!("connected to {}", address);
                    self.stream = Some(stream);
                    return Ok(());
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error
            .map(Error::from)
            .unwrap_or_else(|| {
                Error::gvm(format!(
                    "Could not resolve {}:{}",
                    self.config.hostname, self.config.port
                ))
            }))
    }

    fn disconnect(&mut self) -> Result<()> {
        shutdown(self.stream.take());
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        send_all(self.stream.as_mut(), data)
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        read_chunk(self.stream.as_mut(), self.config.read_chunk_size)
    }
}

/// Settings of a [`UnixSocketTransport`].
#[cfg(unix)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnixSocketConfig {
    pub path: PathBuf,
    /// Read and write timeout in seconds. `None` or `0` blocks forever.
    pub timeout_secs: Option<u64>,
    pub read_chunk_size: usize,
}

#[cfg(unix)]
impl Default for UnixSocketConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_UNIX_SOCKET_PATH),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// Unix domain socket transport, the usual way to reach a local gvmd.
#[cfg(unix)]
#[derive(Debug)]
pub struct UnixSocketTransport {
    config: UnixSocketConfig,
    stream: Option<UnixStream>,
}

#[cfg(unix)]
impl UnixSocketTransport {
    pub fn new(config: UnixSocketConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::new(UnixSocketConfig {
            path: path.into(),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &UnixSocketConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

#[cfg(unix)]
impl Default for UnixSocketTransport {
    fn default() -> Self {
        Self::new(UnixSocketConfig::default())
    }
}

#[cfg(unix)]
impl Transport for UnixSocketTransport {
    fn connect(&mut self) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }
        let mut stream = UnixStream::connect(&self.config.path)?;
        stream.set_timeout(timeout(self.config.timeout_secs))?;
        debug!("connected to {}", self.config.path.display());
        self.stream = Some(stream);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        shutdown(self.stream.take());
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        send_all(self.stream.as_mut(), data)
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        read_chunk(self.stream.as_mut(), self.config.read_chunk_size)
    }
}

/// Logs every byte sent and received through the wrapped transport.
#[derive(Debug, Default)]
pub struct DebugTransport<T> {
    inner: T,
}

impl<T: Transport> DebugTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for DebugTransport<T> {
    fn connect(&mut self) -> Result<()> {
        debug!("connecting");
        self.inner.connect()
    }

    fn disconnect(&mut self) -> Result<()> {
        debug!("disconnecting");
        self.inner.disconnect()
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        debug!("sending {} bytes: {}", data.len(), display_chunk(data));
        self.inner.send(data)
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        let data = self.inner.read()?;
        debug!("read {} bytes: {}", data.len(), display_chunk(&data));
        Ok(data)
    }
}
