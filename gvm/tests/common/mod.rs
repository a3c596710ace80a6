#![allow(dead_code)]

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Mutex, Once};

use gvm::{Error, Result, Transport};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// What the scripted peer saw and still has to answer.
#[derive(Debug, Default)]
pub struct Wire {
    pub chunks: VecDeque<Vec<u8>>,
    pub sent: Vec<String>,
    pub connected: bool,
    pub connects: usize,
    pub disconnects: usize,
}

/// In-memory transport answering with prepared chunks.
///
/// Clones share the same wire, so a test keeps one handle for inspection
/// while the session owns the other.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport(Rc<RefCell<Wire>>);

impl ScriptedTransport {
    pub fn new(chunks: &[&str]) -> Self {
        let transport = Self::default();
        transport.push(chunks);
        transport
    }

    pub fn push(&self, chunks: &[&str]) {
        let mut wire = self.0.borrow_mut();
        wire.chunks.extend(chunks.iter().map(|c| c.as_bytes().to_vec()));
    }

    pub fn wire(&self) -> Ref<'_, Wire> {
        self.0.borrow()
    }

    pub fn sent(&self) -> Vec<String> {
        self.wire().sent.clone()
    }

    pub fn last_sent(&self) -> Option<String> {
        self.wire().sent.last().cloned()
    }
}

impl Transport for ScriptedTransport {
    fn connect(&mut self) -> Result<()> {
        let mut wire = self.0.borrow_mut();
        wire.connected = true;
        wire.connects += 1;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        let mut wire = self.0.borrow_mut();
        wire.connected = false;
        wire.disconnects += 1;
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut wire = self.0.borrow_mut();
        assert!(wire.connected, "sent while disconnected");
        wire.sent.push(String::from_utf8_lossy(data).into_owned());
        Ok(())
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        self.0
            .borrow_mut()
            .chunks
            .pop_front()
            .ok_or_else(|| Error::gvm("Remote closed the connection"))
    }
}

pub fn version_response(version: &str) -> String {
    format!(
        "<get_version_response status=\"200\" status_text=\"OK\">\
         <version>{}</version></get_version_response>",
        version
    )
}

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Install a logger recording every message of this test binary.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Messages logged at `level` so far, by any test of this binary.
pub fn logged(level: Level) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message.clone())
        .collect()
}
