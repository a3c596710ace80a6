mod common;

use gvm::protocols::osp::requests::{GetScans, StartScan};
use gvm::protocols::osp::{Osp, OspV1};
use gvm::Error;

use crate::common::ScriptedTransport;

fn osp_version(version: &str) -> String {
    format!(
        "<get_version_response status=\"200\" status_text=\"OK\">\
         <protocol><name>OSP</name><version>{}</version></protocol>\
         <daemon><name>OSPd OpenVAS</name><version>22.4.0</version></daemon>\
         </get_version_response>",
        version
    )
}

#[test]
fn opens_supported_versions() {
    for version in ["21.4", "22.4"] {
        let transport = ScriptedTransport::new(&[&osp_version(version)]);
        let osp = Osp::new(transport.clone()).open().unwrap();
        assert!(!osp.is_connected());

        let wire = transport.wire();
        assert_eq!(wire.connects, 1);
        assert_eq!(wire.disconnects, 1);
    }
}

#[test]
fn rejects_unsupported_versions() {
    let transport = ScriptedTransport::new(&[&osp_version("20.8")]);
    let err = Osp::new(transport).open().err().unwrap();
    assert!(matches!(err, Error::Gvm { .. }));
    assert!(err.to_string().contains("20.8"));
}

#[test]
fn every_exchange_uses_its_own_connection() {
    let transport = ScriptedTransport::new(&[
        "<get_scans_response status=\"200\" status_text=\"OK\"/>",
        "<get_vts_response status=\"200\" status_text=\"OK\"><vts/></get_vts_response>",
    ]);
    let mut osp = OspV1::new(transport.clone());

    osp.get_scans(&GetScans::default()).unwrap();
    assert!(!osp.is_connected());
    assert!(!transport.wire().connected);

    let vts = osp.get_vts(None).unwrap();
    assert!(vts.contains("<vts/>"));

    let wire = transport.wire();
    assert_eq!(wire.connects, 2);
    assert_eq!(wire.disconnects, 2);
    assert_eq!(
        wire.sent,
        [r#"<get_scans details="1" pop_results="0"/>"#, "<get_vts/>"]
    );
}

#[test]
fn failed_exchange_leaves_session_disconnected() {
    let transport = ScriptedTransport::new(&["<stop_scan_response"]);
    let mut osp = OspV1::new(transport.clone());
    assert!(osp.stop_scan("s1").is_err());
    assert!(!osp.is_connected());
    assert!(!transport.wire().connected);
}

#[test]
fn start_scan_validation_happens_before_connecting() {
    let transport = ScriptedTransport::default();
    let mut osp = OspV1::new(transport.clone());
    let err = osp.start_scan(&StartScan::default()).unwrap_err();
    assert_eq!(err.argument(), Some("target"));
    assert_eq!(transport.wire().connects, 0);
}
