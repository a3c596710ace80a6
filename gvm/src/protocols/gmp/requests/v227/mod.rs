//! GMP 22.7 lets scanners be reached through a relay.

mod scanners;

pub use self::scanners::{create_scanner, modify_scanner, CreateScanner, ModifyScanner};
pub use super::v226::*;
