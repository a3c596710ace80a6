use crate::protocols::gmp::requests::v227 as requests;
use crate::protocols::gmp::requests::EntityId;
use crate::transform::ResponseTransform;
use crate::transport::Transport;

use self::requests::{CreateScanner, ModifyScanner};
use super::GmpV226;

dialect! {
    /// A GMP 22.7 session. Scanners may be reached through a relay.
    GmpV227: GmpV226, (22, 7)
}

impl<T: Transport, F: ResponseTransform> GmpV227<T, F> {
    operations! {
        requests;
        fn create_scanner(args: &CreateScanner);
        fn modify_scanner(scanner_id: impl EntityId, args: &ModifyScanner);
    }
}
