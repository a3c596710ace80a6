//! GMP 22.5 adds resource name lookups.

mod resource_names;

pub use self::resource_names::*;
pub use super::v224::*;
