use crate::protocols::gmp::requests::v225 as requests;
use crate::protocols::gmp::requests::EntityId;
use crate::transform::ResponseTransform;
use crate::transport::Transport;

use self::requests::ResourceType;
use super::GmpV224;

dialect! {
    /// A GMP 22.5 session. Adds resource name lookups to [`GmpV224`].
    GmpV225: GmpV224, (22, 5)
}

impl<T: Transport, F: ResponseTransform> GmpV225<T, F> {
    operations! {
        requests;
        fn get_resource_names(resource_type: ResourceType, filter_string: Option<&str>);
        fn get_resource_name(resource_id: impl EntityId, resource_type: ResourceType);
    }
}
