//! Protocol dialects built on [`GvmProtocol`](crate::GvmProtocol).

use crate::error::Result;
use crate::sansio::Request;

/// Defines one session method per request builder.
///
/// `operations! { requests; fn get_tasks(args: &GetTasks); }` expands to a
/// `get_tasks` method building its request with `requests::get_tasks` and
/// sending it through `self.send_request_and_transform`.
macro_rules! operations {
    (
        $requests:ident;
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $ty:ty),* $(,)?);
        )*
    ) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, $($arg: $ty),*) -> $crate::error::Result<F::Output> {
                let request =
                    $crate::protocols::IntoRequest::into_request($requests::$name($($arg),*))?;
                self.send_request_and_transform(request)
            }
        )*
    };
}

pub mod gmp;
pub mod osp;

/// Builders either always succeed or validate their arguments.
pub(crate) trait IntoRequest {
    fn into_request(self) -> Result<Request>;
}

impl IntoRequest for Request {
    fn into_request(self) -> Result<Request> {
        Ok(self)
    }
}

impl IntoRequest for Result<Request> {
    fn into_request(self) -> Result<Request> {
        self
    }
}
