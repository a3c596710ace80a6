use std::fmt;
use std::io;

use crate::sansio::Response;

/// Message of [`Error::InvalidState`] once the connection entered its error state.
pub const ERROR_STATE_MESSAGE: &str =
    "The connection is in an error state. Please close the connection.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic protocol failure, e.g. an unsupported remote version.
    #[error("{message}")]
    Gvm { message: String },
    /// Misuse of the connection state machine.
    #[error("{message}")]
    InvalidState { message: String },
    /// Response bytes are not well-formed XML.
    #[error("{message}")]
    Xml {
        message: String,
        chunk: Option<Vec<u8>>,
    },
    /// The response carries a non-success status.
    #[error("{}", describe_status(.0))]
    Status(Box<Response>),
    #[error("{}", describe_argument("Required", .message, .argument, .function))]
    RequiredArgument {
        message: Option<String>,
        argument: Option<String>,
        function: Option<String>,
    },
    #[error("{}", describe_argument("Invalid", .message, .argument, .function))]
    InvalidArgument {
        message: Option<String>,
        argument: Option<String>,
        function: Option<String>,
    },
    /// Never returned by the request builders, whose typed signatures rule it out.
    #[error("The argument {argument} for {function} must be of {arg_type}")]
    InvalidArgumentType {
        argument: String,
        arg_type: String,
        function: String,
    },
    #[error("Transport IO Error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn gvm(message: impl Into<String>) -> Self {
        Error::Gvm {
            message: message.into(),
        }
    }

    pub fn invalid_state() -> Self {
        Error::InvalidState {
            message: "Invalid State".into(),
        }
    }

    pub fn error_state() -> Self {
        Error::InvalidState {
            message: ERROR_STATE_MESSAGE.into(),
        }
    }

    pub fn xml(message: impl Into<String>, chunk: Option<&[u8]>) -> Self {
        Error::Xml {
            message: message.into(),
            chunk: chunk.map(<[u8]>::to_vec),
        }
    }

    pub fn required(function: &str, argument: &str) -> Self {
        Error::RequiredArgument {
            message: None,
            argument: Some(argument.into()),
            function: Some(function.into()),
        }
    }

    pub fn required_message(function: &str, argument: &str, message: impl Into<String>) -> Self {
        Error::RequiredArgument {
            message: Some(message.into()),
            argument: Some(argument.into()),
            function: Some(function.into()),
        }
    }

    pub fn invalid(function: &str, argument: &str) -> Self {
        Error::InvalidArgument {
            message: None,
            argument: Some(argument.into()),
            function: Some(function.into()),
        }
    }

    pub fn invalid_message(function: &str, argument: &str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: Some(message.into()),
            argument: Some(argument.into()),
            function: Some(function.into()),
        }
    }

    /// Typed arguments make a wrong argument type unrepresentable, so no
    /// builder returns this error. It exists for callers mapping untyped input
    /// onto the request builders.
    pub fn invalid_type(function: &str, argument: &str, arg_type: &str) -> Self {
        Error::InvalidArgumentType {
            argument: argument.into(),
            arg_type: arg_type.into(),
            function: function.into(),
        }
    }

    /// Name of the offending argument for argument errors.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Error::RequiredArgument { argument, .. } | Error::InvalidArgument { argument, .. } => {
                argument.as_deref()
            }
            Error::InvalidArgumentType { argument, .. } => Some(argument),
            _ => None,
        }
    }

    /// Name of the operation that rejected its arguments.
    pub fn function(&self) -> Option<&str> {
        match self {
            Error::RequiredArgument { function, .. } | Error::InvalidArgument { function, .. } => {
                function.as_deref()
            }
            Error::InvalidArgumentType { function, .. } => Some(function),
            _ => None,
        }
    }

    /// The response of a [`Error::Status`] failure.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Status(response) => Some(response),
            _ => None,
        }
    }
}

fn describe_argument(
    kind: &str,
    message: &Option<String>,
    argument: &Option<String>,
    function: &Option<String>,
) -> String {
    if let Some(message) = message {
        return message.clone();
    }
    match (argument, function) {
        (Some(argument), Some(function)) => {
            format!("{} argument {} for {}", kind, argument, function)
        }
        (Some(argument), None) => format!("{} argument {}", kind, argument),
        (None, Some(function)) => format!("{} argument for {}", kind, function),
        (None, None) => format!("{} argument", kind),
    }
}

fn describe_status(response: &Response) -> String {
    let mut out = String::from("Response error");
    if let Some(code) = response.status_code() {
        out.push_str(&format!(" with status {}", code));
    }
    if let Some(text) = response.status_text() {
        out.push_str(&format!(": {}", text));
    }
    out
}

/// Renders a received chunk for log and error messages, truncated.
pub(crate) fn display_chunk(chunk: &[u8]) -> impl fmt::Display + '_ {
    struct Chunk<'a>(&'a [u8]);
    impl fmt::Display for Chunk<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            const LIMIT: usize = 256;
            let shown = &self.0[..self.0.len().min(LIMIT)];
            write!(f, "{}", String::from_utf8_lossy(shown))?;
            if self.0.len() > LIMIT {
                write!(f, "...")?;
            }
            Ok(())
        }
    }
    Chunk(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_argument_message() {
        let e = Error::required("create_target", "name");
        assert_eq!(e.to_string(), "Required argument name for create_target");
        assert_eq!(e.argument(), Some("name"));
        assert_eq!(e.function(), Some("create_target"));
    }

    #[test]
    fn invalid_argument_custom_message() {
        let e = Error::invalid_message("create_tag", "resource_ids", "either filter or ids");
        assert_eq!(e.to_string(), "either filter or ids");
        assert_eq!(e.argument(), Some("resource_ids"));
    }

    #[test]
    fn invalid_argument_type_message() {
        let e = Error::invalid_type("get_aggregates", "sort_criteria", "list");
        assert_eq!(
            e.to_string(),
            "The argument sort_criteria for get_aggregates must be of list"
        );
    }

    #[test]
    fn state_messages() {
        assert_eq!(Error::invalid_state().to_string(), "Invalid State");
        assert_eq!(Error::error_state().to_string(), ERROR_STATE_MESSAGE);
    }
}
