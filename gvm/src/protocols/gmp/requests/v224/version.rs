use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Request the GMP version of the manager.
pub fn get_version() -> Request {
    XmlCommand::new("get_version").into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_version_bytes() {
        assert_eq!(get_version().as_bytes(), b"<get_version/>");
    }
}
