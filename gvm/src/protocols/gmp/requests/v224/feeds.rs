use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    pub enum FeedType {
        Nvt = "nvt" => "NVT",
        Cert = "cert" => "CERT",
        Scap = "scap" => "SCAP",
        GvmdData = "gvmd_data" => "GVMD_DATA",
    }
}

/// Request the list of feeds.
pub fn get_feeds() -> Request {
    XmlCommand::new("get_feeds").into()
}

/// Request a single feed.
pub fn get_feed(feed_type: FeedType) -> Request {
    let mut cmd = XmlCommand::new("get_feeds");
    cmd.set_attribute("type", feed_type.to_string());
    cmd.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::gmp::requests::GvmEnum;

    #[test]
    fn get_feed_bytes() {
        assert_eq!(get_feeds().as_bytes(), b"<get_feeds/>");
        assert_eq!(
            get_feed(FeedType::GvmdData).to_string(),
            r#"<get_feeds type="GVMD_DATA"/>"#
        );
    }

    #[test]
    fn feed_type_from_string() {
        assert_eq!(
            FeedType::from_string(Some("gvmd_data")).unwrap(),
            Some(FeedType::GvmdData)
        );
        assert_eq!(FeedType::from_string(Some("scap")).unwrap(), Some(FeedType::Scap));
        assert!(FeedType::from_string(Some("foo")).is_err());
    }
}
