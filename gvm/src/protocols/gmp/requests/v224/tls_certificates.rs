use crate::error::Result;
use crate::protocols::gmp::requests::{
    add_bool_element, clone_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Store a PEM or DER (base64) certificate under `name`.
pub fn create_tls_certificate(
    name: &str,
    certificate: &str,
    comment: Option<&str>,
    trust: Option<bool>,
) -> Result<Request> {
    required("create_tls_certificate", "name", name)?;
    required("create_tls_certificate", "certificate", certificate)?;

    let mut cmd = XmlCommand::new("create_tls_certificate");
    cmd.add_text_element("name", name);
    cmd.add_text_element("certificate", certificate);
    cmd.add_optional_element("comment", comment);
    add_bool_element(&mut cmd, "trust", trust);
    Ok(cmd.into())
}

/// Arguments of [`modify_tls_certificate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyTlsCertificate {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub trust: Option<bool>,
}

pub fn modify_tls_certificate(
    tls_certificate_id: impl EntityId,
    args: &ModifyTlsCertificate,
) -> Result<Request> {
    let tls_certificate_id =
        required_id("modify_tls_certificate", "tls_certificate_id", tls_certificate_id)?;

    let mut cmd = XmlCommand::new("modify_tls_certificate");
    cmd.set_attribute("tls_certificate_id", tls_certificate_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    add_bool_element(&mut cmd, "trust", args.trust);
    Ok(cmd.into())
}

pub fn clone_tls_certificate(tls_certificate_id: impl EntityId) -> Result<Request> {
    clone_entity("tls_certificate", tls_certificate_id)
}

/// TLS certificates have no trashcan, so there is no `ultimate` flag.
pub fn delete_tls_certificate(tls_certificate_id: impl EntityId) -> Result<Request> {
    let tls_certificate_id =
        required_id("delete_tls_certificate", "tls_certificate_id", tls_certificate_id)?;
    let mut cmd = XmlCommand::new("delete_tls_certificate");
    cmd.set_attribute("tls_certificate_id", tls_certificate_id);
    Ok(cmd.into())
}

/// Arguments of [`get_tls_certificates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTlsCertificates {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub include_certificate_data: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_tls_certificates(args: &GetTlsCertificates) -> Request {
    let mut cmd = XmlCommand::new("get_tls_certificates");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "include_certificate_data", args.include_certificate_data);
    cmd.into()
}

pub fn get_tls_certificate(tls_certificate_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("tls_certificate", tls_certificate_id)?;
    cmd.set_attribute("include_certificate_data", "1")
        .set_attribute("details", "1");
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_certificates() {
        assert_eq!(
            create_tls_certificate("ca", "MIIB", None, Some(true)).unwrap().to_string(),
            "<create_tls_certificate><name>ca</name><certificate>MIIB</certificate>\
             <trust>1</trust></create_tls_certificate>"
        );
        assert_eq!(
            delete_tls_certificate("c1").unwrap().to_string(),
            r#"<delete_tls_certificate tls_certificate_id="c1"/>"#
        );
        assert_eq!(
            get_tls_certificate("c1").unwrap().to_string(),
            r#"<get_tls_certificates tls_certificate_id="c1" include_certificate_data="1" details="1"/>"#
        );
        assert!(create_tls_certificate("ca", "", None, None).is_err());
    }
}
