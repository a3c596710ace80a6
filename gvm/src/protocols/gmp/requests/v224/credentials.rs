use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, required_opt, set_bool,
    EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

gvm_enum! {
    /// Download formats of a credential.
    pub enum CredentialFormat {
        Key = "key" => "key",
        Rpm = "rpm" => "rpm",
        Deb = "deb" => "deb",
        Exe = "exe" => "exe",
        Pem = "pem" => "pem",
    }
}

gvm_enum! {
    pub enum CredentialType {
        ClientCertificate = "client_certificate" => "cc",
        Snmp = "snmp" => "snmp",
        UsernamePassword = "username_password" => "up",
        UsernameSshKey = "username_ssh_key" => "usk",
        SmimeCertificate = "smime_certificate" => "smime",
        PgpEncryptionKey = "pgp_encryption_key" => "pgp",
        PasswordOnly = "password_only" => "pw",
    }
}

gvm_enum! {
    pub enum SnmpAuthAlgorithm {
        Sha1 = "sha1" => "sha1",
        Md5 = "md5" => "md5",
    }
}

gvm_enum! {
    pub enum SnmpPrivacyAlgorithm {
        Aes = "aes" => "aes",
        Des = "des" => "des",
    }
}

/// Arguments of [`create_credential`].
///
/// Which fields are required depends on the credential type: certificate
/// types need `certificate`, login based types need `login`, SSH keys need
/// `private_key`, SNMP needs `auth_algorithm` and PGP needs `public_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCredential {
    pub name: String,
    pub credential_type: CredentialType,
    pub comment: Option<String>,
    pub allow_insecure: Option<bool>,
    pub certificate: Option<String>,
    pub key_phrase: Option<String>,
    pub private_key: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub auth_algorithm: Option<SnmpAuthAlgorithm>,
    pub community: Option<String>,
    pub privacy_algorithm: Option<SnmpPrivacyAlgorithm>,
    pub privacy_password: Option<String>,
    pub public_key: Option<String>,
}

impl CreateCredential {
    pub fn new(name: impl Into<String>, credential_type: CredentialType) -> Self {
        Self {
            name: name.into(),
            credential_type,
            comment: None,
            allow_insecure: None,
            certificate: None,
            key_phrase: None,
            private_key: None,
            login: None,
            password: None,
            auth_algorithm: None,
            community: None,
            privacy_algorithm: None,
            privacy_password: None,
            public_key: None,
        }
    }
}

pub fn create_credential(args: &CreateCredential) -> Result<Request> {
    const FUNCTION: &str = "create_credential";
    use CredentialType::*;

    required(FUNCTION, "name", &args.name)?;
    let credential_type = args.credential_type;

    let mut cmd = XmlCommand::new("create_credential");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_text_element("type", credential_type.value());
    cmd.add_optional_element("comment", args.comment.as_deref());
    if let Some(allow_insecure) = args.allow_insecure {
        cmd.add_text_element("allow_insecure", to_bool(allow_insecure));
    }

    if matches!(credential_type, ClientCertificate | SmimeCertificate) {
        let certificate = required_opt(FUNCTION, "certificate", args.certificate.as_deref())?;
        cmd.add_text_element("certificate", certificate);
    }

    if matches!(credential_type, UsernamePassword | UsernameSshKey | Snmp) {
        let login = required_opt(FUNCTION, "login", args.login.as_deref())?;
        cmd.add_text_element("login", login);
    }

    if credential_type == PasswordOnly {
        required_opt(FUNCTION, "password", args.password.as_deref())?;
    }
    if matches!(credential_type, UsernamePassword | Snmp | PasswordOnly) {
        cmd.add_optional_element("password", args.password.as_deref());
    }

    if credential_type == UsernameSshKey {
        let private_key = required_opt(FUNCTION, "private_key", args.private_key.as_deref())?;
        let key = cmd.add_element("key");
        key.add_text_element("private", private_key);
        key.add_optional_element("phrase", args.key_phrase.as_deref());
    }

    if credential_type == ClientCertificate {
        if let Some(private_key) = args.private_key.as_deref().filter(|k| !k.is_empty()) {
            cmd.add_element("key").add_text_element("private", private_key);
        }
    }

    if credential_type == Snmp {
        let auth_algorithm = args
            .auth_algorithm
            .ok_or_else(|| Error::required(FUNCTION, "auth_algorithm"))?;
        cmd.add_text_element("auth_algorithm", auth_algorithm.value());
        cmd.add_optional_element("community", args.community.as_deref());

        let privacy_password = args.privacy_password.as_deref().filter(|p| !p.is_empty());
        if args.privacy_algorithm.is_some() || privacy_password.is_some() {
            let privacy = cmd.add_element("privacy");
            if let Some(algorithm) = args.privacy_algorithm {
                privacy.add_text_element("algorithm", algorithm.value());
            }
            privacy.add_optional_element("password", privacy_password);
        }
    }

    if credential_type == PgpEncryptionKey {
        let public_key = required_opt(FUNCTION, "public_key", args.public_key.as_deref())?;
        cmd.add_element("key").add_text_element("public", public_key);
    }

    Ok(cmd.into())
}

/// Arguments of [`modify_credential`]. `key_phrase` and `private_key` go together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyCredential {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub allow_insecure: Option<bool>,
    pub certificate: Option<String>,
    pub key_phrase: Option<String>,
    pub private_key: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub auth_algorithm: Option<SnmpAuthAlgorithm>,
    pub community: Option<String>,
    pub privacy_algorithm: Option<SnmpPrivacyAlgorithm>,
    pub privacy_password: Option<String>,
    pub public_key: Option<String>,
}

pub fn modify_credential(
    credential_id: impl EntityId,
    args: &ModifyCredential,
) -> Result<Request> {
    const FUNCTION: &str = "modify_credential";
    let credential_id = required_id(FUNCTION, "credential_id", credential_id)?;

    let mut cmd = XmlCommand::new("modify_credential");
    cmd.set_attribute("credential_id", credential_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    if let Some(allow_insecure) = args.allow_insecure {
        cmd.add_text_element("allow_insecure", to_bool(allow_insecure));
    }
    cmd.add_optional_element("certificate", args.certificate.as_deref());

    let key_phrase = args.key_phrase.as_deref().filter(|k| !k.is_empty());
    let private_key = args.private_key.as_deref().filter(|k| !k.is_empty());
    match (key_phrase, private_key) {
        (Some(key_phrase), Some(private_key)) => {
            let key = cmd.add_element("key");
            key.add_text_element("phrase", key_phrase);
            key.add_text_element("private", private_key);
        }
        (None, None) => {}
        (Some(_), None) => {
            return Err(Error::required_message(
                FUNCTION,
                "private_key",
                "modify_credential requires key_phrase and private_key arguments",
            ))
        }
        (None, Some(_)) => {
            return Err(Error::required_message(
                FUNCTION,
                "key_phrase",
                "modify_credential requires key_phrase and private_key arguments",
            ))
        }
    }

    if let Some(public_key) = args.public_key.as_deref().filter(|k| !k.is_empty()) {
        cmd.add_element("key").add_text_element("public", public_key);
    }

    cmd.add_optional_element("login", args.login.as_deref());
    cmd.add_optional_element("password", args.password.as_deref());
    if let Some(auth_algorithm) = args.auth_algorithm {
        cmd.add_text_element("auth_algorithm", auth_algorithm.value());
    }
    cmd.add_optional_element("community", args.community.as_deref());

    if args.privacy_algorithm.is_some() || args.privacy_password.is_some() {
        let privacy = cmd.add_element("privacy");
        if let Some(algorithm) = args.privacy_algorithm {
            privacy.add_text_element("algorithm", algorithm.value());
        }
        if let Some(password) = args.privacy_password.as_deref() {
            privacy.add_text_element("password", password);
        }
    }

    Ok(cmd.into())
}

pub fn clone_credential(credential_id: impl EntityId) -> Result<Request> {
    clone_entity("credential", credential_id)
}

pub fn delete_credential(credential_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("credential", credential_id, ultimate)
}

/// Arguments of [`get_credentials`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCredentials {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub scanners: Option<bool>,
    pub trash: Option<bool>,
    pub targets: Option<bool>,
}

pub fn get_credentials(args: &GetCredentials) -> Request {
    let mut cmd = XmlCommand::new("get_credentials");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "scanners", args.scanners);
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "targets", args.targets);
    cmd.into()
}

/// Arguments of [`get_credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCredential {
    pub scanners: Option<bool>,
    pub targets: Option<bool>,
    pub credential_format: Option<CredentialFormat>,
}

pub fn get_credential(
    credential_id: impl EntityId,
    args: &GetCredential,
) -> Result<Request> {
    let mut cmd = get_entity("credential", credential_id)?;
    if let Some(format) = args.credential_format {
        cmd.set_attribute("format", format.value());
    }
    set_bool(&mut cmd, "scanners", args.scanners);
    set_bool(&mut cmd, "targets", args.targets);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_password() {
        let request = create_credential(&CreateCredential {
            login: Some("user".into()),
            password: Some("pass".into()),
            allow_insecure: Some(true),
            ..CreateCredential::new("foo", CredentialType::UsernamePassword)
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_credential><name>foo</name><type>up</type>\
             <allow_insecure>1</allow_insecure><login>user</login>\
             <password>pass</password></create_credential>"
        );
    }

    #[test]
    fn ssh_key_requires_private_key() {
        let err = create_credential(&CreateCredential {
            login: Some("user".into()),
            ..CreateCredential::new("foo", CredentialType::UsernameSshKey)
        })
        .unwrap_err();
        assert_eq!(err.argument(), Some("private_key"));
    }

    #[test]
    fn snmp_with_privacy() {
        let request = create_credential(&CreateCredential {
            login: Some("user".into()),
            auth_algorithm: Some(SnmpAuthAlgorithm::Sha1),
            community: Some("public".into()),
            privacy_algorithm: Some(SnmpPrivacyAlgorithm::Aes),
            privacy_password: Some("secret".into()),
            ..CreateCredential::new("foo", CredentialType::Snmp)
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_credential><name>foo</name><type>snmp</type><login>user</login>\
             <auth_algorithm>sha1</auth_algorithm><community>public</community>\
             <privacy><algorithm>aes</algorithm><password>secret</password></privacy>\
             </create_credential>"
        );
    }

    #[test]
    fn snmp_requires_auth_algorithm() {
        let err = create_credential(&CreateCredential {
            login: Some("user".into()),
            ..CreateCredential::new("foo", CredentialType::Snmp)
        })
        .unwrap_err();
        assert_eq!(err.argument(), Some("auth_algorithm"));
    }

    #[test]
    fn modify_couples_key_phrase_and_private_key() {
        let err = modify_credential(
            "c1",
            &ModifyCredential {
                key_phrase: Some("phrase".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::RequiredArgument { .. }));

        let request = modify_credential(
            "c1",
            &ModifyCredential {
                key_phrase: Some("phrase".into()),
                private_key: Some("key".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_credential credential_id=\"c1\"><key><phrase>phrase</phrase>\
             <private>key</private></key></modify_credential>"
        );
    }

    #[test]
    fn get_credential_with_format() {
        let request = get_credential(
            "c1",
            &GetCredential {
                credential_format: Some(CredentialFormat::Pem),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            r#"<get_credentials credential_id="c1" format="pem"/>"#
        );
    }
}
