use crate::error::{Error, Result};
use crate::protocols::gmp::requests::required;
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Authenticate a user. The username and password must be non-empty.
pub fn authenticate(username: &str, password: &str) -> Result<Request> {
    required("authenticate", "username", username)?;
    required("authenticate", "password", password)?;

    let mut cmd = XmlCommand::new("authenticate");
    let credentials = cmd.add_element("credentials");
    credentials.add_text_element("username", username);
    credentials.add_text_element("password", password);
    Ok(cmd.into())
}

/// Describe the authentication methods of the manager.
pub fn describe_auth() -> Request {
    XmlCommand::new("describe_auth").into()
}

/// Modify the settings of an authentication method group, e.g. `method:ldap_connect`.
pub fn modify_auth<I, K, V>(group_name: &str, settings: I) -> Result<Request>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    required("modify_auth", "group_name", group_name)?;

    let mut cmd = XmlCommand::new("modify_auth");
    let group = cmd.add_element("group");
    group.set_attribute("name", group_name);

    let mut empty = true;
    for (key, value) in settings {
        empty = false;
        let setting = group.add_element("auth_conf_setting");
        setting.add_text_element("key", key.as_ref());
        setting.add_text_element("value", value.as_ref());
    }
    if empty {
        return Err(Error::required("modify_auth", "auth_conf_settings"));
    }
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_bytes() {
        assert_eq!(
            authenticate("admin", "admin").unwrap().as_bytes(),
            &b"<authenticate><credentials><username>admin</username>\
               <password>admin</password></credentials></authenticate>"[..]
        );
    }

    #[test]
    fn authenticate_requires_credentials() {
        assert_eq!(
            authenticate("", "admin").unwrap_err().argument(),
            Some("username")
        );
        assert_eq!(
            authenticate("admin", "").unwrap_err().argument(),
            Some("password")
        );
    }

    #[test]
    fn modify_auth_settings() {
        let request = modify_auth(
            "method:ldap_connect",
            [("enable", "true"), ("ldaphost", "localhost")],
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_auth><group name=\"method:ldap_connect\">\
             <auth_conf_setting><key>enable</key><value>true</value></auth_conf_setting>\
             <auth_conf_setting><key>ldaphost</key><value>localhost</value></auth_conf_setting>\
             </group></modify_auth>"
        );
    }

    #[test]
    fn modify_auth_requires_settings() {
        let err = modify_auth("method:file", Vec::<(String, String)>::new()).unwrap_err();
        assert_eq!(err.argument(), Some("auth_conf_settings"));
    }
}
