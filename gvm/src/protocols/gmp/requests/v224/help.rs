use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

gvm_enum! {
    /// Output formats of the help command.
    pub enum HelpFormat {
        Html = "html" => "html",
        Rnc = "rnc" => "rnc",
        Text = "text" => "text",
        Xml = "xml" => "xml",
    }
}

/// Get the help text, optionally in a specific format.
pub fn help(help_format: Option<HelpFormat>, brief: Option<bool>) -> Request {
    let mut cmd = XmlCommand::new("help");
    if let Some(help_format) = help_format {
        cmd.set_attribute("type", help_format.to_string());
    }
    if let Some(brief) = brief {
        cmd.set_attribute("brief", to_bool(brief));
    }
    cmd.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_bytes() {
        assert_eq!(help(None, None).as_bytes(), b"<help/>");
        assert_eq!(
            help(Some(HelpFormat::Xml), Some(true)).to_string(),
            r#"<help type="xml" brief="1"/>"#
        );
    }
}
