//! XML helpers for building requests and reading responses.
//!
//! Requests are assembled with [`XmlCommand`], a small tree builder which keeps
//! attributes and child elements in insertion order. Responses are read into an
//! owned [`XmlElement`] tree.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Encode a boolean the only way the protocols accept it.
pub fn to_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

pub fn to_base64(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Join values with `,` as used for host lists and observers.
pub fn to_comma_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(value.as_ref());
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Child {
    Element(XmlCommandElement),
    Fragment(String),
}

/// A single element of a request tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlCommandElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Child>,
}

impl XmlCommandElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an empty child element and return it for further building.
    pub fn add_element(&mut self, name: impl Into<String>) -> &mut XmlCommandElement {
        self.children.push(Child::Element(XmlCommandElement::new(name)));
        match self.children.last_mut() {
            Some(Child::Element(element)) => element,
            _ => unreachable!("element was pushed above"),
        }
    }

    /// Add a child element carrying `text`.
    pub fn add_text_element(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut XmlCommandElement {
        let element = self.add_element(name);
        element.set_text(text);
        element
    }

    /// Add a child element carrying `text` unless it is `None` or empty.
    pub fn add_optional_element(&mut self, name: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.add_text_element(name, text);
        }
        self
    }

    /// Set an attribute. Setting an existing key replaces its value in place.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn set_optional_attribute(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.set_attribute(key, value);
        }
        self
    }

    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in attributes {
            self.set_attribute(key, value);
        }
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append a caller supplied XML document as the last child.
    ///
    /// The document is checked for well-formedness and then kept verbatim,
    /// minus a leading XML declaration. Returns the tag name of the document
    /// root. Malformed input fails with [`Error::InvalidArgument`].
    pub fn append_xml_str(&mut self, xml: &str) -> Result<String> {
        let root = parse_xml(xml.as_bytes()).map_err(|e| Error::InvalidArgument {
            message: Some(format!("Invalid XML: {}", e)),
            argument: None,
            function: None,
        })?;
        self.children
            .push(Child::Fragment(strip_declaration(xml).to_string()));
        Ok(root.name)
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        if text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = text {
            out.push_str(&partial_escape(text));
        }
        for child in &self.children {
            match child {
                Child::Element(element) => element.write_to(out),
                Child::Fragment(fragment) => out.push_str(fragment),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_xml_string().into_bytes()
    }
}

impl fmt::Display for XmlCommandElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_string())
    }
}

/// The root element of a protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlCommand(XmlCommandElement);

impl XmlCommand {
    pub fn new(name: impl Into<String>) -> Self {
        XmlCommand(XmlCommandElement::new(name))
    }

    /// Add the `filter` and `filt_id` attributes used by list commands.
    pub fn add_filter(&mut self, filter_string: Option<&str>, filter_id: Option<&str>) -> &mut Self {
        if let Some(filter_string) = filter_string.filter(|f| !f.is_empty()) {
            self.0.set_attribute("filter", filter_string);
        }
        if let Some(filter_id) = filter_id.filter(|f| !f.is_empty()) {
            self.0.set_attribute("filt_id", filter_id);
        }
        self
    }
}

impl Deref for XmlCommand {
    type Target = XmlCommandElement;

    fn deref(&self) -> &XmlCommandElement {
        &self.0
    }
}

impl DerefMut for XmlCommand {
    fn deref_mut(&mut self) -> &mut XmlCommandElement {
        &mut self.0
    }
}

impl fmt::Display for XmlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn strip_declaration(xml: &str) -> &str {
    let trimmed = xml.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return trimmed[end + 2..].trim_start();
        }
    }
    xml
}

/// An element of a parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Character data directly below this element, including CDATA sections.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child named `name`.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a `/` separated path of child names.
    pub fn find_path(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .filter(|p| !p.is_empty())
            .try_fold(self, |element, name| element.find(name))
    }

    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find_path(path).map(|e| e.text.as_str())
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::xml(format!("Invalid UTF-8: {}", e), None))
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_numeric() || c == '-' || c == '.'
}

/// Element and attribute names must be XML names.
fn xml_name(bytes: &[u8]) -> Result<&str> {
    let name = utf8(bytes)?;
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => is_name_start(first) && chars.all(is_name_char),
        None => false,
    };
    if !valid {
        return Err(Error::xml(format!("Invalid name {:?}", name), None));
    }
    Ok(name)
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement> {
    let mut element = XmlElement {
        name: xml_name(start.name().as_ref())?.to_string(),
        ..Default::default()
    };
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| Error::xml(e.to_string(), None))?;
        let key = xml_name(attribute.key.as_ref())?.to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::xml(e.to_string(), None))?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => {
            return Err(Error::xml("Extra content at the end of the document", None))
        }
        None => *root = Some(element),
    }
    Ok(())
}

/// Parse a complete XML document into its root element.
///
/// Fails with [`Error::Xml`] unless the input holds exactly one well-formed
/// root element.
pub fn parse_xml(data: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(data);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::xml(e.to_string(), None))?;
        match event {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(Error::xml("Extra content at the end of the document", None));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::xml("Unexpected end tag", None))?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::Text(text) => {
                let text: Cow<'_, str> = text
                    .unescape()
                    .map_err(|e| Error::xml(e.to_string(), None))?;
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(Error::xml("Content outside of the root element", None)),
                }
            }
            Event::CData(data) => match stack.last_mut() {
                Some(element) => element.text.push_str(utf8(&data)?),
                None => return Err(Error::xml("CDATA outside of the root element", None)),
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = stack.last() {
        return Err(Error::xml(
            format!("Premature end of data in tag {}", element.name),
            None,
        ));
    }
    root.ok_or_else(|| Error::xml("Document is empty", None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_self_closing() {
        assert_eq!(XmlCommand::new("get_tasks").to_xml_string(), "<get_tasks/>");
    }

    #[test]
    fn attribute_order_is_insertion_order() {
        let mut cmd = XmlCommand::new("get_tasks");
        cmd.set_attribute("usage_type", "scan")
            .set_attribute("filter", "rows=10")
            .set_attribute("details", "1");
        cmd.set_attribute("usage_type", "audit");
        assert_eq!(
            cmd.to_xml_string(),
            r#"<get_tasks usage_type="audit" filter="rows=10" details="1"/>"#
        );
    }

    #[test]
    fn nested_elements_and_escaping() {
        let mut cmd = XmlCommand::new("create_target");
        cmd.add_text_element("name", "a & b <c>");
        cmd.add_element("port_list").set_attribute("id", "\"x\"");
        assert_eq!(
            cmd.to_xml_string(),
            "<create_target><name>a &amp; b &lt;c&gt;</name>\
             <port_list id=\"&quot;x&quot;\"/></create_target>"
        );
    }

    #[test]
    fn text_precedes_children() {
        let mut cmd = XmlCommand::new("create_alert");
        cmd.add_text_element("data", "value")
            .add_text_element("name", "key");
        assert_eq!(
            cmd.to_xml_string(),
            "<create_alert><data>value<name>key</name></data></create_alert>"
        );
    }

    #[test]
    fn append_fragment_is_verbatim() {
        let mut cmd = XmlCommand::new("create_report");
        let root = cmd
            .append_xml_str("<?xml version=\"1.0\"?>\n<report id=\"r\"><a>1</a></report>")
            .unwrap();
        assert_eq!(root, "report");
        assert_eq!(
            cmd.to_xml_string(),
            "<create_report><report id=\"r\"><a>1</a></report></create_report>"
        );
    }

    #[test]
    fn append_malformed_fragment_is_invalid_argument() {
        let mut cmd = XmlCommand::new("create_report");
        let err = cmd.append_xml_str("<report><a></report>").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(cmd.to_xml_string(), "<create_report/>");
    }

    #[test]
    fn helpers() {
        assert_eq!(to_bool(true), "1");
        assert_eq!(to_bool(false), "0");
        assert_eq!(to_base64("foo"), "Zm9v");
        assert_eq!(to_comma_list(["a", "b", "c"]), "a,b,c");
        assert_eq!(to_comma_list(Vec::<String>::new()), "");
    }

    #[test]
    fn parse_response_tree() {
        let root = parse_xml(
            br#"<get_version_response status="200" status_text="OK"><version>22.6</version></get_version_response>"#,
        )
        .unwrap();
        assert_eq!(root.name(), "get_version_response");
        assert_eq!(root.attribute("status"), Some("200"));
        assert_eq!(root.find_text("version"), Some("22.6"));
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn parse_unescapes_and_collects_cdata() {
        let root = parse_xml(b"<r a=\"&lt;x&gt;\">1 &amp; <![CDATA[<2>]]></r>").unwrap();
        assert_eq!(root.attribute("a"), Some("<x>"));
        assert_eq!(root.text(), "1 & <2>");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(parse_xml(b"<a><b></a>"), Err(Error::Xml { .. })));
        assert!(matches!(parse_xml(b"<a>"), Err(Error::Xml { .. })));
        assert!(matches!(parse_xml(b"<a/><b/>"), Err(Error::Xml { .. })));
        assert!(matches!(parse_xml(b""), Err(Error::Xml { .. })));
    }

    #[test]
    fn find_path_walks_children() {
        let root =
            parse_xml(b"<r><protocol><name>OSP</name><version>21.4</version></protocol></r>")
                .unwrap();
        assert_eq!(root.find_text("protocol/version"), Some("21.4"));
        assert_eq!(root.find_all("protocol").count(), 1);
    }
}
