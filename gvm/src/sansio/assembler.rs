//! Incremental detection of a complete XML root element.
//!
//! Responses arrive in arbitrary chunks. The assembler scans every byte exactly
//! once and keeps only the stack of open element names, so the total work is
//! linear in the response size regardless of how the bytes were split.

use super::types::ParseResult;
use crate::error::{display_chunk, Error, Result};

const CDATA: &[u8] = b"[CDATA[";
const COMMENT: &[u8] = b"--";
const DOCTYPE: &[u8] = b"DOCTYPE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// Character data between tags
    Content,
    /// After `<`
    MarkupOpen,
    StartName,
    InTag,
    AttrName,
    AfterAttrName,
    BeforeAttrValue,
    AttrValue(u8),
    AfterAttrValue,
    /// After the `/` of `<a/>`
    EmptyClose,
    EndName,
    AfterEndName,
    /// After `<!`
    Bang,
    Comment { dashes: u8 },
    CData { brackets: u8 },
    Doctype { depth: u32, quote: Option<u8> },
    Instruction { question: bool },
    /// The root element was closed
    Done,
}

/// Streaming well-formedness checker for a single XML root element.
#[derive(Debug, Clone)]
pub struct XmlAssembler {
    lexeme: Lexeme,
    open: Vec<Vec<u8>>,
    name: Vec<u8>,
    bang: Vec<u8>,
    offset: usize,
    consumed: usize,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_name_byte(b: u8) -> bool {
    !is_space(b)
        && !matches!(
            b,
            b'<' | b'>' | b'/' | b'=' | b'"' | b'\'' | b'!' | b'?' | b'&'
        )
}

impl XmlAssembler {
    pub fn new() -> Self {
        Self {
            lexeme: Lexeme::Content,
            open: Vec::new(),
            name: Vec::new(),
            bang: Vec::new(),
            offset: 0,
            consumed: 0,
        }
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_complete(&self) -> bool {
        self.lexeme == Lexeme::Done
    }

    /// Feed the next chunk of the stream.
    ///
    /// # Returns
    ///
    /// * `ParseResult::Complete` - the root element was closed within this or an
    ///   earlier chunk, bytes after it are ignored
    /// * `ParseResult::Incomplete` - more data is needed
    ///
    /// Malformed input fails with [`Error::Xml`] carrying the offending chunk.
    pub fn feed(&mut self, data: &[u8]) -> Result<ParseResult> {
        if self.lexeme == Lexeme::Done {
            return Ok(ParseResult::Complete {
                consumed: self.consumed,
            });
        }

        let mut i = 0;
        while i < data.len() {
            // Skip character data inside the root element in one go.
            if self.lexeme == Lexeme::Content && !self.open.is_empty() {
                match data[i..].iter().position(|&b| b == b'<') {
                    Some(pos) => i += pos,
                    None => break,
                }
            }

            let b = data[i];
            if let Err(reason) = self.step(b) {
                return Err(Error::xml(
                    format!(
                        "{} at byte {} of the response, received: {}",
                        reason,
                        self.offset + i,
                        display_chunk(data)
                    ),
                    Some(data),
                ));
            }
            i += 1;

            if self.lexeme == Lexeme::Done {
                self.consumed = self.offset + i;
                self.offset += data.len();
                return Ok(ParseResult::Complete {
                    consumed: self.consumed,
                });
            }
        }

        self.offset += data.len();
        Ok(ParseResult::Incomplete)
    }

    fn step(&mut self, b: u8) -> std::result::Result<(), &'static str> {
        use Lexeme::*;

        self.lexeme = match self.lexeme {
            Content => {
                if b == b'<' {
                    MarkupOpen
                } else if self.open.is_empty() && !is_space(b) {
                    return Err("Start tag expected");
                } else {
                    Content
                }
            }
            MarkupOpen => match b {
                b'/' if self.open.is_empty() => return Err("Unexpected end tag"),
                b'/' => {
                    self.name.clear();
                    EndName
                }
                b'!' => {
                    self.bang.clear();
                    Bang
                }
                b'?' => Instruction { question: false },
                b if is_name_byte(b) => {
                    self.name.clear();
                    self.name.push(b);
                    StartName
                }
                _ => return Err("Invalid element name"),
            },
            StartName => match b {
                b'>' => self.open_element(),
                b'/' => EmptyClose,
                b if is_space(b) => InTag,
                b if is_name_byte(b) => {
                    self.name.push(b);
                    StartName
                }
                _ => return Err("Invalid element name"),
            },
            InTag => match b {
                b'>' => self.open_element(),
                b'/' => EmptyClose,
                b if is_space(b) => InTag,
                b if is_name_byte(b) => AttrName,
                _ => return Err("Attribute name expected"),
            },
            AttrName => match b {
                b'=' => BeforeAttrValue,
                b if is_space(b) => AfterAttrName,
                b if is_name_byte(b) => AttrName,
                _ => return Err("Attribute without a value"),
            },
            AfterAttrName => match b {
                b'=' => BeforeAttrValue,
                b if is_space(b) => AfterAttrName,
                _ => return Err("Attribute without a value"),
            },
            BeforeAttrValue => match b {
                b'"' | b'\'' => AttrValue(b),
                b if is_space(b) => BeforeAttrValue,
                _ => return Err("AttValue: \" or ' expected"),
            },
            AttrValue(quote) => match b {
                b if b == quote => AfterAttrValue,
                b'<' => return Err("Unescaped '<' not allowed in attribute values"),
                _ => AttrValue(quote),
            },
            AfterAttrValue => match b {
                b'>' => self.open_element(),
                b'/' => EmptyClose,
                b if is_space(b) => InTag,
                _ => return Err("Attributes construct error"),
            },
            EmptyClose => match b {
                b'>' => self.empty_element(),
                _ => return Err("Expected '>' after '/'"),
            },
            EndName => match b {
                b'>' if !self.name.is_empty() => self.close_element()?,
                b if is_space(b) && !self.name.is_empty() => AfterEndName,
                b if is_name_byte(b) => {
                    self.name.push(b);
                    EndName
                }
                _ => return Err("Invalid end tag"),
            },
            AfterEndName => match b {
                b'>' => self.close_element()?,
                b if is_space(b) => AfterEndName,
                _ => return Err("Expected '>' in end tag"),
            },
            Bang => {
                self.bang.push(b);
                if self.bang == COMMENT {
                    Comment { dashes: 0 }
                } else if self.bang == CDATA {
                    if self.open.is_empty() {
                        return Err("CDATA outside of the root element");
                    }
                    CData { brackets: 0 }
                } else if self.bang == DOCTYPE {
                    Doctype {
                        depth: 0,
                        quote: None,
                    }
                } else if COMMENT.starts_with(&self.bang)
                    || CDATA.starts_with(&self.bang)
                    || DOCTYPE.starts_with(&self.bang)
                {
                    Bang
                } else {
                    return Err("Invalid markup declaration");
                }
            }
            Comment { dashes } => match (b, dashes) {
                (b'-', d) => Comment {
                    dashes: (d + 1).min(2),
                },
                (b'>', 2) => Content,
                _ => Comment { dashes: 0 },
            },
            CData { brackets } => match (b, brackets) {
                (b']', d) => CData {
                    brackets: (d + 1).min(2),
                },
                (b'>', 2) => Content,
                _ => CData { brackets: 0 },
            },
            Doctype {
                depth,
                quote: Some(quote),
            } => Doctype {
                depth,
                quote: if b == quote { None } else { Some(quote) },
            },
            Doctype { depth, quote: None } => match b {
                b'"' | b'\'' => Doctype {
                    depth,
                    quote: Some(b),
                },
                b'[' => Doctype {
                    depth: depth + 1,
                    quote: None,
                },
                b']' => Doctype {
                    depth: depth.saturating_sub(1),
                    quote: None,
                },
                b'>' if depth == 0 => Content,
                _ => Doctype { depth, quote: None },
            },
            Instruction { question } => match b {
                b'>' if question => Content,
                b'?' => Instruction { question: true },
                _ => Instruction { question: false },
            },
            Done => Done,
        };
        Ok(())
    }

    fn open_element(&mut self) -> Lexeme {
        self.open.push(std::mem::take(&mut self.name));
        Lexeme::Content
    }

    fn empty_element(&mut self) -> Lexeme {
        if self.open.is_empty() {
            Lexeme::Done
        } else {
            Lexeme::Content
        }
    }

    fn close_element(&mut self) -> std::result::Result<Lexeme, &'static str> {
        match self.open.pop() {
            Some(name) if name == self.name => {}
            _ => return Err("Opening and ending tag mismatch"),
        }
        if self.open.is_empty() {
            Ok(Lexeme::Done)
        } else {
            Ok(Lexeme::Content)
        }
    }
}

impl Default for XmlAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(chunks: &[&[u8]]) -> Result<Vec<ParseResult>> {
        let mut assembler = XmlAssembler::new();
        chunks.iter().map(|chunk| assembler.feed(chunk)).collect()
    }

    #[test]
    fn single_chunk() {
        let data = br#"<get_version_response status="200"><version>22.6</version></get_version_response>"#;
        let mut assembler = XmlAssembler::new();
        assert_eq!(
            assembler.feed(data).unwrap(),
            ParseResult::Complete {
                consumed: data.len()
            }
        );
        assert!(assembler.is_complete());
    }

    #[test]
    fn every_split_point() {
        let data: &[u8] =
            b"<?xml version=\"1.0\"?><!-- c --><r a='1' b = \"x>y\"><x/><![CDATA[</r>]]><y>t</y></r>";
        for split in 1..data.len() {
            let results = feed_all(&[&data[..split], &data[split..]]).unwrap();
            assert_eq!(results[0], ParseResult::Incomplete, "split at {}", split);
            assert_eq!(
                results[1],
                ParseResult::Complete {
                    consumed: data.len()
                },
                "split at {}",
                split
            );
        }
    }

    #[test]
    fn byte_by_byte() {
        let data = b"<a><b>text</b><c x=\"1\"/></a>";
        let mut assembler = XmlAssembler::new();
        for (i, b) in data.iter().enumerate() {
            let result = assembler.feed(&[*b]).unwrap();
            if i + 1 < data.len() {
                assert_eq!(result, ParseResult::Incomplete);
            } else {
                assert_eq!(result, ParseResult::Complete { consumed: data.len() });
            }
        }
    }

    #[test]
    fn self_closing_root() {
        let data = b"  <authenticate_response status=\"200\"/>";
        let results = feed_all(&[data]).unwrap();
        assert_eq!(results[0], ParseResult::Complete { consumed: data.len() });
    }

    #[test]
    fn nested_same_names() {
        let results = feed_all(&[b"<a><a><a/></a>", b"</a>"]).unwrap();
        assert_eq!(results[0], ParseResult::Incomplete);
        assert_eq!(results[1], ParseResult::Complete { consumed: 18 });
    }

    #[test]
    fn trailing_bytes_are_not_consumed() {
        let results = feed_all(&[b"<a></a>  "]).unwrap();
        assert_eq!(results[0], ParseResult::Complete { consumed: 7 });
    }

    #[test]
    fn malformed_tag() {
        let err = feed_all(&[b"<response<>"]).unwrap_err();
        match err {
            Error::Xml { chunk, .. } => assert_eq!(chunk.as_deref(), Some(&b"<response<>"[..])),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn mismatched_end_tag() {
        assert!(matches!(
            feed_all(&[b"<a><b>", b"</a>"]),
            Err(Error::Xml { .. })
        ));
    }

    #[test]
    fn text_outside_root() {
        assert!(matches!(feed_all(&[b"hello"]), Err(Error::Xml { .. })));
    }

    #[test]
    fn attribute_without_value() {
        assert!(matches!(feed_all(&[b"<a b>"]), Err(Error::Xml { .. })));
    }

    #[test]
    fn depth_tracks_open_elements() {
        let mut assembler = XmlAssembler::new();
        assembler.feed(b"<a><b><c>").unwrap();
        assert_eq!(assembler.depth(), 3);
        assembler.feed(b"</c>").unwrap();
        assert_eq!(assembler.depth(), 2);
    }
}
