//! Quote records
//!
//! A [`Quote`] is built once by the page parser and never mutated afterwards.
//! [`TagList`] owns the flat textual form the tags take in CSV output.

use std::fmt;

/// A single quote extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quote {
    text: String,
    author: String,
    tags: TagList,
}

impl Quote {
    /// Creates a new quote record
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: TagList) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// The quote text, exactly as it appeared in markup
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The author name, exactly as it appeared in markup
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }
}

/// Ordered tag labels attached to a quote
///
/// Formats as a bracketed list literal such as `['love', 'life']`. Each label
/// is single-quoted with `'` and `\` backslash-escaped, so [`TagList::parse`]
/// recovers the labels in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the list literal produced by the `Display` impl
    ///
    /// Returns `None` if the input is not a well-formed list literal.
    pub fn parse(input: &str) -> Option<Self> {
        let inner = input.strip_prefix('[')?.strip_suffix(']')?;
        let mut tags = Vec::new();
        let mut chars = inner.chars().peekable();
        let mut after_comma = false;

        loop {
            while chars.peek() == Some(&' ') {
                chars.next();
            }
            match chars.next() {
                None if after_comma => return None,
                None => break,
                Some('\'') => {}
                Some(_) => return None,
            }

            let mut tag = String::new();
            loop {
                match chars.next()? {
                    '\\' => tag.push(chars.next()?),
                    '\'' => break,
                    c => tag.push(c),
                }
            }
            tags.push(tag);

            match chars.next() {
                None => break,
                Some(',') => after_comma = true,
                Some(_) => return None,
            }
        }

        Some(Self(tags))
    }
}

/// Wraps labels already in markup order
impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("'")?;
            for c in tag.chars() {
                if c == '\'' || c == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{}", c)?;
            }
            f.write_str("'")?;
        }
        f.write_str("]")
    }
}
