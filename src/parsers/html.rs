use scraper::{ElementRef, Html};

/// A parsed HTML document.
///
/// Nodes live in the parser's arena; [`Node`] and [`Element`] borrow from it,
/// so nothing here recurses with the nesting depth of the page.
pub struct Document {
    html: Html,
}

/// A node of a parsed HTML document
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// An element with its attributes and children
    Element(Element<'a>),
    /// A run of character data
    Text(&'a str),
    /// Comments, doctypes and anything else the extractor ignores
    Other,
}

/// An HTML element
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl Document {
    /// Parses an HTML document.
    ///
    /// html5ever recovers from any malformed input, so this never fails.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }

    /// The `<html>` root element
    pub fn root(&self) -> Node<'_> {
        Node::Element(Element {
            inner: self.html.root_element(),
        })
    }
}

impl<'a> Element<'a> {
    /// Lower-case tag name as produced by the parser
    pub fn name(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Value of the first attribute whose key matches `key` ignoring ASCII case.
    ///
    /// The parser drops duplicate attributes and keeps them sorted by name,
    /// so source order is not preserved.
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.inner
            .value()
            .attrs()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Direct children in document order
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + use<'a> {
        self.inner.children().map(|child| match child.value() {
            scraper::Node::Text(text) => Node::Text(&**text),
            scraper::Node::Element(_) => match ElementRef::wrap(child) {
                Some(inner) => Node::Element(Element { inner }),
                None => Node::Other,
            },
            _ => Node::Other,
        })
    }

    /// Child elements in document order, skipping text and other nodes
    pub fn child_elements(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        self.children().filter_map(|child| child.as_element())
    }
}

impl<'a> Node<'a> {
    pub fn as_element(self) -> Option<Element<'a>> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}
