pub mod extract;
pub mod html;


use crate::results::PageInfo;

pub use extract::extract;
pub use html::{Document, Element, Node};

/// Parse an HTML document and extract its metadata relative to `page_url`
pub fn parse(html: &str, page_url: &str) -> PageInfo {
    let document = Document::parse(html);
    extract(document.root(), page_url)
}
