use crate::parsers::html::{Element, Node};
use crate::results::{Field, PageInfo};
use crate::utils::join_url;
use url::Url;

const IMAGE_PROPERTIES: [&str; 2] = ["og:image", "og:image:url"];
const IMAGE_NAMES: [&str; 2] = ["twitter:image", "twitter:image:src"];
const ICON_RELS: [&str; 2] = ["icon", "shortcut icon"];

/// Walks `document` once and collects its metadata.
///
/// Every URL-valued attribute is resolved against `page_url`; values that
/// don't resolve are dropped. Elements are visited in pre-order, which is
/// document order, and traversal always continues into children.
pub fn extract(document: Node<'_>, page_url: &str) -> PageInfo {
    let base = match Url::parse(page_url) {
        Ok(base) => Some(base),
        Err(e) => {
            ::log::warn!("Page URL {} is not absolute ({}), URLs will be dropped", page_url, e);
            None
        }
    };
    let mut extractor = Extractor {
        base,
        info: PageInfo::new(),
    };

    let mut stack = vec![document];
    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node {
            extractor.visit(element);
            let start = stack.len();
            stack.extend(element.children());
            stack[start..].reverse();
        }
    }

    ::log::debug!(
        "Extracted {} links and {} images from {}",
        extractor.info.links.len(),
        extractor.info.images.len(),
        page_url
    );
    extractor.info
}

struct Extractor {
    base: Option<Url>,
    info: PageInfo,
}

impl Extractor {
    fn visit(&mut self, element: Element<'_>) {
        match element.name() {
            "title" => self.title(element),
            "meta" => self.meta(element),
            "a" => self.anchor(element),
            "link" => self.link(element),
            "img" => self.img(element),
            "video" => self.video(element),
            _ => {}
        }
    }

    fn resolve(&self, raw: &str) -> Option<String> {
        self.base.as_ref().and_then(|base| join_url(base, raw))
    }

    /// Resolve `raw` and record it into each of `fields`
    fn record_url(&mut self, raw: Option<&str>, fields: &[Field]) -> bool {
        let Some(url) = raw.and_then(|raw| self.resolve(raw)) else {
            return false;
        };
        for field in fields {
            self.info.record(*field, url.clone());
        }
        true
    }

    fn title(&mut self, element: Element<'_>) {
        if let Some(Node::Text(text)) = element.children().next() {
            self.info.record(Field::Title, text.to_string());
        }
    }

    fn meta(&mut self, element: Element<'_>) {
        let name = element.attr("name").unwrap_or_default();
        let property = element.attr("property").unwrap_or_default();
        let Some(content) = element.attr("content") else {
            return;
        };

        if name.eq_ignore_ascii_case("description") {
            self.info.record(Field::Description, content.to_string());
        }

        let is_image = IMAGE_PROPERTIES
            .iter()
            .any(|p| property.eq_ignore_ascii_case(p))
            || IMAGE_NAMES.iter().any(|n| name.eq_ignore_ascii_case(n));
        if is_image {
            self.record_url(Some(content), &[Field::Image, Field::PreviewImage]);
        }

        if property.eq_ignore_ascii_case("og:video") {
            self.record_url(Some(content), &[Field::Video]);
        }
    }

    fn anchor(&mut self, element: Element<'_>) {
        self.record_url(element.attr("href"), &[Field::Link]);
    }

    fn link(&mut self, element: Element<'_>) {
        let rel = element.attr("rel").unwrap_or_default();
        if ICON_RELS.iter().any(|r| rel.eq_ignore_ascii_case(r)) {
            self.record_url(element.attr("href"), &[Field::Favicon]);
        }
    }

    fn img(&mut self, element: Element<'_>) {
        self.record_url(element.attr("src"), &[Field::Image, Field::PreviewImage]);
    }

    fn video(&mut self, element: Element<'_>) {
        if self.record_url(element.attr("src"), &[Field::Video]) {
            return;
        }
        let source = element
            .child_elements()
            .filter(|child| child.name() == "source")
            .find_map(|child| child.attr("src"));
        self.record_url(source, &[Field::Video]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::Document;

    const PAGE: &str = "https://example.com/blog/post";

    fn extract_html(html: &str) -> PageInfo {
        let doc = Document::parse(html);
        extract(doc.root(), PAGE)
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_html(""), PageInfo::default());
    }

    #[test]
    fn test_title_needs_text_child() {
        // An svg <title> holding an element doesn't count
        let info = extract_html("<title>First</title><body><svg><title><desc>x</desc></title></svg></body>");
        assert_eq!(info.title, "First");

        let info = extract_html("<title>First</title><title></title>");
        assert_eq!(info.title, "First");

        let info = extract_html("<title>First</title><title>Second</title>");
        assert_eq!(info.title, "Second");
    }

    #[test]
    fn test_meta_description_case_insensitive() {
        let info = extract_html(r#"<meta NAME="Description" content="About us">"#);
        assert_eq!(info.description, "About us");
    }

    #[test]
    fn test_meta_without_content_is_skipped() {
        let info = extract_html(r#"<meta name="description"><meta property="og:image">"#);
        assert_eq!(info.description, "");
        assert!(info.images.is_empty());
        assert_eq!(info.preview_image, "");
    }

    #[test]
    fn test_meta_images() {
        let info = extract_html(
            r#"<meta property="OG:IMAGE" content="/og.png">
<meta property="og:image:url" content="og2.png">
<meta name="twitter:image" content="https://cdn.test/tw.png">
<meta name="Twitter:Image:Src" content="//cdn.test/tw2.png">
<meta property="twitter:image" content="ignored.png">"#,
        );
        assert_eq!(
            info.images,
            vec![
                "https://example.com/og.png",
                "https://example.com/blog/og2.png",
                "https://cdn.test/tw.png",
                "https://cdn.test/tw2.png",
            ]
        );
        assert_eq!(info.preview_image, "https://example.com/og.png");
    }

    #[test]
    fn test_preview_image_not_overwritten_by_later_meta() {
        let info = extract_html(
            r#"<body><img src="first.jpg"><meta property="og:image" content="/og.png"><img src="last.jpg"></body>"#,
        );
        assert_eq!(info.preview_image, "https://example.com/blog/first.jpg");
        assert_eq!(info.images.len(), 3);
    }

    #[test]
    fn test_links_skip_missing_and_unresolvable_href() {
        let info = extract_html(
            r#"<a href="/a">1</a><a name="anchor">2</a><a href="http://[::1">3</a><a href="b">4</a>"#,
        );
        assert_eq!(
            info.links,
            vec!["https://example.com/a", "https://example.com/blog/b"]
        );
    }

    #[test]
    fn test_favicon_last_wins() {
        let info = extract_html(
            r#"<head>
<link rel="icon" href="/first.ico">
<link rel="stylesheet" href="/style.css">
<link rel="Shortcut Icon" href="/last.ico">
<link rel="icon" href="http://[::1">
</head>"#,
        );
        assert_eq!(info.favicon, "https://example.com/last.ico");
    }

    #[test]
    fn test_video_src_and_source_fallback() {
        let info = extract_html(r#"<video src="/movie.webm"><source src="ignored.mp4"></video>"#);
        assert_eq!(info.video, "https://example.com/movie.webm");

        let info = extract_html(
            r#"<video>
<track src="subs.vtt">
<source type="video/mp4">
<source src="clip.mp4">
<source src="clip.webm">
</video>"#,
        );
        assert_eq!(info.video, "https://example.com/blog/clip.mp4");
    }

    #[test]
    fn test_video_last_write_wins() {
        let info = extract_html(
            r#"<body><meta property="og:video" content="/meta.mp4"><video src="/inline.mp4"></video></body>"#,
        );
        assert_eq!(info.video, "https://example.com/inline.mp4");

        let info = extract_html(
            r#"<body><video src="/inline.mp4"></video><meta property="og:video" content="/meta.mp4"></body>"#,
        );
        assert_eq!(info.video, "https://example.com/meta.mp4");
    }

    #[test]
    fn test_nested_elements_are_visited() {
        let info = extract_html(r#"<a href="/gallery"><img src="thumb.png"></a>"#);
        assert_eq!(info.links, vec!["https://example.com/gallery"]);
        assert_eq!(info.images, vec!["https://example.com/blog/thumb.png"]);
    }

    #[test]
    fn test_unparseable_page_url_keeps_text_fields() {
        let doc = Document::parse(
            r#"<title>Hi</title><a href="/a">a</a><a href="https://example.com/abs">b</a>"#,
        );
        let info = extract(doc.root(), "not a url");
        assert_eq!(info.title, "Hi");
        assert!(info.links.is_empty());
    }
}
