//! Lenient HTML document handling.
//!
//! Templates go through the html5ever tree builder, so ill-formed markup is
//! repaired the way a browser would repair it (missing `<head>`, unclosed
//! tags, stray text). Nothing is ever rejected.

use frame_types::MetaTag;
use html5ever::{local_name, namespace_url, ns, QualName};
use kuchikiki::traits::TendrilSink;
use kuchikiki::{Attribute, ExpandedName, NodeRef};
use tracing::warn;

/// A parsed template with a handle on its `<head>`.
pub(crate) struct FrameDocument {
    document: NodeRef,
    head: NodeRef,
}

impl FrameDocument {
    /// Parse a full HTML document. Always succeeds.
    pub fn parse(template: &str) -> Self {
        let document = kuchikiki::parse_html().one(template);
        // The tree builder synthesizes <head> for every document.
        let head = match document.select_first("head") {
            Ok(head) => head.as_node().clone(),
            Err(()) => {
                warn!("Parsed template has no <head>; appending meta tags to the document root");
                document.clone()
            }
        };
        Self { document, head }
    }

    /// Append `<meta name=".." content="..">` as the last child of `<head>`.
    pub fn append_meta(&self, tag: &MetaTag) {
        let meta = NodeRef::new_element(
            QualName::new(None, ns!(html), local_name!("meta")),
            vec![
                attribute("name", &tag.name),
                attribute("content", &tag.content),
            ],
        );
        self.head.append(meta);
    }

    /// Serialize the whole document, doctype included.
    pub fn serialize(&self) -> String {
        self.document.to_string()
    }
}

fn attribute(local: &str, value: &str) -> (ExpandedName, Attribute) {
    (
        ExpandedName::new(ns!(), local),
        Attribute {
            prefix: None,
            value: value.to_string(),
        },
    )
}

/// Read back every `<meta name=..>` in document order.
///
/// Meta elements without a `name` attribute (e.g. `<meta charset>`) are skipped.
pub fn extract_meta_tags(html: &str) -> Vec<MetaTag> {
    let document = kuchikiki::parse_html().one(html);
    let Ok(metas) = document.select("meta") else {
        return Vec::new();
    };
    metas
        .filter_map(|meta| {
            let attrs = meta.attributes.borrow();
            let name = attrs.get("name")?;
            Some(MetaTag::new(name, attrs.get("content").unwrap_or_default()))
        })
        .collect()
}
