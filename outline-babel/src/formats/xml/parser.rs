use crate::error::FormatError;
use crate::formats::common::{nesting_error, MAX_NESTING};
use crate::outline::builder::assemble;
use crate::outline::{convert_to_number, Outline, OutlineNode};
use roxmltree::Node;
use tracing::debug;

pub(super) fn parse_xml(source: &str) -> Result<Outline, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    let outline = match root.tag_name().name() {
        "content" => match child_element(root, "bookmarks") {
            Some(bookmarks) => parse_windjview(bookmarks)?,
            None => return Err(unknown_format(root)),
        },
        "outline" => Outline::new(parse_items(root, 0)?),
        _ if child_element(root, "item").is_some() => Outline::new(parse_items(root, 0)?),
        _ => return Err(unknown_format(root)),
    };

    debug!(entries = outline.len_total(), "read XML outline");
    Ok(outline)
}

fn unknown_format(root: Node) -> FormatError {
    FormatError::ParseError(format!(
        "Unknown XML format: root element is <{}>",
        root.tag_name().name()
    ))
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn parse_items(parent: Node, level: usize) -> Result<Vec<OutlineNode>, FormatError> {
    parent
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "item")
        .map(|item| {
            if level >= MAX_NESTING {
                return Err(nesting_error("XML"));
            }
            let title = item.attribute("title").unwrap_or("");
            let page_number = item.attribute("page").map(|p| convert_to_number(p.trim())).unwrap_or(0);
            let children = parse_items(item, level + 1)?;
            Ok(OutlineNode::new(title, level, page_number).with_children(children))
        })
        .collect()
}

/// WinDjView stores a flat list with 0-based pages and an explicit nesting level per bookmark.
fn parse_windjview(bookmarks: Node) -> Result<Outline, FormatError> {
    let mut entries = Vec::new();
    for bookmark in bookmarks
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "bookmark")
    {
        let title = bookmark.attribute("title").unwrap_or("").trim();
        let page: u32 = numeric_attribute(bookmark, "page")?;
        let level: usize = numeric_attribute(bookmark, "level")?;
        entries.push(OutlineNode::new(title, level, page.saturating_add(1)));
    }
    if entries.is_empty() {
        return Err(FormatError::ParseError(
            "No bookmarks found in the file".to_string(),
        ));
    }
    Ok(Outline::new(assemble(entries)))
}

fn numeric_attribute<T>(node: Node, name: &str) -> Result<T, FormatError>
where
    T: std::str::FromStr + Default,
{
    match node.attribute(name) {
        None => Ok(T::default()),
        Some(raw) => raw.trim().parse().map_err(|_| {
            FormatError::ParseError(format!(
                "Invalid {name} '{raw}' on bookmark at byte {}",
                node.range().start
            ))
        }),
    }
}
