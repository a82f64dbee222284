use crate::element::{Element, RenderNode};
use html_escape::{encode_double_quoted_attribute, encode_text};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

pub fn render_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Wrap rendered body HTML in a minimal document.
pub fn standalone(body: &str, title: Option<&str>) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(title) = title {
        out.push_str("<title>");
        out.push_str(&encode_text(title));
        out.push_str("</title>\n");
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" | "ul" | "ol" | "li" | "pre"
            | "table" | "thead" | "tbody" | "tr" | "hr" | "div"
    )
}

/// Containers whose children start on their own line.
fn opens_line(tag: &str) -> bool {
    matches!(
        tag,
        "ul" | "ol" | "blockquote" | "table" | "thead" | "tbody" | "tr" | "div"
    )
}

fn write_node(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Fragment { children } => {
            for child in children {
                write_node(child, out);
            }
        }
        RenderNode::Element(el) => write_element(el, out),
        RenderNode::Text { value } => out.push_str(&encode_text(value)),
        RenderNode::Raw { value } => out.push_str(value),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag_name);
    if !el.properties.class_names.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(&el.properties.class_names.join(" ")));
        out.push('"');
    }
    for (key, value) in &el.properties.attributes {
        out.push(' ');
        out.push_str(key);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
    out.push('>');
    if VOID_TAGS.contains(&el.tag_name.as_str()) {
        if is_block(&el.tag_name) {
            out.push('\n');
        }
        return;
    }
    if opens_line(&el.tag_name) {
        out.push('\n');
    }
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag_name);
    out.push('>');
    if is_block(&el.tag_name) {
        out.push('\n');
    }
}
