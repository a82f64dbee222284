use indexmap::IndexMap;
use serde::Serialize;

/// Tag of the block element wrapping a rendered code fence.
pub const BLOCK_TAG: &str = "pre";
/// Tag of the inner element carrying the code itself.
pub const CODE_TAG: &str = "code";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Ordered; duplicates are kept.
    pub class_names: Vec<String>,
    pub attributes: IndexMap<String, String>,
}

impl Properties {
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Properties {
            class_names: classes.into_iter().map(Into::into).collect(),
            attributes: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    pub properties: Properties,
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Element {
            tag_name: tag_name.to_string(),
            properties: Properties::default(),
            children: Vec::new(),
        }
    }

    pub fn with_children(tag_name: &str, children: Vec<RenderNode>) -> Self {
        Element {
            children,
            ..Element::new(tag_name)
        }
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.properties
            .attributes
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.properties.class_names.push(class.to_string());
        self
    }

    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    /// The inner code element when this is a rendered code fence: a block
    /// element whose first child is a code element.
    pub fn code_child(&self) -> Option<&Element> {
        if !self.is(BLOCK_TAG) {
            return None;
        }
        match self.children.first() {
            Some(RenderNode::Element(child)) if child.is(CODE_TAG) => Some(child),
            _ => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderNode {
    /// Transparent container; serializes as its children.
    Fragment { children: Vec<RenderNode> },
    Element(Element),
    Text { value: String },
    /// Pre-rendered HTML, emitted verbatim.
    Raw { value: String },
}

impl RenderNode {
    pub fn text(value: &str) -> Self {
        RenderNode::Text {
            value: value.to_string(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderNode::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Fragment { children } => children,
            RenderNode::Element(el) => &el.children,
            RenderNode::Text { .. } | RenderNode::Raw { .. } => &[],
        }
    }

    /// First element with the given tag, in document order.
    pub fn find(&self, tag_name: &str) -> Option<&Element> {
        if let RenderNode::Element(el) = self {
            if el.is(tag_name) {
                return Some(el);
            }
        }
        self.children().iter().find_map(|child| child.find(tag_name))
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            RenderNode::Text { value } => out.push_str(value),
            RenderNode::Raw { .. } => {}
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for RenderNode {
    fn from(el: Element) -> Self {
        RenderNode::Element(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_block(first: RenderNode) -> Element {
        Element::with_children(BLOCK_TAG, vec![first])
    }

    #[test]
    fn test_code_child_found() {
        let block = code_block(Element::new(CODE_TAG).into());
        assert!(block.code_child().is_some());
    }

    #[test]
    fn test_code_child_requires_block_tag() {
        let div = Element::with_children("div", vec![Element::new(CODE_TAG).into()]);
        assert!(div.code_child().is_none());
    }

    #[test]
    fn test_code_child_must_be_first() {
        let block = Element::with_children(
            BLOCK_TAG,
            vec![RenderNode::text("x"), Element::new(CODE_TAG).into()],
        );
        assert!(block.code_child().is_none());
        assert!(Element::new(BLOCK_TAG).code_child().is_none());
    }

    #[test]
    fn test_find_and_text_content() {
        let tree = RenderNode::Fragment {
            children: vec![Element::with_children(
                "h1",
                vec![
                    RenderNode::text("Hello "),
                    Element::with_children("em", vec![RenderNode::text("world")]).into(),
                ],
            )
            .into()],
        };
        let h1 = tree.find("h1").unwrap();
        assert_eq!(h1.text_content(), "Hello world");
        assert!(tree.find("h2").is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let el: RenderNode = Element::new(CODE_TAG).class("language-rust").into();
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tagName"], "code");
        assert_eq!(json["properties"]["classNames"][0], "language-rust");
    }
}
