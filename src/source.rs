/// Column alignment of a table, as declared in the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// Render attributes a pass wants attached to the element a node converts
/// into. Written before conversion, taken exactly once by it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAttributes {
    pub class_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeFence {
    pub language: Option<String>,
    pub meta: Option<String>,
    pub value: String,
    pub pending: Option<PendingAttributes>,
}

impl CodeFence {
    pub fn new(language: Option<&str>, meta: Option<&str>) -> Self {
        CodeFence {
            language: language.map(str::to_string),
            meta: meta.map(str::to_string),
            ..Default::default()
        }
    }

    /// Declared language, if present and non-empty.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Root,
    /// Container with no markup of its own; its children render in place.
    Group,
    Paragraph,
    Heading {
        level: u8,
        id: Option<String>,
        classes: Vec<String>,
    },
    BlockQuote,
    List {
        start: Option<u64>,
    },
    Item,
    TaskMarker {
        checked: bool,
    },
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        url: String,
        title: String,
    },
    Image {
        url: String,
        title: String,
    },
    Table {
        alignments: Vec<Alignment>,
    },
    TableHead,
    TableRow,
    TableCell,
    FootnoteDefinition {
        label: String,
    },
    FootnoteReference {
        label: String,
    },
    CodeFence(CodeFence),
    InlineCode(String),
    Html(String),
    Text(String),
    SoftBreak,
    HardBreak,
    Rule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    pub kind: NodeKind,
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    pub fn new(kind: NodeKind) -> Self {
        SourceNode {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<SourceNode>) -> Self {
        SourceNode { kind, children }
    }

    pub fn root(children: Vec<SourceNode>) -> Self {
        Self::with_children(NodeKind::Root, children)
    }

    pub fn text(value: &str) -> Self {
        Self::new(NodeKind::Text(value.to_string()))
    }

    pub fn code_fence(fence: CodeFence) -> Self {
        Self::new(NodeKind::CodeFence(fence))
    }

    pub fn as_code_fence(&self) -> Option<&CodeFence> {
        match &self.kind {
            NodeKind::CodeFence(fence) => Some(fence),
            _ => None,
        }
    }

    pub fn as_code_fence_mut(&mut self) -> Option<&mut CodeFence> {
        match &mut self.kind {
            NodeKind::CodeFence(fence) => Some(fence),
            _ => None,
        }
    }

    /// Concatenated text of all descendant text-like leaves.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(t) | NodeKind::InlineCode(t) => out.push_str(t),
            NodeKind::CodeFence(fence) => out.push_str(&fence.value),
            NodeKind::SoftBreak | NodeKind::HardBreak => out.push(' '),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_empty_is_none() {
        assert_eq!(CodeFence::new(Some(""), None).language(), None);
        assert_eq!(CodeFence::new(None, None).language(), None);
        assert_eq!(CodeFence::new(Some("rust"), None).language(), Some("rust"));
    }

    #[test]
    fn test_plain_text() {
        let node = SourceNode::with_children(
            NodeKind::Paragraph,
            vec![
                SourceNode::text("a"),
                SourceNode::with_children(NodeKind::Emphasis, vec![SourceNode::text("b")]),
                SourceNode::new(NodeKind::SoftBreak),
                SourceNode::new(NodeKind::InlineCode("c".to_string())),
            ],
        );
        assert_eq!(node.plain_text(), "ab c");
    }

    #[test]
    fn test_as_code_fence() {
        let mut node = SourceNode::code_fence(CodeFence::new(Some("go"), None));
        assert!(node.as_code_fence().is_some());
        node.as_code_fence_mut().unwrap().value = "x".to_string();
        assert_eq!(node.as_code_fence().unwrap().value, "x");
        assert!(SourceNode::text("x").as_code_fence().is_none());
    }
}
