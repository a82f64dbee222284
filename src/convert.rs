//! Source tree to render tree.
//!
//! A code fence becomes `pre > code > text`. The fence's pending
//! attributes, when present, become the `code` element's class list
//! verbatim; otherwise the code element gets only the language class, or
//! no class when no language was declared.

use crate::element::{Element, Properties, RenderNode, BLOCK_TAG, CODE_TAG};
use crate::source::{Alignment, CodeFence, NodeKind, SourceNode};

pub fn to_render_tree(root: SourceNode, language_prefix: &str) -> RenderNode {
    Converter {
        prefix: language_prefix,
    }
    .node(root)
}

struct Converter<'a> {
    prefix: &'a str,
}

impl Converter<'_> {
    fn nodes(&self, nodes: Vec<SourceNode>) -> Vec<RenderNode> {
        nodes.into_iter().map(|n| self.node(n)).collect()
    }

    fn wrap(&self, tag: &str, children: Vec<SourceNode>) -> RenderNode {
        Element::with_children(tag, self.nodes(children)).into()
    }

    fn node(&self, node: SourceNode) -> RenderNode {
        let SourceNode { kind, children } = node;
        match kind {
            NodeKind::Root | NodeKind::Group => RenderNode::Fragment {
                children: self.nodes(children),
            },
            NodeKind::Paragraph => self.wrap("p", children),
            NodeKind::Heading { level, id, classes } => {
                let mut el = Element::with_children(&format!("h{}", level), self.nodes(children));
                if let Some(id) = id {
                    el = el.attr("id", &id);
                }
                el.properties.class_names.extend(classes);
                el.into()
            }
            NodeKind::BlockQuote => self.wrap("blockquote", children),
            NodeKind::List { start: None } => self.wrap("ul", children),
            NodeKind::List { start: Some(start) } => {
                let mut el = Element::with_children("ol", self.nodes(children));
                if start != 1 {
                    el = el.attr("start", &start.to_string());
                }
                el.into()
            }
            NodeKind::Item => self.wrap("li", children),
            NodeKind::TaskMarker { checked } => {
                let mut el = Element::new("input").attr("type", "checkbox").attr("disabled", "");
                if checked {
                    el = el.attr("checked", "");
                }
                el.into()
            }
            NodeKind::Emphasis => self.wrap("em", children),
            NodeKind::Strong => self.wrap("strong", children),
            NodeKind::Strikethrough => self.wrap("del", children),
            NodeKind::Link { url, title } => {
                let mut el = Element::with_children("a", self.nodes(children)).attr("href", &url);
                if !title.is_empty() {
                    el = el.attr("title", &title);
                }
                el.into()
            }
            NodeKind::Image { url, title } => {
                let alt = SourceNode::with_children(NodeKind::Group, children).plain_text();
                let mut el = Element::new("img").attr("src", &url).attr("alt", &alt);
                if !title.is_empty() {
                    el = el.attr("title", &title);
                }
                el.into()
            }
            NodeKind::Table { alignments } => self.table(alignments, children),
            NodeKind::TableHead => self.wrap("thead", children),
            NodeKind::TableRow => self.wrap("tr", children),
            NodeKind::TableCell => self.wrap("td", children),
            NodeKind::FootnoteDefinition { label } => {
                let mut body = vec![Element::with_children("sup", vec![RenderNode::text(&label)])
                    .class("footnote-definition-label")
                    .into()];
                body.extend(self.nodes(children));
                Element::with_children("div", body)
                    .class("footnote-definition")
                    .attr("id", &label)
                    .into()
            }
            NodeKind::FootnoteReference { label } => {
                let link = Element::with_children("a", vec![RenderNode::text(&label)])
                    .attr("href", &format!("#{}", label));
                Element::with_children("sup", vec![link.into()])
                    .class("footnote-reference")
                    .into()
            }
            NodeKind::CodeFence(fence) => self.code_fence(fence),
            NodeKind::InlineCode(code) => Element::with_children(CODE_TAG, vec![RenderNode::text(&code)]).into(),
            NodeKind::Html(value) => RenderNode::Raw { value },
            NodeKind::Text(value) => RenderNode::Text { value },
            NodeKind::SoftBreak => RenderNode::text("\n"),
            NodeKind::HardBreak => Element::new("br").into(),
            NodeKind::Rule => Element::new("hr").into(),
        }
    }

    fn code_fence(&self, fence: CodeFence) -> RenderNode {
        let class_names = match (fence.pending, fence.language.filter(|l| !l.is_empty())) {
            (Some(pending), _) => pending.class_names,
            (None, Some(language)) => vec![format!("{}{}", self.prefix, language)],
            (None, None) => Vec::new(),
        };
        let code = Element {
            tag_name: CODE_TAG.to_string(),
            properties: Properties {
                class_names,
                ..Default::default()
            },
            children: vec![RenderNode::Text { value: fence.value }],
        };
        Element::with_children(BLOCK_TAG, vec![code.into()]).into()
    }

    /// The head row is wrapped in `thead > tr` with `th` cells; body rows
    /// go in `tbody`. Alignment applies per column.
    fn table(&self, alignments: Vec<Alignment>, children: Vec<SourceNode>) -> RenderNode {
        let mut head = Vec::new();
        let mut body = Vec::new();
        for child in children {
            match child.kind {
                NodeKind::TableHead => {
                    let row = self.row(child.children, &alignments, "th");
                    head.push(Element::with_children("thead", vec![row]).into());
                }
                NodeKind::TableRow => body.push(self.row(child.children, &alignments, "td")),
                _ => body.push(self.node(child)),
            }
        }
        if !body.is_empty() {
            head.push(Element::with_children("tbody", body).into());
        }
        Element::with_children("table", head).into()
    }

    fn row(&self, cells: Vec<SourceNode>, alignments: &[Alignment], cell_tag: &str) -> RenderNode {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let mut el = Element::with_children(cell_tag, self.nodes(cell.children));
                let align = match alignments.get(i) {
                    Some(Alignment::Left) => Some("left"),
                    Some(Alignment::Center) => Some("center"),
                    Some(Alignment::Right) => Some("right"),
                    Some(Alignment::None) | None => None,
                };
                if let Some(align) = align {
                    el = el.attr("style", &format!("text-align: {}", align));
                }
                el.into()
            })
            .collect();
        Element::with_children("tr", cells).into()
    }
}
