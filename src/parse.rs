use crate::config::Extensions;
use crate::source::{Alignment, CodeFence, NodeKind, SourceNode};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use regex::Regex;
use std::sync::LazyLock;

static RE_INFO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)(?:\s+([\s\S]*))?$").unwrap());

fn parser_options(ext: &Extensions) -> Options {
    let mut opts = Options::empty();
    if ext.tables {
        opts.insert(Options::ENABLE_TABLES);
    }
    if ext.strikethrough {
        opts.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if ext.tasklists {
        opts.insert(Options::ENABLE_TASKLISTS);
    }
    if ext.footnotes {
        opts.insert(Options::ENABLE_FOOTNOTES);
    }
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts
}

/// Split a fence info string into language (first word) and meta (the
/// rest, `None` when nothing follows the language).
pub fn split_info(info: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = RE_INFO.captures(info.trim()) else {
        return (None, None);
    };
    let language = caps.get(1).map(|m| m.as_str().to_string());
    let meta = caps
        .get(2)
        .map(|m| m.as_str().to_string())
        .filter(|m| !m.is_empty());
    (language, meta)
}

fn kind_for(tag: Tag) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading {
            level, id, classes, ..
        } => NodeKind::Heading {
            level: level as u8,
            id: id.map(|id| id.to_string()),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        },
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
            let (language, meta) = split_info(&info);
            NodeKind::CodeFence(CodeFence {
                language,
                meta,
                ..Default::default()
            })
        }
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeFence(CodeFence::default()),
        Tag::List(start) => NodeKind::List { start },
        Tag::Item => NodeKind::Item,
        Tag::FootnoteDefinition(label) => NodeKind::FootnoteDefinition {
            label: label.to_string(),
        },
        Tag::Table(alignments) => NodeKind::Table {
            alignments: alignments
                .iter()
                .map(|a| match a {
                    pulldown_cmark::Alignment::None => Alignment::None,
                    pulldown_cmark::Alignment::Left => Alignment::Left,
                    pulldown_cmark::Alignment::Center => Alignment::Center,
                    pulldown_cmark::Alignment::Right => Alignment::Right,
                })
                .collect(),
        },
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            url: dest_url.to_string(),
            title: title.to_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            url: dest_url.to_string(),
            title: title.to_string(),
        },
        _ => NodeKind::Group,
    }
}

/// Stack of open nodes; the bottom entry is the root.
struct TreeBuilder {
    stack: Vec<SourceNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            stack: vec![SourceNode::new(NodeKind::Root)],
        }
    }

    fn open(&mut self, kind: NodeKind) {
        self.stack.push(SourceNode::new(kind));
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            self.leaf(node);
        }
    }

    fn leaf(&mut self, node: SourceNode) {
        if let Some(top) = self.stack.last_mut() {
            top.children.push(node);
        }
    }

    fn text(&mut self, text: &str) {
        // Code block bodies arrive as text events; keep them on the fence.
        if let Some(fence) = self.stack.last_mut().and_then(SourceNode::as_code_fence_mut) {
            fence.value.push_str(text);
            return;
        }
        if text.is_empty() {
            return;
        }
        self.leaf(SourceNode::text(text));
    }

    fn finish(mut self) -> SourceNode {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| SourceNode::new(NodeKind::Root))
    }
}

pub fn parse_markdown(text: &str, ext: &Extensions) -> SourceNode {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(text, parser_options(ext)) {
        match event {
            Event::Start(tag) => builder.open(kind_for(tag)),
            Event::End(_) => builder.close(),
            Event::Text(t) => builder.text(&t),
            Event::Code(c) => builder.leaf(SourceNode::new(NodeKind::InlineCode(c.to_string()))),
            Event::Html(h) | Event::InlineHtml(h) => builder.leaf(SourceNode::new(NodeKind::Html(h.to_string()))),
            Event::InlineMath(m) | Event::DisplayMath(m) => builder.text(&m),
            Event::FootnoteReference(label) => builder.leaf(SourceNode::new(NodeKind::FootnoteReference {
                label: label.to_string(),
            })),
            Event::SoftBreak => builder.leaf(SourceNode::new(NodeKind::SoftBreak)),
            Event::HardBreak => builder.leaf(SourceNode::new(NodeKind::HardBreak)),
            Event::Rule => builder.leaf(SourceNode::new(NodeKind::Rule)),
            Event::TaskListMarker(checked) => builder.leaf(SourceNode::new(NodeKind::TaskMarker { checked })),
        }
    }
    builder.finish()
}
