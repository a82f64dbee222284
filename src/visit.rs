use crate::element::RenderNode;
use crate::source::SourceNode;

pub trait Visit: Sized {
    fn children_mut(&mut self) -> Option<&mut Vec<Self>>;
}

impl Visit for SourceNode {
    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        Some(&mut self.children)
    }
}

impl Visit for RenderNode {
    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            RenderNode::Fragment { children } => Some(children),
            RenderNode::Element(el) => Some(&mut el.children),
            RenderNode::Text { .. } | RenderNode::Raw { .. } => None,
        }
    }
}

/// Visit `node` and its descendants in document order, calling `handler` on
/// every node that satisfies `test`. A node is handled before its children
/// are visited.
pub fn visit_mut<N, T, H>(node: &mut N, test: &T, handler: &mut H)
where
    N: Visit,
    T: Fn(&N) -> bool,
    H: FnMut(&mut N),
{
    if test(node) {
        handler(node);
    }
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            visit_mut(child, test, handler);
        }
    }
}
