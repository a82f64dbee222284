use crate::config::{Config, DEFAULT_LANGUAGE_PREFIX};
use crate::element::RenderNode;
use crate::visit::visit_mut;

/// Classes that do not carry the language prefix, in their original order.
pub fn promotable(prefix: &str, classes: &[String]) -> Vec<String> {
    classes
        .iter()
        .filter(|class| !class.starts_with(prefix))
        .cloned()
        .collect()
}

fn is_code_block(node: &RenderNode) -> bool {
    node.as_element().is_some_and(|el| el.code_child().is_some())
}

#[derive(Debug, Clone)]
pub struct ClassPromoter {
    prefix: String,
}

impl Default for ClassPromoter {
    fn default() -> Self {
        ClassPromoter::new(DEFAULT_LANGUAGE_PREFIX)
    }
}

impl ClassPromoter {
    pub fn new(prefix: &str) -> Self {
        ClassPromoter {
            prefix: prefix.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        ClassPromoter::new(&config.language_prefix)
    }

    /// Returns the number of blocks visited as promotion targets. The
    /// inner code element is never modified, and running twice promotes
    /// the same classes twice.
    pub fn run(&self, root: &mut RenderNode) -> usize {
        let mut promoted = 0;
        visit_mut(root, &is_code_block, &mut |node: &mut RenderNode| {
            let RenderNode::Element(block) = node else {
                return;
            };
            let additional = match block.code_child() {
                Some(code) => promotable(&self.prefix, &code.properties.class_names),
                None => return,
            };
            block.properties.class_names.extend(additional);
            promoted += 1;
        });
        promoted
    }
}

pub fn promote_classes(root: &mut RenderNode) -> usize {
    ClassPromoter::default().run(root)
}
