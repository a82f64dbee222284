//! Pass 1: attach language and meta classes to fenced code blocks.
//!
//! Runs on the source tree, before conversion. Classes are left in the
//! fence's pending attributes for the conversion step to put on the code
//! element.

use crate::config::{Config, MetaSplit, DEFAULT_LANGUAGE_PREFIX};
use crate::source::{CodeFence, SourceNode};
use crate::visit::visit_mut;

/// Cut a meta string into class names. No trimming beyond the split itself,
/// no deduplication.
pub fn split_meta(meta: &str, mode: MetaSplit) -> Vec<String> {
    match mode {
        MetaSplit::Whitespace => meta.split_whitespace().map(str::to_string).collect(),
        MetaSplit::Space => meta.split(' ').map(str::to_string).collect(),
    }
}

/// The language class followed by the meta tokens, in that order. An empty
/// meta string counts as absent.
pub fn fence_classes(
    prefix: &str,
    language: &str,
    meta: Option<&str>,
    mode: MetaSplit,
) -> Vec<String> {
    let mut classes = vec![format!("{}{}", prefix, language)];
    if let Some(meta) = meta.filter(|m| !m.is_empty()) {
        classes.extend(split_meta(meta, mode));
    }
    classes
}

#[derive(Debug, Clone)]
pub struct FenceAnnotator {
    prefix: String,
    meta_split: MetaSplit,
}

impl Default for FenceAnnotator {
    fn default() -> Self {
        FenceAnnotator::new(DEFAULT_LANGUAGE_PREFIX, MetaSplit::Whitespace)
    }
}

impl FenceAnnotator {
    pub fn new(prefix: &str, meta_split: MetaSplit) -> Self {
        FenceAnnotator {
            prefix: prefix.to_string(),
            meta_split,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        FenceAnnotator::new(&config.language_prefix, config.meta_split)
    }

    /// Annotate every fence under `root` that declares a language. Returns
    /// the number of fences annotated.
    pub fn run(&self, root: &mut SourceNode) -> usize {
        let mut annotated = 0;
        visit_mut(
            root,
            &|node: &SourceNode| node.as_code_fence().is_some_and(|f| f.language().is_some()),
            &mut |node: &mut SourceNode| {
                if let Some(fence) = node.as_code_fence_mut() {
                    self.annotate(fence);
                    annotated += 1;
                }
            },
        );
        annotated
    }

    /// Fences without a language get no pending attributes at all.
    pub fn annotate(&self, fence: &mut CodeFence) {
        let Some(language) = fence.language() else {
            return;
        };
        let classes = fence_classes(&self.prefix, language, fence.meta.as_deref(), self.meta_split);
        log::trace!("fence {}: {:?}", language, classes);
        fence
            .pending
            .get_or_insert_with(Default::default)
            .class_names
            .extend(classes);
    }
}

pub fn annotate_fences(root: &mut SourceNode) -> usize {
    FenceAnnotator::default().run(root)
}
