//! Orchestrates one document build: parse, annotate, convert, promote.
//!
//! The two passes cannot tell whether they run on the right side of
//! conversion; the order is fixed here and nowhere else.

use crate::annotate::FenceAnnotator;
use crate::config::Config;
use crate::convert::to_render_tree;
use crate::element::RenderNode;
use crate::html;
use crate::parse::parse_markdown;
use crate::promote::ClassPromoter;

/// Result of running the pipeline on one document.
#[derive(Debug, Clone)]
pub struct Document {
    pub tree: RenderNode,
    pub annotated: usize,
    pub promoted: usize,
}

impl Document {
    pub fn title(&self) -> Option<String> {
        self.tree
            .find("h1")
            .map(|h| h.text_content().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn to_html(&self, standalone: bool) -> String {
        let body = html::render_html(&self.tree);
        if standalone {
            html::standalone(&body, self.title().as_deref())
        } else {
            body
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
    annotator: FenceAnnotator,
    promoter: ClassPromoter,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Pipeline {
            config: config.clone(),
            annotator: FenceAnnotator::from_config(config),
            promoter: ClassPromoter::from_config(config),
        }
    }

    pub fn run(&self, text: &str) -> Document {
        let mut source = parse_markdown(text, &self.config.extensions);

        let annotated = if self.config.annotate {
            self.annotator.run(&mut source)
        } else {
            0
        };

        let mut tree = to_render_tree(source, &self.config.language_prefix);

        let promoted = if self.config.promote {
            self.promoter.run(&mut tree)
        } else {
            0
        };

        log::debug!("annotated {} fence(s), promoted {} block(s)", annotated, promoted);
        Document {
            tree,
            annotated,
            promoted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_counts() {
        let text = "```python highlight\nx\n```\n\n```\nplain\n```\n\nuse `code`\n";
        let doc = Pipeline::new(&Config::default()).run(text);
        assert_eq!(doc.annotated, 1);
        assert_eq!(doc.promoted, 2);
        let pre = doc.tree.find("pre").unwrap();
        assert_eq!(pre.properties.class_names, vec!["highlight".to_string()]);
    }

    #[test]
    fn test_passes_disabled() {
        let config = Config {
            annotate: false,
            promote: false,
            ..Config::default()
        };
        let doc = Pipeline::new(&config).run("```python highlight\nx\n```\n");
        assert_eq!(doc.annotated, 0);
        assert_eq!(doc.promoted, 0);
        assert_eq!(
            doc.to_html(false),
            "<pre><code class=\"language-python\">x\n</code></pre>\n"
        );
    }

    #[test]
    fn test_title() {
        let doc = Pipeline::new(&Config::default()).run("intro\n\n# The *Title*\n\n# Second\n");
        assert_eq!(doc.title().as_deref(), Some("The Title"));
        assert_eq!(Pipeline::new(&Config::default()).run("no heading").title(), None);
    }
}
