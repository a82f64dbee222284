use codeclass::config::{Config, MetaSplit};
use codeclass::element::RenderNode;
use codeclass::source::{CodeFence, SourceNode};
use codeclass::{annotate_fences, convert, promote_classes, render, Pipeline};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::Path;

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

fn read_sample(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("samples")
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    text.replace("\r\n", "\n")
}

fn classes(tree: &RenderNode, tag: &str) -> Vec<String> {
    tree.find(tag)
        .unwrap_or_else(|| panic!("no <{}> in tree", tag))
        .properties
        .class_names
        .clone()
}

/// Both passes by hand, with the reference conversion step between them.
fn run_passes(fence: CodeFence) -> RenderNode {
    let mut source = SourceNode::root(vec![SourceNode::code_fence(fence)]);
    annotate_fences(&mut source);
    let mut tree = convert::to_render_tree(source, "language-");
    promote_classes(&mut tree);
    tree
}

#[test]
fn test_python_fence_classes() {
    let tree = run_passes(CodeFence::new(Some("python"), Some("highlight foo")));
    assert_eq!(classes(&tree, "code"), s(&["language-python", "highlight", "foo"]));
    assert_eq!(classes(&tree, "pre"), s(&["highlight", "foo"]));
}

#[test]
fn test_absent_language_attaches_nothing() {
    let mut source = SourceNode::root(vec![SourceNode::code_fence(CodeFence::new(None, Some("highlight")))]);
    annotate_fences(&mut source);
    assert_eq!(source.children[0].as_code_fence().unwrap().pending, None);

    let tree = run_passes(CodeFence::new(None, Some("highlight")));
    assert!(classes(&tree, "code").is_empty());
    assert!(classes(&tree, "pre").is_empty());
}

#[test]
fn test_promote_twice_duplicates() {
    let mut tree = run_passes(CodeFence::new(Some("python"), Some("highlight foo")));
    promote_classes(&mut tree);
    assert_eq!(classes(&tree, "pre"), s(&["highlight", "foo", "highlight", "foo"]));
    assert_eq!(classes(&tree, "code"), s(&["language-python", "highlight", "foo"]));
}

#[rstest]
#[case(MetaSplit::Whitespace, &["a", "b"])]
#[case(MetaSplit::Space, &["", "", "a", "", "b", ""])]
fn test_meta_split_rules(#[case] mode: MetaSplit, #[case] promoted: &[&str]) {
    let mut source = SourceNode::root(vec![SourceNode::code_fence(CodeFence::new(Some("txt"), Some("  a  b ")))]);
    codeclass::annotate::FenceAnnotator::new("language-", mode).run(&mut source);
    let mut tree = convert::to_render_tree(source, "language-");
    promote_classes(&mut tree);
    assert_eq!(classes(&tree, "pre"), s(promoted));
}

#[test]
fn test_markdown_end_to_end() {
    let input = "# Demo\n\n```go bar\nfunc main() {}\n```\n\n```\nno language\n```\n\nInline `code` stays bare.\n";
    let expected = "<h1>Demo</h1>\n\
<pre class=\"bar\"><code class=\"language-go bar\">func main() {}\n</code></pre>\n\
<pre><code>no language\n</code></pre>\n\
<p>Inline <code>code</code> stays bare.</p>\n";
    assert_eq!(render(input, &Config::default()), expected);
}

#[test]
fn test_fence_nested_in_blockquote() {
    let doc = Pipeline::new(&Config::default()).run("> ```js copy\n> x()\n> ```\n");
    assert_eq!(doc.annotated, 1);
    assert_eq!(classes(&doc.tree, "pre"), s(&["copy"]));
    assert_eq!(classes(&doc.tree, "code"), s(&["language-js", "copy"]));
}

#[test]
fn test_custom_prefix_flows_through() {
    let config = Config {
        language_prefix: "lang-".to_string(),
        ..Config::default()
    };
    let doc = Pipeline::new(&config).run("```rust language-x y\nfn f() {}\n```\n");
    assert_eq!(classes(&doc.tree, "code"), s(&["lang-rust", "language-x", "y"]));
    assert_eq!(classes(&doc.tree, "pre"), s(&["language-x", "y"]));
}

#[test]
fn test_promotion_disabled() {
    let config = Config {
        promote: false,
        ..Config::default()
    };
    let doc = Pipeline::new(&config).run("```python highlight\nx\n```\n");
    assert_eq!(classes(&doc.tree, "code"), s(&["language-python", "highlight"]));
    assert!(classes(&doc.tree, "pre").is_empty());
}

#[test]
fn test_sample_chapter() {
    let input = read_sample("chapter.md");
    let expected = read_sample("chapter.html");
    assert_eq!(render(&input, &Config::default()), expected);
}
