use clap::Parser;
use codeclass::config::{Config, MetaSplit};
use codeclass::error::{Error, Result};
use codeclass::output::{collect_sources, write_all, Destination};
use codeclass::{Document, Pipeline};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "codeclass",
    about = "Render Markdown to HTML, tagging code fences with language and meta classes"
)]
struct Cli {
    /// Input file(s) or directory
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file; a directory when the input is a directory, there are several
    /// inputs, or the path is an existing directory or ends in '/' (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Class prefix marking the language class (default: language-)
    #[arg(long)]
    prefix: Option<String>,

    /// How fence meta strings are split: whitespace or space
    #[arg(long)]
    meta_split: Option<MetaSplit>,

    /// Skip the fence annotation pass
    #[arg(long)]
    no_annotate: bool,

    /// Skip the class promotion pass
    #[arg(long)]
    no_promote: bool,

    /// Emit complete HTML documents
    #[arg(long)]
    standalone: bool,

    /// Print the final render tree as JSON instead of HTML
    #[arg(long)]
    tree: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    // CLI overrides
    if let Some(ref prefix) = cli.prefix {
        config.language_prefix = prefix.clone();
    }
    if let Some(mode) = cli.meta_split {
        config.meta_split = mode;
    }
    if cli.no_annotate {
        config.annotate = false;
    }
    if cli.no_promote {
        config.promote = false;
    }
    if cli.standalone {
        config.standalone = true;
    }
    Ok(config)
}

fn format_document(doc: &Document, cli: &Cli, config: &Config) -> Result<String> {
    if cli.tree {
        let mut json = serde_json::to_string_pretty(&doc.tree)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(doc.to_html(config.standalone))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let pipeline = Pipeline::new(&config);

    let sources = collect_sources(&cli.inputs)?;
    let dest = Destination::choose(&cli.inputs, cli.output.as_deref());
    let extension = if cli.tree { "json" } else { "html" };

    let mut rendered = Vec::with_capacity(sources.len());
    for source in sources {
        let text = fs::read_to_string(&source.path).map_err(|e| Error::Read {
            path: source.path.clone(),
            source: e,
        })?;
        let doc = pipeline.run(&text);
        log::info!(
            "{}: {} fence(s) annotated, {} block(s) promoted",
            source.path.display(),
            doc.annotated,
            doc.promoted
        );
        let text = format_document(&doc, cli, &config)?;
        rendered.push((source, text));
    }

    if let Some(stdout) = write_all(&dest, &rendered, extension)? {
        print!("{}", stdout);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        die(&e.to_string());
    }
}
