use clap::{Parser, Subcommand};
use rayon::prelude::*;
use simple_press::article::{Article, Scope, Section};
use simple_press::store::{self, ContentStore};
use simple_press::{catalog, config, output, render, resolve};
use std::path::PathBuf;

/// Exit code for a slug that resolves nowhere, distinct from IO/render
/// failures (1) so wrappers can show a not-found page instead of an error.
const EXIT_NOT_FOUND: i32 = 2;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "simple-press")]
#[command(about = "Static publishing pipeline for multi-section article sites")]
#[command(long_about = "\
Static publishing pipeline for multi-section article sites

Your filesystem is the data source. Each section is a subdirectory of the
content root; each Markdown file in it is an article.

Content structure:

  content/posts/
  ├── science/
  │   ├── signal-in-the-noise.md   # Article (slug = file stem)
  │   └── template.md              # Reserved skeleton, never listed
  ├── life/
  │   └── small-rituals.md
  └── poetry/                      # Absent sections are fine

Source files carry optional YAML front matter (title, date, excerpt,
author, coverImage, tags); missing fields take documented defaults.
Listings sort by date, newest first. Unscoped lookups search sections in
fixed priority order: science, life, poetry.

Run 'simple-press gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content root (overrides content_root from config.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the article catalog, newest first
    List {
        /// Restrict to one section (default: all)
        #[arg(long)]
        section: Option<Section>,
        /// Emit the catalog as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Print every article slug, one per line
    Slugs,
    /// Resolve a slug and print its metadata and raw body
    Show {
        slug: String,
        /// Restrict the lookup to one section
        #[arg(long)]
        section: Option<Section>,
    },
    /// Resolve a slug and print its body as an HTML fragment
    Render {
        slug: String,
        /// Restrict the lookup to one section
        #[arg(long)]
        section: Option<Section>,
    },
    /// Parse every article and convert every body, failing on the first error
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { section, json } => {
            let store = content_store(cli.source)?;
            let scope = Scope::from(section);
            let entries = catalog::build_catalog(&store, scope)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_catalog(scope, &entries);
            }
        }
        Command::Slugs => {
            let store = content_store(cli.source)?;
            for slug in catalog::list_slugs(&store)? {
                println!("{slug}");
            }
        }
        Command::Show { slug, section } => {
            let store = content_store(cli.source)?;
            let article = resolve_or_exit(&store, &slug, section);
            output::print_article(&article);
        }
        Command::Render { slug, section } => {
            let store = content_store(cli.source)?;
            let article = resolve_or_exit(&store, &slug, section);
            print!("{}", render::convert_body(&article.body)?);
        }
        Command::Check => {
            let store = content_store(cli.source)?;
            println!("==> Checking {}", store.root().display());

            let mut articles = Vec::new();
            for section in Section::ALL {
                let files = store.source_files(section)?;
                println!("{section}: {} articles", files.len());
                for file_name in files {
                    let slug = store::slug_from_file_name(&file_name);
                    let raw = store.read_source(section, &slug)?;
                    articles.push(Article::from_source(&raw, slug, section));
                }
            }

            // Conversions are independent per article; run them in parallel.
            articles
                .par_iter()
                .try_for_each(|article| render::convert_body(&article.body).map(|_| ()))?;

            println!("==> {} articles parsed and converted", articles.len());
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Build the content store: `--source` wins, config.toml otherwise.
fn content_store(source: Option<PathBuf>) -> Result<ContentStore, config::ConfigError> {
    let root = match source {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            PathBuf::from(config::load_config(&cwd)?.content_root)
        }
    };
    Ok(ContentStore::new(root))
}

/// Resolve a slug or exit with the distinct not-found code.
fn resolve_or_exit(store: &ContentStore, slug: &str, section: Option<Section>) -> Article {
    match resolve::resolve_article(store, slug, section) {
        Some(article) => article,
        None => {
            let scope = Scope::from(section);
            eprintln!("article '{slug}' not found (scope: {scope})");
            std::process::exit(EXIT_NOT_FOUND);
        }
    }
}
