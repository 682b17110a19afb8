use article_pack::archive::{self, BuildOptions};
use article_pack::render::{self, CmarkRenderer};
use article_pack::scan::{self, DraftOverrides};
use article_pack::types::BodyFormat;
use article_pack::{naming, output, pack};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `X.Y.Z` on a release tag, `dev@<hash>` otherwise.
fn version_string() -> &'static str {
    match (env!("ON_RELEASE_TAG"), env!("GIT_HASH")) {
        ("true", _) => env!("CARGO_PKG_VERSION"),
        (_, "") => "dev@unknown",
        // Leaked once at startup
        (_, hash) => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

/// Field values that override `article.toml`.
#[derive(clap::Args, Clone, Default)]
struct FieldArgs {
    /// Article title
    #[arg(long)]
    title: Option<String>,
    /// Explicit slug (otherwise derived from the title)
    #[arg(long)]
    slug: Option<String>,
    /// Author name
    #[arg(long)]
    author: Option<String>,
    /// One-paragraph summary
    #[arg(long)]
    summary: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
}

impl From<FieldArgs> for DraftOverrides {
    fn from(args: FieldArgs) -> Self {
        DraftOverrides {
            title: args.title,
            slug: args.slug,
            author: args.author,
            summary: args.summary,
            tags: args.tags,
        }
    }
}

#[derive(Parser)]
#[command(name = "article-pack")]
#[command(about = "Package a markdown article and its images into a zip")]
#[command(long_about = "\
Package a markdown article and its images into a zip

The draft directory is the authoring form. The archive unzips straight into
your site repository's articles directory.

Draft structure:

  my-draft/
  ├── article.toml      # title (required), slug, author, summary, tags
  ├── article.md        # Markdown body (optional)
  ├── config.toml       # Packaging config (optional)
  └── images/           # Attachments, ordered by file name
      ├── Photo One.PNG
      └── diagram.svg

Archive structure:

  <slug>/
  ├── article.html      # or article.md with --format markdown
  ├── article.json      # Metadata manifest
  ├── README.txt        # Where to unzip
  └── assets/
      ├── 01-photo-one.png
      └── 02-diagram.svg

Run 'article-pack gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Draft directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Directory the zip is written to
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the archive and write <slug>.zip
    Build {
        /// Body format: html or markdown (overrides config.toml)
        #[arg(long)]
        format: Option<BodyFormat>,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Validate the draft without writing anything
    Check {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Print the rendered HTML preview of the draft body
    Preview,
    /// Print the slug derived from some text
    Slug {
        /// Text to slugify
        text: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { format, fields } => {
            let mut draft = scan::scan(&cli.source)?;
            DraftOverrides::from(fields).apply(&mut draft.input);

            let mut options = BuildOptions::from_config(&draft.config.article);
            if let Some(format) = format {
                options.format = format;
            }
            let renderer = CmarkRenderer::new(&draft.config.markdown);
            let package =
                archive::build_archive(&draft.input, &options, chrono::Utc::now(), &renderer)?;

            let bytes = pack::write_zip(&package.tree)?;
            let path = pack::save_zip(&bytes, &cli.output, &package.archive_name())?;
            output::print_build_output(&package, Some(&path));
        }
        Command::Check { fields } => {
            println!("==> Checking {}", cli.source.display());
            let mut draft = scan::scan(&cli.source)?;
            DraftOverrides::from(fields).apply(&mut draft.input);

            let options = BuildOptions::from_config(&draft.config.article);
            let renderer = CmarkRenderer::new(&draft.config.markdown);
            let package =
                archive::build_archive(&draft.input, &options, chrono::Utc::now(), &renderer)?;
            output::print_build_output(&package, None);
            println!("==> Draft is valid");
        }
        Command::Preview => {
            let draft = scan::scan(&cli.source)?;
            let renderer = CmarkRenderer::new(&draft.config.markdown);
            print!("{}", render::render_preview(&renderer, &draft.input.body)?);
        }
        Command::Slug { text } => {
            println!("{}", naming::slugify(&text));
        }
        Command::GenConfig => {
            print!("{}", article_pack::config::stock_config_toml());
        }
    }

    Ok(())
}
