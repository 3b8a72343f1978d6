//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::routes::DEFAULT_PREFIX;

/// hexo2astro - Hexo to Astro blog migration
///
/// Rewrite Hexo post front matter for Astro and generate redirects for old permalinks.
#[derive(Parser, Debug)]
#[command(
    name = "hexo2astro",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Migrate Hexo blog posts to Astro",
    long_about = "hexo2astro rewrites the front matter of Hexo posts for Astro \
                  (pubDatetime, modDatetime, description from the excerpt) and \
                  generates a redirect table from old post slugs to /posts/ routes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  hexo2astro convert\n    \
                  hexo2astro convert --input source/_posts --output src/content/blog\n    \
                  hexo2astro routes --output routes.txt\n    \
                  hexo2astro routes --output -"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert Hexo posts into Astro posts
    Convert(ConvertArgs),

    /// Generate the redirect table for old post slugs
    Routes(RoutesArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert ./input into ./output:\n    hexo2astro convert\n\n\
                  Convert a Hexo source tree:\n    hexo2astro convert -i source/_posts -o src/content/blog\n\n\
                  Preview without writing:\n    hexo2astro convert --dry-run")]
pub struct ConvertArgs {
    /// Directory with Hexo posts
    #[arg(long, short = 'i', default_value = "./input")]
    pub input: PathBuf,

    /// Directory to write converted posts to (mirrors the input layout)
    #[arg(long, short = 'o', default_value = "./output")]
    pub output: PathBuf,

    /// Extension of post files, without the dot
    #[arg(long, default_value = "md")]
    pub ext: String,

    /// Convert every post but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the routes command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write ./routes.txt from ./input:\n    hexo2astro routes\n\n\
                  Print the table:\n    hexo2astro routes --output -\n\n\
                  Use a different route prefix:\n    hexo2astro routes --prefix /blog/")]
pub struct RoutesArgs {
    /// Directory with Hexo posts
    #[arg(long, short = 'i', default_value = "./input")]
    pub input: PathBuf,

    /// File to write the table to, or `-` for stdout
    #[arg(long, short = 'o', default_value = "./routes.txt")]
    pub output: PathBuf,

    /// Prefix of the new post routes
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Extension of post files, without the dot
    #[arg(long, default_value = "md")]
    pub ext: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    hexo2astro completions --shell bash > ~/.bash_completion.d/hexo2astro\n\n\
                  Generate zsh completions:\n    hexo2astro completions --shell zsh > ~/.zfunc/_hexo2astro\n\n\
                  Generate fish completions:\n    hexo2astro completions --shell fish > ~/.config/fish/completions/hexo2astro.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}
