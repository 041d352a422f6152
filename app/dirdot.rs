//! Command-line interface for dirdot.
//!
//! This binary provides access to the dirdot library functionality,
//! walking a directory tree and rendering the directory graph as an image,
//! or emitting the graph description to stdout.

use clap::{Parser, ValueEnum};
use dirdot::{DEFAULT_RENDERER, ImageFormat, ScanBuilder, ScanOptions, render_dot, scan, to_dot};
use std::path::PathBuf;
use std::process::exit;

/// dirdot — directory tree graph renderer
#[derive(Parser)]
#[command(name = "dirdot", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output image path (extension is added from the image format if absent)
    #[arg(short, long, default_value = "tree")]
    out: PathBuf,

    /// Image format passed to the renderer
    #[arg(long, value_enum, default_value_t = ImageFormatArg::Png)]
    image_format: ImageFormatArg,

    /// Renderer program (resolved through PATH)
    #[arg(long, default_value = DEFAULT_RENDERER)]
    renderer: String,

    /// Name of the digraph in the DOT output
    #[arg(long, default_value = "tree")]
    graph_name: String,

    /// Emit the graph to stdout instead of rendering an image
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Include hidden directories
    #[arg(long)]
    hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Disable .gitignore handling
    #[arg(long)]
    no_gitignore: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Emit {
    Dot,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ImageFormatArg {
    Png,
    Svg,
    Pdf,
    Jpeg,
}

impl From<ImageFormatArg> for ImageFormat {
    fn from(arg: ImageFormatArg) -> Self {
        match arg {
            ImageFormatArg::Png => ImageFormat::Png,
            ImageFormatArg::Svg => ImageFormat::Svg,
            ImageFormatArg::Pdf => ImageFormat::Pdf,
            ImageFormatArg::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl Cli {
    fn into_options(self) -> (ScanOptions, RunConfig) {
        let mut builder = ScanBuilder::new(self.root)
            .respect_gitignore(!self.no_gitignore)
            .include_hidden(self.hidden)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (
            builder.build(),
            RunConfig {
                out: self.out,
                image_format: self.image_format.into(),
                renderer: self.renderer,
                graph_name: self.graph_name,
                emit: self.emit,
            },
        )
    }
}

struct RunConfig {
    out: PathBuf,
    image_format: ImageFormat,
    renderer: String,
    graph_name: String,
    emit: Option<Emit>,
}

fn main() {
    let cli = Cli::parse();
    let (options, config) = cli.into_options();

    let result = match scan(options) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match config.emit {
        Some(Emit::Dot) => {
            print!("{}", to_dot(&result.graph, &config.graph_name));
        }
        Some(Emit::Json) => {
            let json = serde_json::to_string_pretty(&result.graph).unwrap_or_else(|e| {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            });
            println!("{}", json);
        }
        None => {
            let dot_source = to_dot(&result.graph, &config.graph_name);
            let mut out = config.out;
            if out.extension().is_none() {
                out.set_extension(config.image_format.extension());
            }
            if let Err(e) = render_dot(&config.renderer, &dot_source, config.image_format, &out) {
                eprintln!("Error: {}", e);
                exit(1);
            }
            println!("Wrote {}", out.display());
        }
    }
}
