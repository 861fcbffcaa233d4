use clap::{Parser, Subcommand};
use std::path::Path;

use figweave_convert::ConversionOptions;

#[derive(Parser)]
#[command(name = "figweave")]
#[command(about = "figweave — design document to HTML + CSS converter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a design JSON file to a standalone HTML page
    Build {
        /// Input design JSON file (a node tree, or a file response with a `document` key)
        path: String,

        /// Write a separate .css file instead of inlining the stylesheet
        #[arg(long)]
        flat: bool,

        /// Ignore auto-layout metadata; treat nodes as plain boxes
        #[arg(long)]
        no_auto_layout: bool,

        /// Skip shadow and blur effects
        #[arg(long)]
        no_effects: bool,

        /// Never emit flexbox declarations
        #[arg(long)]
        no_flexbox: bool,
    },

    /// Check that a design JSON file decodes without converting it
    Check {
        /// Input design JSON file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            path,
            flat,
            no_auto_layout,
            no_effects,
            no_flexbox,
        } => {
            let options = ConversionOptions {
                preserve_auto_layout: !no_auto_layout,
                convert_effects: !no_effects,
                use_flexbox: !no_flexbox,
                ..ConversionOptions::default()
            };
            cmd_build(&path, flat, &options);
        }
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str, flat: bool, options: &ConversionOptions) {
    let source = read_source(path);

    let root = match figweave_schema::parse_document(&source) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let result = figweave_convert::convert(&root, options);

    // Write output files next to the source
    let stem = Path::new(path).file_stem().unwrap().to_str().unwrap();
    let dir = Path::new(path).parent().unwrap_or(Path::new("."));

    let html_path = dir.join(format!("{stem}.html"));

    // Assemble a standalone page
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    page.push_str(&format!("  <title>{}</title>\n", root.name));
    if flat && !result.css.is_empty() {
        page.push_str(&format!("  <link rel=\"stylesheet\" href=\"{stem}.css\">\n"));
    } else if !result.css.is_empty() {
        page.push_str(&format!("  <style>\n{}\n  </style>\n", result.css));
    }
    page.push_str("</head>\n<body>\n");
    page.push_str(&result.html);
    page.push_str("</body>\n</html>\n");

    if let Err(e) = std::fs::write(&html_path, &page) {
        eprintln!("Error writing {}: {e}", html_path.display());
        std::process::exit(1);
    }

    if flat && !result.css.is_empty() {
        let css_path = dir.join(format!("{stem}.css"));
        if let Err(e) = std::fs::write(&css_path, &result.css) {
            eprintln!("Error writing {}: {e}", css_path.display());
            std::process::exit(1);
        }
    }

    // Image references go to a sidecar for the downstream resolver
    if !result.images.is_empty() {
        let images_path = dir.join(format!("{stem}.images.json"));
        let json = match serde_json::to_string_pretty(&result.images) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing image references: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&images_path, json) {
            eprintln!("Error writing {}: {e}", images_path.display());
            std::process::exit(1);
        }
        eprintln!(
            "Note: {} image reference(s) written to {}",
            result.images.len(),
            images_path.display()
        );
    }

    eprintln!("Built: {}", html_path.display());
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    if let Err(e) = figweave_schema::parse_document(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
