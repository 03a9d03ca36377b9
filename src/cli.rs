//! Command-line interface for supercheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analysis::MemberExtractor;
use crate::config::{self, Config};
use crate::report;
use crate::rule;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default config file written by `init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/supercheck.yaml");

/// Lint TypeScript classes for overrides that skip the super member.
///
/// Supercheck flags methods, getters, and setters marked `override` whose
/// body does not start with a call through to the base class, and can
/// insert the missing call on request.
#[derive(Parser)]
#[command(name = "supercheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a file or directory
    #[command(visible_alias = "check")]
    Lint(LintArgs),
    /// Create a default supercheck config file
    Init(InitArgs),
}

/// Arguments for the lint command.
#[derive(Parser)]
pub struct LintArgs {
    /// Path to lint (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Suppress reports for overriding methods
    #[arg(long)]
    pub ignore_methods: bool,

    /// Suppress reports for overriding getters
    #[arg(long)]
    pub ignore_getters: bool,

    /// Suppress reports for overriding setters
    #[arg(long)]
    pub ignore_setters: bool,

    /// Apply the suggested fixes in place
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "supercheck.yaml")]
    pub output: PathBuf,
}

/// Collect TypeScript files to scan.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories and dependency trees
            if e.file_type().is_dir() && (name.starts_with('.') || name == "node_modules") {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

            if MemberExtractor::supported_extensions().contains(&ext)
                && !config.is_path_excluded(path)
            {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run the lint command.
pub fn run_lint(args: &LintArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Load config: explicit path, discovered file, or defaults
    let (mut config, config_path_str) = match &args.config {
        Some(p) => match Config::parse_file(p) {
            Ok(c) => (c, p.to_string_lossy().to_string()),
            Err(e) => {
                eprintln!("Error parsing config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => match config::discover_config() {
            Some(p) => match Config::parse_file(&p) {
                Ok(c) => (c, p.to_string_lossy().to_string()),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    return Ok(EXIT_ERROR);
                }
            },
            None => (Config::default(), "(defaults)".to_string()),
        },
    };

    // CLI flags layer on top of the config file
    config.ignore_methods |= args.ignore_methods;
    config.ignore_getters |= args.ignore_getters;
    config.ignore_setters |= args.ignore_setters;

    // Check path exists
    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    // Collect files to scan
    let files = if metadata.is_dir() {
        collect_files(&args.path, &config)?
    } else {
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }

    // Lint each file, keeping per-file results so fixes stay grouped
    let mut result = rule::LintResult::new();
    let mut fixed_edits = 0usize;

    for file in &files {
        let file_result = match rule::check_file(file, &config) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", file.display(), e);
                continue;
            }
        };

        if args.fix && file_result.has_diagnostics() {
            fixed_edits += rule::fix_file(file, &file_result.diagnostics)?;
        }

        result.merge(file_result);
    }

    // Output results
    let path_str = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&path_str, &config_path_str, &result)?,
        _ => report::write_pretty(&path_str, &config_path_str, &result),
    }

    // Keep stdout machine-parseable for --format json
    if args.fix && fixed_edits > 0 {
        eprintln!("Applied {} suggested fix(es)", fixed_edits);
    }

    if result.has_diagnostics() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize the rule", args.output.display());
    println!(
        "  2. Run: supercheck lint . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}
