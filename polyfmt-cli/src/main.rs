use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use polyfmt_core::{Action, FormatOptions, Language, format};

#[derive(Parser)]
#[command(name = "polyfmt")]
#[command(about = "A multi-language code beautifier and minifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-indent source files for readability
    Beautify {
        /// Files or directories to format (reads stdin when omitted)
        paths: Vec<PathBuf>,

        /// Language tag (json, javascript, css, sql, xml); inferred from the
        /// file extension when omitted
        #[arg(long, short)]
        language: Option<Language>,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent_size: usize,

        /// Indent with tabs instead of spaces
        #[arg(long)]
        tabs: bool,

        /// Rewrite files in place instead of printing to stdout
        #[arg(long, short)]
        write: bool,

        /// Check if files are formatted (don't modify)
        #[arg(long, short)]
        check: bool,

        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,

        /// Recursively collect supported files in directories
        #[arg(long, short)]
        recursive: bool,
    },
    /// Strip comments and whitespace to shrink source files
    Minify {
        /// Files or directories to minify (reads stdin when omitted)
        paths: Vec<PathBuf>,

        /// Language tag (json, javascript, css, sql, xml); inferred from the
        /// file extension when omitted
        #[arg(long, short)]
        language: Option<Language>,

        /// Rewrite files in place instead of printing to stdout
        #[arg(long, short)]
        write: bool,

        /// Recursively collect supported files in directories
        #[arg(long, short)]
        recursive: bool,
    },
    /// List supported languages and their file extensions
    Languages,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Beautify {
            paths,
            language,
            indent_size,
            tabs,
            write,
            check,
            diff,
            recursive,
        } => {
            let options = FormatOptions {
                indent_size,
                use_tabs: tabs,
                ..Default::default()
            };
            let mode = Mode {
                write,
                check,
                diff,
                recursive,
            };
            run_format(Action::Beautify, &paths, language, &options, &mode)
        }
        Commands::Minify {
            paths,
            language,
            write,
            recursive,
        } => {
            let mode = Mode {
                write,
                check: false,
                diff: false,
                recursive,
            };
            run_format(
                Action::Minify,
                &paths,
                language,
                &FormatOptions::default(),
                &mode,
            )
        }
        Commands::Languages => run_languages(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

struct Mode {
    write: bool,
    check: bool,
    diff: bool,
    recursive: bool,
}

fn run_format(
    action: Action,
    paths: &[PathBuf],
    language: Option<Language>,
    options: &FormatOptions,
    mode: &Mode,
) -> Result<(), String> {
    if paths.is_empty() {
        return run_stdin(action, language, options);
    }

    let files = collect_files(paths, mode.recursive)?;
    if files.is_empty() {
        println!("{}", "No supported files found.".yellow());
        return Ok(());
    }

    let mut changed = Vec::new();
    let mut errors = Vec::new();

    for file in &files {
        let lang = match language_for(file, language) {
            Ok(lang) => lang,
            Err(e) => {
                errors.push((file.clone(), e));
                continue;
            }
        };

        let content = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

        match format(&content, lang, action, options) {
            Ok(formatted) => {
                if mode.diff && content != formatted {
                    print_diff(file, &content, &formatted);
                }

                if mode.check {
                    if content != formatted {
                        changed.push(file.clone());
                    }
                } else if mode.write {
                    if content != formatted {
                        fs::write(file, &formatted)
                            .map_err(|e| format!("Failed to write {}: {}", file.display(), e))?;
                        println!("{} {}", "Formatted:".green(), file.display());
                        changed.push(file.clone());
                    }
                } else {
                    println!("{}", formatted);
                }
            }
            Err(e) => {
                errors.push((file.clone(), e.to_string()));
            }
        }
    }

    if mode.check {
        if changed.is_empty() && errors.is_empty() {
            println!("{}", "All files are properly formatted.".green());
            Ok(())
        } else {
            if !changed.is_empty() {
                println!("{}", "The following files need formatting:".yellow());
                for file in &changed {
                    println!("  {}", file.display());
                }
            }
            for (file, err) in &errors {
                eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
            }
            Err("Some files are not properly formatted".to_string())
        }
    } else if !errors.is_empty() {
        for (file, err) in &errors {
            eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
        }
        Err("Some files could not be formatted".to_string())
    } else {
        if mode.write {
            if changed.is_empty() {
                println!("{}", "All files are already properly formatted.".green());
            } else {
                println!(
                    "{}",
                    format!("Formatted {} file(s).", changed.len()).green().bold()
                );
            }
        }
        Ok(())
    }
}

fn run_stdin(
    action: Action,
    language: Option<Language>,
    options: &FormatOptions,
) -> Result<(), String> {
    let language =
        language.ok_or_else(|| "--language is required when reading from stdin".to_string())?;

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    let formatted = format(&source, language, action, options).map_err(|e| e.to_string())?;
    println!("{}", formatted);
    Ok(())
}

fn run_languages() -> Result<(), String> {
    for language in Language::ALL {
        println!(
            "{:<12} {}",
            language.tag().cyan(),
            language.extensions().join(", ")
        );
    }
    Ok(())
}

/// Pick the language for a file: explicit flag first, extension otherwise
fn language_for(path: &Path, override_language: Option<Language>) -> Result<Language, String> {
    if let Some(language) = override_language {
        return Ok(language);
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .ok_or_else(|| {
            format!(
                "Cannot infer language for {} (use --language)",
                path.display()
            )
        })
}

fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            if recursive {
                collect_supported_recursive(path, &mut files)?;
            } else {
                collect_supported_in_dir(path, &mut files)?;
            }
        } else {
            return Err(format!("No such file or directory: {}", path.display()));
        }
    }
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .is_some()
}

fn collect_supported_in_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();
        if path.is_file() && is_supported(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn collect_supported_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            // Skip hidden directories and common non-source directories
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if !name.starts_with('.') && name != "target" && name != "node_modules" {
                collect_supported_recursive(&path, files)?;
            }
        } else if is_supported(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}
