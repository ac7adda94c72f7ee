//! dominator CLI
//!
//! Inspect an HTML document from a file or stdin: print its tree, stats and
//! analyzer findings, search and filter it, export it, or explain a node.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use dominator::export::export_file_name;
use dominator::snapshot::now_millis;
use dominator::{
    AttributePredicate, DomNode, ExportFormat, ExtractOptions, Inspector, JsonExportOptions,
    Severity, TreeFilter,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dominator", version, about = "Inspect, analyze and export HTML document trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct InputArgs {
    /// HTML file to inspect, or "-" for stdin
    input: String,

    /// Maximum extraction depth
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the document tree as indented pseudo-HTML
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print tree statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List analyzer findings (accessibility, performance, anti-patterns)
    Issues {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Search tag names, attributes and text content
    Search {
        #[command(flatten)]
        input: InputArgs,

        /// Case-insensitive substring to look for
        query: String,
    },

    /// Filter the tree and print what survives
    Filter {
        #[command(flatten)]
        input: InputArgs,

        /// Keep only these tag names (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Keep only elements with this attribute, as `name` or `name=value`
        /// (repeatable)
        #[arg(long = "attr")]
        attrs: Vec<String>,

        /// Keep only nodes whose text contains this substring
        #[arg(long)]
        text: Option<String>,

        #[arg(long)]
        hide_scripts: bool,

        #[arg(long)]
        hide_comments: bool,

        #[arg(long)]
        hide_empty_text: bool,

        #[arg(long)]
        hide_invisible: bool,

        #[arg(long)]
        only_accessibility_issues: bool,

        #[arg(long)]
        only_performance_issues: bool,
    },

    /// Export the tree to a file or stdout
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: json or text
        #[arg(long, default_value = "json")]
        format: String,

        /// Include snapshot-local identifiers in JSON output
        #[arg(long)]
        include_ids: bool,

        /// Output file; "-" for stdout (default: dominator-export-<ts>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Explain a node by ordinal path or snapshot id
    Explain {
        #[command(flatten)]
        input: InputArgs,

        /// Ordinal path of the node, e.g. /0/1/0
        #[arg(long)]
        path: Option<String>,

        /// Snapshot id of the node
        #[arg(long)]
        id: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Tree { input } => {
            let inspector = load(&input)?;
            print!("{}", inspector.export(ExportFormat::Text, JsonExportOptions::default())?);
        }
        Command::Stats { input } => {
            let inspector = load(&input)?;
            print_stats(&inspector);
        }
        Command::Issues { input } => {
            let inspector = load(&input)?;
            print_issues(&inspector);
        }
        Command::Search { input, query } => {
            let inspector = load(&input)?;
            for hit in inspector.search(&query)? {
                let tag = hit.node.tag_name.as_deref().unwrap_or("#text");
                println!("{}  <{}>  {}", hit.node.path, tag, hit.matched);
            }
        }
        Command::Filter {
            input,
            tags,
            attrs,
            text,
            hide_scripts,
            hide_comments,
            hide_empty_text,
            hide_invisible,
            only_accessibility_issues,
            only_performance_issues,
        } => {
            let inspector = load(&input)?;
            let filter = TreeFilter {
                tag_names: tags,
                attributes: attrs.iter().map(|a| parse_attr(a)).collect(),
                text_content: text,
                hide_script_tags: hide_scripts,
                hide_comments,
                hide_empty_text_nodes: hide_empty_text,
                hide_invisible_elements: hide_invisible,
                show_only_accessibility_issues: only_accessibility_issues,
                show_only_performance_issues: only_performance_issues,
            };

            match inspector.filter(&filter)? {
                Some(tree) => print!("{}", dominator::export::to_text(&tree)),
                None => println!("no nodes matched the filter"),
            }
        }
        Command::Export { input, format, include_ids, output } => {
            let inspector = load(&input)?;
            let format = parse_format(&format)?;
            let content = inspector.export(format, JsonExportOptions { include_ids })?;

            match output {
                Some(path) if path.as_os_str() == "-" => print!("{content}"),
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("exported to {}", path.display());
                }
                None => {
                    let name = export_file_name(format, now_millis());
                    std::fs::write(&name, &content)
                        .with_context(|| format!("failed to write {name}"))?;
                    eprintln!("exported to {name}");
                }
            }
        }
        Command::Explain { input, path, id } => {
            let inspector = load(&input)?;
            let node = match (&id, &path) {
                (Some(id), _) => inspector.node_by_id(id),
                (None, Some(path)) => inspector.node_by_path(path),
                (None, None) => bail!("pass --path or --id to pick a node"),
            };
            let Some(node) = node else {
                bail!("no such node in the document");
            };

            let explanation = dominator::explain::explain_node(node);
            println!("{}", explanation.explanation);
            if !explanation.suggestions.is_empty() {
                println!("\nSuggestions:");
                for suggestion in &explanation.suggestions {
                    println!("  - {suggestion}");
                }
            }
        }
    }

    Ok(())
}

fn load(input: &InputArgs) -> Result<Inspector> {
    let html = read_input(&input.input)?;

    let options = match input.max_depth {
        Some(depth) => ExtractOptions::new().max_depth(depth),
        None => ExtractOptions::default(),
    };

    let mut inspector = Inspector::with_options(options);
    inspector.load_html(&html)?;
    inspector.capture()?;
    Ok(inspector)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("failed to read stdin")?;
        Ok(html)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn parse_attr(spec: &str) -> AttributePredicate {
    match spec.split_once('=') {
        Some((name, value)) => AttributePredicate::name_value(name, value),
        None => AttributePredicate::name(spec),
    }
}

fn parse_format(format: &str) -> Result<ExportFormat> {
    match format {
        "json" => Ok(ExportFormat::Json),
        "text" => Ok(ExportFormat::Text),
        other => bail!("unknown export format: {other} (expected json or text)"),
    }
}

fn print_stats(inspector: &Inspector) {
    let Some(stats) = inspector.stats() else {
        return;
    };

    println!("Total nodes:          {}", stats.total_nodes);
    println!("Max depth:            {}", stats.max_depth);
    println!("Hidden elements:      {}", stats.hidden_elements);
    println!("Accessibility issues: {}", stats.accessibility_issues);
    println!("Performance issues:   {}", stats.performance_issues);

    let mut counts: Vec<(&String, &usize)> = stats.element_count.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("Elements:");
    for (tag, count) in counts {
        println!("  {tag:<12} {count}");
    }
}

fn print_issues(inspector: &Inspector) {
    let Some(snapshot) = inspector.snapshot() else {
        return;
    };

    let mut total = 0usize;
    walk_issues(&snapshot.root, &mut total);
    if total == 0 {
        println!("no issues found");
    }
}

fn walk_issues(node: &DomNode, total: &mut usize) {
    let tag = node.tag_name.as_deref().unwrap_or("#node");

    for issue in &node.issues {
        let severity = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{:<7} {}  <{}>  {}", severity, node.path, tag, issue.message);
        *total += 1;
    }

    if node.performance.any() {
        let mut flags = Vec::new();
        if node.performance.deep_nesting {
            flags.push("deep-nesting");
        }
        if node.performance.heavy_inline_styles {
            flags.push("heavy-inline-styles");
        }
        if node.performance.large_dataset {
            flags.push("large-dataset");
        }
        if node.performance.costly_styles {
            flags.push("costly-styles");
        }
        println!("perf    {}  <{}>  {}", node.path, tag, flags.join(", "));
        *total += 1;
    }

    for child in &node.children {
        walk_issues(child, total);
    }
}
