//! docdex CLI entry point

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use docdex::cli::{ResolveArgs, RollupArgs, SearchArgs};
use docdex::{
    classify_module, index_package, list_all_modules, list_all_packages, load_docs,
    path_segments, resolve_package, rollup_all, rollup_package, search_catalogue,
    sort_listing_entries, sort_sidebar_entries, Cli, Commands, DocdexError, Documentation,
    ListingSection, ModuleItems, OutputFormat, PackageRollup, MAX_LISTING_COLUMNS,
};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> docdex::Result<String> {
    let cli = Cli::parse();

    if cli.verbose {
        // May already be initialized in tests, which is fine
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("docdex=debug".parse().unwrap()),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }

    let docs = load_docs(&cli.docs)?;

    match &cli.command {
        Commands::Packages => run_packages(&cli, &docs),
        Commands::Modules => run_modules(&cli, &docs),
        Commands::Resolve(args) => run_resolve(&cli, &docs, args),
        Commands::Rollup(args) => run_rollup(&cli, &docs, args),
        Commands::Search(args) => run_search(&cli, &docs, args),
    }
}

fn to_json<T: Serialize>(value: &T) -> docdex::Result<String> {
    serde_json::to_string_pretty(value)
        .map(|s| format!("{}\n", s))
        .map_err(|e| DocdexError::Serialization {
            message: e.to_string(),
        })
}

/// List the flattened package catalogue
fn run_packages(cli: &Cli, docs: &Documentation) -> docdex::Result<String> {
    let catalogue = list_all_packages(docs, cli.max_depth)?;

    match cli.format {
        OutputFormat::Json => to_json(&catalogue),
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in &catalogue {
                writeln_entry(&mut out, &entry.path, &entry.package.summary);
            }
            Ok(out)
        }
    }
}

/// List the flattened module catalogue
fn run_modules(cli: &Cli, docs: &Documentation) -> docdex::Result<String> {
    let catalogue = list_all_modules(docs, cli.max_depth)?;

    match cli.format {
        OutputFormat::Json => to_json(&catalogue),
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in &catalogue {
                writeln_entry(&mut out, &entry.path, &entry.module.summary);
            }
            Ok(out)
        }
    }
}

fn writeln_entry(out: &mut String, path: &str, summary: &str) {
    if summary.is_empty() {
        let _ = writeln!(out, "{}", path);
    } else {
        let _ = writeln!(out, "{}  {}", path, summary);
    }
}

/// Resolve a package path; with `--module`, show that module's classification
fn run_resolve(cli: &Cli, docs: &Documentation, args: &ResolveArgs) -> docdex::Result<String> {
    let segments = path_segments(&args.path);
    let resolved =
        resolve_package(docs, &segments).ok_or_else(|| DocdexError::PackageNotFound {
            path: args.path.clone(),
        })?;
    let pkg = resolved.as_ref();

    if let Some(module_name) = &args.module {
        let module = pkg
            .modules
            .iter()
            .find(|m| &m.name == module_name)
            .ok_or_else(|| DocdexError::ModuleNotFound {
                package: pkg.name.clone(),
                module: module_name.clone(),
            })?;
        let items = classify_module(module);

        return match cli.format {
            OutputFormat::Json => to_json(&items),
            OutputFormat::Text => Ok(render_module_items(module_name, &items)),
        };
    }

    match cli.format {
        OutputFormat::Json => to_json(pkg),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Package {}", pkg.name);
            if !pkg.description.is_empty() {
                let _ = writeln!(out, "{}", pkg.description);
            }

            if !pkg.packages.is_empty() {
                let names: Vec<_> = pkg.packages.iter().map(|p| p.name.as_str()).collect();
                let _ = writeln!(out, "Sub-packages ({}): {}", names.len(), names.join(", "));
            }

            // Sidebar order: variable-light, small modules first
            let mut entries = index_package(pkg).into_entries();
            sort_sidebar_entries(&mut entries);
            if !entries.is_empty() {
                let _ = writeln!(out, "Modules ({}):", entries.len());
                for (name, items) in &entries {
                    let _ = writeln!(out, "  {}  {} items", name, items.total_items());
                }
            }
            Ok(out)
        }
    }
}

fn render_module_items(name: &str, items: &ModuleItems) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Module {}  {} items", name, items.total_items());
    let sections: [(&str, Vec<&str>); 5] = [
        (
            "Functions",
            items.functions.iter().map(|i| i.item.name.as_str()).collect(),
        ),
        (
            "Types",
            items.types.iter().map(|i| i.item.name.as_str()).collect(),
        ),
        (
            "Constants",
            items.constants.iter().map(|i| i.item.name.as_str()).collect(),
        ),
        (
            "Variables",
            items.variables.iter().map(|i| i.item.name.as_str()).collect(),
        ),
        (
            "Traits",
            items.traits.iter().map(|i| i.item.name.as_str()).collect(),
        ),
    ];
    for (title, names) in sections {
        if !names.is_empty() {
            let _ = writeln!(out, "{} ({}): {}", title, names.len(), names.join(", "));
        }
    }
    out
}

/// Roll up one package, or the whole catalogue when no path is given
fn run_rollup(cli: &Cli, docs: &Documentation, args: &RollupArgs) -> docdex::Result<String> {
    if let Some(path) = &args.path {
        let segments = path_segments(path);
        let resolved =
            resolve_package(docs, &segments).ok_or_else(|| DocdexError::PackageNotFound {
                path: path.clone(),
            })?;
        let pkg = resolved.as_ref();
        let rollup = rollup_package(pkg);

        return match cli.format {
            OutputFormat::Json => to_json(&rollup),
            OutputFormat::Text => Ok(render_rollup(&pkg.name, &rollup, args)),
        };
    }

    let catalogue = list_all_packages(docs, cli.max_depth)?;
    let rollups = rollup_all(&catalogue);

    match cli.format {
        OutputFormat::Json => to_json(&rollups),
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, rollup) in rollups.iter() {
                out.push_str(&render_rollup(name, rollup, args));
            }
            Ok(out)
        }
    }
}

fn render_rollup(name: &str, rollup: &PackageRollup, args: &RollupArgs) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", name);
    if !rollup.description.is_empty() {
        let _ = writeln!(out, "{}", rollup.description);
    }

    let top = [
        ("Functions", &rollup.items.functions),
        ("Types", &rollup.items.types),
        ("Constants", &rollup.items.constants),
        ("Variables", &rollup.items.variables),
        ("Traits", &rollup.items.traits),
    ];
    for (title, bucket) in top {
        if !bucket.is_empty() {
            let names: Vec<_> = bucket.iter().map(|i| i.name).collect();
            let _ = writeln!(out, "{} ({}): {}", title, names.len(), names.join(", "));
        }
    }

    if !rollup.modules.is_empty() {
        // Listing order: small skimmable modules before large-section ones,
        // laid out in up to three columns
        let mut entries = rollup.modules.clone().into_entries();
        sort_listing_entries(&mut entries, args.large_section);
        let sections = entries
            .iter()
            .map(|(module, r)| {
                ListingSection::capped(module, r.items.item_names(), args.section_cap)
            })
            .collect();
        let columns = docdex::group_into_columns(sections, MAX_LISTING_COLUMNS);

        let _ = writeln!(out, "Modules:");
        for (idx, column) in columns.iter().enumerate() {
            let _ = writeln!(out, "  [column {}]", idx + 1);
            for section in column {
                let mut line = format!(
                    "    {}: {}",
                    section.module,
                    section.visible.join(", ")
                );
                if section.hidden > 0 {
                    let _ = write!(line, " (+{} more)", section.hidden);
                }
                let _ = writeln!(out, "{}", line);
            }
        }
    }

    out
}

/// Match packages and modules by name substring
fn run_search(cli: &Cli, docs: &Documentation, args: &SearchArgs) -> docdex::Result<String> {
    let packages = list_all_packages(docs, cli.max_depth)?;
    let modules = list_all_modules(docs, cli.max_depth)?;
    let results = search_catalogue(&packages, &modules, &args.query);

    match cli.format {
        OutputFormat::Json => to_json(&results),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Packages ({}):", results.packages.len());
            for entry in &results.packages {
                let _ = writeln!(out, "  {}", entry.path);
            }
            let _ = writeln!(out, "Modules ({}):", results.modules.len());
            for entry in &results.modules {
                let _ = writeln!(out, "  {}", entry.path);
            }
            Ok(out)
        }
    }
}
