//! Command implementations.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, warn};

use xst_export::{ExportKind, HandoffPayload, HandoffStore, mailto_url, serialize, share_link, write_payload};
use xst_generate::{fallback_template, generate};
use xst_map::{RuleSetRepository, load_rules_file};
use xst_model::samples::{sample_document, sample_rules};
use xst_model::{DataFormat, MappingRule, TransformationConfig};
use xst_preview::{NodeKind, Preview, PreviewNode, PreviewState, render_document};
use xst_validate::{detect_from_path, validate};

use crate::cli::{
    ExportArgs, ExportKindArg, FormatArg, GenerateArgs, PreviewArgs, RulesArgs, RulesCommand,
    RunTestArgs, ShareArgs, ShareMethodArg, ValidateArgs,
};
use crate::summary::{apply_table_style, print_rules_table, print_validation_summary};
use xst_cli::runner::TestRunner;

/// Read the input document and settle its format.
///
/// With no file, the built-in sample for the requested (or default JSON)
/// format is used.
fn resolve_input(
    file: Option<&PathBuf>,
    format: Option<FormatArg>,
) -> Result<(String, DataFormat)> {
    match file {
        Some(path) => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            let format = match format {
                Some(arg) => arg.into(),
                None => detect_from_path(path, &contents).with_context(|| {
                    format!("cannot detect format of {}; pass --format", path.display())
                })?,
            };
            Ok((contents, format))
        }
        None => {
            let format = format.map_or(DataFormat::Json, Into::into);
            Ok((sample_document(format).to_string(), format))
        }
    }
}

pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let (contents, format) = resolve_input(args.file.as_ref(), args.format)?;
    let result = validate(&contents, format);
    print_validation_summary(format, &result);
    Ok(result.is_valid)
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = TransformationConfig {
        output_format: args.output_format.into(),
        root_element: args.root_element.clone(),
        encoding: args.encoding.clone(),
        xslt_version: args.xslt_version.clone(),
        include_declaration: !args.no_declaration,
        pretty_print: !args.no_pretty,
        include_metadata: args.include_metadata,
        generate_comments: !args.no_comments,
        custom_namespace: args.namespace.clone(),
        ..TransformationConfig::default()
    };

    // Setup and generation are separate stages joined by the handoff
    // store: only a supplied file is handed off, so with no file the take
    // below sees the absent-key state and falls back to sample data.
    let mut store = HandoffStore::new();
    if let Some(path) = &args.file {
        let (contents, format) = resolve_input(Some(path), args.format)?;
        let rules = load_rules(args, format)?;
        store.put(&HandoffPayload::new(contents, format, config.clone(), rules))?;
    }
    let payload = match store.take()? {
        Some(payload) => payload,
        None => {
            let format = args.format.map_or(DataFormat::Json, Into::into);
            let rules = load_rules(args, format)?;
            HandoffPayload::new(sample_document(format).to_string(), format, config, rules)
        }
    };

    let result = validate(&payload.input_data, payload.input_format);
    let template = if result.is_valid {
        let artifact = generate(
            payload.input_format,
            &payload.transformation_config,
            &payload.mapping_rules,
        );
        info!(
            source = %artifact.source_format,
            target = %artifact.target_format,
            bytes = artifact.template.len(),
            "template generated"
        );
        artifact.template
    } else {
        warn!(errors = ?result.errors, "input failed validation, emitting empty-root template");
        fallback_template(&payload.transformation_config)
    };

    match &args.out {
        Some(path) => {
            fs::write(path, &template).with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}

fn load_rules(args: &GenerateArgs, format: DataFormat) -> Result<Vec<MappingRule>> {
    if let Some(path) = &args.rules {
        return load_rules_file(path);
    }
    if args.sample_rules {
        return Ok(sample_rules(format));
    }
    Ok(Vec::new())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let (contents, _format) = resolve_input(args.file.as_ref(), None)?;
    let mut state = PreviewState::new();
    if args.expand_all {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&contents) {
            state.expand_all(&value);
        }
    } else if let Some(depth) = args.depth
        && let Ok(value) = serde_json::from_str::<serde_json::Value>(&contents)
    {
        expand_to_depth(&value, "", depth, &mut state);
    }

    match render_document(&contents, &state) {
        Preview::Tree(node) => print_node(&node, 0),
        Preview::Lines(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn expand_to_depth(value: &serde_json::Value, path: &str, depth: usize, state: &mut PreviewState) {
    use xst_preview::tree::{child_path, is_composite};
    if !is_composite(value) {
        return;
    }
    state.expand(path);
    if depth == 0 {
        return;
    }
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                expand_to_depth(child, &child_path(path, key), depth - 1, state);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                expand_to_depth(child, &child_path(path, &index.to_string()), depth - 1, state);
            }
        }
        _ => {}
    }
}

fn print_node(node: &PreviewNode, indent: usize) {
    let pad = "  ".repeat(indent);
    let label = if node.label.is_empty() {
        "(root)".to_string()
    } else {
        node.label.clone()
    };
    match &node.kind {
        NodeKind::Scalar(text) => println!("{pad}{label}: {text}"),
        NodeKind::Object { properties } => {
            if node.expanded {
                println!("{pad}- {label} {{}}");
                for child in &node.children {
                    print_node(child, indent + 1);
                }
            } else {
                println!("{pad}+ {label} {{{properties} properties}}");
            }
        }
        NodeKind::Array { items } => {
            if node.expanded {
                println!("{pad}- {label} []");
                for child in &node.children {
                    print_node(child, indent + 1);
                }
            } else {
                println!("{pad}+ {label} [{items} items]");
            }
        }
    }
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let kind = match args.kind {
        ExportKindArg::Xslt => ExportKind::Xslt,
        ExportKindArg::Xml => ExportKind::XmlTemplate,
        ExportKindArg::Txt => ExportKind::PlainText,
        ExportKindArg::Zip => ExportKind::ZipPackage,
    };
    let payload = serialize(&contents, kind);
    let path = write_payload(&payload, &args.out_dir)?;
    println!("Wrote {} ({})", path.display(), payload.mime_type);
    if payload.is_archive_stub() {
        println!("note: archive export writes raw content; packaging is not implemented");
    }
    Ok(())
}

pub fn run_share(args: &ShareArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    match args.method {
        ShareMethodArg::Link => println!("{}", share_link(&args.base_url)),
        ShareMethodArg::Email => {
            let body = format!("Check out this XSLT transformation code:\n\n{contents}");
            println!("{}", mailto_url("XSLT Transformation Code", &body));
        }
        ShareMethodArg::Download => {
            let payload = serialize(&contents, ExportKind::Xslt);
            let path = write_payload(&payload, &PathBuf::from("."))?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    match &args.command {
        RulesCommand::Sample { format } => {
            let rules = sample_rules((*format).into());
            let json = serde_json::to_string_pretty(&rules)?;
            println!("{json}");
        }
        RulesCommand::Show { path } => {
            let rules = load_rules_file(path)?;
            if rules.is_empty() {
                bail!("no rules found in {}", path.display());
            }
            print_rules_table(&rules);
        }
        RulesCommand::Save { path, name, dir } => {
            let rules = load_rules_file(path)?;
            let repo = RuleSetRepository::new(dir);
            let saved = repo.save(name, &rules)?;
            println!("Saved {} rules to {}", rules.len(), saved.display());
        }
        RulesCommand::List { dir } => {
            let repo = RuleSetRepository::new(dir);
            let names = repo.list()?;
            if names.is_empty() {
                println!("(no saved rule sets)");
            }
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

pub fn run_run_test(args: &RunTestArgs) -> Result<bool> {
    let (contents, format) = resolve_input(args.file.as_ref(), args.format)?;
    let config = TransformationConfig {
        output_format: args.output_format.into(),
        ..TransformationConfig::default()
    };
    let runner = TestRunner::new(Duration::from_millis(args.delay_ms));
    let outcome = runner
        .run(&contents, format, &config, &[])
        .context("test run")?;
    print_validation_summary(format, &outcome.validation);
    println!(
        "Generated {} -> {} template: {} bytes in {:.1}s{}",
        outcome.artifact.source_format.upper_name(),
        outcome.artifact.target_format.upper_name(),
        outcome.artifact.template.len(),
        outcome.elapsed.as_secs_f64(),
        if outcome.used_fallback {
            " (empty-root fallback)"
        } else {
            ""
        }
    );
    Ok(!outcome.used_fallback)
}

pub fn run_formats() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Source", "Target", "Strategy"]);
    for (source, target, strategy) in [
        ("json", "xml", "tree-object to markup"),
        ("xml", "json", "markup to tree-object"),
        ("json", "jsonx", "tree-object to attributed tree"),
        ("xml", "jsonx", "markup to attributed tree"),
        ("jsonx", "*", "treated as json source"),
        ("*", "csv", "falls back to json -> xml"),
    ] {
        table.add_row(vec![source, target, strategy]);
    }
    println!("{table}");
}
