//! CLI argument definitions for XSLT Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use xst_model::{DataFormat, OutputFormat};

#[derive(Parser)]
#[command(
    name = "xslt-studio",
    version,
    about = "XSLT Studio - generate XSLT mapping templates from structured data",
    long_about = "Generate XSLT stylesheets that map JSON, JSONX, or XML source\n\
                  documents onto XML, JSON, or JSONX targets.\n\
                  Validates input, previews documents as expandable trees, and\n\
                  exports generated templates in several containers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a source document and report structural errors.
    Validate(ValidateArgs),

    /// Generate an XSLT template for a source/target format pair.
    Generate(GenerateArgs),

    /// Render a document as an expandable tree.
    Preview(PreviewArgs),

    /// Wrap generated output in an export container.
    Export(ExportArgs),

    /// Build share links for a generated template.
    Share(ShareArgs),

    /// Inspect or emit mapping-rule sets.
    Rules(RulesArgs),

    /// Run a simulated transformation test against input data.
    RunTest(RunTestArgs),

    /// List supported formats and strategy pairs.
    Formats,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Input document. Omit to validate the built-in sample.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Source format. Detected from extension/content when omitted.
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Input document. Omit to use the built-in sample.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Source format. Detected from extension/content when omitted.
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Target format for the generated template.
    #[arg(long = "output-format", value_enum, default_value = "xml")]
    pub output_format: OutputFormatArg,

    /// Root element name for markup targets.
    #[arg(long = "root-element", default_value = "root")]
    pub root_element: String,

    /// Mapping rules file (JSON array or saved rule set).
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Use the built-in sample rules for the source format.
    #[arg(long = "sample-rules", conflicts_with = "rules")]
    pub sample_rules: bool,

    /// Write the template here instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Omit indentation directives from the template.
    #[arg(long = "no-pretty")]
    pub no_pretty: bool,

    /// Omit explanatory comments.
    #[arg(long = "no-comments")]
    pub no_comments: bool,

    /// Omit the XML declaration prolog.
    #[arg(long = "no-declaration")]
    pub no_declaration: bool,

    /// Emit the metadata copy block.
    #[arg(long = "include-metadata")]
    pub include_metadata: bool,

    /// Additional namespace bound to the custom prefix.
    #[arg(long = "namespace", value_name = "URI")]
    pub namespace: Option<String>,

    /// Template version for the stylesheet header.
    #[arg(long = "xslt-version", default_value = "2.0")]
    pub xslt_version: String,

    /// Character encoding for the declaration and output directive.
    #[arg(long = "encoding", default_value = "UTF-8")]
    pub encoding: String,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Input document. Omit to preview the built-in sample.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Expand every composite node.
    #[arg(long = "expand-all")]
    pub expand_all: bool,

    /// Expand composite nodes down to this depth (root is depth 0).
    #[arg(long = "depth", value_name = "N", conflicts_with = "expand_all")]
    pub depth: Option<usize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// File with the content to export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Export container.
    #[arg(long = "kind", value_enum, default_value = "xslt")]
    pub kind: ExportKindArg,

    /// Directory to write the payload into.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Parser)]
pub struct ShareArgs {
    /// File with the generated template.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Share method.
    #[arg(long = "method", value_enum, default_value = "link")]
    pub method: ShareMethodArg,

    /// Base URL for link sharing.
    #[arg(long = "base-url", default_value = "https://xslt-studio.local")]
    pub base_url: String,
}

#[derive(Parser)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Subcommand)]
pub enum RulesCommand {
    /// Print the built-in sample rule set as JSON.
    Sample {
        /// Source format the sample paths should match.
        #[arg(long = "format", value_enum, default_value = "json")]
        format: FormatArg,
    },

    /// Show a rules file as a table.
    Show {
        /// Rules file (JSON array or saved rule set).
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Save a rules file into the named rule-set repository.
    Save {
        /// Rules file (JSON array or saved rule set).
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Name to store the rule set under.
        #[arg(long = "name")]
        name: String,

        /// Repository directory.
        #[arg(long = "dir", value_name = "DIR", default_value = "rule-sets")]
        dir: PathBuf,
    },

    /// List saved rule-set names.
    List {
        /// Repository directory.
        #[arg(long = "dir", value_name = "DIR", default_value = "rule-sets")]
        dir: PathBuf,
    },
}

#[derive(Parser)]
pub struct RunTestArgs {
    /// Input document. Omit to test against the built-in sample.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Source format. Detected from extension/content when omitted.
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Target format for the generated template.
    #[arg(long = "output-format", value_enum, default_value = "xml")]
    pub output_format: OutputFormatArg,

    /// Simulated execution delay in milliseconds.
    #[arg(long = "delay-ms", default_value = "1500")]
    pub delay_ms: u64,
}

/// CLI source format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Jsonx,
    Xml,
}

impl From<FormatArg> for DataFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => DataFormat::Json,
            FormatArg::Jsonx => DataFormat::Jsonx,
            FormatArg::Xml => DataFormat::Xml,
        }
    }
}

/// CLI target format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xml,
    Json,
    Jsonx,
    Csv,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Xml => OutputFormat::Xml,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonx => OutputFormat::Jsonx,
            OutputFormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI export container choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ExportKindArg {
    Xslt,
    Xml,
    Txt,
    Zip,
}

/// CLI share method choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ShareMethodArg {
    Link,
    Email,
    Download,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
