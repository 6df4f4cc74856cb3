// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use glossboard::app_config::{self, Config, OutputFormat};
use glossboard::backup::{self, BackupDocument};
use glossboard::content::{self, BaseContent, ContentItem, Prompt};
use glossboard::file_utils::FileManager;
use glossboard::terms::{TermListParser, TermRecord, to_tab_text};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Tsv,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Tsv => OutputFormat::Tsv,
            CliOutputFormat::Table => OutputFormat::Table,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a bulk term list (tab or double-space separated)
    Parse(ParseArgs),

    /// Combine a prompt with base content from a backup file
    Combine(CombineArgs),

    /// Export or inspect prompt/base-content backups
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Generate shell completions for glossboard
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Text file with one term per line, or '-' for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: PathBuf,

    /// Output format (defaults to the config value)
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// List the lines that were skipped
    #[arg(short, long)]
    report: bool,

    /// Attach the terms to a content item with this title and print the item as JSON
    #[arg(long, conflicts_with_all = ["format", "report"])]
    title: Option<String>,

    /// Content item body used with --title
    #[arg(long, requires = "title")]
    content: Option<String>,
}

#[derive(Parser, Debug)]
struct CombineArgs {
    /// Backup JSON file holding prompts and base contents
    #[arg(value_name = "BACKUP_FILE")]
    backup_file: PathBuf,

    /// Id of the prompt to use
    #[arg(short, long)]
    prompt_id: Option<i64>,

    /// Id of the base content to append
    #[arg(short, long)]
    base_id: Option<i64>,

    /// Header placed before the base content (defaults to the config value)
    #[arg(long)]
    header: Option<String>,
}

#[derive(Subcommand, Debug)]
enum BackupCommands {
    /// Write a backup file from prompt and base-content JSON arrays
    Export {
        /// JSON array of prompts
        #[arg(long)]
        prompts: PathBuf,

        /// JSON array of base contents
        #[arg(long)]
        base_contents: PathBuf,

        /// Directory to write the backup into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Force overwrite of an existing backup file
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Validate a backup file and show what a restore would create
    Inspect {
        /// Backup JSON file
        #[arg(value_name = "BACKUP_FILE")]
        backup_file: PathBuf,

        /// Print every restore request as JSON
        #[arg(long)]
        plan: bool,
    },
}

/// glossboard - glossary and prompt tooling for AI-info content
#[derive(Parser, Debug)]
#[command(name = "glossboard")]
#[command(version)]
#[command(about = "Bulk glossary parsing and prompt/backup tooling")]
#[command(long_about = "glossboard parses bulk-pasted glossaries and manages prompt backups.

EXAMPLES:
    glossboard parse terms.txt                     # Parse to JSON
    pbpaste | glossboard parse --format tsv        # Parse clipboard text from stdin
    glossboard parse -r terms.txt                  # Also list skipped lines
    glossboard combine backup.json -p 1 -b 2       # Build a prompt + base content payload
    glossboard backup export --prompts p.json --base-contents b.json
    glossboard backup inspect ai_info_backup_2025-01-01.json --plan
    glossboard completions bash > glossboard.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts at trace so set_max_level alone controls verbosity later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "glossboard", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Parse(args) => run_parse(args, &config),
        Commands::Combine(args) => run_combine(args, &config),
        Commands::Backup(cmd) => run_backup(cmd, &config),
        Commands::Completions { .. } => Ok(()),
    }
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    // Apply the command line level first so config loading is logged at that level
    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Loaded configuration from {:?}", cli.config_path);

    Ok(config)
}

fn run_parse(args: ParseArgs, config: &Config) -> Result<()> {
    let text = FileManager::read_input(&args.input)?;
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output_format);

    if let Some(title) = args.title {
        let mut item = ContentItem::new(title, args.content.unwrap_or_default());
        let report = item.import_terms(&text);
        if report.is_success() {
            info!("{}", report.message());
        } else {
            warn!("{}", report.message());
        }
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    let parser = TermListParser::new();
    let report = parser.parse_with_report(&text);

    if args.report {
        for skipped in &report.skipped {
            warn!(
                "Line {} skipped ({}): {}",
                skipped.line_number, skipped.reason, skipped.text
            );
        }
    }

    if report.records.is_empty() {
        warn!("No terms could be parsed. Check the input format.");
    } else {
        info!("Parsed {} of {} line(s)", report.records.len(), report.non_blank_lines);
    }

    debug!("Rendering {} record(s) as {}", report.records.len(), format);
    println!("{}", render_terms(&report.records, format)?);
    Ok(())
}

fn render_terms(records: &[TermRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Tsv => Ok(to_tab_text(records)),
        OutputFormat::Table => {
            let width = records.iter().map(|r| r.term.chars().count()).max().unwrap_or(0);
            Ok(records
                .iter()
                .map(|r| format!("{:<width$}  {}", r.term, r.definition, width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

fn run_combine(args: CombineArgs, config: &Config) -> Result<()> {
    let json = FileManager::read_to_string(&args.backup_file)?;
    let document = BackupDocument::from_json(&json)
        .with_context(|| format!("Failed to load backup: {:?}", args.backup_file))?;

    let prompt = lookup(
        args.prompt_id,
        document.prompts.as_slice(),
        content::find_prompt,
        "prompt",
    )?;
    let base = lookup(
        args.base_id,
        document.base_contents.as_slice(),
        content::find_base_content,
        "base content",
    )?;

    let header = args.header.as_deref().unwrap_or(&config.base_content_header);
    let combined = content::combine_for_clipboard(prompt, base, header);
    println!("{}", combined);
    Ok(())
}

fn lookup<'a, T>(
    id: Option<i64>,
    items: &'a [T],
    find: fn(&'a [T], i64) -> Option<&'a T>,
    kind: &str,
) -> Result<Option<&'a T>> {
    match id {
        None => Ok(None),
        Some(id) => find(items, id)
            .map(Some)
            .ok_or_else(|| anyhow!("No {} with id {}", kind, id)),
    }
}

fn run_backup(cmd: BackupCommands, config: &Config) -> Result<()> {
    match cmd {
        BackupCommands::Export {
            prompts,
            base_contents,
            output_dir,
            force_overwrite,
        } => {
            let prompts: Vec<Prompt> =
                serde_json::from_str(&FileManager::read_to_string(&prompts)?)
                    .context("Failed to parse prompts JSON")?;
            let bases: Vec<BaseContent> =
                serde_json::from_str(&FileManager::read_to_string(&base_contents)?)
                    .context("Failed to parse base contents JSON")?;

            let document = BackupDocument::new(prompts, bases)
                .with_version(config.backup_version.clone());
            let file_name = backup::backup_file_name(chrono::Local::now().date_naive());
            let output_path =
                FileManager::resolve_output_path(&output_dir, &file_name, force_overwrite)?;

            FileManager::write_to_file(&output_path, &document.to_json()?)?;
            info!("Backup written: {:?}", output_path);
            Ok(())
        }
        BackupCommands::Inspect { backup_file, plan } => {
            let json = FileManager::read_to_string(&backup_file)?;
            let document = BackupDocument::from_json(&json)
                .with_context(|| format!("Invalid backup file: {:?}", backup_file))?;
            let restore = document.restore_plan_with_category(&config.default_category);

            if plan {
                println!("{}", serde_json::to_string_pretty(&restore)?);
            }
            info!(
                "Backup version {} exported {}",
                document.version.as_deref().unwrap_or("unknown"),
                document.export_date.as_deref().unwrap_or("unknown")
            );
            info!("{}", restore.summary().replace('\n', " | "));
            Ok(())
        }
    }
}
