//! loadorder CLI - resolve require-directive load order per execution domain
//!
//! Usage: loadorder <COMMAND>
//!
//! Commands:
//!   tree        Resolve every file below a directory
//!   dir         Resolve only the files directly inside a directory
//!   directives  Show the parsed directive header of a file

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use loadorder::application::{ListingMode, ResolveUseCase};
use loadorder::config::{Config, Verbosity};
use loadorder::presentation::{
    render_directives, render_outcome, Cli, Commands, OutputFormat, RenderOptions,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let flag_level = flag_level(&cli);
    let rust_log = std::env::var_os("RUST_LOG").is_some();
    init_logging(flag_level, rust_log);

    let config_root = match &cli.command {
        Commands::Tree { root } => root,
        Commands::Dir { dir } => dir,
        Commands::Directives { root, .. } => root,
    };
    let (config, warnings) = Config::discover(cli.config.as_deref(), Some(config_root.as_path()))
        .context("failed to load configuration")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    if flag_level.is_none() && !rust_log {
        log::set_max_level(config_level(config.output.verbosity));
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let options = RenderOptions {
        format,
        domain: cli.domain.map(Into::into),
        relative: !cli.absolute && config.output.relative_paths,
    };
    let use_case = ResolveUseCase::from_config(&config);

    match &cli.command {
        Commands::Tree { root } => cmd_resolve(&use_case, ListingMode::Tree, root, &options),
        Commands::Dir { dir } => cmd_resolve(&use_case, ListingMode::Directory, dir, &options),
        Commands::Directives { file, root } => cmd_directives(&use_case, file, root, format),
    }
}

fn cmd_resolve(
    use_case: &ResolveUseCase<loadorder::LocalFs>,
    mode: ListingMode,
    dir: &Path,
    options: &RenderOptions,
) -> Result<()> {
    let outcome = use_case
        .execute(mode, dir)
        .with_context(|| format!("failed to resolve {}", dir.display()))?;

    let rendered = render_outcome(&outcome, options)?;
    if options.format == OutputFormat::Json {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

fn cmd_directives(
    use_case: &ResolveUseCase<loadorder::LocalFs>,
    file: &Path,
    root: &Path,
    format: OutputFormat,
) -> Result<()> {
    let reports = use_case
        .directives(file, root)
        .with_context(|| format!("failed to read directives of {}", file.display()))?;

    let rendered = render_directives(file, &reports, format)?;
    if format == OutputFormat::Json {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

fn flag_level(cli: &Cli) -> Option<log::LevelFilter> {
    if cli.quiet {
        return Some(log::LevelFilter::Error);
    }
    match cli.verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn config_level(verbosity: Verbosity) -> log::LevelFilter {
    match verbosity {
        Verbosity::Quiet => log::LevelFilter::Error,
        Verbosity::Normal => log::LevelFilter::Warn,
        Verbosity::Verbose => log::LevelFilter::Info,
        Verbosity::Debug => log::LevelFilter::Debug,
    }
}

/// Flags override `RUST_LOG`. Without either the logger passes everything and
/// the effective level is capped with `log::set_max_level`, first at `warn`
/// and then at the configured verbosity once the config is loaded.
fn init_logging(flag_level: Option<log::LevelFilter>, rust_log: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"));
    if let Some(level) = flag_level {
        builder.filter_level(level);
    }
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    if flag_level.is_none() && !rust_log {
        log::set_max_level(log::LevelFilter::Warn);
    }
}
