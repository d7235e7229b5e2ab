use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use lineage_cli::config::{ConvertSettings, LineageConfig, load_config};
use lineage_cli::outline::render_outline;
use lineage_ingest::{TableFormat, read_table};
use lineage_serve::{ServeConfig, Server};
use lineage_tree::{BuildOutput, build_family_tree, write_json};

use crate::cli::{ConvertArgs, InputArgs, InspectArgs, ServeArgs, TableFormatArg};

/// Outcome of a `convert` run, rendered by the summary printer.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub build: BuildOutput,
    pub elapsed: Duration,
}

pub fn run_convert(args: &ConvertArgs, config_path: Option<&Path>) -> Result<ConvertResult> {
    let config = load_workspace_config(config_path)?;
    let mut settings = apply_input_args(config.convert, &args.input);
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    let span = info_span!("convert", input = %settings.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let build = build_from(&settings)?;
    let output = if args.dry_run {
        info!("dry run, artifact not written");
        None
    } else {
        write_json(&settings.output, &build.tree)
            .with_context(|| format!("write {}", settings.output.display()))?;
        info!(path = %settings.output.display(), "artifact written");
        Some(settings.output.clone())
    };
    Ok(ConvertResult {
        input: settings.input,
        output,
        build,
        elapsed: start.elapsed(),
    })
}

pub fn run_inspect(args: &InspectArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_workspace_config(config_path)?;
    let settings = apply_input_args(config.convert, &args.input);
    let build = build_from(&settings)?;
    if build.tree.is_empty() {
        println!("(no people found in {})", settings.input.display());
        return Ok(());
    }
    print!("{}", render_outline(&build.tree, args.max_depth));
    Ok(())
}

pub fn run_serve(args: &ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_workspace_config(config_path)?;
    let serve_config = apply_serve_args(config.serve, args);
    if !serve_config.artifact_path.is_file() {
        warn!(
            path = %serve_config.artifact_path.display(),
            "artifact missing, requests for it will return 404"
        );
    }
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime.block_on(async move {
        let server = Server::bind(serve_config).await?;
        let address = server.local_addr()?;
        println!(
            "Serving {} on http://{address}{}",
            server.config().artifact_path.display(),
            server.config().artifact_route
        );
        println!("Press Ctrl+C to stop");
        server
            .run_until(async {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    warn!(%error, "failed to listen for Ctrl+C");
                    std::future::pending::<()>().await;
                }
            })
            .await?;
        println!("Server stopped");
        anyhow::Ok(())
    })
}

fn load_workspace_config(explicit: Option<&Path>) -> Result<LineageConfig> {
    let dir = std::env::current_dir().context("resolve working directory")?;
    load_config(explicit, &dir).context("load configuration")
}

fn build_from(settings: &ConvertSettings) -> Result<BuildOutput> {
    let table = read_table(&settings.input, &settings.read_options())
        .with_context(|| format!("read {}", settings.input.display()))?;
    info!(rows = table.len(), "table loaded");
    Ok(build_family_tree(&table))
}

/// Layers `convert`/`inspect` flags over the config file values.
fn apply_input_args(mut settings: ConvertSettings, args: &InputArgs) -> ConvertSettings {
    if let Some(input) = &args.input {
        settings.input = input.clone();
    }
    if let Some(sheet) = &args.sheet {
        settings.sheet = Some(sheet.clone());
    }
    if let Some(format) = args.format {
        settings.format = Some(table_format(format));
    }
    settings
}

/// Layers `serve` flags over the config file values.
fn apply_serve_args(mut config: ServeConfig, args: &ServeArgs) -> ServeConfig {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(web_root) = &args.web_root {
        config.web_root = web_root.clone();
    }
    if let Some(artifact) = &args.artifact {
        config.artifact_path = artifact.clone();
    }
    if let Some(route) = &args.route {
        config.artifact_route = if route.starts_with('/') {
            route.clone()
        } else {
            format!("/{route}")
        };
    }
    config
}

fn table_format(format: TableFormatArg) -> TableFormat {
    match format {
        TableFormatArg::Csv => TableFormat::Csv,
        TableFormatArg::Tsv => TableFormat::Tsv,
        TableFormatArg::Workbook => TableFormat::Workbook,
    }
}
