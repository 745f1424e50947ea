//! Static exporter for the CyberFortify landing page.
//!
//! ```bash
//! cyberfortify-export                      # writes ./dist/index.html
//! cyberfortify-export --out-dir public     # writes ./public/index.html
//! cyberfortify-export --stdout > page.html
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cyberfortify_export::config::ExportConfig;
use cyberfortify_export::write_page;
use cyberfortify_site::render_page;

#[derive(Parser, Debug)]
#[command(name = "cyberfortify-export")]
#[command(about = "Render the CyberFortify landing page to static HTML")]
#[command(version)]
struct Args {
    /// Project root (config is read from <root>/.cyberfortify/export.toml)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory (overrides config)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output file name (overrides config)
    #[arg(long)]
    file_name: Option<String>,

    /// Document title (overrides config)
    #[arg(long)]
    title: Option<String>,

    /// Document language (overrides config)
    #[arg(long)]
    lang: Option<String>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn resolve_config(&self) -> ExportConfig {
        let mut config = ExportConfig::load(&self.root);
        if let Some(out_dir) = &self.out_dir {
            config.out_dir = out_dir.clone();
        }
        if let Some(file_name) = &self.file_name {
            config.file_name = file_name.clone();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(lang) = &self.lang {
            config.lang = lang.clone();
        }
        config
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[cyberfortify-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // stdout may carry the page, so logs always go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = args.resolve_config();
    let options = config.page_options();

    if args.stdout {
        let html = render_page(&options);
        std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    let path = config.output_path(&args.root);
    let written = write_page(&options, &path)
        .with_context(|| format!("exporting landing page to {}", path.display()))?;

    info!(
        "Wrote {} ({} bytes)",
        written.path.display(),
        written.bytes
    );
    Ok(())
}
