use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use upload_list::config::read_config;
use upload_list::entry::RecordFields;
use upload_list::report::ReportRenderer;
use upload_list::script::{read_defaults, read_script, run_script};
use upload_list::UploadList;

/// Upload list driver - replays a script of drops, removals and moves
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of operations to apply
    script: PathBuf,

    /// Upload configuration file (defaults apply when missing)
    #[arg(short, long, env = "UPLOAD_LIST_CONFIG", default_value = "upload-list.json")]
    config: PathBuf,

    /// JSON array of already persisted file records
    #[arg(short, long, env = "UPLOAD_LIST_DEFAULTS")]
    defaults: Option<PathBuf>,

    /// Record field holding the source URL
    #[arg(long, default_value = "src")]
    src_field: String,

    /// Record field holding the display name
    #[arg(long, default_value = "alt")]
    name_field: String,

    /// Record field holding the byte size
    #[arg(long, default_value = "fileSize")]
    size_field: String,

    /// Record field holding the order key
    #[arg(long, default_value = "order")]
    order_field: String,

    /// Print a readable validation report to stderr for rejected drops
    #[arg(long)]
    report: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = read_config(&args.config).await?.unwrap_or_default();
    info!("Loaded configuration: {:?}", config);

    let fields = RecordFields {
        src: args.src_field,
        name: args.name_field,
        size: args.size_field,
        order: args.order_field,
    };
    let defaults = match &args.defaults {
        Some(path) => read_defaults(path, fields).await?,
        None => Vec::new(),
    };

    let operations = read_script(&args.script).await?;
    let base_dir = args.script.parent().unwrap_or(Path::new("."));

    let mut list = UploadList::with_defaults(config, defaults.clone());
    let reports = run_script(&mut list, &defaults, &operations, base_dir).await?;

    let renderer = if args.report {
        Some(ReportRenderer::new()?)
    } else {
        None
    };

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);

        if let (Some(renderer), Some(errors)) = (&renderer, &report.validation) {
            eprint!("{}", renderer.render(errors)?);
        }
    }

    info!(
        "Final list: {} entries ({} staged)",
        list.len(),
        list.local_entries().len()
    );
    Ok(())
}
