//! wufoo-form CLI
//!
//! Fetches a Wufoo form schema and prints the rendered HTML form.

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wufoo_forms::{ClientConfig, FormAssembler};

/// Render an HTML form from a Wufoo form schema.
#[derive(Parser)]
#[command(name = "wufoo-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wufoo account subdomain.
    #[arg(short, long, env = "WUFOO_DOMAIN")]
    domain: String,

    /// API key for the account.
    #[arg(short = 'k', long, env = "WUFOO_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Hash of the form to render.
    #[arg(long)]
    form_hash: String,

    /// HTML id of the rendered form.
    #[arg(long, default_value = "wufoo-form")]
    form_id: String,

    /// Post-authorization key for external submissions.
    #[arg(long, env = "WUFOO_POST_KEY", hide_env_values = true)]
    post_key: String,

    /// Override the API root URL.
    #[arg(long)]
    api_base: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ClientConfig::new(cli.domain, cli.api_key);
    if let Some(base) = cli.api_base {
        config = config.api_base(base);
    }
    if let Some(secs) = cli.timeout {
        config = config.timeout_secs(secs);
    }

    info!("Fetching form {} from {}.wufoo.com", cli.form_hash, config.domain);
    let assembler = FormAssembler::from_config(&config)?;
    let form = assembler.make_form(&cli.form_id, &cli.form_hash, &cli.post_key)?;

    println!("{}", form.render());
    Ok(())
}
