use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rest_samples::api::binding::BindingMode;
use rest_samples::api::routes::route_table;
use rest_samples::config::Config;
use rest_samples::server;
use tracing_subscriber::EnvFilter;

/// Sample REST endpoints behind a route table and a global error normalizer.
#[derive(Parser)]
#[command(name = "rest-samples")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Route prefix, overrides `CONTEXT_PATH`
    #[arg(long)]
    context_path: Option<String>,

    /// off, auto, json or xml; overrides `BINDING_MODE`
    #[arg(long)]
    binding_mode: Option<BindingMode>,

    /// Print the route table and exit
    #[arg(long)]
    print_routes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = apply_overrides(Config::from_env()?, &cli);
    config.validate()?;

    if cli.print_routes {
        print_routes(&config);
        return Ok(());
    }

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(listen) = &cli.listen {
        config.listen_addr = listen.clone();
    }
    if let Some(context_path) = &cli.context_path {
        config.set_context_path(context_path);
    }
    if let Some(binding_mode) = cli.binding_mode {
        config.binding_mode = binding_mode;
    }
    config
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_routes(config: &Config) {
    println!(
        "{} (binding mode: {})",
        "Routes".bold(),
        config.binding_mode.to_string().cyan()
    );
    for line in route_table(&config.context_path).to_string().lines() {
        println!("  {}", line.green());
    }
}
