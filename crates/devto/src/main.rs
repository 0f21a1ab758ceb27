use anyhow::Context as _;
use clap::Parser;
use rest_mcp_devto::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use rest_mcp_tools::config::Credential;
use rest_mcp_tools::logging::{LoggingArgs, init_tracing};
use rest_mcp_tools::server::serve_stdio;

#[derive(Parser, Debug)]
#[command(name = "devto-mcp", version, about = "MCP server for the dev.to API (stdio)")]
struct Cli {
    /// dev.to API key. Falls back to `DEVTO_API_KEY`. Optional: reads work anonymously.
    #[arg(long)]
    api_key: Option<String>,

    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(flatten)]
    logging: LoggingArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.logging).context("initialize logging")?;

    let credential = Credential::resolve(cli.api_key, API_KEY_ENV);
    let config = rest_mcp_devto::backend_config(&cli.base_url, credential)
        .context("invalid configuration")?;
    tracing::info!(
        backend = %config.name,
        base_url = %config.base_url,
        credential = config.credential.is_some(),
        "starting devto-mcp"
    );

    let server = rest_mcp_devto::server(config).context("build MCP server")?;
    serve_stdio(server).await.context("serve MCP over stdio")?;
    Ok(())
}
