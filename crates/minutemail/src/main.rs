use anyhow::Context as _;
use clap::Parser;
use rest_mcp_minutemail::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use rest_mcp_tools::config::Credential;
use rest_mcp_tools::logging::{LoggingArgs, init_tracing};
use rest_mcp_tools::server::serve_stdio;

#[derive(Parser, Debug)]
#[command(
    name = "minutemail-mcp",
    version,
    about = "MCP server for the MinuteMail API (stdio)"
)]
struct Cli {
    /// MinuteMail API key. Falls back to `MINUTEMAIL_API_KEY`. Required.
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
    let config = rest_mcp_minutemail::backend_config(&cli.base_url, credential)
        .context("invalid configuration")?;
    tracing::info!(
        backend = %config.name,
        base_url = %config.base_url,
        credential = config.credential.is_some(),
        "starting minutemail-mcp"
    );

    let server = match rest_mcp_minutemail::server(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "cannot start");
            return Err(e).context("build MCP server");
        }
    };
    serve_stdio(server).await.context("serve MCP over stdio")?;
    Ok(())
}
