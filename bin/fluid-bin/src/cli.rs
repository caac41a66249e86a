use clap::Parser;

use fluid_client::DEFAULT_FLUID_API_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct FluidCli {
    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,

    /// API host
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    pub api_host: String,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    /// Base URL of the Fluid API, used for vault data and by the proxy
    #[arg(long, env = "FLUID_API_URL", default_value = DEFAULT_FLUID_API_URL)]
    pub fluid_api_url: String,

    /// Timeout applied to incoming requests and to upstream calls, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,
}
