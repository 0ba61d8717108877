use clap::Parser;

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "tavola-server")]
#[command(author, version, about = "REST API server for Tavola restaurant search")]
pub struct ServerConfig {
    /// Google Maps Places API key
    ///
    /// When absent the server still starts, but the search endpoint reports
    /// a configuration error and `/health` shows the key as not configured.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY")]
    pub google_maps_api_key: Option<String>,

    /// Base URL of the Places web service
    #[arg(
        long,
        env = "PLACES_BASE_URL",
        default_value = tavola_client::DEFAULT_BASE_URL
    )]
    pub places_base_url: String,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Comma-separated list of allowed CORS origins, or "*" for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Expose the /debug/google-maps diagnostic endpoint
    #[arg(
        long,
        env = "DEBUG_ENDPOINTS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub debug_endpoints: bool,
}
