use clap::{Parser, ValueEnum};

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "chatty-gateway")]
#[command(about = "Rate-limited Gemini gateway for the Chatty support app")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "CHATTY_PORT", default_value_t = 8080)]
    pub port: u16,

    // Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    // Gemini model used for every generation
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    // Gemini REST base url
    #[arg(
        long,
        env = "GEMINI_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_url: String,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout: u64,

    // How often idle clients are swept from the history store, in seconds
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub sweep_interval: u64,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}
