use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma-separated list of origins allowed by CORS.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    /// Reject reservation forms whose startAt/numGuests do not parse,
    /// instead of storing them as sentinels.
    #[clap(env, long)]
    pub strict_forms: bool,
}
