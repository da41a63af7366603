use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cloth_similarity",
    about = "HTTP service returning the catalog products most similar to a free-text query"
)]
pub struct Config {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "CLOTH_SIMILARITY_BIND", default_value = "127.0.0.1:5001")]
    pub bind: SocketAddr,

    /// Catalog CSV loaded at startup.
    #[arg(long, env = "CLOTH_SIMILARITY_CATALOG", default_value = "final.csv")]
    pub catalog: PathBuf,

    /// Append-only operational log.
    #[arg(long, env = "CLOTH_SIMILARITY_LOG", default_value = "cloth_similarity.log")]
    pub log_file: PathBuf,

    /// Result count used when a request does not set `top_n`.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub default_top_n: u64,
}
