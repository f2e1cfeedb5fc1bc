//! Runtime configuration.
//!
//! Every flag has an environment-variable fallback so the service can be
//! configured the same way from a shell or a container spec.

use std::net::SocketAddr;

use clap::Parser;

use crate::posts::IdStrategy;

/// Command-line and environment configuration for the `postbox` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "postbox", version, about = "In-memory post service")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "POSTBOX_BIND", default_value = "0.0.0.0:5002")]
    pub bind: SocketAddr,

    /// How new post ids are assigned.
    #[arg(long, env = "POSTBOX_ID_STRATEGY", value_enum, default_value_t = IdStrategy::MaxPlusOne)]
    pub id_strategy: IdStrategy,

    /// Start with an empty collection instead of the two seed posts.
    #[arg(long, env = "POSTBOX_NO_SEED")]
    pub no_seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["postbox"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:5002".parse::<SocketAddr>().unwrap());
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
        assert!(!config.no_seed);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "postbox",
            "--bind",
            "127.0.0.1:8080",
            "--id-strategy",
            "monotonic",
            "--no-seed",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert!(config.no_seed);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Config::try_parse_from(["postbox", "--id-strategy", "random"]).is_err());
    }
}
