//! Command line configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// The REST API server for bankr.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File path to the application SQLite database.
    ///
    /// The file is created if it does not exist.
    #[arg(long, default_value = "bankr.db")]
    pub db_path: PathBuf,

    /// The address to serve the API from.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    /// The origin of the frontend that is allowed to make cross-origin requests.
    #[arg(long, default_value = "http://localhost:3000")]
    pub allowed_origin: String,

    /// Also write debug level logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The socket address the server should listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        net::{IpAddr, Ipv4Addr, SocketAddr},
        path::PathBuf,
    };

    use clap::Parser;

    use super::Config;

    #[test]
    fn uses_defaults() {
        let config = Config::try_parse_from(["server"]).expect("could not parse empty args");

        assert_eq!(
            config,
            Config {
                db_path: PathBuf::from("bankr.db"),
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 8000,
                allowed_origin: "http://localhost:3000".to_owned(),
                log_file: None,
            }
        );
        assert_eq!(
            config.socket_addr(),
            SocketAddr::from(([127, 0, 0, 1], 8000))
        );
    }

    #[test]
    fn parses_all_options() {
        let config = Config::try_parse_from([
            "server",
            "--db-path",
            "/tmp/ledger.db",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--allowed-origin",
            "https://bankr.example.com",
            "--log-file",
            "debug.log",
        ])
        .expect("could not parse args");

        assert_eq!(config.db_path, PathBuf::from("/tmp/ledger.db"));
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 9000)));
        assert_eq!(config.allowed_origin, "https://bankr.example.com");
        assert_eq!(config.log_file, Some(PathBuf::from("debug.log")));
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::try_parse_from(["server", "--port", "not-a-port"]);

        assert!(result.is_err(), "want error for invalid port, got {result:?}");
    }
}
