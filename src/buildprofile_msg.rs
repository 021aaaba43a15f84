use clap::{Arg, Command};
use tracing::{debug, warn};

use buildprofile::reader::{ConfigReader, DEFAULT_KEY};

const BUNDLED_RESOURCE: &[u8] = include_bytes!("../resources/resources.properties");
const READ_FAILURE: &str = "An error occurred while read";

fn main() {
    let matches = Command::new("buildprofile-msg")
        .about("Prints the `msg` entry of the bundled resources.properties")
        .arg(
            Arg::new("resource")
                .help("Read this file instead of the bundled resource")
                .index(1),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("DEBUG, INFO, WARN or ERROR")
                .default_value("WARN"),
        )
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map(|s| s.to_uppercase())
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match log_level.as_str() {
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => tracing::Level::WARN,
        })
        .init();

    let reader = match matches.get_one::<String>("resource") {
        Some(path) => ConfigReader::from_path(path),
        None => ConfigReader::embedded(BUNDLED_RESOURCE),
    };
    debug!("reading {:?} from {:?}", DEFAULT_KEY, reader.source());

    let msg = match reader.get(DEFAULT_KEY) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}", e); // stdout gets READ_FAILURE for every error kind
            READ_FAILURE.to_string()
        }
    };

    println!("{}", msg);
}
