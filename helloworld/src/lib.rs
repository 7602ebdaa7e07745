use thiserror::Error;
use tracing_subscriber::EnvFilter;

const ENGLISH_HELLO_PREFIX: &str = "Hello, ";
const SPANISH_HELLO_PREFIX: &str = "Hola, ";
const FRENCH_HELLO_PREFIX: &str = "Bonjour, ";

const DEFAULT_NAME: &str = "World";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

impl Language {
    // Unknown names fall back to English
    pub fn from_name(name: &str) -> Self {
        match name {
            "Spanish" => Language::Spanish,
            "French" => Language::French,
            _ => Language::English,
        }
    }

    pub fn greeting_prefix(self) -> &'static str {
        match self {
            Language::English => ENGLISH_HELLO_PREFIX,
            Language::Spanish => SPANISH_HELLO_PREFIX,
            Language::French => FRENCH_HELLO_PREFIX,
        }
    }
}

/// Greets `name` in `language`, e.g. `hello("Elodie", "Spanish") == "Hola, Elodie"`.
///
/// An empty name greets the whole world.
pub fn hello(name: &str, language: &str) -> String {
    let name = if name.is_empty() { DEFAULT_NAME } else { name };
    let prefix = Language::from_name(language).greeting_prefix();

    format!("{prefix}{name}")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("too many arguments, usage: helloworld [name] [language]")]
    TooManyArguments,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub language: String,
}

impl Config {
    // Expects the program name as the first item, as std::env::args() yields it
    pub fn build(mut args: impl Iterator<Item = String>) -> Result<Config, ConfigError> {
        args.next();

        let name = args.next().unwrap_or_default();
        let language = args.next().unwrap_or_default();

        if args.next().is_some() {
            return Err(ConfigError::TooManyArguments);
        }

        Ok(Config { name, language })
    }
}

/// Builds the log filter from the `RUST_LOG` value, falling back to `info`
/// when it is unset, empty or unparsable.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn run(config: &Config) -> String {
    tracing::debug!(name = %config.name, language = %config.language, "building greeting");
    hello(&config.name, &config.language)
}
