use std::process;

use helloworld::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(helloworld::log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::build(std::env::args()).unwrap_or_else(|err| {
        eprintln!("Problem parsing arguments: {err}");
        process::exit(1);
    });

    println!("{}", helloworld::run(&config));
}
