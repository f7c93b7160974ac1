use clap::Parser;
use spindle::config::FetchConfig;
use spindle::{Fetcher, PageInfo};
use std::process::ExitCode;

mod args;
use args::{Args, Mode, USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let Some(mode) = args.mode() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let config = match args.server_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match mode {
        Mode::Scrape(url) => {
            ::log::debug!("Scraping {} once", url);
            match scrape_once(&config.fetch, &url).await {
                Ok(info) => {
                    println!("{}", info);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error scraping URL: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Server => {
            println!("Starting server on {}...", config.bind_address());
            match spindle::server::start(&config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    ::log::error!("Failed to start server: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// One-shot extraction, always with the default language
async fn scrape_once(config: &FetchConfig, url: &str) -> spindle::Result<PageInfo> {
    Fetcher::new(config)?.fetch(url, None).await
}
