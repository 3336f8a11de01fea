use legroster::runtime::fetcher::HttpFetcher;
use legroster::scrape;
use legroster::targets::{akleg, ScrapeTarget};
use std::time::Instant;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // An optional argument points at a target definition file; without one,
    // the built-in Alaska Senate target is used.
    let mut args = std::env::args().skip(1);
    let target = match args.next() {
        Some(path) => match ScrapeTarget::load_from_file(&path) {
            Ok(target) => target,
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Usage: legroster [target.json]");
                std::process::exit(2);
            }
        },
        None => akleg::target(),
    };

    tracing::info!("{} roster scraper", target.name);
    let started = Instant::now();

    let fetcher = match HttpFetcher::for_target(&target) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(2);
        }
    };

    let outcome = scrape::run(&fetcher, &target).await;

    tracing::info!("Total time: {}s", started.elapsed().as_secs());
    std::process::exit(outcome.exit_code());
}
