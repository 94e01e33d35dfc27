use clap::Parser;
use env_logger::Env;
use linkscan::cli::Args;
use linkscan::config::ScanConfig;
use linkscan::session::Session;
use linkscan::ui::TerminalPresenter;
use linkscan::UrlScanner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize logging based on verbosity and quiet flags
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    log::debug!("linkscan starting with args: {:?}", args);

    let config = ScanConfig::from(&args);
    config.check_output(args.urls.len())?;
    let presenter = TerminalPresenter::new(config.animate);
    if !args.no_banner && !args.quiet && config.animate {
        presenter.print_banner()?;
    }

    let scanner = UrlScanner::from_config(&config);
    let mut session = Session::new(scanner, presenter, config);

    let summary = if args.urls.is_empty() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session.run_interactive(stdin).await?
    } else {
        session.run_batch(&args.urls).await?
    };

    log::info!(
        "Session finished: {} scanned, {} rejected, {} failed, {} exported",
        summary.scanned,
        summary.rejected,
        summary.failed,
        summary.exported
    );

    if !summary.all_succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
