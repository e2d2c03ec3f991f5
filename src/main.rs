//! Main entry point for ytmenu

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytmenu::cli::prompt::wait_for_enter;
use ytmenu::cli::{interrupt_notice, Args, OutputFormatter, Session};
use ytmenu::core::selector::INSTALL_HINT;
use ytmenu::{AppError, Downloader, SystemInvoker};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(args.log_filter())?;
    debug!("Starting ytmenu with args: {:?}", args);

    let formatter = OutputFormatter::new(args.verbosity_level());

    ctrlc::set_handler(move || {
        std::process::exit(interrupt_notice(&formatter, &mut io::stdout()));
    })
    .context("Failed to install Ctrl-C handler")?;

    let downloader = match Downloader::detect_from(&args.candidates()) {
        Ok(downloader) => downloader,
        Err(AppError::DownloaderNotFound { candidates }) => {
            exit_missing_downloader(&formatter, &candidates);
        }
        Err(e) => return Err(e).context("Failed to detect downloader"),
    };
    info!("Using {} at {}", downloader, downloader.path().display());
    formatter.print_found_downloader(&mut io::stdout(), downloader.name())?;

    let clear_screen = !args.no_clear && console::Term::stdout().is_term();
    let mut session = Session::new(
        io::stdin().lock(),
        io::stdout(),
        SystemInvoker::new(downloader),
        formatter,
    )
    .with_clear_screen(clear_screen);

    let end = session.run().context("Terminal I/O failed")?;
    debug!("Session ended: {:?}", end);

    Ok(())
}

/// Report the missing downloader, wait for acknowledgment and exit with status 1
fn exit_missing_downloader(formatter: &OutputFormatter, candidates: &[String]) -> ! {
    let mut stdout = io::stdout();
    let _ = formatter.print_downloader_missing(&mut stdout, candidates, INSTALL_HINT);
    let _ = wait_for_enter(&mut io::stdin().lock(), &mut stdout, "Press Enter to exit...");
    let _ = stdout.flush();
    std::process::exit(1)
}

/// Initialize logging system
fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // stderr keeps log lines out of the menu on stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
