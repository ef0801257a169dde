//! irkeyd entry point.
//!
//! Wires together the config loader, the serial port channel, the
//! readiness notifier, and exactly one worker loop, then blocks the
//! main task until an interrupt or termination signal arrives.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()        -- device path + key table
//!  └─ PortChannel::open()  -- exclusive serial handle, char-device check
//!  └─ notify_ready()       -- best-effort READY=1 to the supervisor
//!  └─ spawn_blocking worker
//!       ├─ --debug: run_debug  -- print every received code
//!       └─ default: run_live   -- debounce + dispatch shortcuts
//!  └─ wait for SIGINT/SIGTERM, then join the worker
//! ```
//!
//! Every operational error is fatal: it is logged as a single line and
//! the process exits non-zero. The service manager's restart policy is
//! the recovery mechanism.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use irkey_core::domain::debounce::{DebounceGate, QUIET_INTERVAL};
use irkeyd::application::dispatch::{Dispatcher, ShortcutInjector};
use irkeyd::application::worker::{run_debug, run_live};
use irkeyd::infrastructure::injection::XdotoolInjector;
use irkeyd::infrastructure::{notify, serial::PortChannel, storage};

/// Map IR remote key codes from a serial receiver to keyboard shortcuts.
#[derive(Parser)]
#[command(name = "irkeyd", version)]
struct Cli {
    /// Print every received code instead of dispatching shortcuts.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    info!("irkeyd starting");

    let config = storage::load_config()?;
    info!(
        device = %config.device_path,
        mappings = config.table.len(),
        "configuration loaded"
    );

    let mut port = PortChannel::open(Path::new(&config.device_path))?;

    if notify::notify_ready()? {
        info!("service manager notified of readiness");
    }

    // Shutdown flag shared with the worker; the port's read timeout is
    // the worker's cancellation point.
    let running = Arc::new(AtomicBool::new(true));

    // ── The single worker ─────────────────────────────────────────────────────
    let mut worker = {
        let running = Arc::clone(&running);
        if cli.debug {
            info!("debug mode: printing received codes, debounce off");
            let table = config.table;
            tokio::task::spawn_blocking(move || {
                let mut out = std::io::stdout();
                run_debug(&mut port, &table, &mut out, &running)
            })
        } else {
            let injector: Arc<dyn ShortcutInjector> = Arc::new(XdotoolInjector::new());
            let gate = DebounceGate::new(QUIET_INTERVAL, Instant::now());
            let mut dispatcher = Dispatcher::new(config.table, gate, injector);
            info!("live mode: dispatching shortcuts");
            tokio::task::spawn_blocking(move || run_live(&mut port, &mut dispatcher, &running))
        }
    };

    // ── Block until a signal arrives or the worker dies ───────────────────────
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("interrupt received; shutting down"),
        _ = sigterm.recv() => info!("termination signal received; shutting down"),
        res = &mut worker => {
            // The worker never stops on its own unless something failed.
            res??;
            return Ok(());
        }
    }

    // Ordered cleanup: stop the worker, which drops the port channel
    // and releases the descriptor.
    running.store(false, Ordering::Relaxed);
    worker.await??;

    info!("irkeyd stopped");
    Ok(())
}
