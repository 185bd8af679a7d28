//! diskdash Binary
//!
//! Headless driver for the dashboard state: opens the stores from a data
//! directory and dispatches the same updates the UI would.

use clap::{Parser, Subcommand};
use diskdash::store::{find_tab, TABS};
use diskdash::{AppState, Config, DiskRecord, Persistence};
use tracing_subscriber::{fmt, EnvFilter};

/// diskdash
#[derive(Parser, Debug)]
#[command(name = "diskdash")]
#[command(about = "Inspect and update disk-utility dashboard state")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./diskdash_data")]
    data_dir: String,

    /// Run without persistent storage (always start from defaults)
    #[arg(long)]
    no_persist: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print disk records and tabs
    Show,

    /// Switch the active tab
    Tab {
        /// Tab id
        id: String,
    },

    /// Run a simulated scan
    Scan,

    /// Replace (or add) the record with the given name
    SetDisk {
        /// Record label
        name: String,

        /// Used amount
        used: f64,

        /// Total capacity
        total: f64,

        /// Display-style tag
        #[arg(short, long, default_value = "from-emerald-500 to-green-600")]
        color: String,
    },

    /// Restore the default records
    Reset,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,diskdash=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::debug!("diskdash v{}", diskdash::VERSION);

    // Build config from args
    let persistence = if args.no_persist {
        Persistence::Disabled
    } else {
        Persistence::Enabled
    };
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .persistence(persistence)
        .build();

    let state = match AppState::open(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open dashboard state: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Commands::Show => show(&state),
        Commands::Tab { id } => {
            if find_tab(&id).is_none() {
                tracing::warn!(tab = %id, "unknown tab id");
            }
            let mut sub = state.ui().active_tab.subscribe(|tab| {
                tracing::info!(tab = %tab, "active tab");
            });
            state.ui().active_tab.set(id);
            sub.unsubscribe();
            show(&state);
        }
        Commands::Scan => {
            let mut sub = state.ui().is_scanning.subscribe(|scanning| {
                tracing::info!(scanning = *scanning, "scan state");
            });
            state.ui().is_scanning.set(true);
            let records = state.disks().get();
            for record in &records {
                tracing::info!(disk = %record.name, used = record.used, total = record.total, "scanned");
            }
            state.ui().is_scanning.set(false);
            sub.unsubscribe();
        }
        Commands::SetDisk {
            name,
            used,
            total,
            color,
        } => {
            let record = DiskRecord::new(name, used, total, color);
            state.disks().update(|records| {
                let mut next = records.clone();
                match next.iter_mut().find(|r| r.name == record.name) {
                    Some(existing) => *existing = record,
                    None => next.push(record),
                }
                next
            });
            show(&state);
        }
        Commands::Reset => {
            state.disks().reset();
            show(&state);
        }
    }
}

/// Print the current state
fn show(state: &AppState) {
    println!("Disks:");
    for record in state.disks().get() {
        println!(
            "  {:<16} {:>8.1} / {:>8.1}  ({:>5.1}%)  {}",
            record.name,
            record.used,
            record.total,
            record.usage_percent(),
            record.color
        );
    }

    let active = state.ui().active_tab.get();
    println!("Tabs:");
    for tab in TABS.iter() {
        let marker = if tab.id == active { "*" } else { " " };
        println!("  {} {} {:<18} ({})", marker, tab.icon, tab.name, tab.id);
    }
    if find_tab(&active).is_none() {
        println!("  * ? {:<18} ({})", "unknown", active);
    }
}
