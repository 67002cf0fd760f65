//! Create the database file and tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use trainerhub_server::db::{BookingRepo, TrainerRepo};

use super::StoreArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.store.open_initialized().await?;

    let trainers = TrainerRepo::new(&pool)
        .count()
        .await
        .context("Failed to count trainers")?;
    let bookings = BookingRepo::new(&pool)
        .count()
        .await
        .context("Failed to count bookings")?;

    println!(
        "Store ready at {} ({} trainers, {} bookings)",
        args.store.db_path.display(),
        trainers,
        bookings
    );

    pool.close().await;
    Ok(())
}
