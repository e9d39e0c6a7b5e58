use std::process;

use chrono::Utc;
use env_logger::Env;
use log::{error, info};

use iscoding::{activity, report, Client, Config, Result};

fn run() -> Result<()> {
    let config = Config::load()?;
    let client = Client::new(config.base_url, config.api_key)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let snapshot = rt.block_on(client.team_members(&config.team))?;

    let activities = activity::classify_snapshot(&snapshot, Utc::now())?;
    let active = activities.iter().filter(|activity| activity.active).count();
    info!("{} of {} coders active", active, snapshot.len());

    println!();
    println!("{}", report::render(&activities));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
