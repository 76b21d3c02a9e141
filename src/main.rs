use std::convert::TryFrom;
use anyhow::Result;
use env_logger::Env;
use gumdrop::Options;
use log::error;
use tokio::signal;
use sonar::{Args, Config, Icmp, Sonar, SystemLookup};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse_args_default_or_exit();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::try_from(args)?;

    println!("Sonar v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let sonar   = Sonar::new(config, SystemLookup);
    let session = sonar.start(|addr, config| Icmp::open(addr, config.timeout)).await?;
    let summary = sonar.run(&session, interrupt()).await;

    println!();
    println!("{}", summary);

    Ok(())
}

async fn interrupt() {
    if let Err(e) = signal::ctrl_c().await {
        error!("unable to listen for interrupt: {}", e);
    }
}
