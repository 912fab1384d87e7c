use clap::Parser;

use viewer::runtime::{boot, cli::Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    boot::init_logging();

    let booted = boot::boot(&cli).map_err(|e| anyhow::anyhow!("{}", e))?;

    if let Err(e) = run::run(booted, &cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
