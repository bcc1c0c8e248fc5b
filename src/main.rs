use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pst_gen::cli::Cli;
use pst_gen::config::{self, DeviceProfile};
use pst_gen::generate;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let devices = config::load_devices(&cli.config)?;

    if cli.list {
        generate::list_devices(&devices);
        return Ok(());
    }

    let targets: Vec<&DeviceProfile> = match &cli.device {
        Some(query) => {
            let matches = generate::filter_devices(&devices, query);
            if matches.is_empty() {
                bail!("no device matching '{query}'; use --list to see options");
            }
            matches
        }
        None => devices.iter().collect(),
    };

    generate::generate_all(&targets, &cli.output)
}
