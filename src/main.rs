use clap::Parser;
use dhcp6rd::{
    config::{to_hex, OutputFormat},
    Args, Option6rd, ToolConfig, ToolError,
};
use std::{error::Error as StdError, net::Ipv4Addr};
use tracing_subscriber::EnvFilter;

fn derive(opt: &Option6rd, address: Option<Ipv4Addr>) -> Result<String, ToolError> {
    let address = address.ok_or(ToolError::MissingAddress)?;
    let net = opt.delegated_prefix_v4(address)?;
    tracing::info!("Usable 6RD prefix for {}: {}", address, net);
    Ok(net.to_string())
}

fn summary(opt: &Option6rd, address: Option<Ipv4Addr>) -> Result<String, ToolError> {
    let relays: Vec<String> = opt.relays().iter().map(Ipv4Addr::to_string).collect();
    let mut lines = vec![
        format!("mask_len:   {}", opt.mask_len()),
        format!("prefix:     {}/{}", opt.prefix(), opt.prefix_len()),
        format!("relays:     {}", relays.join(", ")),
    ];
    if address.is_some() {
        lines.push(format!("delegated:  {}", derive(opt, address)?));
    }
    Ok(lines.join("\n"))
}

fn main() -> Result<(), Box<dyn StdError>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ToolConfig::from_args(args)?;

    let opt = config.source.load()?;
    tracing::debug!(
        "Decoded 6RD option: mask_len={}, prefix={}/{}, {} relay(s)",
        opt.mask_len(),
        opt.prefix(),
        opt.prefix_len(),
        opt.relays().len()
    );

    let output = match config.output {
        OutputFormat::Prefix => derive(&opt, config.address)?,
        OutputFormat::Dhclient => opt.to_dhclient_string(),
        OutputFormat::Hex => to_hex(&opt.to_bytes()),
        OutputFormat::Summary => summary(&opt, config.address)?,
    };
    println!("{output}");

    Ok(())
}
