//! Renders the OVN controller DaemonSet for an OVNController manifest.
use std::{collections::BTreeMap, io, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use kube::ResourceExt;
use ovn_common::telemetry;
use tracing::debug;

use ovn_operator::ovn_controller::{render, OvnController};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an OVNController manifest, stdin is read when omitted.
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Content hash of dependent configuration.
    /// Defaults to a hash of the manifest spec.
    #[arg(long, env = "OVN_CONFIG_HASH")]
    config_hash: Option<String>,

    /// Extra pod annotations as key=value, may be repeated.
    #[arg(long = "annotation", value_parser = parse_key_val)]
    annotations: Vec<(String, String)>,

    /// Write logs as JSON lines.
    #[arg(long, env = "OVN_LOG_JSON")]
    log_json: bool,
}

fn parse_key_val(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((key.to_owned(), value.to_owned()))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    telemetry::init(args.log_json)?;

    let manifest = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    let controller: OvnController = serde_yaml::from_str(&manifest)?;
    debug!(name = %controller.name_any(), "parsed manifest");

    let annotations = BTreeMap::from_iter(args.annotations);
    let daemon_set = render(&controller, args.config_hash, &annotations)?;
    print!("{}", serde_yaml::to_string(&daemon_set)?);
    Ok(())
}
