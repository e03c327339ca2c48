use std::path::PathBuf;

use clap::Parser;
use log::info;
use rpki_as0_bogons::io::{
    fetch_source, SourceUrls, DELEGATED_STATS_URL, IPV4_FULLBOGONS_URL, IPV6_FULLBOGONS_URL,
};
use rpki_as0_bogons::{generate_slurm, SlurmError};

/// A script to generate a SLURM file for all bogons with origin AS0
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// File to be created with all the SLURM content
    #[clap(short = 'f', default_value = "/usr/local/etc/bogons.slurm.txt")]
    dest_file: PathBuf,

    /// Enable the use of NRO delegated stats (EXPERIMENTAL - default bogons list will not be taken in consideration)
    #[clap(long)]
    use_delegated_stats: bool,

    /// Verbose output
    #[clap(short, long)]
    verbose: bool,

    /// Location of the IPv4 full bogons list, local or remote
    #[clap(long, default_value = IPV4_FULLBOGONS_URL)]
    ipv4_bogons_url: String,

    /// Location of the IPv6 full bogons list, local or remote
    #[clap(long, default_value = IPV6_FULLBOGONS_URL)]
    ipv6_bogons_url: String,

    /// Location of the NRO delegated-extended stats, local or remote
    #[clap(long, default_value = DELEGATED_STATS_URL)]
    delegated_stats_url: String,
}

fn run(opts: Opts) -> Result<(), SlurmError> {
    let urls = SourceUrls {
        ipv4_bogons: opts.ipv4_bogons_url,
        ipv6_bogons: opts.ipv6_bogons_url,
        delegated_stats: opts.delegated_stats_url,
    };

    let source = fetch_source(opts.use_delegated_stats, &urls)?;
    let document = generate_slurm(&source)?;
    let json = document.to_json_pretty().map_err(std::io::Error::from)?;

    std::fs::write(&opts.dest_file, json)?;
    info!("Wrote slurm data to {}", opts.dest_file.display());
    Ok(())
}

fn main() {
    let opts: Opts = Opts::parse();

    let level = match opts.verbose {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(opts) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
