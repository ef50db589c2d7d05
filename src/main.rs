use clap::{command, Arg};
use log::info;
use std::path::PathBuf;

mod converter;
mod entry;
mod frontmatter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .args(&[
            Arg::new("source_dir")
                .help("Directory to scan for .md files (not recursive)")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("output_file")
                .help("Path of the aggregated JSON file. Existing content will be replaced.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts/feed.json"),
        ])
        .get_matches();

    let source_dir: &PathBuf = matches.get_one("source_dir").unwrap();
    let output_file: &PathBuf = matches.get_one("output_file").unwrap();

    let count = converter::convert(source_dir, output_file)?;
    info!("wrote {} entries to {:?}", count, output_file);

    Ok(())
}
