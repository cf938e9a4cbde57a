use std::path::PathBuf;

use clap::{command, Arg};
use generator::{generate, BuildConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

mod frontmatter;
mod generator;
mod markdown;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .args(&[
            Arg::new("input")
                .help("Markdown document to render. May start with a `---` frontmatter block.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT),
            Arg::new("output")
                .help("Path of the generated HTML page. Parent directories are created.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT),
        ])
        .get_matches();

    let mut config = BuildConfig::default();
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.to_owned();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.to_owned();
    }

    generate(&config)?;

    Ok(())
}
