use anyhow::Context;
use clap::{Arg, Command};
use resume_format::{CheckerConfig, ResumeFormatChecker};
use std::process;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("check_resume")
        .version(resume_format::VERSION)
        .about("Check a resume file against the expected format")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Resume file to check (YAML or JSON)")
                .required(true),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_name("BYTES")
                .help("Maximum document size in bytes"),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").unwrap();

    let mut config = CheckerConfig::default();
    if let Some(max_size) = matches.get_one::<String>("max-size") {
        config.max_document_size = max_size
            .parse()
            .context("invalid --max-size value")?;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let checker = ResumeFormatChecker::new().with_config(config);
    match checker.check_file(file) {
        Ok(true) => {
            println!("Resume format is correct");
            Ok(())
        }
        Ok(false) => {
            // diagnostics already went to the log sink
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to check resume: {}", e);
            process::exit(2);
        }
    }
}
