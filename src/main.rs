//! # librusec
//!
//! Converts a concatenated dump of fb2-derived texts into cleaned, length-bounded
//! fragments ready for corpus ingestion.
//!
//! ## Getting started
//!
//! ```sh
//! librusec dump.txt.gz librusec.jsonl
//! ```
//!
//! Use `RUST_LOG=info` to follow progress.
use librusec::config::Config;
use librusec::error;
use librusec::pipelines::{Librusec, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Librusec::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = match &opt.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    let p = Librusec::new(opt.input_path, opt.output_path, config);
    p.run()?;
    Ok(())
}
