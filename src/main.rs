use bincode::{deserialize_from, serialize_into};
use clap::Parser;
use log::info;
use opts::*;
use rdiff_rust::{file_ops, DeltaScanner, FileSignature, RdiffError, SignatureBuilder};
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

mod opts;

fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::parse();

    let result = match opts.subcmd {
        SubCommand::Signature(s) => run_signature(s),
        SubCommand::Delta(d) => run_delta(d),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rdiff-rust: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_signature(opts: Signature) -> Result<(), RdiffError> {
    info!(
        "unchanged file: {}, signature file: {}, block size: {}",
        opts.unchanged_file.display(),
        opts.signature_file.display(),
        opts.block_size
    );

    let unchanged_file = file_ops::open_read_handler(&opts.unchanged_file)?;
    let signature_file = file_ops::open_write_handler(&opts.signature_file)?;

    let signature = SignatureBuilder::build(BufReader::new(unchanged_file), opts.block_size)?;

    let mut writer = BufWriter::new(signature_file);
    serialize_into(&mut writer, &signature).map_err(RdiffError::Encode)
}

fn run_delta(opts: Delta) -> Result<(), RdiffError> {
    info!(
        "signature file: {}, modified file: {}, delta file: {}",
        opts.signature_file.display(),
        opts.modified_file.display(),
        opts.delta_file.display()
    );

    let signature_file = file_ops::open_read_handler(&opts.signature_file)?;
    let modified_file = file_ops::open_read_handler(&opts.modified_file)?;
    let delta_file = file_ops::open_write_handler(&opts.delta_file)?;

    let signature: FileSignature =
        deserialize_from(BufReader::new(signature_file)).map_err(RdiffError::Decode)?;
    let deltas = DeltaScanner::scan(BufReader::new(modified_file), &signature)?;

    let mut writer = BufWriter::new(delta_file);
    serialize_into(&mut writer, &deltas).map_err(RdiffError::Encode)
}
