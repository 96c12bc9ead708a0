use std::io;
use std::process::ExitCode;

use clap::Parser;
use faultcalc::{Args, Settings, Status, default_data_dir, init_logging, run};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let settings =
        Settings::load_or_default(&data_dir).with_overrides(args.clamp_override(), args.format);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let status = run(&args.command, &settings, &data_dir, stdin.lock(), &mut stdout)?;

    Ok(match status {
        Status::Ok => ExitCode::SUCCESS,
        Status::Rejected => ExitCode::from(2),
    })
}
