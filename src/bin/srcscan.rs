#![deny(unsafe_code)]

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let status = cli::run_with(
        env::args_os(),
        cli::ScannerSource::Global,
        &mut stdout,
        &mut stderr,
    );
    cli::exit_code_from(status)
}
