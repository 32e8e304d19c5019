use std::process::ExitCode;

use skillscan::cli::{self, Invocation};
use skillscan::commands::extract::{self, ScanRequest};
use skillscan::logging;

fn main() -> ExitCode {
    let cli = match cli::parse(std::env::args_os()) {
        Ok(Invocation::Scan(cli)) => cli,
        Ok(Invocation::Info(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    logging::init(cli.verbose);

    let request = ScanRequest {
        file_path: &cli.file_path,
        vocabulary: cli.vocabulary.as_deref(),
        job: cli.job.as_deref(),
        format: cli.format,
    };

    match extract::execute(&request) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
