use std::env::args_os;
use std::process::ExitCode;

use huffman_coding::{run_experiments, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_experiments(&arguments) {
        Ok(reports) => {
            for report in reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Experiment failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
