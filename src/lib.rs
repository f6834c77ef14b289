use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use error::Error;
use experiment::{ExperimentReport, ExperimentRunner};
use huffman::{BitAssignment, HuffmanEncoder};

mod cli;
mod error;
pub mod experiment;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    symbol_count: usize,
    runs: usize,
    number_of_threads: usize,
    seed: Option<u64>,
    bit_assignment: BitAssignment,
}

pub fn run_experiments(arguments: &Arguments) -> Result<Vec<ExperimentReport>> {
    if arguments.symbol_count == 0 {
        return Err(Error::InvalidSymbolCount(arguments.symbol_count));
    }
    if arguments.number_of_threads == 0 {
        return Err(Error::InvalidThreadCount(arguments.number_of_threads));
    }
    log::info!(
        "{} run(s) over {} symbols on {} thread(s)",
        arguments.runs,
        arguments.symbol_count,
        arguments.number_of_threads
    );
    let encoder = HuffmanEncoder::new(arguments.bit_assignment);
    let threadpool = ThreadPool::new(arguments.number_of_threads);
    let runner = ExperimentRunner::new(
        encoder,
        arguments.symbol_count,
        arguments.seed,
        &threadpool,
    );
    runner.run(arguments.runs)
}
