use crate::huffman::BitAssignment;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_symbol_count_argument(command);
        let command = Self::register_runs_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_seed_argument(command);
        Self::register_avoid_leading_zero_argument(command)
    }

    fn register_symbol_count_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_count_argument())
    }

    fn register_runs_argument(command: Command) -> Command {
        command.arg(Self::create_runs_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_seed_argument(command: Command) -> Command {
        command.arg(Self::create_seed_argument())
    }

    fn register_avoid_leading_zero_argument(command: Command) -> Command {
        command.arg(Self::create_avoid_leading_zero_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_symbol_count_argument() -> Arg {
        Arg::new("symbol_count")
            .short('n')
            .long("symbol-count")
            .value_name("COUNT")
            .help("Symbol count (probability vector length)")
            .value_parser(value_parser!(usize))
            .required(true)
    }

    fn create_runs_argument() -> Arg {
        arg!(-r --runs <RUNS> "Number of independent experiment runs")
            .default_value("1")
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_seed_argument() -> Arg {
        arg!(-s --seed <SEED> "Seed for reproducible probability vectors")
            .required(false)
            .value_parser(value_parser!(u64))
    }

    fn create_avoid_leading_zero_argument() -> Arg {
        Arg::new("avoid_leading_zero")
            .long("avoid-leading-zero")
            .help("Give the bit 0 to a leaf on the left of the root")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            symbol_count: Self::extract_symbol_count_argument(matches),
            runs: Self::extract_runs_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            seed: Self::extract_seed_argument(matches),
            bit_assignment: Self::extract_avoid_leading_zero_argument(matches),
        }
    }

    fn extract_symbol_count_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("symbol_count")
            .expect("Required argument symbol_count not provided")
            .to_owned()
    }

    fn extract_runs_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("runs")
            .expect("Number of runs must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_seed_argument(matches: &ArgMatches) -> Option<u64> {
        matches.get_one::<u64>("seed").copied()
    }

    fn extract_avoid_leading_zero_argument(matches: &ArgMatches) -> BitAssignment {
        if matches.get_flag("avoid_leading_zero") {
            BitAssignment::AvoidLeadingZero
        } else {
            BitAssignment::LeftOne
        }
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
