//! Coding-cost experiments on random probability vectors.
//!
//! Every run encodes a probability vector `P` directly, then merges its last
//! two probabilities into one and encodes the shorter vector `P'` to compare
//! the costs of both codes.

use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use threadpool::ThreadPool;

use crate::error::Error;
use crate::huffman::{Code, HuffmanEncoder, LoggingTrace, Weight};
use crate::logger::log_probabilities;
use crate::Result;

const MAX_DRAW: u32 = 100;

#[derive(Clone, Debug)]
pub struct ExperimentOutcome {
    pub probabilities: Vec<Weight>,
    pub codes: Vec<Code>,
    pub cost: Weight,
}

#[derive(Clone, Debug)]
pub struct MergedExperimentOutcome {
    pub probabilities: Vec<Weight>,
    pub codes: Vec<Code>,
    /// `codes` with the code of the merged probability repeated for the
    /// symbol that was folded into it.
    pub expanded_codes: Vec<Code>,
    pub cost: Weight,
}

#[derive(Clone, Debug)]
pub struct ExperimentReport {
    pub run: usize,
    pub direct: ExperimentOutcome,
    /// `None` for vectors of a single probability.
    pub merged: Option<MergedExperimentOutcome>,
}

/// Draws `symbol_count` integers from `0..=100` and normalizes them to sum 1.
/// If every draw is zero the vector is uniform.
pub fn generate_probability_vector<R: Rng>(
    symbol_count: usize,
    rng: &mut R,
) -> Result<Vec<Weight>> {
    if symbol_count == 0 {
        return Err(Error::InvalidSymbolCount(symbol_count));
    }
    let draws: Vec<u32> = (0..symbol_count)
        .map(|_| rng.gen_range(0..=MAX_DRAW))
        .collect();
    let sum: u32 = draws.iter().sum();
    if sum == 0 {
        return Ok(vec![1.0 / symbol_count as Weight; symbol_count]);
    }
    Ok(draws
        .into_iter()
        .map(|draw| Weight::from(draw) / Weight::from(sum))
        .collect())
}

/// Adds the last probability onto the one before it. Vectors shorter than
/// two have nothing to merge.
pub fn merge_last_two(probabilities: &[Weight]) -> Option<Vec<Weight>> {
    let (&last, rest) = probabilities.split_last()?;
    let mut merged = rest.to_vec();
    *merged.last_mut()? += last;
    Some(merged)
}

pub fn run_experiment(
    run: usize,
    probabilities: Vec<Weight>,
    encoder: &HuffmanEncoder,
) -> Result<ExperimentReport> {
    log_probabilities(run, "P", &probabilities);
    let encoding = encoder.encode_traced(&probabilities, &mut LoggingTrace)?;
    let direct = ExperimentOutcome {
        cost: encoding.expected_length,
        codes: encoding.codes.into_dense(),
        probabilities,
    };

    let merged = match merge_last_two(&direct.probabilities) {
        Some(probabilities) => {
            log_probabilities(run, "P'", &probabilities);
            let encoding = encoder.encode_traced(&probabilities, &mut LoggingTrace)?;
            let codes = encoding.codes.into_dense();
            let mut expanded_codes = codes.clone();
            expanded_codes.extend(codes.last().cloned());
            Some(MergedExperimentOutcome {
                probabilities,
                codes,
                expanded_codes,
                cost: encoding.expected_length,
            })
        }
        None => None,
    };

    log::info!(
        "run {}: C = {:.6}, C' = {}",
        run,
        direct.cost,
        merged
            .as_ref()
            .map_or_else(|| "-".to_string(), |m| format!("{:.6}", m.cost))
    );
    Ok(ExperimentReport {
        run,
        direct,
        merged,
    })
}

// runs with a seed draw from `seed + run`
fn create_rng(seed: Option<u64>, run: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run as u64)),
        None => StdRng::from_entropy(),
    }
}

pub struct ExperimentRunner<'a> {
    encoder: HuffmanEncoder,
    symbol_count: usize,
    seed: Option<u64>,
    threadpool: &'a ThreadPool,
}

impl<'a> ExperimentRunner<'a> {
    pub fn new(
        encoder: HuffmanEncoder,
        symbol_count: usize,
        seed: Option<u64>,
        threadpool: &'a ThreadPool,
    ) -> Self {
        ExperimentRunner {
            encoder,
            symbol_count,
            seed,
            threadpool,
        }
    }

    /// Runs `runs` independent experiments on the pool, reports in run order.
    pub fn run(&self, runs: usize) -> Result<Vec<ExperimentReport>> {
        let (sender, receiver) = mpsc::channel();
        for run in 0..runs {
            let sender = sender.clone();
            let encoder = self.encoder;
            let symbol_count = self.symbol_count;
            let seed = self.seed;
            self.threadpool.execute(move || {
                let mut rng = create_rng(seed, run);
                let report = generate_probability_vector(symbol_count, &mut rng)
                    .and_then(|probabilities| run_experiment(run, probabilities, &encoder));
                // the receiver only goes away once `run` has returned
                let _ = sender.send((run, report));
            });
        }
        drop(sender);

        let mut reports: Vec<Option<ExperimentReport>> = vec![None; runs];
        for (run, report) in receiver.iter() {
            reports[run] = Some(report?);
        }
        reports
            .into_iter()
            .enumerate()
            .map(|(run, report)| report.ok_or(Error::ExperimentRunLost(run)))
            .collect()
    }
}
