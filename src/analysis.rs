//! Benchmark driver comparing a planned Bloom filter against an exact
//! `HashSet<String>`, and the console report for its results.

use std::collections::HashSet;
use std::fmt;
use std::mem::size_of;

use tracing::debug;

use crate::bloom_filters::BloomFilter;
use crate::error::{BloomError, Result};

/// Width of the report's horizontal rules.
const RULE_WIDTH: usize = 85;

/// Workloads to analyze. Every item count is combined with every rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub item_counts: Vec<usize>,
    pub target_rates: Vec<f64>,
    /// number of never-inserted keys probed per workload
    pub probe_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            item_counts: vec![1000, 10_000, 100_000],
            target_rates: vec![0.01, 0.05, 0.1],
            probe_count: 10_000,
        }
    }
}

/// Measurements for a single `(items, target_rate)` workload.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub items: usize,
    pub target_rate: f64,
    pub bloom_memory_kb: f64,
    pub hash_set_memory_kb: f64,
    pub savings_percent: f64,
    pub bits_per_item: f64,
    pub actual_fp_percent: f64,
}

fn key(i: usize) -> String {
    format!("item{}", i)
}

/// Rough footprint of an exact set: one `String` header plus one pointer per
/// entry. Heap bytes of the strings are not counted.
fn hash_set_memory_bytes(set: &HashSet<String>) -> usize {
    set.len() * (size_of::<String>() + size_of::<usize>())
}

/// Builds a filter sized for `items` at `target_rate`, inserts
/// `item0..item{items-1}` and probes `probe_count` keys that follow them.
pub fn analyze_configuration(
    items: usize,
    target_rate: f64,
    probe_count: usize,
) -> Result<AnalysisResult> {
    if probe_count == 0 {
        return Err(BloomError::ZeroProbeCount);
    }
    let params = BloomFilter::optimal_parameters(items, target_rate)?;
    let mut bloom = BloomFilter::new(params.num_bits, params.num_hashes)?;
    let mut hash_set = HashSet::with_capacity(items);

    for i in 0..items {
        let item = key(i);
        bloom.insert(&item);
        hash_set.insert(item);
    }

    let false_positives = (items..items + probe_count)
        .filter(|&i| bloom.might_contain(&key(i)))
        .count();

    let bloom_memory_kb = bloom.memory_usage_bytes() as f64 / 1024.0;
    let hash_set_memory_kb = hash_set_memory_bytes(&hash_set) as f64 / 1024.0;
    let result = AnalysisResult {
        items,
        target_rate,
        bloom_memory_kb,
        hash_set_memory_kb,
        savings_percent: (1.0 - bloom_memory_kb / hash_set_memory_kb) * 100.0,
        bits_per_item: params.bits_per_item(items),
        actual_fp_percent: false_positives as f64 / probe_count as f64 * 100.0,
    };
    debug!(
        items,
        target_rate,
        num_bits = params.num_bits,
        num_hashes = params.num_hashes,
        false_positives,
        "analyzed configuration"
    );
    Ok(result)
}

/// Runs every workload of `config`, item counts outermost.
pub fn run(config: &AnalysisConfig) -> Result<Vec<AnalysisResult>> {
    if config.probe_count == 0 {
        return Err(BloomError::ZeroProbeCount);
    }
    let mut results = Vec::with_capacity(config.item_counts.len() * config.target_rates.len());
    for &items in &config.item_counts {
        for &rate in &config.target_rates {
            results.push(analyze_configuration(items, rate, config.probe_count)?);
        }
    }
    Ok(results)
}

/// Console table for a sequence of results.
///
/// A separator line is printed after each group of rows sharing an item count.
pub struct Report<'a> {
    results: &'a [AnalysisResult],
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [AnalysisResult]) -> Self {
        Self { results }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Bloom Filter Analysis:")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:>10}{:>12}{:>12}{:>15}{:>15}{:>12}{:>12}",
            "Items", "Target FP%", "Actual FP%", "Bloom (KB)", "HashSet (KB)", "Savings%", "Bits/Item"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for (i, r) in self.results.iter().enumerate() {
            writeln!(
                f,
                "{:>10}{:>12.2}{:>12.2}{:>15.2}{:>15.2}{:>12.2}{:>12.2}",
                r.items,
                r.target_rate * 100.0,
                r.actual_fp_percent,
                r.bloom_memory_kb,
                r.hash_set_memory_kb,
                r.savings_percent,
                r.bits_per_item
            )?;
            let group_ends = self
                .results
                .get(i + 1)
                .map_or(true, |next| next.items != r.items);
            if group_ends {
                writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            }
        }
        Ok(())
    }
}
