//! Price statistics, percentiles, tiers, and outlier detection.

use crate::config::Config;
use crate::types::{PriceStats, PriceTier};

/// Compute set-level price statistics. `None` when no positive prices exist.
pub fn price_stats(prices: &[f64]) -> Option<PriceStats> {
  let mut prices: Vec<f64> = prices.iter().copied().filter(|p| *p > 0.0).collect();
  if prices.is_empty() {
    return None;
  }
  prices.sort_by(|a, b| a.total_cmp(b));

  let count = prices.len();
  let min = prices[0];
  let max = prices[count - 1];
  let sum: f64 = prices.iter().sum();
  let average = sum / count as f64;
  let median = median_of_sorted(&prices);
  let std_dev = if count > 1 {
    let var: f64 = prices.iter().map(|p| (p - average).powi(2)).sum::<f64>() / (count - 1) as f64;
    var.sqrt()
  } else {
    0.0
  };

  Some(PriceStats {
    count,
    min,
    max,
    average,
    median,
    std_dev,
    range: max - min,
  })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
  let n = sorted.len();
  if n % 2 == 1 {
    sorted[n / 2]
  } else {
    (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
  }
}

/// Fraction of in-set prices at or below `price`.
pub fn percentile_of(prices: &[f64], price: f64) -> f64 {
  let positive: Vec<f64> = prices.iter().copied().filter(|p| *p > 0.0).collect();
  if positive.is_empty() {
    return 0.0;
  }
  let at_or_below = positive.iter().filter(|p| **p <= price).count();
  at_or_below as f64 / positive.len() as f64
}

/// Coarse price bucket from a percentile.
pub fn tier_for(percentile: f64, config: &Config) -> PriceTier {
  if percentile < config.tier_budget_max {
    PriceTier::Budget
  } else if percentile < config.tier_mid_max {
    PriceTier::Mid
  } else if percentile < config.tier_premium_max {
    PriceTier::Premium
  } else {
    PriceTier::Luxury
  }
}

/// True when `price` exceeds the configured multiple of the set median.
pub fn is_outlier(price: f64, median: f64, config: &Config) -> bool {
  median > 0.0 && price > median * config.outlier_median_multiple
}
