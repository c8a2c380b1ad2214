//! Long help text constants for CLI subcommands.
//!
//! Kept out of `cli.rs` so the argument definitions stay readable.

/// Per-page diagnosis: subtractive score, issues and opportunities.
pub const DIAGNOSE: &str = "\
Diagnose pages from a JSON file of search metrics.

Input is either a bare array of page rows or {\"site\": ..., \"pages\": [...]}.
Each row has url, clicks, impressions, position and an optional ctr
(derived from clicks / impressions when missing).

Every page starts at 100 and rule blocks subtract penalties; they stack:
  CTR < 40% of benchmark, > 100 impressions       -30  critical
  CTR < 70% of benchmark, > 50 impressions        -15  warning
  position 4-10, > 200 impressions                -10  warning
  position 10-20, > 100 impressions               -25  critical
  position > 20                                   -15  info
  > 500 impressions, fewer than 5 clicks          -20  critical
  < 50 impressions, position < 20                  -5  info

The benchmark is the expected CTR for the page's position, with every
position past 10 read as position 10.

Opportunities estimate additional clicks:
  title rewrite       impressions * benchmark * 0.8 - clicks
  move to top three   impressions * benchmark@3 - clicks    (positions 4-10)
  striking distance   clicks * 0.25                         (positions 8-15)

At most 5 issues (highest impact first) and 3 opportunities are kept.
The number of pages scored per run is capped by plan.";

/// Site health: additive banded sub-scores.
pub const SITE: &str = "\
Score overall site health from a JSON totals row.

Input: {\"clicks\": N, \"impressions\": N, \"ctr\": F, \"position\": F}.
A position of 0 means the provider returned no ranking data.

The score is the sum of four banded components:
  Position     0-30   average position, lower is better
  CTR          0-25   CTR / extended-range benchmark
  Visibility   0-25   impressions
  Engagement   0-20   clicks

Labels:
  80-100  excellent
  60-79   good
  40-59   fair
  0-39    poor";

/// Week-over-week trend comparison.
pub const TRENDS: &str = "\
Compare the last 7 days of traffic with the 7 days before.

Input is a JSON array of daily rows with date (YYYY-MM-DD), clicks,
impressions, position and an optional ctr. Rows are sorted by date.

Clicks and impressions are summed per window; CTR is recomputed from the
sums; position is the mean of the daily positions. A lower position is
reported as a positive change. Fewer than 14 days yields no comparison.";

/// Benchmark CTR curves.
pub const BENCHMARK: &str = "\
Print the benchmark click-through-rate curves by ranking position.

Short range (per-page scoring): positions 1-10 read from the table, deeper
positions read as position 10.

Extended range (site scoring): positions 1-20 read from the table, deeper
positions decay through fixed floors:
  21-30   0.2%
  31-50   0.1%
  51-100  0.05%
  > 100   0.01%

Rows where the two curves differ are marked with *.";
