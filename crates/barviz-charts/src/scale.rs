//! # scale
//!
//! Value domain, round-number tick generation, tick thinning and the
//! linear scale that places ticks and bars on the horizontal axis.

use crate::measure::TextMeasurer;
use barviz_core::{ChartError, Entry, Result, TickLabelFormatter};

// ============================================================================
// DOMAIN
// ============================================================================

/// Value range covered by the axis; always contains zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Build a domain, widening it to include zero
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(0.0),
            max: max.max(0.0),
        }
    }

    /// Resolve the domain from entry totals
    pub fn resolve(entries: &[Entry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(ChartError::EmptyEntries);
        }

        let mut min = 0.0_f64;
        let mut max = 0.0_f64;

        for entry in entries {
            if !entry.sum.is_finite() {
                tracing::warn!("Entry '{}' has non-finite sum {}", entry.category, entry.sum);
                return Err(ChartError::NonFiniteSum {
                    category: entry.category.clone(),
                    sum: entry.sum,
                });
            }
            min = min.min(entry.sum);
            max = max.max(entry.sum);
        }

        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Order of magnitude of the larger bound: digit count of its integer part, minus one
    pub fn power(&self) -> i32 {
        let largest = self.max.abs().max(self.min.abs());
        digit_count(largest) - 1
    }
}

/// Number of digits in `floor(value)` (at least one)
fn digit_count(value: f64) -> i32 {
    let mut n = value.floor();
    let mut digits = 1;
    while n >= 10.0 {
        n = (n / 10.0).floor();
        digits += 1;
    }
    digits
}

/// `mantissa * 10^exponent`, rounded once to the nearest `f64`
fn decimal(mantissa: u64, exponent: i32) -> f64 {
    format!("{mantissa}e{exponent}")
        .parse()
        .unwrap_or_else(|_| mantissa as f64 * 10f64.powi(exponent))
}

/// First digit of `floor(value)`
fn leading_digit(value: f64) -> u32 {
    let mut n = value.floor();
    while n >= 10.0 {
        n = (n / 10.0).floor();
    }
    n as u32
}

// ============================================================================
// TICK GENERATION
// ============================================================================

/// How many ticks are emitted per unit of `10^power`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDensity {
    /// Whole and half units
    Half,
    /// Whole units only
    Whole,
}

/// Ordered tick values for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct TickValues {
    values: Vec<f64>,
    density_checked: bool,
}

impl TickValues {
    /// Generate round-number ticks spanning `domain`, ascending
    pub fn generate(domain: Domain) -> Self {
        let power = domain.power();

        // A zero bound contributes nothing beyond the zero tick
        let positive_count = if domain.max > 0.0 {
            1 + leading_digit(domain.max)
        } else {
            1
        };
        let negative_count = if domain.min < 0.0 {
            leading_digit(domain.min.abs())
        } else {
            0
        };

        let density = if positive_count + negative_count < 5 {
            TickDensity::Half
        } else {
            TickDensity::Whole
        };
        let half = density == TickDensity::Half;

        // Half steps are (2i + 1) * 5 * 10^(power - 1)
        let whole_tick = |i: u32| decimal(u64::from(i), power);
        let half_tick = |i: u32| decimal(u64::from(2 * i + 1) * 5, power - 1);

        let mut values = Vec::with_capacity(((positive_count + negative_count) * 2) as usize);

        for i in (1..=negative_count).rev() {
            if half {
                values.push(-half_tick(i));
            }
            values.push(-whole_tick(i));
        }

        for i in 0..positive_count {
            values.push(whole_tick(i));
            if half && domain.max > 0.0 {
                values.push(half_tick(i));
            }
        }

        Self {
            values,
            density_checked: false,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the density reducer already ran on this set
    pub fn is_density_checked(&self) -> bool {
        self.density_checked
    }

    /// Longest formatted label; the first one wins on ties
    pub fn longest_label(&self, formatter: &dyn TickLabelFormatter) -> Option<String> {
        self.values
            .iter()
            .map(|&v| formatter.format(v))
            .fold(None, |longest: Option<String>, label| match longest {
                Some(current) if current.chars().count() >= label.chars().count() => Some(current),
                _ => Some(label),
            })
    }

    /// Drop every odd-indexed tick when the longest label is wider than one tick slot.
    ///
    /// Runs at most once: a set that has been through the reducer is returned unchanged.
    pub fn reduce_density(
        mut self,
        available_width: f64,
        formatter: &dyn TickLabelFormatter,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        if self.density_checked || self.values.is_empty() {
            return self;
        }
        self.density_checked = true;

        let tick_width = available_width / self.values.len() as f64;
        let label_width = self
            .longest_label(formatter)
            .map(|label| measurer.measure(&label))
            .unwrap_or(0.0);

        if tick_width < label_width {
            tracing::debug!(
                "Thinning {} ticks: label {}px exceeds slot {}px",
                self.values.len(),
                label_width,
                tick_width
            );
            self.values = self
                .values
                .into_iter()
                .enumerate()
                .filter(|(i, _)| i % 2 == 0)
                .map(|(_, v)| v)
                .collect();
        }

        self
    }
}

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

/// Linear scale (D3-style continuous scale).
///
/// Values are normalized by the domain span, so a positive-only domain maps
/// `v` to `range * v / max`. A zero-width domain maps everything to the range start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Horizontal scale for a chart domain over `[0, width]`
    pub fn for_domain(domain: Domain, width: f64) -> Self {
        Self::new().domain(domain.min, domain.max).range(0.0, width)
    }

    /// Pixel length of a bar for `value`, measured from zero
    pub fn extent(&self, value: f64) -> f64 {
        (self.scale(value) - self.scale(0.0)).abs()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return r_min;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }
}

// ============================================================================
// POSITIONED TICKS
// ============================================================================

/// Tick value with its axis position and label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Place tick values on the axis
pub fn position_ticks(
    values: &[f64],
    scale: &LinearScale,
    formatter: &dyn TickLabelFormatter,
) -> Vec<Tick> {
    values
        .iter()
        .map(|&value| Tick {
            value,
            x: scale.scale(value),
            y: 0.0,
            label: formatter.format(value),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::CharWidthMeasurer;
    use barviz_core::{DataPoint, PlainTickFormatter};

    fn entries(sums: &[f64]) -> Vec<Entry> {
        sums.iter()
            .enumerate()
            .map(|(i, &s)| Entry::new(format!("c{}", i), vec![DataPoint::new(0, s)]))
            .collect()
    }

    #[test]
    fn test_domain_includes_zero() {
        let d = Domain::resolve(&entries(&[120.0, -30.0, 45.0])).unwrap();
        assert_eq!(d, Domain { min: -30.0, max: 120.0 });

        let d = Domain::resolve(&entries(&[5.0, 8.0])).unwrap();
        assert_eq!(d, Domain { min: 0.0, max: 8.0 });

        let d = Domain::resolve(&entries(&[-5.0, -8.0])).unwrap();
        assert_eq!(d, Domain { min: -8.0, max: 0.0 });
    }

    #[test]
    fn test_domain_rejects_empty() {
        assert_eq!(Domain::resolve(&[]), Err(ChartError::EmptyEntries));
    }

    #[test]
    fn test_domain_rejects_nan() {
        let err = Domain::resolve(&entries(&[1.0, f64::NAN])).unwrap_err();
        assert!(matches!(err, ChartError::NonFiniteSum { ref category, .. } if category == "c1"));
    }

    #[test]
    fn test_power() {
        assert_eq!(Domain::new(0.0, 450.0).power(), 2);
        assert_eq!(Domain::new(-2.0, 5.0).power(), 0);
        assert_eq!(Domain::new(-1200.0, 30.0).power(), 3);
        assert_eq!(Domain::new(0.0, 0.4).power(), 0);
        assert_eq!(Domain::new(0.0, 10.0).power(), 1);
    }

    #[test]
    fn test_ticks_whole_units() {
        let ticks = TickValues::generate(Domain::new(0.0, 450.0));
        assert_eq!(ticks.values(), &[0.0, 100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_ticks_mixed_sign() {
        let ticks = TickValues::generate(Domain::new(-2.0, 5.0));
        assert_eq!(ticks.values(), &[-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let ticks = TickValues::generate(Domain::new(-30.0, 120.0));
        assert_eq!(ticks.values(), &[-300.0, -200.0, -100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_ticks_half_units() {
        let ticks = TickValues::generate(Domain::new(0.0, 3.0));
        assert_eq!(ticks.values(), &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);

        let ticks = TickValues::generate(Domain::new(-1.0, 20.0));
        assert_eq!(ticks.values(), &[-15.0, -10.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    }

    #[test]
    fn test_ticks_zero_bounds() {
        let ticks = TickValues::generate(Domain::new(-3.0, 0.0));
        assert_eq!(ticks.values(), &[-3.5, -3.0, -2.5, -2.0, -1.5, -1.0, 0.0]);

        let ticks = TickValues::generate(Domain::new(0.0, 0.0));
        assert_eq!(ticks.values(), &[0.0]);
    }

    #[test]
    fn test_ticks_exact_at_large_magnitudes() {
        let ticks = TickValues::generate(Domain::new(0.0, 1e23));
        assert_eq!(ticks.values(), &[0.0, 5e22, 1e23, 1.5e23]);
        assert_eq!(PlainTickFormatter.format(ticks.values()[3]), "150000000000000000000000");

        let ticks = TickValues::generate(Domain::new(0.0, 3e25));
        assert!(ticks.values().contains(&1.5e25));
        assert_eq!(ticks.values().last(), Some(&3.5e25));
    }

    #[test]
    fn test_longest_label_first_wins() {
        let ticks = TickValues::generate(Domain::new(-2.0, 5.0));
        assert_eq!(ticks.longest_label(&PlainTickFormatter).as_deref(), Some("-2"));
    }

    #[test]
    fn test_reduce_density_drops_odd_indices() {
        let ticks = TickValues::generate(Domain::new(0.0, 3.0));
        // 8 ticks over 80px = 10px slots; "0.5" at 7px/char = 21px
        let reduced = ticks.reduce_density(80.0, &PlainTickFormatter, &CharWidthMeasurer::new(7.0));
        assert_eq!(reduced.values(), &[0.0, 1.0, 2.0, 3.0]);
        assert!(reduced.is_density_checked());
    }

    #[test]
    fn test_reduce_density_keeps_fitting_labels() {
        let ticks = TickValues::generate(Domain::new(0.0, 450.0));
        let reduced = ticks
            .clone()
            .reduce_density(500.0, &PlainTickFormatter, &CharWidthMeasurer::new(7.0));
        assert_eq!(reduced.values(), ticks.values());
    }

    #[test]
    fn test_reduce_density_single_pass() {
        let measurer = CharWidthMeasurer::new(7.0);
        let once = TickValues::generate(Domain::new(0.0, 3.0))
            .reduce_density(20.0, &PlainTickFormatter, &measurer);
        let twice = once.clone().reduce_density(20.0, &PlainTickFormatter, &measurer);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 4);
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_scale_zero_span() {
        let scale = LinearScale::for_domain(Domain::new(0.0, 0.0), 300.0);
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.extent(0.0), 0.0);
    }

    #[test]
    fn test_scale_all_negative() {
        let scale = LinearScale::for_domain(Domain::new(-8.0, 0.0), 400.0);
        assert_eq!(scale.scale(-8.0), 0.0);
        assert_eq!(scale.scale(0.0), 400.0);
        assert_eq!(scale.extent(-4.0), 200.0);
    }

    #[test]
    fn test_position_ticks() {
        let scale = LinearScale::for_domain(Domain::new(0.0, 400.0), 800.0);
        let ticks = position_ticks(&[0.0, 100.0], &scale, &PlainTickFormatter);
        assert_eq!(ticks[1].x, 200.0);
        assert_eq!(ticks[1].y, 0.0);
        assert_eq!(ticks[1].label, "100");
    }
}
