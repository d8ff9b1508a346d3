use crate::document::FrequencyMap;
use std::collections::HashSet;

/// Tokens present in both maps.
pub fn common_keys<'a>(a: &'a FrequencyMap, b: &FrequencyMap) -> HashSet<&'a str> {
    a.iter()
        .filter(|(key, count)| **count > 0 && b.get(*key).is_some_and(|c| *c > 0))
        .map(|(key, _)| key.as_str())
        .collect()
}

/// Sum of all counts.
pub fn freq_sum(freq: &FrequencyMap) -> f64 {
    freq.values().map(|&count| count as f64).sum()
}

/// Sum of squared counts.
pub fn freq_sum_squares(freq: &FrequencyMap) -> f64 {
    freq.values().map(|&count| (count as f64).powi(2)).sum()
}

/// Sum of `a[k] * b[k]` over the common keys.
pub fn freq_product(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    a.iter()
        .filter_map(|(key, &count)| b.get(key).map(|&other| (count * other) as f64))
        .sum()
}

/// The intermediate sums behind one [`pearson`] evaluation.
///
/// Exposed so callers can report or debug individual terms of the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySums {
    pub sum_a: f64,
    pub sum_b: f64,
    pub sum_squares_a: f64,
    pub sum_squares_b: f64,
    pub product: f64,
    /// Key count of the first map
    pub n: f64,
}

impl FrequencySums {
    pub fn compute(a: &FrequencyMap, b: &FrequencyMap) -> Self {
        Self {
            sum_a: freq_sum(a),
            sum_b: freq_sum(b),
            sum_squares_a: freq_sum_squares(a),
            sum_squares_b: freq_sum_squares(b),
            product: freq_product(a, b),
            n: a.len() as f64,
        }
    }

    pub fn numerator(&self) -> f64 {
        self.product - (self.sum_a * self.sum_b) / self.n
    }

    pub fn denominator(&self) -> f64 {
        ((self.sum_squares_a - self.sum_a.powi(2) / self.n)
            * (self.sum_squares_b - self.sum_b.powi(2) / self.n))
            .sqrt()
    }

    /// Evaluate `num / den`, or 0 when the first map is empty or `den == 0`.
    ///
    /// A negative radicand leaves `den` NaN and the NaN is returned as-is.
    pub fn correlation(&self) -> f64 {
        if self.n == 0.0 {
            return 0.0;
        }

        let den = self.denominator();
        if den == 0.0 {
            return 0.0;
        }

        self.numerator() / den
    }
}

/// Pearson correlation of two frequency maps with `n = |keys(a)|`.
///
/// ```text
/// num = product(a,b) - sum(a)*sum(b)/n
/// den = sqrt((sumSquares(a) - sum(a)^2/n) * (sumSquares(b) - sum(b)^2/n))
/// ```
///
/// Returns 0 when `a` is empty or the denominator is zero. The result is
/// usually in [-1, 1] but the asymmetric `n` does not guarantee it: when one
/// factor under the square root is negative the result is NaN.
pub fn pearson(a: &FrequencyMap, b: &FrequencyMap) -> f64 {
    FrequencySums::compute(a, b).correlation()
}
