//! Structs and methods for speed distributions and observer bias.
use crate::errors::RelayError;
use rand::Rng;

/// Discrete probability mass function over observed speeds.
/// Values are unique and sorted ascending; probabilities are non-negative
/// and sum to one after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
    mass: Vec<(f64, f64)>,
}

impl Pmf {
    /// Build an empirical distribution from a sample by counting occurrences
    /// of each distinct value and normalizing.  An empty sample carries no
    /// mass and fails with [DegenerateDist](../errors/enum.RelayError.html).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relay::prelude::*;
    /// let pmf = Pmf::from_values(&vec![5.0, 5.0, 10.0, 10.0]).unwrap();
    /// assert_eq!(0.5, pmf.prob(5.0));
    /// ```
    pub fn from_values(obs: &[f64]) -> Result<Self, RelayError> {
        let mut vals = obs.to_vec();
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut mass: Vec<(f64, f64)> = Vec::new();
        for v in vals {
            match mass.last_mut() {
                Some(tally) if tally.0 == v => tally.1 += 1.0,
                _ => mass.push((v, 1.0)),
            }
        }
        Pmf { mass }.normalize()
    }

    /// Rescale so the probabilities sum to one, consuming the intermediate
    /// weighting.  Zero or non-finite total mass means no valid distribution
    /// exists and the call fails rather than spreading NaNs.
    pub fn normalize(mut self) -> Result<Self, RelayError> {
        let total = self.total();
        if !(total > 0.0) || !total.is_finite() {
            return Err(RelayError::DegenerateDist);
        }
        for m in &mut self.mass {
            m.1 /= total;
        }
        Ok(self)
    }

    /// Reweight the distribution as seen by an observer moving at `observer`
    /// mph.  The chance of passing (or being passed by) a runner is
    /// proportional to the difference in speed, so each probability is
    /// multiplied by `|value - observer|` before renormalizing.  The
    /// receiver is untouched; a fresh distribution is returned.
    ///
    /// A value equal to the observer speed keeps its entry at probability
    /// zero.  If every value matches the observer speed the reweighted mass
    /// is zero and the call fails with
    /// [DegenerateDist](../errors/enum.RelayError.html).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relay::prelude::*;
    /// let actual = Pmf::from_values(&vec![5.0, 7.5, 7.5, 10.0]).unwrap();
    /// let observed = actual.bias(7.5).unwrap();
    /// assert_eq!(0.0, observed.prob(7.5));
    /// assert_eq!(0.5, observed.prob(10.0));
    /// ```
    pub fn bias(&self, observer: f64) -> Result<Self, RelayError> {
        let mut new = self.clone();
        for m in &mut new.mass {
            let diff = (m.0 - observer).abs();
            if diff == 0.0 {
                log::debug!("Observer speed {} matches a sampled value.", observer);
            }
            m.1 *= diff;
        }
        new.normalize()
    }

    /// Probability mass at `value`, zero for values outside the support.
    pub fn prob(&self, value: f64) -> f64 {
        let sub: Vec<(f64, f64)> = self.mass.iter().cloned().filter(|x| x.0 == value).collect();
        let mut res = 0.0;
        if !sub.is_empty() {
            res = sub[0].1;
        }
        res
    }

    /// Sum of probability mass over the support.
    pub fn total(&self) -> f64 {
        self.mass.iter().map(|x| x.1).sum()
    }

    /// Probability-weighted mean of the distribution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relay::prelude::*;
    /// let pmf = Pmf::from_values(&vec![4.0, 8.0]).unwrap();
    /// assert_eq!(6.0, pmf.mean());
    /// ```
    pub fn mean(&self) -> f64 {
        self.mass.iter().map(|x| x.0 * x.1).sum()
    }

    /// Draw one value from the distribution, each with probability equal to
    /// its mass.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let roll = rng.gen_range(0.0..1.0);
        let mut cum = 0.0;
        for (val, prob) in &self.mass {
            cum += prob;
            if cum >= roll {
                return *val;
            }
        }
        self.mass[self.mass.len() - 1].0
    }

    /// The `(value, probability)` pairs in ascending value order.
    pub fn items(&self) -> &[(f64, f64)] {
        &self.mass
    }

    /// Accumulate the mass in ascending value order into a cumulative
    /// distribution.
    pub fn cdf(&self) -> Cdf {
        let mut points = Vec::with_capacity(self.mass.len());
        let mut cum = 0.0;
        for (val, prob) in &self.mass {
            cum += prob;
            points.push((*val, cum));
        }
        Cdf { points }
    }
}

/// Cumulative distribution function derived from a [Pmf](struct.Pmf.html).
/// Points are sorted ascending by value, the cumulative probabilities are
/// non-decreasing, and the final point reaches one.  Always non-empty, since
/// every `Pmf` holds mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    points: Vec<(f64, f64)>,
}

impl Cdf {
    /// The `(value, cumulative probability)` pairs in ascending value order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Cumulative probability at `value`: zero below the support, one at or
    /// above its maximum.
    pub fn prob(&self, value: f64) -> f64 {
        let sub: Vec<(f64, f64)> = self
            .points
            .iter()
            .cloned()
            .filter(|x| x.0 <= value)
            .collect();
        let mut res = 0.0;
        if !sub.is_empty() {
            res = sub[sub.len() - 1].1;
        }
        res
    }

    /// Smallest value whose cumulative probability reaches `thresh`.
    /// `value(0.5)` is the median of the distribution.
    pub fn value(&self, thresh: f64) -> f64 {
        for (val, cum) in &self.points {
            if *cum >= thresh {
                return *val;
            }
        }
        self.points[self.points.len() - 1].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn flat() -> Pmf {
        // equal mass on 2, 4, 6, 8
        Pmf::from_values(&[2.0, 4.0, 6.0, 8.0]).unwrap()
    }

    #[test]
    fn empirical_counts_normalize() {
        let pmf = Pmf::from_values(&[5.0, 5.0, 7.5, 10.0]).unwrap();
        assert_eq!(0.5, pmf.prob(5.0));
        assert_eq!(0.25, pmf.prob(7.5));
        assert_eq!(0.25, pmf.prob(10.0));
        assert_eq!(0.0, pmf.prob(6.0));
        assert!((pmf.total() - 1.0).abs() < TOL);
    }

    #[test]
    fn empty_sample_is_degenerate() {
        assert_eq!(Err(RelayError::DegenerateDist), Pmf::from_values(&[]));
    }

    #[test]
    fn biased_mass_sums_to_one() {
        let pmf = Pmf::from_values(&[4.1, 5.5, 5.5, 6.2, 7.9, 9.3]).unwrap();
        for observer in &[5.0, 7.5, 10.0] {
            let biased = pmf.bias(*observer).unwrap();
            assert!((biased.total() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn bias_leaves_input_untouched() {
        let pmf = flat();
        let before = pmf.clone();
        pmf.bias(5.0).unwrap();
        assert_eq!(before, pmf);
    }

    #[test]
    fn observer_speed_gets_zero_mass() {
        let biased = flat().bias(4.0).unwrap();
        // the entry survives at zero mass rather than dropping out
        assert!(biased.items().iter().any(|x| x.0 == 4.0 && x.1 == 0.0));
        assert_eq!(0.0, biased.prob(4.0));
        assert!((biased.total() - 1.0).abs() < TOL);
    }

    #[test]
    fn observers_at_different_speeds_see_different_distributions() {
        let pmf = flat();
        assert_ne!(pmf.bias(5.0).unwrap(), pmf.bias(7.5).unwrap());
    }

    #[test]
    fn mass_grows_with_distance_from_observer() {
        // 2 and 8 lie three mph from the observer, 4 and 6 only one
        let biased = flat().bias(5.0).unwrap();
        assert!(biased.prob(2.0) > biased.prob(4.0));
        assert!(biased.prob(8.0) > biased.prob(6.0));
    }

    #[test]
    fn symmetric_case_is_unchanged() {
        let pmf = Pmf::from_values(&[5.0, 10.0]).unwrap();
        let biased = pmf.bias(7.5).unwrap();
        assert_eq!(0.5, biased.prob(5.0));
        assert_eq!(0.5, biased.prob(10.0));
    }

    #[test]
    fn middle_mass_moves_to_the_tails() {
        // {5: 0.25, 7.5: 0.5, 10: 0.25} observed at 7.5 mph
        let pmf = Pmf::from_values(&[5.0, 7.5, 7.5, 10.0]).unwrap();
        let biased = pmf.bias(7.5).unwrap();
        assert_eq!(0.5, biased.prob(5.0));
        assert_eq!(0.0, biased.prob(7.5));
        assert_eq!(0.5, biased.prob(10.0));
    }

    #[test]
    fn matching_every_value_is_degenerate() {
        let pmf = Pmf::from_values(&[8.0, 8.0]).unwrap();
        assert_eq!(Err(RelayError::DegenerateDist), pmf.bias(8.0));
    }

    #[test]
    fn cdf_is_nondecreasing_and_ends_at_one() {
        let cdf = flat().bias(5.0).unwrap().cdf();
        let points = cdf.points();
        for pair in points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 <= pair[1].1);
        }
        assert!((points[points.len() - 1].1 - 1.0).abs() < TOL);
    }

    #[test]
    fn cdf_lookups() {
        let cdf = Pmf::from_values(&[5.0, 5.0, 7.5, 10.0]).unwrap().cdf();
        assert_eq!(0.0, cdf.prob(4.9));
        assert_eq!(0.5, cdf.prob(5.0));
        assert_eq!(0.75, cdf.prob(9.0));
        assert_eq!(1.0, cdf.prob(12.0));
        assert_eq!(5.0, cdf.value(0.5));
        assert_eq!(10.0, cdf.value(0.9));
    }

    #[test]
    fn sample_stays_on_the_support() {
        let pmf = flat();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let v = pmf.sample(&mut rng);
            assert!(pmf.prob(v) > 0.0);
        }
    }
}
