use rand::Rng;
use rand::distr::Distribution;

use super::Generator;
use crate::Outcome;
use crate::Probability;
use crate::Search;
use crate::Settings;
use crate::ValidationError;

/// Weighted sampler over a finite table of outcomes.
///
/// A `Discrete` always holds a validated, non-empty table: construction and
/// [`Discrete::configure`] either commit a complete new table or leave the
/// sampler untouched.
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    settings: Settings,
    values: Vec<T>,
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
    /// Last entry with non-zero probability, returned when a draw lands past
    /// the end of a table that sums to slightly less than 1.
    fallback: usize,
}

impl<T> Discrete<T>
where
    T: Outcome + PartialEq,
{
    #[inline]
    pub fn new<I, P>(choices: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (T, P)>,
        P: Probability,
    {
        Self::with_settings(Settings::default(), choices)
    }

    pub fn with_settings<I, P>(settings: Settings, choices: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (T, P)>,
        P: Probability,
    {
        let (values, probabilities): (Vec<T>, Vec<Option<f64>>) = choices
            .into_iter()
            .map(|(value, probability)| (value, probability.probability()))
            .unzip();

        let probabilities = match validate(&settings, P::EPSILON, &values, &probabilities) {
            Ok(probabilities) => probabilities,
            Err(error) => {
                tracing::debug!(entries = values.len(), %error, "rejected probability table");
                return Err(error);
            }
        };

        let cumulative = probabilities
            .iter()
            .scan(0.0, |sum, probability| {
                *sum += probability;
                Some(*sum)
            })
            .collect::<Vec<_>>();

        // Non-empty and summing to ~1, so some entry is positive.
        let fallback = probabilities
            .iter()
            .rposition(|probability| *probability > 0.0)
            .unwrap_or(probabilities.len() - 1);

        tracing::debug!(
            entries = values.len(),
            total = cumulative[cumulative.len() - 1],
            search = ?settings.search,
            "configured probability table"
        );

        Ok(Self {
            settings,
            values,
            probabilities,
            cumulative,
            fallback,
        })
    }

    /// Replaces the whole table, keeping the current settings.
    ///
    /// On error the previous table stays in effect.
    pub fn configure<I, P>(&mut self, choices: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (T, P)>,
        P: Probability,
    {
        *self = Self::with_settings(self.settings.clone(), choices)?;
        Ok(())
    }
}

/// Checks, in order: every entry is numeric, outcomes are distinct, every
/// probability is in `[0, 1]`, and the probabilities sum to 1.
fn validate<T>(
    settings: &Settings,
    epsilon: f64,
    values: &[T],
    probabilities: &[Option<f64>],
) -> Result<Vec<f64>, ValidationError>
where
    T: Outcome + PartialEq,
{
    if let Some(index) = values
        .iter()
        .zip(probabilities)
        .position(|(value, probability)| !value.is_numeric() || probability.is_none())
    {
        return Err(ValidationError::NonNumeric { index });
    }

    if let Some(index) = (1..values.len()).find(|&i| values[..i].contains(&values[i])) {
        return Err(ValidationError::DuplicateOutcome { index });
    }

    let probabilities = probabilities.iter().flatten().copied().collect::<Vec<_>>();

    if let Some((index, &probability)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, probability)| !(0.0..=1.0).contains(*probability))
    {
        return Err(ValidationError::OutOfRange { index, probability });
    }

    let sum = probabilities.iter().fold(0.0, |sum, probability| sum + probability);
    if probabilities.is_empty() || !settings.sums_to_one(sum, epsilon) {
        return Err(ValidationError::SumMismatch { sum });
    }

    Ok(probabilities)
}

impl<T> Discrete<T> {
    /// Draws one outcome using a uniform value from `[0, 1)`.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        let u = rng.random::<f64>();
        self.values[self.locate(u)].clone()
    }

    /// Index of the first entry whose cumulative probability exceeds `u`.
    #[inline]
    fn locate(&self, u: f64) -> usize {
        let index = match self.settings.search {
            Search::Linear => self.cumulative.iter().position(|total| u < *total),
            Search::Binary => Some(self.cumulative.partition_point(|total| *total <= u))
                .filter(|index| *index < self.cumulative.len()),
        };

        index.unwrap_or_else(|| {
            tracing::trace!(u, fallback = self.fallback, "draw past end of cumulative table");
            self.fallback
        })
    }

    pub fn outcomes(&self) -> &[T] {
        &self.values
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: an empty table never validates.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Generator for Discrete<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next<R: Rng>(&mut self, rng: &mut R) -> Self::Item {
        self.draw(rng)
    }
}

impl<T> Distribution<T> for Discrete<T>
where
    T: Clone,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.draw(rng)
    }
}
