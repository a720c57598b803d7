use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;

use rand::Rng;

use super::Discrete;
use crate::Outcome;
use crate::Probability;
use crate::ValidationError;

/// A [`Discrete`] sampler that many threads can draw from while another
/// thread swaps in a new table.
///
/// A draw always sees either the old or the new table, never a mix.
#[derive(Debug)]
pub struct Shared<T> {
    inner: RwLock<Discrete<T>>,
}

impl<T> Shared<T> {
    pub fn new(sampler: Discrete<T>) -> Self {
        Self {
            inner: RwLock::new(sampler),
        }
    }

    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.read().draw(rng)
    }

    pub fn snapshot(&self) -> Discrete<T>
    where
        T: Clone,
    {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Discrete<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Shared<T>
where
    T: Outcome + PartialEq,
{
    /// Validates outside the lock, then replaces the table under it.
    pub fn configure<I, P>(&self, choices: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (T, P)>,
        P: Probability,
    {
        let settings = self.read().settings().clone();
        let sampler = Discrete::with_settings(settings, choices)?;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = sampler;
        Ok(())
    }
}

impl<T> From<Discrete<T>> for Shared<T> {
    fn from(sampler: Discrete<T>) -> Self {
        Self::new(sampler)
    }
}
