use rand::Rng;

mod discrete;
mod shared;

pub use discrete::Discrete;
pub use shared::Shared;

pub trait Generator {
    type Item;
    fn next<R: Rng>(&mut self, rng: &mut R) -> Self::Item;
}
