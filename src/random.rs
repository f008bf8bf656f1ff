use rand::seq::SliceRandom;
use rand::Rng;

/// Random pick and shuffle over slices. The plain variants draw from
/// `thread_rng`; the `_with` variants accept a caller RNG so tests can stay
/// deterministic.
pub trait RandomExt<T> {
    fn pick(&self) -> Option<&T>;
    fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;
    fn shuffle_in_place(&mut self);
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);
    fn shuffled(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> RandomExt<T> for [T] {
    fn pick(&self) -> Option<&T> {
        self.pick_with(&mut rand::thread_rng())
    }

    fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.choose(rng)
    }

    fn shuffle_in_place(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle(rng);
    }

    fn shuffled(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        copy.shuffle_in_place();
        copy
    }
}
