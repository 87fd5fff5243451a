// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sources of uniform draws in [0, 1).  The fern is only reproducible
//! if the source is, so there is no process-wide generator: every
//! renderer is handed the source it should use.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Anything that can hand out a stream of numbers in [0, 1).
pub trait DrawSource {
    /// The next draw.
    fn draw(&mut self) -> f64;
}

impl<'a, D: DrawSource + ?Sized> DrawSource for &'a mut D {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// A seeded pseudo-random source.  The same seed always yields the
/// same sequence of draws, on every platform.
pub struct SeededDraws(Uniform<f64>, StdRng);

impl SeededDraws {
    /// Seed the generator with `seed`.
    pub fn new(seed: u64) -> Self {
        SeededDraws(Uniform::new(0.0_f64, 1.0), StdRng::seed_from_u64(seed))
    }
}

impl DrawSource for SeededDraws {
    fn draw(&mut self) -> f64 {
        self.0.sample(&mut self.1)
    }
}

/// Replays a fixed list of draws, starting over when it runs out.
/// An empty list replays zero forever.
pub struct ReplayDraws {
    draws: Vec<f64>,
    next: usize,
}

impl ReplayDraws {
    /// Replay `draws` in order.
    pub fn new(draws: Vec<f64>) -> Self {
        ReplayDraws { draws, next: 0 }
    }
}

impl DrawSource for ReplayDraws {
    fn draw(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let r = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_stay_in_the_unit_interval() {
        let mut draws = SeededDraws::new(42);
        for _ in 0..10_000 {
            let r = draws.draw();
            assert!(r >= 0.0 && r < 1.0, "draw {} out of range", r);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededDraws::new(7);
        let mut b = SeededDraws::new(7);
        for _ in 0..1000 {
            assert_eq!(a.draw().to_bits(), b.draw().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededDraws::new(1);
        let mut b = SeededDraws::new(2);
        let same = (0..100).filter(|_| a.draw() == b.draw()).count();
        assert!(same < 100);
    }

    #[test]
    fn replay_cycles() {
        let mut draws = ReplayDraws::new(vec![0.1, 0.5, 0.9]);
        let seen: Vec<f64> = (0..7).map(|_| draws.draw()).collect();
        assert_eq!(seen, vec![0.1, 0.5, 0.9, 0.1, 0.5, 0.9, 0.1]);
    }

    #[test]
    fn empty_replay_yields_zero() {
        let mut draws = ReplayDraws::new(vec![]);
        assert_eq!(draws.draw(), 0.0);
        assert_eq!(draws.draw(), 0.0);
    }

    #[test]
    fn borrowed_sources_advance_the_original() {
        fn first<D: DrawSource>(mut source: D) -> f64 {
            source.draw()
        }
        let mut draws = ReplayDraws::new(vec![0.25, 0.75]);
        assert_eq!(first(&mut draws), 0.25);
        assert_eq!(draws.draw(), 0.75);
    }
}
