//! Sources of node priorities.
//!
//! The shape of a treap is decided entirely by the priorities handed to its nodes. Uniform random
//! priorities give an expected height proportional to the logarithm of the number of keys. A
//! deterministic generator can be injected instead to reproduce an exact tree shape.

use log::debug;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::error;
use std::fmt;
use std::result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An all-zero seed makes the xorshift generator emit only zeros.
    ZeroSeed,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroSeed => write!(f, "priority generator seed must not be all zeros"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Produces the priority assigned to each newly created node.
///
/// Any `FnMut() -> u32` closure is a generator, which makes it easy to hand a treap a fixed
/// sequence of priorities.
///
/// # Examples
///
/// ```
/// use treap_collections::priority::PriorityGenerator;
///
/// let mut priorities = vec![10u32, 8].into_iter();
/// let mut generator = move || priorities.next().unwrap_or(0);
/// assert_eq!(generator.next_priority(), 10);
/// assert_eq!(generator.next_priority(), 8);
/// assert_eq!(generator.next_priority(), 0);
/// ```
pub trait PriorityGenerator {
    fn next_priority(&mut self) -> u32;
}

impl<F> PriorityGenerator for F
where
    F: FnMut() -> u32,
{
    fn next_priority(&mut self) -> u32 {
        self()
    }
}

/// A generator of uniformly distributed priorities backed by an `XorShiftRng`.
pub struct RandomPriority {
    rng: XorShiftRng,
}

impl RandomPriority {
    /// Constructs a generator seeded from the thread-local random number generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::priority::{PriorityGenerator, RandomPriority};
    ///
    /// let mut generator = RandomPriority::new();
    /// let _ = generator.next_priority();
    /// ```
    pub fn new() -> Self {
        debug!("seeding priority generator from the thread rng");
        RandomPriority {
            rng: rand::weak_rng(),
        }
    }

    /// Constructs a generator from a fixed seed. Two generators built from the same seed produce
    /// the same priorities. Returns an error if every word of the seed is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::priority::{Error, PriorityGenerator, RandomPriority};
    ///
    /// let mut a = RandomPriority::from_seed([1, 2, 3, 4]).unwrap();
    /// let mut b = RandomPriority::from_seed([1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.next_priority(), b.next_priority());
    ///
    /// assert_eq!(RandomPriority::from_seed([0; 4]).err(), Some(Error::ZeroSeed));
    /// ```
    pub fn from_seed(seed: [u32; 4]) -> Result<Self> {
        if seed.iter().all(|word| *word == 0) {
            return Err(Error::ZeroSeed);
        }
        debug!("seeding priority generator with {:?}", seed);
        Ok(RandomPriority {
            rng: SeedableRng::from_seed(seed),
        })
    }
}

impl Default for RandomPriority {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityGenerator for RandomPriority {
    fn next_priority(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
