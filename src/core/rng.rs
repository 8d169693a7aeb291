//! RNG module - seedable randomness and the piece-draw seam.
//!
//! The controller never touches a process-wide random source; it draws
//! from a `PieceSource` injected at construction, so tests can force
//! deterministic piece sequences.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Where the controller draws its next piece kind from.
#[derive(Debug, Clone)]
pub struct PieceSource {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    Random(SimpleRng),
    Scripted { kinds: Vec<PieceKind>, next: usize },
}

impl PieceSource {
    /// Uniform draws among the seven kinds from a seeded generator.
    pub fn random(seed: u32) -> Self {
        Self {
            mode: Mode::Random(SimpleRng::new(seed)),
        }
    }

    /// Replay a fixed sequence of kinds, cycling when exhausted.
    ///
    /// `kinds` must be non-empty.
    pub fn scripted(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted source needs at least one kind");
        Self {
            mode: Mode::Scripted { kinds, next: 0 },
        }
    }

    /// Draw the next piece kind.
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.mode {
            Mode::Random(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            Mode::Scripted { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next += 1;
                kind
            }
        }
    }
}
