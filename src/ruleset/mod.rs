//! Ruleset: ordered composition of one generator and zero-or-more passes.
//!
//! A ruleset owns the whole recipe for producing a terrain: the initial
//! generator runs first, then each pass is applied in insertion order.

mod config;

use thiserror::Error;

use crate::generator::{GeneratorError, InitialGenerator, RandomHeightmap};
use crate::pass::Pass;
use crate::terrain::{HeightGrid, MapContext};

pub use config::RulesetConfig;

/// Errors that can occur when running or editing a ruleset.
#[derive(Error, Debug)]
pub enum RulesetError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("generator produced a {actual_width}x{actual_height} grid but the context expects {expected_width}x{expected_height}")]
    ExtentMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("pass index {0} out of range (pass count {1})")]
    PassIndexOutOfRange(usize, usize),
}

/// An ordered terrain-generation recipe: one initial generator followed by
/// a sequence of passes.
///
/// Passes execute in exactly the sequence order; each pass may depend on the
/// previous pass's output. A ruleset always has a generator (construction
/// requires one, and `Default` supplies a [`RandomHeightmap`]).
pub struct Ruleset {
    generator: Box<dyn InitialGenerator>,
    passes: Vec<Box<dyn Pass>>,
    context: MapContext,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::with_generator(Box::new(RandomHeightmap::default()))
    }
}

impl Ruleset {
    /// Creates a ruleset with the given context and generator and no passes.
    pub fn new(context: MapContext, generator: Box<dyn InitialGenerator>) -> Self {
        Self {
            generator,
            passes: Vec::new(),
            context,
        }
    }

    /// Creates a ruleset whose context is derived from the generator's own
    /// extents and height bounds.
    pub fn with_generator(generator: Box<dyn InitialGenerator>) -> Self {
        let config = generator.config();
        let (width, height) = config.extent();
        let (min_height, max_height) = config.bounds();
        Self::new(
            MapContext::new(width, height, min_height, max_height),
            generator,
        )
    }

    /// Returns the generation context shared by all passes.
    pub fn context(&self) -> &MapContext {
        &self.context
    }

    /// Replaces the initial generator.
    pub fn set_generator(&mut self, generator: Box<dyn InitialGenerator>) {
        self.generator = generator;
    }

    /// Returns the initial generator.
    pub fn generator(&self) -> &dyn InitialGenerator {
        self.generator.as_ref()
    }

    /// Returns the number of passes.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Returns the pass at the given index, if any.
    pub fn pass(&self, index: usize) -> Option<&dyn Pass> {
        self.passes.get(index).map(|p| p.as_ref())
    }

    /// Returns the pass names in execution order.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Appends a pass; it will run after all currently registered passes.
    pub fn add_pass(&mut self, pass: Box<dyn Pass>) {
        self.passes.push(pass);
    }

    /// Removes and returns the pass at the given index.
    pub fn remove_pass(&mut self, index: usize) -> Result<Box<dyn Pass>, RulesetError> {
        if index >= self.passes.len() {
            return Err(RulesetError::PassIndexOutOfRange(index, self.passes.len()));
        }
        Ok(self.passes.remove(index))
    }

    /// Moves the pass at `from` so it ends up at position `to`.
    ///
    /// Implemented as remove-then-insert: all other passes keep their
    /// relative order.
    pub fn move_pass(&mut self, from: usize, to: usize) -> Result<(), RulesetError> {
        let len = self.passes.len();
        if from >= len {
            return Err(RulesetError::PassIndexOutOfRange(from, len));
        }
        if to >= len {
            return Err(RulesetError::PassIndexOutOfRange(to, len));
        }

        let pass = self.passes.remove(from);
        self.passes.insert(to, pass);
        Ok(())
    }

    /// Runs the full pipeline: generator first, then each pass in order.
    ///
    /// The generator's output must match the context extents; a mismatch is
    /// a configuration error, reported rather than recovered. Passes cannot
    /// resize the grid, so the extents hold for the whole run.
    pub fn generate(&self) -> Result<HeightGrid, RulesetError> {
        let mut grid = self.generator.generate()?;

        if grid.width() != self.context.width || grid.height() != self.context.height {
            return Err(RulesetError::ExtentMismatch {
                expected_width: self.context.width,
                expected_height: self.context.height,
                actual_width: grid.width(),
                actual_height: grid.height(),
            });
        }

        for pass in &self.passes {
            pass.apply(&mut grid, &self.context);
        }

        Ok(grid)
    }

    /// Returns the serializable record describing this ruleset.
    pub fn config(&self) -> RulesetConfig {
        RulesetConfig {
            context: self.context,
            generator: self.generator.config(),
            passes: self.passes.iter().map(|p| p.config()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::FlattenPass;

    fn flatten(threshold: f32, keep_greater: bool) -> Box<dyn Pass> {
        Box::new(FlattenPass {
            threshold_height: threshold,
            keep_greater,
        })
    }

    #[test]
    fn test_default_ruleset_generates() {
        let ruleset = Ruleset::default();
        let grid = ruleset.generate().unwrap();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 12);
    }

    #[test]
    fn test_passes_run_in_insertion_order() {
        // Two flatten passes that do not commute: clamping up to 1.5 then
        // down to 0.5 flattens everything; the other order leaves a band.
        let mut forward = Ruleset::default();
        forward.add_pass(flatten(1.5, true));
        forward.add_pass(flatten(0.5, false));

        let mut reversed = Ruleset::default();
        reversed.add_pass(flatten(0.5, false));
        reversed.add_pass(flatten(1.5, true));

        let a = forward.generate().unwrap();
        let b = reversed.generate().unwrap();
        assert_ne!(a, b, "pass order must be respected");

        // Forward order: every tile was first raised to >= 1.5, then clamped
        // down to 0.5 (nothing is < 0.5 after the first pass).
        assert!(a.heights().iter().all(|&h| h == 0.5));
    }

    #[test]
    fn test_move_pass_scenario() {
        let mut ruleset = Ruleset::default();
        ruleset.add_pass(flatten(0.1, false)); // P1
        ruleset.add_pass(flatten(0.2, false)); // P2
        ruleset.add_pass(flatten(0.3, false)); // P3

        ruleset.move_pass(0, 2).unwrap();

        let order: Vec<f32> = (0..3)
            .map(|i| match ruleset.pass(i).unwrap().config() {
                crate::pass::PassConfig::Flatten(f) => f.threshold_height,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(order, vec![0.2, 0.3, 0.1]);
    }

    #[test]
    fn test_remove_pass_out_of_range() {
        let mut ruleset = Ruleset::default();
        ruleset.add_pass(flatten(1.0, false));

        let err = ruleset.remove_pass(1).unwrap_err();
        assert!(matches!(err, RulesetError::PassIndexOutOfRange(1, 1)));
    }

    #[test]
    fn test_move_pass_out_of_range() {
        let mut ruleset = Ruleset::default();
        ruleset.add_pass(flatten(1.0, false));

        assert!(ruleset.move_pass(0, 3).is_err());
        assert!(ruleset.move_pass(3, 0).is_err());
    }

    #[test]
    fn test_extent_mismatch_reported() {
        // Context says 4x4 but the generator produces 8x12.
        let ruleset = Ruleset::new(
            MapContext::new(4, 4, 0.0, 2.0),
            Box::new(RandomHeightmap::default()),
        );

        let err = ruleset.generate().unwrap_err();
        assert!(matches!(err, RulesetError::ExtentMismatch { .. }));
    }

    #[test]
    fn test_generator_error_propagates() {
        let ruleset =
            Ruleset::with_generator(Box::new(RandomHeightmap::new(4, 4, 2.0, 0.0, 42)));
        assert!(matches!(
            ruleset.generate(),
            Err(RulesetError::Generator(_))
        ));
    }

    #[test]
    fn test_remove_returns_the_pass() {
        let mut ruleset = Ruleset::default();
        ruleset.add_pass(flatten(0.25, true));
        ruleset.add_pass(flatten(0.75, true));

        let removed = ruleset.remove_pass(0).unwrap();
        match removed.config() {
            crate::pass::PassConfig::Flatten(f) => assert_eq!(f.threshold_height, 0.25),
            _ => unreachable!(),
        }
        assert_eq!(ruleset.pass_count(), 1);
    }
}
