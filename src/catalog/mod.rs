//! Pass and generator catalog.
//!
//! Maps display names to factories so host tooling can offer passes and
//! generators by name and instantiate them with default parameters. The
//! catalog is explicit owned state: it is populated with the built-ins by
//! [`PassCatalog::with_builtins`] and optionally extended by the host, with
//! no reliance on static-initializer ordering. Hosts that want to share one
//! catalog across threads wrap it in their own `Mutex`; reads take `&self`,
//! registration takes `&mut self`.

use thiserror::Error;

use crate::generator::{FbmHeightmap, InitialGenerator, RandomHeightmap};
use crate::pass::{FlattenPass, NormalizePass, Pass, SmoothPass};

/// Errors that can occur when instantiating from the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no pass registered under the name '{0}'")]
    UnknownPass(String),
    #[error("no generator registered under the name '{0}'")]
    UnknownGenerator(String),
}

/// Zero-argument factory producing a pass with default parameters.
pub type PassFactory = Box<dyn Fn() -> Box<dyn Pass> + Send + Sync>;

/// Zero-argument factory producing a generator with default parameters.
pub type GeneratorFactory = Box<dyn Fn() -> Box<dyn InitialGenerator> + Send + Sync>;

struct Entry<F> {
    name: String,
    factory: F,
}

/// Ordered name-to-factory registry for passes and generators.
///
/// Registration order is listing order. Registering a duplicate name
/// overwrites the existing factory in place, keeping its position; the
/// overwrite policy is deliberate, so re-registering a tweaked factory under
/// the same display name is deterministic.
#[derive(Default)]
pub struct PassCatalog {
    passes: Vec<Entry<PassFactory>>,
    generators: Vec<Entry<GeneratorFactory>>,
}

impl PassCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with all built-in passes and generators registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();

        catalog.register_pass("Flatten", || Box::new(FlattenPass::default()));
        catalog.register_pass("Smooth", || Box::new(SmoothPass::default()));
        catalog.register_pass("Normalize", || Box::new(NormalizePass));

        catalog.register_generator("Random Heightmap", || {
            Box::new(RandomHeightmap::default())
        });
        catalog.register_generator("Fbm Heightmap", || Box::new(FbmHeightmap::default()));

        catalog
    }

    /// Registers a pass factory under a display name.
    pub fn register_pass<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Pass> + Send + Sync + 'static,
    {
        Self::register(&mut self.passes, name, Box::new(factory));
    }

    /// Registers a generator factory under a display name.
    pub fn register_generator<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn InitialGenerator> + Send + Sync + 'static,
    {
        Self::register(&mut self.generators, name, Box::new(factory));
    }

    fn register<F>(entries: &mut Vec<Entry<F>>, name: &str, factory: F) {
        if let Some(existing) = entries.iter_mut().find(|e| e.name == name) {
            existing.factory = factory;
        } else {
            entries.push(Entry {
                name: name.to_string(),
                factory,
            });
        }
    }

    /// Returns the registered pass names in registration order.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|e| e.name.as_str()).collect()
    }

    /// Returns the registered generator names in registration order.
    pub fn generator_names(&self) -> Vec<&str> {
        self.generators.iter().map(|e| e.name.as_str()).collect()
    }

    /// Instantiates the pass registered under the given name.
    pub fn create_pass(&self, name: &str) -> Result<Box<dyn Pass>, CatalogError> {
        self.passes
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| CatalogError::UnknownPass(name.to_string()))
    }

    /// Instantiates the generator registered under the given name.
    pub fn create_generator(&self, name: &str) -> Result<Box<dyn InitialGenerator>, CatalogError> {
        self.generators
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| CatalogError::UnknownGenerator(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::PassConfig;

    #[test]
    fn test_builtins_listed_in_registration_order() {
        let catalog = PassCatalog::with_builtins();
        assert_eq!(catalog.pass_names(), vec!["Flatten", "Smooth", "Normalize"]);
        assert_eq!(
            catalog.generator_names(),
            vec!["Random Heightmap", "Fbm Heightmap"]
        );
    }

    #[test]
    fn test_create_pass() {
        let catalog = PassCatalog::with_builtins();
        let pass = catalog.create_pass("Flatten").unwrap();
        assert_eq!(pass.name(), "Flatten");
    }

    #[test]
    fn test_create_generator() {
        let catalog = PassCatalog::with_builtins();
        let generator = catalog.create_generator("Random Heightmap").unwrap();
        let grid = generator.generate().unwrap();
        assert_eq!((grid.width(), grid.height()), (8, 12));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let catalog = PassCatalog::with_builtins();
        assert!(matches!(
            catalog.create_pass("Erosion"),
            Err(CatalogError::UnknownPass(name)) if name == "Erosion"
        ));
        assert!(matches!(
            catalog.create_generator("Perlin"),
            Err(CatalogError::UnknownGenerator(_))
        ));
    }

    #[test]
    fn test_duplicate_registration_overwrites_in_place() {
        let mut catalog = PassCatalog::with_builtins();

        catalog.register_pass("Flatten", || {
            Box::new(FlattenPass {
                threshold_height: 0.25,
                keep_greater: true,
            })
        });

        // Position preserved, factory replaced.
        assert_eq!(catalog.pass_names(), vec!["Flatten", "Smooth", "Normalize"]);
        let pass = catalog.create_pass("Flatten").unwrap();
        match pass.config() {
            PassConfig::Flatten(f) => {
                assert_eq!(f.threshold_height, 0.25);
                assert!(f.keep_greater);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_host_registration_appends() {
        let mut catalog = PassCatalog::with_builtins();
        catalog.register_pass("Host Flatten", || Box::new(FlattenPass::default()));

        assert_eq!(
            catalog.pass_names(),
            vec!["Flatten", "Smooth", "Normalize", "Host Flatten"]
        );
        assert!(catalog.create_pass("Host Flatten").is_ok());
    }
}
