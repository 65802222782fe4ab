//! Persisted ruleset format.
//!
//! A ruleset is saved as a structured, human-inspectable record: the shared
//! context plus kind-tagged generator and pass descriptions. Unknown fields
//! round-trip safely through serde, and new kinds can be added without
//! breaking older files.

use serde::{Deserialize, Serialize};

use super::Ruleset;
use crate::generator::{GeneratorConfig, RandomHeightmap};
use crate::pass::PassConfig;
use crate::terrain::MapContext;

/// Serializable description of a complete ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesetConfig {
    /// Extents and height bounds shared by all passes.
    pub context: MapContext,
    /// The initial generator, tagged by kind.
    pub generator: GeneratorConfig,
    /// The passes in execution order, each tagged by kind.
    pub passes: Vec<PassConfig>,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        let generator = RandomHeightmap::default();
        let context = MapContext::new(
            generator.width,
            generator.height,
            generator.min_height,
            generator.max_height,
        );
        Self {
            context,
            generator: GeneratorConfig::RandomHeightmap(generator),
            passes: Vec::new(),
        }
    }
}

impl RulesetConfig {
    /// Builds a runnable ruleset from this record.
    pub fn build(&self) -> Ruleset {
        let mut ruleset = Ruleset::new(self.context, self.generator.build());
        for pass in &self.passes {
            ruleset.add_pass(pass.build());
        }
        ruleset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FbmHeightmap;
    use crate::pass::{FlattenPass, SmoothPass};

    fn sample_config() -> RulesetConfig {
        RulesetConfig {
            context: MapContext::new(16, 16, -1.0, 1.0),
            generator: GeneratorConfig::FbmHeightmap(FbmHeightmap::new(16, 16, -1.0, 1.0, 7)),
            passes: vec![
                PassConfig::Smooth(SmoothPass { iterations: 2 }),
                PassConfig::Flatten(FlattenPass {
                    threshold_height: 0.0,
                    keep_greater: true,
                }),
                PassConfig::Normalize,
            ],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = sample_config();
        let json = serde_json::to_string_pretty(&config).unwrap();

        // Kind tags make the record self-describing.
        assert!(json.contains("\"kind\": \"fbm_heightmap\""));
        assert!(json.contains("\"kind\": \"flatten\""));
        assert!(json.contains("\"kind\": \"normalize\""));

        let back: RulesetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_build_and_generate() {
        let ruleset = sample_config().build();
        assert_eq!(ruleset.pass_count(), 3);

        let grid = ruleset.generate().unwrap();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 16);
    }

    #[test]
    fn test_ruleset_config_round_trip() {
        let config = sample_config();
        assert_eq!(config.build().config(), config);
    }

    #[test]
    fn test_default_config_matches_default_ruleset() {
        assert_eq!(RulesetConfig::default(), Ruleset::default().config());
    }
}
