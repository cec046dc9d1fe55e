//! Declarative construction of field sources from TOML.
//!
//! A config names one root [`SourceSpec`]; composite kinds nest further
//! specs. For example:
//!
//! ```toml
//! [source]
//! kind = "superposition"
//!
//! [[source.sources]]
//! kind = "uniform"
//! electric = [1.0, 0.0, 0.0]
//!
//! [[source.sources]]
//! kind = "scaled"
//! magnetic_scale = 1e-4
//!
//! [source.sources.source]
//! kind = "uniform"
//! magnetic = [0.0, 0.0, 1.0]
//! ```

use crate::source::{BaseFieldSource, FieldSource, SharedFieldSource};
use crate::sources::{Scaled, Superposition, UniformField};
use crate::vector::FieldVector;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Maximum nesting depth accepted by [`FieldConfig::validate`].
pub const MAX_DEPTH: usize = 32;

/// One node of a source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    /// [`BaseFieldSource`]: zero everywhere.
    Base,
    /// [`UniformField`]. Omitted vectors are zero.
    Uniform {
        #[serde(default)]
        electric: FieldVector,
        #[serde(default)]
        magnetic: FieldVector,
    },
    /// [`Scaled`] wrapper around a nested spec.
    Scaled {
        #[serde(default = "default_scale")]
        electric_scale: f64,
        #[serde(default = "default_scale")]
        magnetic_scale: f64,
        source: Box<SourceSpec>,
    },
    /// [`Superposition`] of nested specs.
    Superposition {
        #[serde(default)]
        sources: Vec<SourceSpec>,
    },
}

fn default_scale() -> f64 {
    1.0
}

impl SourceSpec {
    fn validate(&self, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::InvalidConfig(format!(
                "source tree nested deeper than {MAX_DEPTH} levels"
            )));
        }
        match self {
            SourceSpec::Base => Ok(()),
            SourceSpec::Uniform { electric, magnetic } => {
                if !electric.is_finite() || !magnetic.is_finite() {
                    return Err(Error::InvalidConfig(format!(
                        "uniform field components must be finite (electric={:?}, magnetic={:?})",
                        electric.to_array(),
                        magnetic.to_array()
                    )));
                }
                Ok(())
            }
            SourceSpec::Scaled {
                electric_scale,
                magnetic_scale,
                source,
            } => {
                if !electric_scale.is_finite() || !magnetic_scale.is_finite() {
                    return Err(Error::InvalidConfig(format!(
                        "scale factors must be finite \
                         (electric_scale={electric_scale}, magnetic_scale={magnetic_scale})"
                    )));
                }
                source.validate(depth + 1)
            }
            SourceSpec::Superposition { sources } => {
                for s in sources {
                    s.validate(depth + 1)?;
                }
                Ok(())
            }
        }
    }

    /// Build the described source without validating it.
    pub fn build(&self) -> Box<dyn FieldSource + Send + Sync> {
        match self {
            SourceSpec::Base => Box::new(BaseFieldSource),
            SourceSpec::Uniform { electric, magnetic } => {
                Box::new(UniformField::new(*electric, *magnetic))
            }
            SourceSpec::Scaled {
                electric_scale,
                magnetic_scale,
                source,
            } => Box::new(Scaled::new(source.build(), *electric_scale, *magnetic_scale)),
            SourceSpec::Superposition { sources } => {
                Box::new(sources.iter().map(SourceSpec::build).collect::<Superposition>())
            }
        }
    }

    /// Number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            SourceSpec::Base | SourceSpec::Uniform { .. } => 1,
            SourceSpec::Scaled { source, .. } => 1 + source.node_count(),
            SourceSpec::Superposition { sources } => {
                1 + sources.iter().map(SourceSpec::node_count).sum::<usize>()
            }
        }
    }
}

/// Top-level configuration: a single root source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub source: SourceSpec,
}

impl FieldConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FieldConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading field config");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every number is finite and the tree is not too deep.
    pub fn validate(&self) -> Result<()> {
        self.source.validate(1)
    }

    /// Validate, then build a shareable source.
    pub fn build(&self) -> Result<SharedFieldSource> {
        self.validate()?;
        debug!(nodes = self.source.node_count(), "building field source");
        Ok(Arc::from(self.source.build()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
