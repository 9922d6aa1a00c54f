// Copyright (c) 2025 The Botho Foundation

//! Scheme configuration.
//!
//! ```toml
//! domain = "dualdory-v1"
//! min_width = 4
//! max_ring_size = 65536
//! ```

use dd_crypto_dory::{MAX_DOMAIN_BYTES, MAX_WIDTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    domain_separators::DEFAULT_SETUP_DOMAIN,
    ring_signature::{Error, Result},
};

/// Smallest parameter width used by default. Two folding rounds keep
/// signatures for tiny rings in proportion with larger ones.
pub const DEFAULT_MIN_WIDTH: usize = 4;

/// Knobs shared by everyone who must agree on the public parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SchemeConfig {
    /// Domain the commitment generators are hashed under.
    pub domain: String,

    /// Parameter width used for rings smaller than this. Power of two.
    pub min_width: usize,

    /// Largest ring size parameters may be generated for.
    pub max_ring_size: usize,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_SETUP_DOMAIN.into(),
            min_width: DEFAULT_MIN_WIDTH,
            max_ring_size: MAX_WIDTH,
        }
    }
}

impl SchemeConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() {
            return Err(Error::Config("domain must not be empty".into()));
        }
        if self.domain.len() > MAX_DOMAIN_BYTES {
            return Err(Error::Config(format!(
                "domain is {} bytes, at most {MAX_DOMAIN_BYTES} allowed",
                self.domain.len()
            )));
        }
        if !self.min_width.is_power_of_two() || self.min_width > MAX_WIDTH {
            return Err(Error::Config(format!(
                "min_width {} must be a power of two no larger than {MAX_WIDTH}",
                self.min_width
            )));
        }
        if self.max_ring_size == 0 || self.max_ring_size > MAX_WIDTH {
            return Err(Error::Config(format!(
                "max_ring_size {} must be between 1 and {MAX_WIDTH}",
                self.max_ring_size
            )));
        }
        Ok(())
    }
}
