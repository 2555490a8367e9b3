use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::num::{Num, DEFAULT_ULPS};
use crate::swizzle::Components;
use crate::vector::Vector;

/// Digits past which an `f64` no longer carries information.
const MAX_SIGNIFICANT_PRECISION: usize = 17;

/// Comparison and formatting settings, usually read from a TOML file:
///
/// ```toml
/// [equality]
/// max-ulps = 8
///
/// [display]
/// precision = 3
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub equality: EqualityConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct EqualityConfig {
    #[serde(default = "EqualityConfig::default_max_ulps", rename = "max-ulps")]
    pub max_ulps: u32,
}

impl EqualityConfig {
    fn default_max_ulps() -> u32 {
        DEFAULT_ULPS
    }
}

impl Default for EqualityConfig {
    fn default() -> Self {
        EqualityConfig {
            max_ulps: Self::default_max_ulps(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Digits after the decimal point; the shortest exact form when unset.
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Config {
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file {path:?}"))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid configuration in {path:?}"))?;
        log::debug!("loaded configuration from {path:?}: {config:?}");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if let Some(precision) = config.display.precision {
            if precision > MAX_SIGNIFICANT_PRECISION {
                log::warn!(
                    "display precision {precision} exceeds the {MAX_SIGNIFICANT_PRECISION} \
                     significant digits of an f64"
                );
            }
        }
        Ok(config)
    }

    /// [`Vector::equals_ulps`] with the configured tolerance.
    pub fn equals<T: Num, const D: usize>(
        &self,
        lhs: &Vector<T, D>,
        rhs: impl Components<T, D>,
    ) -> bool {
        lhs.equals_ulps(rhs, self.equality.max_ulps)
    }

    /// Wraps `value` so that it formats with the configured precision.
    pub fn display<'a, V: fmt::Display + ?Sized>(&self, value: &'a V) -> Formatted<'a, V> {
        Formatted {
            value,
            precision: self.display.precision,
        }
    }
}

/// A value paired with the precision it is printed at. See [`Config::display`].
#[derive(Clone, Copy, Debug)]
pub struct Formatted<'a, V: ?Sized> {
    value: &'a V,
    precision: Option<usize>,
}

impl<V: fmt::Display + ?Sized> fmt::Display for Formatted<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{:.*}", precision, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}
