// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables that override the demo configuration,
/// eg. `BYTEPOLY_POINT=3` or `BYTEPOLY_BYTES="[7, 7, 9]"`.
pub const ENV_PREFIX: &str = "BYTEPOLY_";

/// Inputs of the demonstration run
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// The byte sequence whose histogram forms the polynomial
    pub bytes: Vec<u8>,
    /// The point at which the polynomial is evaluated
    pub point: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bytes: vec![1, 2, 3, 2, 3, 3],
            point: 2,
        }
    }
}

pub fn load_config() -> Result<DemoConfig> {
    Figment::from(Serialized::defaults(DemoConfig::default()))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config, DemoConfig::default());
            assert_eq!(config.bytes, vec![1, 2, 3, 2, 3, 3]);
            assert_eq!(config.point, 2);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("BYTEPOLY_BYTES", "[5, 0, 255]");
            jail.set_env("BYTEPOLY_POINT", "-3");

            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.bytes, vec![5, 0, 255]);
            assert_eq!(config.point, -3);
            Ok(())
        });
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("BYTEPOLY_POINT", "1");

            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.bytes, DemoConfig::default().bytes);
            assert_eq!(config.point, 1);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("BYTEPOLY_BYTES", "[256]");
            assert!(load_config().is_err());
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("BYTEPOLY_POINT", "two");
            assert!(load_config().is_err());
            Ok(())
        });
    }
}
