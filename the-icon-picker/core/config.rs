//! Picker configuration.
//!
//! Two sources feed the same `Config`: the host configuration bridge hands
//! us a JSON object (`{"iconFormat": "camel"}`), and in standalone mode a
//! TOML file (global config dir, overridden by a workspace-local file) is
//! read through the loader. Either way the UI reads the merged result once
//! per render cycle through an `ArcSwap` held by the session.

use std::{
  fs,
  io::Error as IOError,
};

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;
use the_icon_picker_loader::merge_toml_values;
use toml::de::Error as TomlError;

use crate::core::format::IconFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
  pub icon_format: IconFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigRaw {
  pub icon_format: Option<IconFormat>,
}

/// Wire shape used by the host configuration bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostConfigWire {
  #[serde(skip_serializing_if = "Option::is_none")]
  icon_format: Option<IconFormat>,
}

#[derive(Debug)]
pub enum ConfigLoadError {
  BadConfig(TomlError),
  Error(IOError),
}

impl std::fmt::Display for ConfigLoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::BadConfig(err) => write!(f, "Failed to parse config: {err}"),
      Self::Error(err) => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for ConfigLoadError {}

impl Config {
  pub fn load(
    global: Result<String, ConfigLoadError>,
    local: Result<String, ConfigLoadError>,
  ) -> Result<Config, ConfigLoadError> {
    let global_config: Result<toml::Value, ConfigLoadError> =
      global.and_then(|file| toml::from_str(&file).map_err(ConfigLoadError::BadConfig));
    let local_config: Result<toml::Value, ConfigLoadError> =
      local.and_then(|file| toml::from_str(&file).map_err(ConfigLoadError::BadConfig));

    let raw: ConfigRaw = match (global_config, local_config) {
      (Ok(global), Ok(local)) => {
        merge_toml_values(global, local, 3)
          .try_into()
          .map_err(ConfigLoadError::BadConfig)?
      },
      (_, Err(ConfigLoadError::BadConfig(err))) | (Err(ConfigLoadError::BadConfig(err)), _) => {
        return Err(ConfigLoadError::BadConfig(err));
      },
      (Ok(config), Err(_)) | (Err(_), Ok(config)) => {
        config.try_into().map_err(ConfigLoadError::BadConfig)?
      },
      (Err(err), Err(_)) => return Err(err),
    };

    Ok(Config {
      icon_format: raw.icon_format.unwrap_or_default(),
    })
  }

  /// Load user config from the loader's global and workspace files.
  pub fn load_user() -> Result<Config, ConfigLoadError> {
    let global_config = fs::read_to_string(the_icon_picker_loader::config_file())
      .map_err(ConfigLoadError::Error);
    let local_config = fs::read_to_string(the_icon_picker_loader::workspace_config_file())
      .map_err(ConfigLoadError::Error);
    Self::load(global_config, local_config)
  }

  /// Interpret the host configuration bridge's JSON object. Missing or
  /// unrecognized shapes fall back to the defaults; a malformed config is
  /// never an error the user sees.
  pub fn from_host_value(value: &Value) -> Config {
    let wire: HostConfigWire = match serde_json::from_value(value.clone()) {
      Ok(wire) => wire,
      Err(err) => {
        log::debug!("ignoring malformed host config: {err}");
        return Config::default();
      },
    };
    Config {
      icon_format: wire.icon_format.unwrap_or_default(),
    }
  }

  /// The JSON object written back through the host configuration bridge.
  pub fn to_host_value(&self) -> Value {
    serde_json::json!({ "iconFormat": self.icon_format })
  }

  /// Serialize for the standalone TOML config file.
  pub fn to_toml_string(&self) -> String {
    let raw = ConfigRaw {
      icon_format: Some(self.icon_format),
    };
    toml::to_string(&raw).unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ok(s: &str) -> Result<String, ConfigLoadError> {
    Ok(s.to_owned())
  }

  fn missing() -> Result<String, ConfigLoadError> {
    Err(ConfigLoadError::Error(IOError::new(
      std::io::ErrorKind::NotFound,
      "missing",
    )))
  }

  #[test]
  fn defaults_to_kebab_when_nothing_is_configured() {
    let config = Config::load(missing(), missing());
    assert!(config.is_err());
    assert_eq!(Config::default().icon_format, IconFormat::Kebab);
  }

  #[test]
  fn parses_icon_format() {
    let config = Config::load(ok(r#"icon-format = "camel""#), missing()).unwrap();
    assert_eq!(config.icon_format, IconFormat::Camel);
  }

  #[test]
  fn workspace_config_overrides_global() {
    let config = Config::load(
      ok(r#"icon-format = "camel""#),
      ok(r#"icon-format = "json""#),
    )
    .unwrap();
    assert_eq!(config.icon_format, IconFormat::Json);
  }

  #[test]
  fn bad_toml_is_reported() {
    let config = Config::load(ok("icon-format = "), missing());
    assert!(matches!(config, Err(ConfigLoadError::BadConfig(_))));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let config = Config::load(ok(r#"icon-fmt = "camel""#), missing());
    assert!(matches!(config, Err(ConfigLoadError::BadConfig(_))));
  }

  #[test]
  fn host_wire_roundtrip() {
    let config = Config {
      icon_format: IconFormat::Pascal,
    };
    let wire = config.to_host_value();
    assert_eq!(wire, serde_json::json!({ "iconFormat": "pascal" }));
    assert_eq!(Config::from_host_value(&wire), config);
  }

  #[test]
  fn malformed_host_config_falls_back_to_defaults() {
    assert_eq!(
      Config::from_host_value(&serde_json::json!({ "iconFormat": "bogus" })),
      Config::default()
    );
    assert_eq!(
      Config::from_host_value(&serde_json::json!(null)),
      Config::default()
    );
    assert_eq!(
      Config::from_host_value(&serde_json::json!({})),
      Config::default()
    );
  }

  #[test]
  fn toml_serialization_roundtrips() {
    let config = Config {
      icon_format: IconFormat::Json,
    };
    let text = config.to_toml_string();
    let reloaded = Config::load(Ok(text), missing()).unwrap();
    assert_eq!(reloaded, config);
  }
}
