use serde::{Deserialize, Serialize};

/// Optional configuration for the calculator, loaded from `tally.toml`
/// when present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub repl: ReplConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplConfig {
    // Prompt shown before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Maximum decimal places when rendering results; full precision when
    // unset. Conversion math itself is never rounded.
    #[serde(default)]
    pub precision: Option<usize>,
}

fn default_prompt() -> String {
    "calc> ".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            repl: ReplConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::empty();
        assert_eq!(config.repl.prompt, "calc> ");
        assert_eq!(config.display.precision, None);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[repl]
prompt = ">> "

[display]
precision = 4
"#,
        )
        .unwrap();
        assert_eq!(config.repl.prompt, ">> ");
        assert_eq!(config.display.precision, Some(4));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("[display]\nprecision = 2\n").unwrap();
        assert_eq!(config.repl.prompt, "calc> ");
        assert_eq!(config.display.precision, Some(2));
    }
}
