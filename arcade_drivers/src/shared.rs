use arcade::blackjack;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;

/// Words the terminal falls back to when no word-list file is configured.
pub const FALLBACK_WORDS: [&str; 20] = [
    "PASSWORD", "ACCESS  ", "SECURITY", "PROTECT ", "CREDENTIAL", "HACKER  ",
    "NETWORK ", "TERMINAL", "DATABASE", "OVERRIDE", "PROTOCOL", "FIREWALL",
    "BACKUP  ", "SOFTWARE", "HARDWARE", "ENCRYPT ", "DECRYPT ", "OVERRULE",
    "SYSTEM  ", "CONTROL ",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blackjack: ConfigBlackjack,
    pub hacking: ConfigHacking,
    pub snake: ConfigSnake,
    pub pong: ConfigPong,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBlackjack {
    /// What the dealer does on a soft 17: "Stand" or "Hit".
    pub dealer_soft17: String,
    /// Milliseconds the terminal waits between dealer draws.
    pub card_draw_delay_ms: u64,
}

impl Default for ConfigBlackjack {
    fn default() -> Self {
        ConfigBlackjack {
            dealer_soft17: String::from("Stand"),
            card_draw_delay_ms: 800,
        }
    }
}

impl TryInto<blackjack::Rule> for ConfigBlackjack {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<blackjack::Rule, Self::Error> {
        let rule = blackjack::Rule {
            soft17: self.dealer_soft17.parse()?,
        };

        Ok(rule)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigHacking {
    /// Optional path to a JSON array of candidate words.
    pub words_file: Option<String>,
    pub allowed_attempts: u32,
    /// Seconds the terminal stays locked out after the last failed attempt.
    pub restart_timeout: u64,
    pub min_candidates: usize,
    pub max_candidates: usize,
}

impl Default for ConfigHacking {
    fn default() -> Self {
        ConfigHacking {
            words_file: None,
            allowed_attempts: 4,
            restart_timeout: 30,
            min_candidates: 16,
            max_candidates: 26,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSnake {
    pub width: i32,
    pub height: i32,
}

impl Default for ConfigSnake {
    fn default() -> Self {
        ConfigSnake {
            width: 20,
            height: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPong {
    pub width: f32,
    pub height: f32,
}

impl Default for ConfigPong {
    fn default() -> Self {
        ConfigPong {
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}

/// Loads the hacking word list: the configured JSON file when present and
/// readable, otherwise the built-in fallback list.
pub fn load_word_list(config: &ConfigHacking) -> Vec<String> {
    if let Some(path) = &config.words_file {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(words) if !words.is_empty() => return words,
                Ok(_) => warn!("word list {} is empty, using the fallback", path),
                Err(err) => warn!("word list {} is not a JSON string array: {}", path, err),
            },
            Err(err) => warn!("cannot read word list {}: {}", path, err),
        }
    }
    FALLBACK_WORDS.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_convert_rule() {
        let config = ConfigBlackjack {
            dealer_soft17: String::from("Hit"),
            card_draw_delay_ms: 0,
        };
        let rule: blackjack::Rule = config.try_into().unwrap();
        assert_eq!(rule.soft17, blackjack::Soft17::Hit);
    }

    #[test]
    fn should_return_error_when_converting_rule() {
        let config = ConfigBlackjack {
            dealer_soft17: String::from("Not a rule"),
            card_draw_delay_ms: 0,
        };
        let converted: Result<blackjack::Rule, serde::de::value::Error> = config.try_into();
        assert!(converted.is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_yaml::from_str("blackjack:\n  dealer_soft17: Hit\n").unwrap();
        assert_eq!(config.blackjack.dealer_soft17, "Hit");
        assert_eq!(config.blackjack.card_draw_delay_ms, 800);
        assert_eq!(config.hacking.allowed_attempts, 4);
        assert_eq!(config.hacking.min_candidates, 16);
        assert_eq!(config.snake.width, 20);
        assert_eq!(config.pong.height, 400.0);
    }

    #[test]
    fn default_config_rule_is_stand_on_every_17() {
        let rule: blackjack::Rule = Config::default().blackjack.try_into().unwrap();
        assert_eq!(rule.soft17, blackjack::Soft17::Stand);
    }

    #[test]
    fn word_list_falls_back_without_a_file() {
        let words = load_word_list(&ConfigHacking::default());
        assert_eq!(words.len(), FALLBACK_WORDS.len());
        assert!(words.contains(&String::from("TERMINAL")));
    }

    #[test]
    fn word_list_falls_back_on_an_unreadable_file() {
        let config = ConfigHacking {
            words_file: Some(String::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert_eq!(load_word_list(&config).len(), FALLBACK_WORDS.len());
    }
}
