use clap::Subcommand;
use jobscope_core::Config;

const KEY_HELP: &str = "\
Keys are dot paths into config.toml:
  matrix.weights.<name>        scoring weights (integers)
  matrix.thresholds.<name>     green_minimum, red_maximum, yellow_maximum, low_mutual_floor (0-100)
  evaluation.<name>            warn_on_stale_profile, auto_save (true/false)
Run `jobscope config list` for every key and its current value.";

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one weight, threshold or evaluation setting
    #[command(after_help = KEY_HELP)]
    Get {
        /// Dot-separated key, e.g. matrix.thresholds.red_maximum
        key: String,
    },
    /// Change one weight, threshold or evaluation setting
    ///
    /// The whole matrix configuration is validated before saving, so a
    /// threshold above 100 or a mutual floor above the green minimum is refused.
    #[command(after_help = KEY_HELP)]
    Set {
        /// Dot-separated key, e.g. matrix.weights.severe_drain
        key: String,
        /// New value
        value: String,
    },
    /// List every key with its current value
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the built-in weights and thresholds
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(unknown_key(&config, &key).into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            if config.get(&key).is_none() {
                return Err(unknown_key(&config, &key).into());
            }
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("matrix weights, thresholds and evaluation settings reset to defaults");
        }
    }
    Ok(())
}

/// Error for a key that does not exist, naming the valid keys under the
/// closest existing section.
fn unknown_key(config: &Config, key: &str) -> String {
    let entries = config.entries();
    let mut section = key;
    let candidates: Vec<&str> = loop {
        let matches: Vec<&str> = entries
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.starts_with(section) && k[section.len()..].starts_with('.'))
            .collect();
        if !matches.is_empty() {
            break matches;
        }
        match section.rsplit_once('.') {
            Some((parent, _)) => section = parent,
            None => break entries.iter().map(|(k, _)| k.as_str()).collect(),
        }
    };
    format!(
        "unknown config key '{key}'; valid keys: {}",
        candidates.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_suggests_the_nearest_section() {
        let message = unknown_key(&Config::default(), "matrix.thresholds.purple");
        assert!(message.contains("matrix.thresholds.red_maximum"));
        assert!(!message.contains("matrix.weights"));
    }

    #[test]
    fn unknown_section_lists_everything() {
        let message = unknown_key(&Config::default(), "colours");
        assert!(message.contains("evaluation.auto_save"));
        assert!(message.contains("matrix.weights.severe_drain"));
    }
}
