use crate::commands::{CmdMessage, CmdResult};
use crate::config::RevisitConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RevisitConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RevisitConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RevisitConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            tracing::debug!(%key, "Config updated");
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show_key() {
        let dir = TempDir::new().unwrap();

        let res = run(
            dir.path(),
            ConfigAction::Set("default-intervals".into(), "2,5,9".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].content, "default-intervals set to 2, 5, 9");

        let res = run(dir.path(), ConfigAction::ShowKey("default-intervals".into())).unwrap();
        assert_eq!(res.messages[0].content, "2, 5, 9");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = TempDir::new().unwrap();

        let res = run(
            dir.path(),
            ConfigAction::Set("default-intervals".into(), "0".into()),
        )
        .unwrap();

        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config, Some(RevisitConfig::default()));
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
    }
}
