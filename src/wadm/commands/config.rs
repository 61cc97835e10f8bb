use crate::commands::{CmdMessage, CmdResult, WadmPaths};
use crate::config::WadmConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetGamPath(String),
    SetDefaultRole(String),
}

pub fn run(paths: &WadmPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = WadmConfig::load(&paths.config_dir)?;

    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetGamPath(value) => {
            config.gam_path = value;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success("Config saved."));
        }
        ConfigAction::SetDefaultRole(value) => {
            config.default_role = value;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success("Config saved."));
        }
    }

    Ok(result.with_config(config))
}
