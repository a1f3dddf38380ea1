//! Command-line settings overrides.
//!
//! `--start-url <url>`, `--user-agent <ua>` (empty clears it) and
//! `--reset-settings` are persisted to the settings file before the window
//! opens, in the order given. Unknown arguments are ignored.

use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    SetStartUrl(String),
    SetUserAgent(Option<String>),
    Reset,
}

pub fn parse_args<I>(args: I) -> Result<Vec<SettingsCommand>, SettingsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut commands = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start-url" => {
                let url = args.next().ok_or_else(|| {
                    SettingsError::InvalidValue("--start-url requires a URL".to_string())
                })?;
                commands.push(SettingsCommand::SetStartUrl(url));
            }
            "--user-agent" => {
                let ua = args.next().ok_or_else(|| {
                    SettingsError::InvalidValue("--user-agent requires a value".to_string())
                })?;
                commands.push(SettingsCommand::SetUserAgent(Some(ua)));
            }
            "--reset-settings" => commands.push(SettingsCommand::Reset),
            other => log::debug!("Ignoring argument: {}", other),
        }
    }
    Ok(commands)
}

/// Loads the current settings, then applies and saves each command.
pub fn apply_commands<E: SettingsEngineTrait>(
    engine: &mut E,
    commands: &[SettingsCommand],
) -> Result<(), SettingsError> {
    if commands.is_empty() {
        return Ok(());
    }
    if let Err(e) = engine.load() {
        log::warn!("{}; overrides start from defaults", e);
    }

    for command in commands {
        match command {
            SettingsCommand::SetStartUrl(url) => engine.set_start_url(url)?,
            SettingsCommand::SetUserAgent(ua) => engine.set_user_agent(ua.clone())?,
            SettingsCommand::Reset => engine.reset()?,
        }
        log::info!("Applied {:?} to {}", command, engine.get_config_path());
    }
    Ok(())
}
