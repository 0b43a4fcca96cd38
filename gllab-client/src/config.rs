//! Command line handling and settings discovery.

use std::path::PathBuf;

use gllab_core::{
    exercise::ExerciseKind,
    settings::{Settings, SettingsError},
};

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Run {
        exercise: ExerciseKind,
        settings_path: Option<PathBuf>,
    },
}

pub const USAGE: &str = "usage: gllab [--settings <path>] <exercise> | --list";

/// Parses the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut exercise = None;
    let mut settings_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" | "-l" => return Ok(Command::List),
            "--settings" | "-s" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("--settings needs a path\n{}", USAGE))?;
                settings_path = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{}'\n{}", other, USAGE));
            }
            name => {
                if exercise.is_some() {
                    return Err(format!("Only one exercise can run at a time\n{}", USAGE));
                }
                exercise = Some(name.parse::<ExerciseKind>()?);
            }
        }
    }

    let exercise = exercise.ok_or_else(|| USAGE.to_string())?;
    Ok(Command::Run {
        exercise,
        settings_path,
    })
}

/// `<config dir>/gllab/settings.json`, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gllab").join("settings.json"))
}

/// Settings plus what happened while reading them, reported once logging is up.
pub struct LoadedSettings {
    pub settings: Settings,
    pub path: Option<PathBuf>,
    pub error: Option<SettingsError>,
}

impl LoadedSettings {
    /// Logs where the settings came from. A missing file is expected and only logged at `debug`.
    pub fn report(&self) {
        let Some(path) = &self.path else {
            log::debug!("No config directory on this platform, using default settings");
            return;
        };
        match &self.error {
            None => log::info!("Loaded settings from {}", path.display()),
            Some(err) if err.is_not_found() => {
                log::debug!("No settings file at {}, using defaults", path.display())
            }
            Some(err) => log::warn!("{}, using default settings", err),
        }
    }
}

/// Loads settings from the explicit path or the default location. Any failure falls back to the
/// defaults.
pub fn load_settings(explicit: Option<PathBuf>) -> LoadedSettings {
    let path = explicit.or_else(default_settings_path);
    let (settings, error) = match path.as_deref().map(Settings::load) {
        Some(Ok(settings)) => (settings, None),
        Some(Err(err)) => (Settings::default(), Some(err)),
        None => (Settings::default(), None),
    };
    LoadedSettings {
        settings,
        path,
        error,
    }
}

/// The catalogue printed by `--list`.
pub fn exercise_list() -> String {
    ExerciseKind::ALL
        .iter()
        .map(|kind| format!("{:<16} {}", kind.name(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
