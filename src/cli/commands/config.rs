use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".into()
            } else {
                "nano".into()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

fn print_config(cfg: &Config, path: &Path) -> AppResult<()> {
    header(format!("Configuration ({})", path.display()));
    print!("{}", serde_yaml::to_string(cfg)?);

    let policy = cfg.hour_policy();
    info(format!(
        "Lunch break: {} min, deducted when a day lasts more than {} min.",
        policy.lunch_break_minutes, policy.lunch_threshold_minutes
    ));
    Ok(())
}

fn edit_config(path: &Path, requested: Option<&str>) {
    if !path.exists() {
        warning(format!(
            "{} does not exist yet: run `ojtlog init` first.",
            path.display()
        ));
        return;
    }

    let fallback = platform_editor();
    let chosen = requested.unwrap_or(&fallback);

    if open_in(chosen, path) {
        success(format!("Configuration edited with '{chosen}'."));
        return;
    }
    if chosen == fallback {
        error(format!("Could not run editor '{chosen}'."));
        return;
    }

    warning(format!("Editor '{chosen}' failed, trying '{fallback}'."));
    if open_in(&fallback, path) {
        success(format!("Configuration edited with '{fallback}'."));
    } else {
        error(format!("Could not run editor '{fallback}' either."));
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config: print,
        edit_config: edit,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print {
            print_config(cfg, &path)?;
        }
        if *edit {
            edit_config(&path, editor.as_deref());
        }
    }

    Ok(())
}
