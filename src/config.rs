use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{DEFAULT_TAB_STOP, RenderOptions, WidthPolicy};

/// Defaults read from config files and overridden by the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub tab_stop: Option<usize>,
    pub width: Option<WidthPolicy>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tab_stop: other.tab_stop.or(self.tab_stop),
            width: other.width.or(self.width),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Row layout settings described by these flags.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(
            self.tab_stop.unwrap_or(DEFAULT_TAB_STOP),
            self.width.unwrap_or_default(),
        )
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("runed").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("runed")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("runed").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("runed").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".runedrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// A `--flag=value` line is one token so the value may contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    if line.starts_with("--") && line.contains('=') {
        vec![line.to_owned()]
    } else {
        line.split_whitespace().map(ToOwned::to_owned).collect()
    }
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# runed defaults (saved with --save-defaults)".to_string()];
    if let Some(tab_stop) = flags.tab_stop {
        lines.push(format!("--tab-stop={tab_stop}"));
    }
    if let Some(width) = flags.width {
        let width_str = match width {
            WidthPolicy::Encoding => "encoding",
            WidthPolicy::Unicode => "unicode",
        };
        lines.push(format!("--width={width_str}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file={}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list. Unknown tokens and bad values are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--tab-stop" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_stop = next.parse().ok().or(flags.tab_stop);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-stop=") {
            flags.tab_stop = value.parse().ok().or(flags.tab_stop);
        } else if token == "--width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.width = parse_width(next).or(flags.width);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--width=") {
            flags.width = parse_width(value).or(flags.width);
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_width(s: &str) -> Option<WidthPolicy> {
    match s {
        "encoding" => Some(WidthPolicy::Encoding),
        "unicode" => Some(WidthPolicy::Unicode),
        _ => None,
    }
}
