use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use clap::Parser;
use client_core::DEFAULT_BACKEND_URL;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "elevator_gui.toml";
const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 700.0;
const DEFAULT_POLL_INTERVAL_MS: u64 = 50;
const MIN_POLL_INTERVAL_MS: u64 = 5;

#[derive(Parser, Debug, Default)]
#[command(name = "elevator-gui", about = "Live view and call panel for a remote elevator")]
pub struct Args {
    /// Base URL of the elevator authority, e.g. http://127.0.0.1:3001/api
    #[arg(long)]
    pub backend: Option<String>,
    #[arg(long)]
    pub width: Option<f32>,
    #[arg(long)]
    pub height: Option<f32>,
    /// Number of served floors (at least 2)
    #[arg(long)]
    pub floors: Option<usize>,
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,
    /// Drop a press/release identical to one still in flight
    #[arg(long)]
    pub dedupe_commands: bool,
    /// TOML settings file (defaults to ./elevator_gui.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    backend: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    floors: Option<usize>,
    poll_interval_ms: Option<u64>,
    dedupe_commands: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub backend_url: String,
    pub width: f32,
    pub height: f32,
    pub floor_count: usize,
    pub poll_interval: Duration,
    pub dedupe_commands: bool,
}

pub fn load_settings(args: &Args) -> anyhow::Result<StartupConfig> {
    let file = read_file_settings(args.config.as_deref())?;
    resolve(args, file, |name| std::env::var(name).ok())
}

fn read_file_settings(explicit: Option<&Path>) -> anyhow::Result<FileSettings> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(FileSettings::default()),
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

fn env_parsed<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> anyhow::Result<Option<T>> {
    match env(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => bail!("{name} has an invalid value '{raw}'"),
        },
        None => Ok(None),
    }
}

/// Layers defaults, file, environment and flags, in increasing precedence.
fn resolve(
    args: &Args,
    file: FileSettings,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<StartupConfig> {
    let backend_url = args
        .backend
        .clone()
        .or_else(|| env("APP__BACKEND"))
        .or(file.backend)
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    let width = args
        .width
        .or(env_parsed(&env, "APP__WIDTH")?)
        .or(file.width)
        .unwrap_or(DEFAULT_WIDTH);
    let height = args
        .height
        .or(env_parsed(&env, "APP__HEIGHT")?)
        .or(file.height)
        .unwrap_or(DEFAULT_HEIGHT);
    let floor_count = args
        .floors
        .or(env_parsed(&env, "APP__FLOORS")?)
        .or(file.floors);
    let poll_interval_ms = args
        .poll_interval_ms
        .or(env_parsed(&env, "APP__POLL_INTERVAL_MS")?)
        .or(file.poll_interval_ms)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
    let dedupe_commands = args.dedupe_commands || file.dedupe_commands.unwrap_or(false);

    let Some(floor_count) = floor_count else {
        bail!(
            "floor count is required: pass --floors, set APP__FLOORS \
             or add `floors` to {DEFAULT_CONFIG_FILE}"
        );
    };
    if floor_count < 2 {
        bail!("floor count must be at least 2, got {floor_count}");
    }
    if !(width > 0.0 && height > 0.0) {
        bail!("canvas size must be positive, got {width}x{height}");
    }
    if poll_interval_ms < MIN_POLL_INTERVAL_MS {
        bail!("poll interval must be at least {MIN_POLL_INTERVAL_MS} ms, got {poll_interval_ms}");
    }

    let backend_url = backend_url.trim().trim_end_matches('/').to_string();
    if backend_url.is_empty() {
        bail!("backend URL must not be empty");
    }

    Ok(StartupConfig {
        backend_url,
        width,
        height,
        floor_count,
        poll_interval: Duration::from_millis(poll_interval_ms),
        dedupe_commands,
    })
}
