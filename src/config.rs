//! Runtime configuration from `TETRIS_*` environment variables.

use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FRAME_MS};

pub const DEFAULT_BLOCK_PX: u32 = 2;
pub const DEFAULT_LOG_FILTER: &str = "info";

const BOARD_DIM_RANGE: RangeInclusive<u8> = 4..=40;
const BLOCK_PX_RANGE: RangeInclusive<u32> = 1..=30;
const FRAME_MS_RANGE: RangeInclusive<u32> = 1..=1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub board_width: u8,
    pub board_height: u8,
    /// Canvas pixels per board cell
    pub block_px: u32,
    /// Frame scheduling interval
    pub frame_ms: u32,
    /// Log file; no logging when unset
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            block_px: DEFAULT_BLOCK_PX,
            frame_ms: FRAME_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("TETRIS_SEED") {
            Some(raw) => parse::<u32>("TETRIS_SEED", &raw)?,
            None => time_seed(),
        };

        Ok(Self {
            seed,
            board_width: parse_in("TETRIS_BOARD_WIDTH", &get, BOARD_WIDTH, BOARD_DIM_RANGE)?,
            board_height: parse_in("TETRIS_BOARD_HEIGHT", &get, BOARD_HEIGHT, BOARD_DIM_RANGE)?,
            block_px: parse_in("TETRIS_BLOCK_PX", &get, DEFAULT_BLOCK_PX, BLOCK_PX_RANGE)?,
            frame_ms: parse_in("TETRIS_FRAME_MS", &get, FRAME_MS, FRAME_MS_RANGE)?,
            log_path: get("TETRIS_LOG_PATH").map(PathBuf::from),
            log_filter: get("TETRIS_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("{key}: cannot parse {raw:?}"))
}

fn parse_in<T>(
    key: &str,
    get: impl Fn(&str) -> Option<String>,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T>
where
    T: FromStr + PartialOrd + std::fmt::Display + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = get(key) else {
        return Ok(default);
    };
    let value = parse::<T>(key, &raw)?;
    if !range.contains(&value) {
        bail!(
            "{key}: {value} is out of range {}..={}",
            range.start(),
            range.end()
        );
    }
    Ok(value)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
