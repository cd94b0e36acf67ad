use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/*------------------------------------------------------------------------------
ExperimentConfig struct
------------------------------------------------------------------------------*/

/// Experiment parameters. Parsing is collaborator territory (JSON or the
/// legacy space-separated key-value format); the core only cares that
/// `validate` passes before a session is allowed to start. The display flags
/// have no effect on tracking, they are forwarded to the rendering
/// collaborator untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperimentConfig {
    pub video_source: String,
    pub output_path: String,
    pub n_termites: usize,
    pub box_size: u32,
    pub scale: f32,
    pub tracking_method: String,
    #[serde(default)]
    pub show_labels: bool,
    #[serde(default)]
    pub highlight_collisions: bool,
    #[serde(default)]
    pub show_bounding_box: bool,
    #[serde(default)]
    pub show_frame_info: bool,
    #[serde(default)]
    pub show_d_lines: bool,
    #[serde(default)]
    pub save_output: bool,
}

impl ExperimentConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Unreadable(e.to_string()))?;
        let config: ExperimentConfig = serde_json::from_str(&text)
            .map_err(|e| ConfigError::Unreadable(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Legacy format: one `param value` pair per line, `#` starts a comment.
    pub fn from_key_value(text: &str) -> Result<Self, ConfigError> {
        let mut video_source = None;
        let mut output_path = None;
        let mut n_termites = None;
        let mut box_size = None;
        let mut scale = None;
        let mut tracking_method = None;
        let mut flags = [false; 6];

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| ConfigError::MalformedLine(line.to_string()))?;
            let value = value.trim();
            match key {
                "video_source" => video_source = Some(value.to_string()),
                "output_path" => output_path = Some(value.to_string()),
                "n_termites" => n_termites = Some(parse_num(key, value)?),
                "box_size" => box_size = Some(parse_num(key, value)?),
                "scale" => scale = Some(parse_num(key, value)?),
                "tracking_method" | "method" => {
                    tracking_method = Some(value.to_string())
                }
                "show_labels" => flags[0] = parse_bool(key, value)?,
                "highlight_collisions" => flags[1] = parse_bool(key, value)?,
                "show_bounding_box" => flags[2] = parse_bool(key, value)?,
                "show_frame_info" => flags[3] = parse_bool(key, value)?,
                "show_d_lines" => flags[4] = parse_bool(key, value)?,
                "save_output" => flags[5] = parse_bool(key, value)?,
                // unknown keys belong to collaborators, skip them
                _ => {}
            }
        }

        let config = Self {
            video_source: video_source
                .ok_or(ConfigError::MissingParameter("video_source"))?,
            output_path: output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            n_termites: n_termites
                .ok_or(ConfigError::MissingParameter("n_termites"))?,
            box_size: box_size.ok_or(ConfigError::MissingParameter("box_size"))?,
            scale: scale.ok_or(ConfigError::MissingParameter("scale"))?,
            tracking_method: tracking_method
                .ok_or(ConfigError::MissingParameter("tracking_method"))?,
            show_labels: flags[0],
            highlight_collisions: flags[1],
            show_bounding_box: flags[2],
            show_frame_info: flags[3],
            show_d_lines: flags[4],
            save_output: flags[5],
        };
        config.validate()?;
        Ok(config)
    }

    /// Startup validation. A violation here is fatal before the session ever
    /// transitions out of locating; nothing is validated lazily mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_termites == 0 {
            return Err(ConfigError::NoTermites);
        }
        if self.box_size == 0 {
            return Err(ConfigError::NonPositiveBoxSize);
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        Ok(())
    }
}

fn parse_num<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
