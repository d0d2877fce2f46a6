use anyhow::Context as _;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;
use crate::path::DEFAULT_RESOLUTION;
use crate::pendulum::LINK_LENGTH_RATIO;
use crate::trail::DEFAULT_MIN_GLYPH_SIZE;

/// The first stanza of Goethe's dedication to Faust.
pub const DEFAULT_TEXT: &str = "Sie hören nicht die folgenden Gesänge, Die Seelen, denen ich die ersten sang, Zerstoben ist das freundliche Gedränge, Verklungen ach! der erste Wiederklang.";

/// Every tunable of the sketch.
///
/// `joints`, `amplitude`, `link_ratio`, `text` and `min_glyph_size` are
/// copied into a session when it is created, so changing them only affects
/// later sessions. `gravity`, `damping`, `resolution` and the `show_*`
/// toggles are read live on every tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SketchConfig {
    pub joints: usize,
    pub amplitude: f64,
    pub link_ratio: f64,
    pub resolution: f64,
    pub gravity: f64,
    pub damping: f64,
    pub min_glyph_size: f64,
    pub text: String,
    pub font_family: String,
    pub show_path: bool,
    pub show_pendulum: bool,
    pub show_trail: bool,
    pub amplitude_step: f64,
    pub gravity_step: f64,
    /// Seed for starting angles and trail colors; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            joints: 4,
            amplitude: 128.0,
            link_ratio: LINK_LENGTH_RATIO,
            resolution: DEFAULT_RESOLUTION,
            gravity: 0.094,
            damping: 0.998,
            min_glyph_size: DEFAULT_MIN_GLYPH_SIZE,
            text: DEFAULT_TEXT.to_string(),
            font_family: "Georgia".to_string(),
            show_path: true,
            show_pendulum: true,
            show_trail: true,
            amplitude_step: 2.0,
            gravity_step: 0.001,
            seed: None,
        }
    }
}

impl SketchConfig {
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: SketchConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Read and validate a RON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading sketch config {}", path.display()))?;
        SketchConfig::from_ron(&source)
            .with_context(|| format!("parsing sketch config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("amplitude", self.amplitude),
            ("link_ratio", self.link_ratio),
            ("resolution", self.resolution),
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("min_glyph_size", self.min_glyph_size),
            ("amplitude_step", self.amplitude_step),
            ("gravity_step", self.gravity_step),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{} must be finite", name)));
        }
        if self.joints == 0 {
            return Err(ConfigError::Invalid("joints must be at least 1".to_string()));
        }
        if self.amplitude <= 0.0 {
            return Err(ConfigError::Invalid("amplitude must be positive".to_string()));
        }
        if self.amplitude_step <= 0.0 {
            return Err(ConfigError::Invalid("amplitude_step must be positive".to_string()));
        }
        if self.link_ratio <= 0.0 {
            return Err(ConfigError::Invalid("link_ratio must be positive".to_string()));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(ConfigError::Invalid("damping must be in (0, 1]".to_string()));
        }
        if self.resolution < 0.0 {
            return Err(ConfigError::Invalid("resolution must not be negative".to_string()));
        }
        if self.text.is_empty() {
            return Err(ConfigError::Invalid("text must not be empty".to_string()));
        }
        Ok(())
    }
}
