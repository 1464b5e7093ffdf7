//! Text rendering configuration (TOML)
//!
//! ```toml
//! [layout]
//! max_width = 320
//! capacity = 256
//!
//! [draw]
//! offset_x = 0
//! offset_y = 0
//! tint = [255, 255, 255, 255]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::command::Rgba;
use crate::draw_list::DrawListBuilder;
use crate::error::ConfigError;
use crate::layout::{DEFAULT_CAPACITY, TextLayout};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub draw: DrawSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Lines wider than this wrap (pixels)
    #[serde(default = "default_max_width")]
    pub max_width: i32,
    /// Placed glyph buffer size
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawSettings {
    #[serde(default)]
    pub offset_x: i32,
    #[serde(default)]
    pub offset_y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<Rgba>,
}

fn default_max_width() -> i32 { 320 }
fn default_capacity() -> usize { DEFAULT_CAPACITY }

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            capacity: default_capacity(),
        }
    }
}

impl LayoutSettings {
    /// Allocate a layout buffer of the configured capacity
    pub fn new_layout(&self) -> TextLayout {
        let capacity = if self.capacity == 0 {
            warn!("Layout capacity 0 is not usable, using 1");
            1
        } else {
            self.capacity
        };
        TextLayout::with_capacity(capacity)
    }
}

impl DrawSettings {
    /// Draw list builder with the configured offset and tint
    pub fn builder<'a, R: Clone>(&self, atlases: &'a [R]) -> DrawListBuilder<'a, R> {
        DrawListBuilder::new(atlases)
            .offset(self.offset_x, self.offset_y)
            .tint(self.tint)
    }
}

impl TextConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
