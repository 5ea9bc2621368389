// Configuration loading module
// YAML mirror of the tabs options and child nodes, plus conversion to runtime types

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::error::{Result, TabsError};
use crate::core::TabKey;
use crate::managers::classifier::{ChildNode, NodeKind};
use crate::managers::tabs::TabsOptions;
use crate::utilities::parse_color;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub tabs: TabsConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    /// Suppress the resize signal when the viewport is first observed
    #[serde(default = "default_quiet_resize")]
    pub quiet_resize: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

fn default_quiet_resize() -> bool {
    true
}

/// Tab key as written in YAML: a position or a name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeyYaml {
    Index(usize),
    Name(String),
}

impl From<KeyYaml> for TabKey {
    fn from(key: KeyYaml) -> Self {
        match key {
            KeyYaml::Index(idx) => TabKey::Index(idx),
            KeyYaml::Name(name) => TabKey::Name(name),
        }
    }
}

/// YAML representation of the widget options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TabsConfigYaml {
    pub value: Option<KeyYaml>,
    /// Color name or `#rrggbb` (defaults to "primary")
    pub color: Option<String>,
    pub slider_color: Option<String>,
    pub background_color: Option<String>,
    pub centered: bool,
    pub grow: bool,
    pub fixed_tabs: bool,
    pub icons_and_text: bool,
    pub hide_slider: bool,
    pub right: bool,
    pub show_arrows: bool,
    pub align_with_title: bool,
    pub mobile_break_point: Option<u16>,
    pub prev_icon: Option<String>,
    pub next_icon: Option<String>,
    pub active_class: Option<String>,
    pub height: Option<u16>,
    pub dark: Option<bool>,
    /// Child nodes in declaration order
    pub children: Vec<NodeConfigYaml>,
}

/// YAML representation of a child node
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConfigYaml {
    /// "tab", "slider", "panels", "panel", or any other component name
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeConfigYaml>,
}

/// Convert YAML options to runtime options.
///
/// Unknown colors and conflicting alignment flags are not fatal: they are
/// logged and replaced by defaults. A zero height is rejected.
pub fn convert_tabs_config(config: &TabsConfigYaml) -> Result<TabsOptions> {
    let defaults = TabsOptions::default();

    if config.height == Some(0) {
        return Err(TabsError::InvalidOption {
            option: "height".to_string(),
            reason: "the bar needs at least one row".to_string(),
        });
    }
    if config.centered && config.right {
        warn!("'centered' and 'right' are both set; centering the bar");
    }

    Ok(TabsOptions {
        value: config.value.clone().map(TabKey::from),
        color: color_option("color", config.color.as_deref()).unwrap_or(defaults.color),
        slider_color: color_option("slider_color", config.slider_color.as_deref()),
        background_color: color_option("background_color", config.background_color.as_deref()),
        centered: config.centered,
        grow: config.grow,
        fixed_tabs: config.fixed_tabs,
        icons_and_text: config.icons_and_text,
        hide_slider: config.hide_slider,
        right: config.right && !config.centered,
        show_arrows: config.show_arrows,
        align_with_title: config.align_with_title,
        mobile_break_point: config.mobile_break_point.unwrap_or(defaults.mobile_break_point),
        prev_icon: config.prev_icon.clone().unwrap_or(defaults.prev_icon),
        next_icon: config.next_icon.clone().unwrap_or(defaults.next_icon),
        active_class: config.active_class.clone().unwrap_or(defaults.active_class),
        height: config.height,
        dark: config.dark.unwrap_or(defaults.dark),
    })
}

fn color_option(option: &str, value: Option<&str>) -> Option<Color> {
    let value = value?;
    let color = parse_color(value);
    if color.is_none() {
        warn!(option, value, "unknown color, using default");
    }
    color
}

/// Convert YAML nodes to child nodes, recursively
pub fn create_children(nodes: &[NodeConfigYaml]) -> Vec<ChildNode> {
    nodes
        .iter()
        .map(|node| ChildNode {
            kind: node.kind.as_deref().map(NodeKind::from_name),
            value: node.value.clone(),
            text: node.text.clone(),
            icon: node.icon.clone(),
            children: create_children(&node.children),
        })
        .collect()
}

/// Default config path: `src/config.yaml` under the manifest directory
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    let contents = read(&path)?;
    parse_config(&contents)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TabsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
