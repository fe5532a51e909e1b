use crate::ThemeConfig;
use serde::{Deserialize, Serialize};

/// Where an icon is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IconStyle {
    /// Inside a tab header: inherits the surrounding color.
    TabView,
    /// Highlighted in search or lineage: brand accent.
    Highlight,
    /// Small type badge on preview cards.
    Accent,
    #[default]
    Default,
}

/// A renderer-agnostic icon description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSpec {
    pub glyph: String,
    pub font_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub(crate) fn build_icon(
    glyph: &str,
    size: u32,
    style: IconStyle,
    color: Option<&str>,
    theme: &ThemeConfig,
) -> IconSpec {
    let explicit = color.filter(|c| !c.is_empty());
    let color = match style {
        IconStyle::TabView => explicit.map(str::to_string),
        IconStyle::Highlight => Some(explicit.unwrap_or(&theme.highlight_color).to_string()),
        IconStyle::Accent | IconStyle::Default => {
            Some(explicit.unwrap_or(&theme.default_color).to_string())
        }
    };
    IconSpec {
        glyph: glyph.to_string(),
        font_size: size,
        color,
    }
}
