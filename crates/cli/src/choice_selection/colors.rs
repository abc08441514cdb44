use choice_prompt_core::config::get_style_path;
use choice_prompt_core::error::{Error, Result};
use choice_prompt_core::file_handling::get_style_definition;
use choice_prompt_core::style_definitions::{
    ColorDefinition, StyleConfigDefinition, StyleDefinition,
};
use crossterm::style::{Attribute, Color, ContentStyle};
use log::{debug, info};

use super::types::StyleConfig;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(color_from_name(name)?),
            _ => None,
        })
    }
}

fn color_from_name(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

fn attribute_from_name(name: &str) -> Result<Attribute> {
    Ok(match name.to_lowercase().as_str() {
        "bold" => Attribute::Bold,
        "dim" | "faint" => Attribute::Dim,
        "italic" => Attribute::Italic,
        "underlined" => Attribute::Underlined,
        "reverse" => Attribute::Reverse,
        _ => return Err(Error::UnknownAttribute(name.to_string())),
    })
}

/// Trait for converting a role's style definition into a terminal style
pub trait AsContentStyle {
    fn as_content_style(&self) -> Result<ContentStyle>;
}

impl AsContentStyle for StyleDefinition {
    fn as_content_style(&self) -> Result<ContentStyle> {
        let mut style = ContentStyle::new();

        if let Some(foreground) = &self.foreground_color {
            style.foreground_color = foreground.as_crossterm_color()?;
        }

        if let Some(background) = &self.background_color {
            style.background_color = background.as_crossterm_color()?;
        }

        for name in self.attributes.iter().flatten() {
            style.attributes.set(attribute_from_name(name)?);
        }

        Ok(style)
    }
}

fn role_or_default(
    definition: &Option<StyleDefinition>,
    default: ContentStyle,
) -> Result<ContentStyle> {
    match definition {
        None => Ok(default),
        Some(definition) => definition.as_content_style(),
    }
}

impl StyleConfig {
    /// Builds a style config from a parsed style file. Roles the file leaves
    /// out keep their default style.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid colors or unknown attributes.
    pub fn from_definition(definition: &StyleConfigDefinition) -> Result<Self> {
        let defaults = StyleConfig::default();

        Ok(Self {
            highlight: role_or_default(&definition.highlight, defaults.highlight)?,
            normal: role_or_default(&definition.normal, defaults.normal)?,
            prompt: role_or_default(&definition.prompt, defaults.prompt)?,
            help: role_or_default(&definition.help, defaults.help)?,
        })
    }
}

/// Loads the style config from the given (or default) style file path.
///
/// A missing file gives the default style.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or defines an
/// invalid style.
pub fn load_style_config(style_path_arg: &Option<String>) -> Result<StyleConfig> {
    let style_path = get_style_path(style_path_arg);
    debug!("Style path: `{}`", style_path);

    match get_style_definition(&style_path)? {
        None => Ok(StyleConfig::default()),
        Some(definition) => {
            info!("Using style from `{}`", style_path);
            StyleConfig::from_definition(&definition)
        }
    }
}
