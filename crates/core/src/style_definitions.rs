use serde::Deserialize;

/// A terminal color as written in the style file.
///
/// Exactly one of the fields should be set; the conversion to a terminal
/// color rejects definitions with more than one.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Styling for one visual role of the prompt.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    pub foreground_color: Option<ColorDefinition>,
    pub background_color: Option<ColorDefinition>,
    pub attributes: Option<Vec<String>>,
}

/// Contents of the style file. A role left out keeps its built-in style.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StyleConfigDefinition {
    pub highlight: Option<StyleDefinition>,
    pub normal: Option<StyleDefinition>,
    pub prompt: Option<StyleDefinition>,
    pub help: Option<StyleDefinition>,
}

impl StyleConfigDefinition {
    pub fn is_empty(&self) -> bool {
        self.highlight.is_none()
            && self.normal.is_none()
            && self.prompt.is_none()
            && self.help.is_none()
    }
}
