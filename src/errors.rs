use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

#[derive(Debug)]
pub enum TypographyError {
    FontNotFound(String),
    FontLoad(String),
    GlyphNotFound(char),
}

impl Display for TypographyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypographyError::FontNotFound(family) => write!(f, "No font matching '{}'", family),
            TypographyError::FontLoad(msg) => write!(f, "Font failed to load: {}", msg),
            TypographyError::GlyphNotFound(c) => write!(f, "Font has no glyph for {:?}", c),
        }
    }
}

impl Error for TypographyError {}

impl From<font_kit::error::SelectionError> for TypographyError {
    fn from(error: font_kit::error::SelectionError) -> Self {
        TypographyError::FontNotFound(error.to_string())
    }
}

impl From<font_kit::error::FontLoadingError> for TypographyError {
    fn from(error: font_kit::error::FontLoadingError) -> Self {
        TypographyError::FontLoad(error.to_string())
    }
}

#[derive(Debug)]
pub enum ExportError {
    EmptyFrame,
    Io(io::Error),
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExportError::EmptyFrame => None,
            ExportError::Io(err) => Some(err),
        }
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportError::EmptyFrame => write!(f, "Nothing has been drawn yet."),
            ExportError::Io(err) => write!(f, "Snapshot could not be written: {}", err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(error: io::Error) -> Self {
        ExportError::Io(error)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    Serialize(String),
    Invalid(String),
}

impl Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Config serialize error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(error: ron::error::SpannedError) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

impl From<ron::Error> for ConfigError {
    fn from(error: ron::Error) -> Self {
        ConfigError::Serialize(error.to_string())
    }
}
