use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColourScheme {
    #[default]
    Rainbow,
    Fire,
    Ocean,
    Oscilloscope,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Rainbow,
        Self::Fire,
        Self::Ocean,
        Self::Oscilloscope,
    ];

    pub const FALLBACK: Self = Self::Oscilloscope;

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "rainbow" => Self::Rainbow,
            "fire" => Self::Fire,
            "ocean" => Self::Ocean,
            "oscilloscope" => Self::Oscilloscope,
            other => {
                log::debug!("unknown colour scheme {other:?}, using {}", Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Oscilloscope => "oscilloscope",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Oscilloscope => "Oscilloscope",
        }
    }
}

impl From<&str> for ColourScheme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ColourScheme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
