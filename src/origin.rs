/// An error that may occur while parsing an [`Origin`]
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct FromStrError(String);

impl std::fmt::Display for FromStrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid origin {}", self.0)
    }
}

impl std::error::Error for FromStrError {}

/// An episode numbering origin
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Origin {
    /// AniDB numbering
    Anidb,

    /// Scene release numbering
    Scene,

    /// TheTVDB numbering
    Tvdb,
}

impl Origin {
    /// Get this as a str.
    ///
    /// String representations are lowercase, as the api expects them.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anidb => "anidb",
            Self::Scene => "scene",
            Self::Tvdb => "tvdb",
        }
    }
}

impl std::str::FromStr for Origin {
    type Err = FromStrError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        match data {
            "anidb" => Ok(Self::Anidb),
            "scene" => Ok(Self::Scene),
            "tvdb" => Ok(Self::Tvdb),
            _ => Err(FromStrError(data.to_string())),
        }
    }
}
