//! Resolution failures of the help renderer.

/// Why a help target could not be shown.
///
/// Neither variant is a fault: the renderer turns both into a short message
/// for the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HelpError {
    /// The id does not name a plugin or command, or names a hidden one.
    #[error("no plugin or command called `{0}`")]
    NotFound(String),

    /// The plugin or group exists but has nothing to list.
    #[error("`{0}` has no visible commands")]
    Empty(String),
}

impl HelpError {
    /// The id the user asked about.
    pub fn target(&self) -> &str {
        match self {
            Self::NotFound(id) | Self::Empty(id) => id,
        }
    }
}
