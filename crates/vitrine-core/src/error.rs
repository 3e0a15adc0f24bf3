/// Reasons a page component declined to activate.
///
/// None of these are fatal for the page: components are visual affordances,
/// so callers usually log the error and carry on without the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document attached.
    NoDocument,
    /// The interaction container is absent.
    MissingContainer,
    /// The moving track element is absent.
    MissingTrack,
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "no global window exists"),
            MountError::NoDocument => write!(f, "window has no document"),
            MountError::MissingContainer => write!(f, "container element not found"),
            MountError::MissingTrack => write!(f, "track element not found"),
        }
    }
}

impl std::error::Error for MountError {}
