use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Absent-item removal and cursor exhaustion are deliberately *not* errors;
/// they are normal outcomes of their operations. Everything here is a
/// condition the caller must act on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The list changed structurally while a cursor was traversing it.
    #[error("cursor is stale: list was modified during traversal")]
    StaleCursor,

    /// A mesh template with no triangles was used to create an entity.
    #[error("mesh template '{0}' has no triangles")]
    EmptyTemplate(&'static str),

    /// The simulation was started without any mesh templates to spawn from.
    #[error("no mesh templates to spawn entities from")]
    NoTemplates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::EmptyTemplate("teapot");
        let msg = format!("{e}");
        assert!(msg.contains("teapot"));
        assert!(msg.contains("no triangles"));
    }
}
