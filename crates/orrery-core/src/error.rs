//! Error types for the simulation core.

/// Errors raised by the body registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No body with the given name exists. The control panel is generated
    /// from the same catalog the registry is built from, so hitting this at
    /// runtime indicates an invariant violation rather than user error.
    #[error("no body named {0:?} in the registry")]
    NotFound(String),
}
