use thiserror::Error;

/// Errors surfaced when resolving a dependency or accessing an injection slot.
///
/// `bind` and `fill` are total and have no error channel; `resolve` fails only
/// with [`InjectError::NotBound`]. Slot access adds [`InjectError::Unfilled`]
/// for cells that were never handed to a container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// No factory has been bound for the requested type.
    #[error("no dependency bound for '{0}'")]
    NotBound(&'static str),
    /// The slot was accessed before any container filled its owner.
    #[error("injection slot for '{0}' was never filled by a container")]
    Unfilled(&'static str),
}
