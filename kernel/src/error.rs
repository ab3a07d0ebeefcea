use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Timeout,
    /// The operation collides with records that still reference the target.
    Conflict,
    /// A referenced entity does not exist. Holds the entity kind, e.g. `"Author"`.
    NotFound(&'static str),
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Conflict => write!(f, "Entity is still referenced by other records"),
            KernelError::NotFound(entity) => write!(f, "{} not found", entity),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
