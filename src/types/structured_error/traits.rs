use std::error::Error;
use std::fmt::{self, Display};

use super::StructuredError;

impl Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if !f.alternate() {
            return Ok(());
        }

        let mut source = self.source();
        while let Some(cause) = source {
            write!(f, "\n  caused by: {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

// Causes are compared by their rendered message; `dyn Error` has no equality.
impl PartialEq for StructuredError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.fallback == other.fallback
            && match (&self.cause, &other.cause) {
                (Some(lhs), Some(rhs)) => lhs.to_string() == rhs.to_string(),
                (None, None) => true,
                _ => false,
            }
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for StructuredError {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_boxed(error)
    }
}
