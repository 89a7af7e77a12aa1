use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the contained text verbatim, without quotes.
pub struct DebugRaw(pub &'static str);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
