use std::fmt::{Display, Formatter};

/// Circulation state of a book.
///
/// Anything other than the two known spellings is kept as `Unrecognized`
/// so that it can be reported by validation instead of failing to decode.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum BookStatus {
    CheckedIn,
    CheckedOut,
    Unrecognized(String),
}

impl BookStatus {
    const CHECKED_IN: &'static str = "CheckedIn";
    const CHECKED_OUT: &'static str = "CheckedOut";

    pub fn new(status: impl Into<String>) -> Self {
        let status = status.into();
        match status.as_str() {
            Self::CHECKED_IN => Self::CheckedIn,
            Self::CHECKED_OUT => Self::CheckedOut,
            _ => Self::Unrecognized(status),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for BookStatus {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<BookStatus> for String {
    fn from(value: BookStatus) -> Self {
        match value {
            BookStatus::Unrecognized(status) => status,
            known => known.as_ref().to_string(),
        }
    }
}

impl AsRef<str> for BookStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::CheckedIn => Self::CHECKED_IN,
            Self::CheckedOut => Self::CHECKED_OUT,
            Self::Unrecognized(status) => status,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
