use crate::errors::{AppError, AppResult};
use std::fmt;

/// Record category of one exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sleep,
    Nursing,
    Pumped,
}

impl Category {
    /// Fixed priority order used when resolving archive file names.
    pub const ALL: [Category; 3] = [Category::Sleep, Category::Nursing, Category::Pumped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Nursing => "nursing",
            Category::Pumped => "pumped",
        }
    }

    /// Resolve the category of an archive entry by case-sensitive substring match.
    ///
    /// - no category matches → `Ok(None)`, the entry is not ours
    /// - exactly one matches → `Ok(Some(..))`
    /// - several match (e.g. `sleep_and_nursing.csv`) → `AmbiguousCategory`
    pub fn from_file_name(name: &str) -> AppResult<Option<Self>> {
        let mut matches = Self::ALL.iter().filter(|c| name.contains(c.as_str()));

        let first = matches.next().copied();
        if first.is_some() && matches.next().is_some() {
            return Err(AppError::AmbiguousCategory(name.to_string()));
        }

        Ok(first)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
