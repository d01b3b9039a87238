use super::category::Category;
use super::records::{FeedRecord, SleepRecord};
use crate::errors::{AppError, AppResult};

/// Canonical table produced for one archive entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryTable {
    Sleep(Vec<SleepRecord>),
    Nursing(Vec<FeedRecord>),
    Pumped(Vec<FeedRecord>),
}

impl CategoryTable {
    pub fn category(&self) -> Category {
        match self {
            CategoryTable::Sleep(_) => Category::Sleep,
            CategoryTable::Nursing(_) => Category::Nursing,
            CategoryTable::Pumped(_) => Category::Pumped,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CategoryTable::Sleep(rows) => rows.len(),
            CategoryTable::Nursing(rows) | CategoryTable::Pumped(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tables collected while walking an archive; turned into [`BabyStats`]
/// once every entry has been read.
#[derive(Debug, Default)]
pub struct LoadedTables {
    sleep: Option<Vec<SleepRecord>>,
    nursing: Option<Vec<FeedRecord>>,
    pumped: Option<Vec<FeedRecord>>,
}

impl LoadedTables {
    /// Store a table; a second table for the same category is rejected.
    pub fn insert(&mut self, table: CategoryTable) -> AppResult<()> {
        let category = table.category();
        let occupied = match table {
            CategoryTable::Sleep(rows) => self.sleep.replace(rows).is_some(),
            CategoryTable::Nursing(rows) => self.nursing.replace(rows).is_some(),
            CategoryTable::Pumped(rows) => self.pumped.replace(rows).is_some(),
        };

        if occupied {
            return Err(AppError::DuplicateCategory(category));
        }
        Ok(())
    }
}

/// All canonical tables of one export. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BabyStats {
    sleep: Vec<SleepRecord>,
    nursing: Vec<FeedRecord>,
    pumped: Vec<FeedRecord>,
    all_feeding: Vec<FeedRecord>,
}

impl BabyStats {
    /// Build the stats, failing if any category is missing.
    /// The all-feeding table is nursing ∪ pumped, stable-sorted by time.
    pub fn from_tables(tables: LoadedTables) -> AppResult<Self> {
        let sleep = tables.sleep.ok_or(AppError::MissingCategory(Category::Sleep))?;
        let nursing = tables
            .nursing
            .ok_or(AppError::MissingCategory(Category::Nursing))?;
        let pumped = tables
            .pumped
            .ok_or(AppError::MissingCategory(Category::Pumped))?;

        let mut all_feeding: Vec<FeedRecord> =
            nursing.iter().chain(pumped.iter()).cloned().collect();
        all_feeding.sort_by_key(|r| r.time);

        Ok(Self {
            sleep,
            nursing,
            pumped,
            all_feeding,
        })
    }

    pub fn sleep(&self) -> &[SleepRecord] {
        &self.sleep
    }

    pub fn nursing(&self) -> &[FeedRecord] {
        &self.nursing
    }

    pub fn pumped(&self) -> &[FeedRecord] {
        &self.pumped
    }

    pub fn all_feeding(&self) -> &[FeedRecord] {
        &self.all_feeding
    }
}
