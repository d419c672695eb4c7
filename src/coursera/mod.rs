mod extractor;

pub use extractor::CourseExtractor;

use std::{fmt, slice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub language: String,
    pub start_date: Option<String>,
    pub week_count: usize,
    pub rate: Option<String>,
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name            : {}", self.name)?;
        writeln!(f, "Language        : {}", self.language)?;
        writeln!(
            f,
            "Start Date      : {}",
            self.start_date.as_deref().unwrap_or("None")
        )?;
        writeln!(f, "Weeks           : {}", self.week_count)?;
        writeln!(f, "Rate            : {}", self.rate.as_deref().unwrap_or("None"))
    }
}

/// Records in sampling order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseInfoTable {
    records: Vec<CourseRecord>,
}

impl CourseInfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CourseRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }
}

impl From<Vec<CourseRecord>> for CourseInfoTable {
    fn from(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a CourseInfoTable {
    type Item = &'a CourseRecord;
    type IntoIter = slice::Iter<'a, CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
