#![forbid(unsafe_code)]

//! Ordered, file-name-keyed collection of rule records

use crate::rules::RuleRecord;

/// Rule records keyed by file name, kept in insertion order
///
/// Order only affects the sequence in which files are written and logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    records: Vec<RuleRecord>,
}

impl RuleTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record
    ///
    /// If a record with the same file name is already present it is replaced
    /// in place and returned; otherwise the record is appended.
    pub fn insert(&mut self, record: RuleRecord) -> Option<RuleRecord> {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.file_name == record.file_name)
        {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by file name
    pub fn get(&self, file_name: &str) -> Option<&RuleRecord> {
        self.records.iter().find(|r| r.file_name == file_name)
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RuleRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RuleRecord> for RuleTable {
    fn from_iter<T: IntoIterator<Item = RuleRecord>>(iter: T) -> Self {
        let mut table = RuleTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a RuleRecord;
    type IntoIter = std::slice::Iter<'a, RuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
