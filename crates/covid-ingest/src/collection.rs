//! Filename-keyed collection of successfully loaded tables.

use polars::prelude::DataFrame;

/// Successfully loaded tables keyed by file name, in load order.
#[derive(Debug, Clone, Default)]
pub struct DatasetCollection {
    entries: Vec<(String, DataFrame)>,
}

impl DatasetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a table, replacing any table already stored under `file_name`.
    pub fn insert(&mut self, file_name: impl Into<String>, df: DataFrame) {
        let file_name = file_name.into();
        match self.entries.iter_mut().find(|(name, _)| *name == file_name) {
            Some((_, existing)) => *existing = df,
            None => self.entries.push((file_name, df)),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&DataFrame> {
        self.entries
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, df)| df)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.get(file_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File names in load order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataFrame)> {
        self.entries.iter().map(|(name, df)| (name.as_str(), df))
    }

    pub fn into_inner(self) -> Vec<(String, DataFrame)> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a DatasetCollection {
    type Item = (&'a str, &'a DataFrame);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, DataFrame)>,
        fn(&'a (String, DataFrame)) -> (&'a str, &'a DataFrame),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (String, DataFrame)) -> (&'a str, &'a DataFrame) =
            |(name, df)| (name.as_str(), df);
        self.entries.iter().map(split)
    }
}
