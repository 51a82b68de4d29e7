use std::collections::BTreeMap;

/// Display names for the numeric class keys the service reports.
const BUILTIN_CATEGORIES: [(i64, &str); 10] = [
    (0, "dog"),
    (36, "vacuum_cleaner"),
    (19, "thunderstorm"),
    (17, "pouring_water"),
    (37, "clock_alarm"),
    (40, "helicopter"),
    (28, "snoring"),
    (21, "sneezing"),
    (1, "rooster"),
    (42, "siren"),
];

/// Read-only lookup from class key to category name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    names: BTreeMap<i64, String>,
}

impl CategoryTable {
    /// The fixed table of categories the service was trained on.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_CATEGORIES.iter().map(|(key, name)| (*key, *name)))
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (i64, &'a str)>) -> Self {
        Self {
            names: pairs
                .into_iter()
                .map(|(key, name)| (key, name.to_string()))
                .collect(),
        }
    }

    /// Look up a class key as it appears in a classification report.
    ///
    /// Keys that are not integers, or integers outside the table, have no name.
    pub fn name_for(&self, class_key: &str) -> Option<&str> {
        let key = class_key.trim().parse::<i64>().ok()?;
        self.name_for_index(key)
    }

    pub fn name_for_index(&self, key: i64) -> Option<&str> {
        self.names.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
