// src/record.rs

/// One row: column names paired with raw values, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Zip a header with a row's values. Short rows are padded with empty
    /// values; values beyond the header are dropped.
    pub fn from_parts<H, V>(headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let v = values.get(i).map(|v| v.as_ref()).unwrap_or("");
                (h.as_ref().to_string(), v.to_string())
            })
            .collect();
        Self { fields }
    }

    /// Value of `column`; `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v.as_str())
    }

    /// Value of `column`, reading an absent column as empty.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Replace the value of `column` in place, or append the column.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, v)) => *v = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Exactly `width` values in field order, padded with empties. Positional,
    /// so duplicate column names keep their own values.
    pub fn padded_values(&self, width: usize) -> impl Iterator<Item = &str> {
        self.values().chain(std::iter::repeat("")).take(width)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_pads_short_rows() {
        let r = Record::from_parts(&["a", "b", "c"], &["1", "2"]);
        assert_eq!(r.get("a"), Some("1"));
        assert_eq!(r.get("c"), Some(""));
        assert_eq!(r.get("d"), None);
        assert_eq!(r.get_or_empty("d"), "");
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_set_replaces_or_appends() {
        let mut r = Record::from_parts(&["a", "UOM"], &["1", "EA"]);
        r.set("UOM", "LM");
        r.set("MPL", "A10");
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["a", "UOM", "MPL"]);
        assert_eq!(r.values().collect::<Vec<_>>(), vec!["1", "LM", "A10"]);
    }

    #[test]
    fn test_padded_values_keep_duplicates() {
        let r = Record::from_parts(&["a", "a", "b"], &["1", "2", "3"]);
        assert_eq!(r.get("a"), Some("1"));
        assert_eq!(
            r.padded_values(5).collect::<Vec<_>>(),
            vec!["1", "2", "3", "", ""]
        );
        assert_eq!(r.padded_values(2).collect::<Vec<_>>(), vec!["1", "2"]);
    }
}
