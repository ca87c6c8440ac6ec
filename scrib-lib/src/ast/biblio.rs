use super::Record;

/// An intermediate representation of a bibliography which is not tied to a specific end format.
///
/// Records are kept in insertion order, which is also the order they are
/// composed in. Records are not required to have a citation key so the
/// collection does not index by one - removal scans for a case-insensitive
/// key match instead.
#[derive(Debug, Default, PartialEq)]
pub struct Biblio {
    dirty: bool,
    records: Vec<Record>,
}

impl Biblio {
    /// Create a new [`Biblio`] from a list of bibliography records.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self {
            dirty: false,
            records,
        }
    }

    /// Checks and resets the `dirty` flag.
    ///
    /// The `dirty` flag will return true when this instance has been edited since it was created.
    /// The default value of the `dirty` flag is `false`, therefore calling this function will
    /// always reset the `dirty` flag to `false`.
    pub fn dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Append a new [`Record`].
    pub fn insert(&mut self, record: Record) {
        self.dirty = true;
        self.records.push(record);
    }

    /// Remove every record whose citation key matches `cite`, ignoring case.
    ///
    /// Returns true when at least one record was removed.
    pub fn remove(&mut self, cite: &str) -> bool {
        let mut removed = false;
        self.records.retain(|record| {
            let check = record
                .cite()
                .map_or(true, |k| k.to_lowercase() != cite.to_lowercase());
            removed |= !check;
            check
        });

        self.dirty |= removed;
        removed
    }

    /// Return an iterator over the records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Consumes self and returns the records in insertion order.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Tests whether any record has a citation key matching `cite`, ignoring case.
    #[must_use]
    pub fn contains_cite(&self, cite: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.cite().map_or(false, |k| k.eq_ignore_ascii_case(cite)))
    }

    /// Tests if any field in this [`Biblio`] matches a predicate.
    ///
    /// [`Self::contains_field`] takes a `key` value that should match a field
    /// name and a closure that returns `true` or `false`. It applies this
    /// closure to the matching field value in each record of the [`Biblio`],
    /// and if any of them return `true`, then so does
    /// [`Self::contains_field`]. If they all return `false`, it returns
    /// `false`.
    ///
    /// [`Self::contains_field`] is short-circuiting; in other words, it will stop processing as
    /// soon as it finds a `true`, given that no matter what else happens, the result will also be
    /// `true`.
    ///
    /// An empty [`Biblio`] will always return `false`.
    pub fn contains_field<P>(&self, key: &str, predicate: P) -> bool
    where
        P: Fn(&str) -> bool,
    {
        self.records
            .iter()
            .any(|record| record.get_field(key).map(&predicate).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::RecordKind;

    use super::*;

    fn report_record(cite: &str) -> Record {
        let mut record = Record::with_cite(RecordKind::Report, cite);
        record.set_field("title", "Title");
        record
    }

    #[test]
    fn insertion_of_record_makes_biblio_dirty() {
        let mut biblio = Biblio::default();

        assert!(!biblio.dirty(), "Biblio::default should be clean");

        biblio.insert(report_record("cite"));

        assert!(
            biblio.dirty(),
            "After insertion of a record the Biblio should be dirty"
        );
        assert!(
            !biblio.dirty(),
            "After calling Biblio::dirty the flag is reset so this second call \
                to the function should return false"
        );
    }

    #[test]
    fn dirty_flag_should_not_be_effected_when_nothing_is_removed() {
        let mut biblio = Biblio::default();

        assert!(
            !biblio.remove("this doesn't exist!"),
            "The Biblio is empty so nothing can be removed"
        );
        assert!(
            !biblio.dirty(),
            "Nothing was removed so the dirty flag should still be false"
        );
    }

    #[test]
    fn remove_record_in_single_biblio() {
        let mut biblio = Biblio::new(vec![report_record("cite")]);

        assert!(biblio.remove("CITE"), "Should remove the only record");
        assert!(biblio.dirty());
        assert!(
            biblio.into_records().is_empty(),
            "The only record should have been removed"
        );
    }

    #[test]
    fn records_without_a_cite_key_are_never_removed_by_cite() {
        let mut record = Record::new(RecordKind::Report);
        record.set_field("title", "Title");
        let mut biblio = Biblio::new(vec![record]);

        assert!(!biblio.remove(""));
        assert_eq!(1, biblio.into_records().len());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut biblio = Biblio::default();
        biblio.insert(report_record("b"));
        biblio.insert(report_record("a"));

        let cites: Vec<_> = biblio.records().filter_map(Record::cite).collect();
        assert_eq!(vec!["b", "a"], cites);
    }

    #[test]
    fn contains_field_matches_on_value_predicate() {
        let mut record = report_record("Edelkamp_2019");
        record.set_field("doi", "test");
        let references = Biblio::new(vec![record]);

        assert!(references.contains_field("doi", |f| f == "test"));
        assert!(!references.contains_field("doi", |f| f == "something else"));
    }
}
