//! The field emission-order policy.
//!
//! Emission order is data not code: each [`RecordKind`] maps to a pair of
//! ordered name sequences and the serializer walks those sequences once per
//! record. Adding a record kind is a table edit, not a code change.

use crate::ast::RecordKind;

/// The field emission order for one record kind.
///
/// Primary fields reflect the kind's bibliographic semantics and are always
/// considered first, in the order given. Secondary fields follow in their own
/// fixed relative order. Fields absent from a record are skipped without
/// leaving a gap, and fields present on a record but named in neither
/// sequence are emitted last in lexicographic name order so that repeated
/// serialization of the same record is order-stable.
#[derive(Clone, Copy, Debug)]
pub struct FieldOrder {
    /// Kind-specific canonical field sequence, emitted first.
    pub primary: &'static [&'static str],
    /// Catch-all sequence for the remaining well-known fields.
    pub secondary: &'static [&'static str],
}

/// The catch-all sequence shared by every kind.
const SECONDARY: &[&str] = &["volume", "number", "pages", "month", "note"];

/// Returns the emission-order policy for a record kind.
///
/// Unknown kinds have no primary fields - every present field falls through
/// to the secondary sequence and the lexicographic tail.
#[must_use]
pub const fn field_order(kind: &RecordKind<'_>) -> FieldOrder {
    let primary: &'static [&'static str] = match kind {
        RecordKind::Article => &["author", "title", "journal", "year"],
        RecordKind::Book => &["title", "publisher", "year", "author", "editor"],
        RecordKind::Booklet | RecordKind::Manual => &["title"],
        RecordKind::InBook => &["author", "title", "chapter", "publisher", "year"],
        RecordKind::InCollection => &["author", "title", "booktitle", "publisher", "year"],
        RecordKind::InProceedings => &["author", "title", "booktitle", "year"],
        RecordKind::MasterThesis | RecordKind::PhdThesis => &["author", "title", "school", "year"],
        RecordKind::Proceedings => &["title", "year"],
        RecordKind::Report => &["author", "title", "institution", "year"],
        RecordKind::Unpublished => &["author", "title"],
        RecordKind::Other(_) => &[],
    };

    FieldOrder {
        primary,
        secondary: SECONDARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_primary_fields_start_with_author() {
        let order = field_order(&RecordKind::Article);

        assert_eq!(&["author", "title", "journal", "year"], order.primary);
    }

    #[test]
    fn book_primary_fields_start_with_title() {
        let order = field_order(&RecordKind::Book);

        assert_eq!(
            &["title", "publisher", "year", "author", "editor"],
            order.primary
        );
    }

    #[test]
    fn unknown_kinds_have_no_primary_fields() {
        let order = field_order(&RecordKind::Other(std::borrow::Cow::Borrowed("misc")));

        assert!(order.primary.is_empty());
        assert!(!order.secondary.is_empty());
    }

    #[test]
    fn primary_and_secondary_sequences_never_overlap() {
        for kind in [
            RecordKind::Article,
            RecordKind::Book,
            RecordKind::Booklet,
            RecordKind::InBook,
            RecordKind::InCollection,
            RecordKind::InProceedings,
            RecordKind::Manual,
            RecordKind::MasterThesis,
            RecordKind::PhdThesis,
            RecordKind::Proceedings,
            RecordKind::Report,
            RecordKind::Unpublished,
        ] {
            let order = field_order(&kind);
            for name in order.primary {
                assert!(
                    !order.secondary.contains(name),
                    "{name} appears in both sequences for {kind}"
                );
            }
        }
    }
}
