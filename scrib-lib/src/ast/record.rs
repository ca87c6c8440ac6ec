use std::{borrow::Cow, collections::HashMap, fmt};

use super::Field;

/// The bibliographic category of a [`Record`].
///
/// The kind determines which fields the serializer treats as primary and the
/// order they are emitted in, see [`crate::format::field_order`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordKind<'kind> {
    /// An article from a journal or magazine.
    Article,
    /// A book with an explicit publisher.
    Book,
    /// A work that is printed and bound, but without a named publisher.
    Booklet,
    /// A part of a book, such as a chapter or a page range.
    InBook,
    /// A part of a book having its own title.
    InCollection,
    /// A paper in a conference proceedings.
    InProceedings,
    /// Technical documentation.
    Manual,
    /// A thesis for a Master's level degree.
    MasterThesis,
    /// A thesis for a PhD level degree.
    PhdThesis,
    /// A conference proceeding.
    Proceedings,
    /// A report published by a school or other institution.
    Report,
    /// A document that has not been officially published.
    Unpublished,
    /// Any other category not recognised by this crate.
    Other(Cow<'kind, str>),
}

impl RecordKind<'_> {
    /// The canonical lowercase tag of this kind.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MasterThesis => "mastersthesis",
            Self::PhdThesis => "phdthesis",
            Self::Proceedings => "proceedings",
            Self::Report => "techreport",
            Self::Unpublished => "unpublished",
            Self::Other(tag) => tag.as_ref(),
        }
    }
}

impl fmt::Display for RecordKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for RecordKind<'static> {
    fn from(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "booklet" => Self::Booklet,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" => Self::InProceedings,
            "manual" => Self::Manual,
            "mastersthesis" | "masterthesis" => Self::MasterThesis,
            "phdthesis" => Self::PhdThesis,
            "proceedings" => Self::Proceedings,
            "techreport" | "report" => Self::Report,
            "unpublished" => Self::Unpublished,
            tag => Self::Other(Cow::Owned(tag.to_owned())),
        }
    }
}

/// An in-memory bibliographic record.
///
/// A record is a [`RecordKind`], an optional citation key and a mapping of
/// field names to raw string values. Field names are case-insensitive and
/// unique within a record, the name is normalized to lowercase when the field
/// is set. The order fields are set in is not significant - the display order
/// is recomputed by the serializer.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    kind: RecordKind<'static>,
    cite: Option<String>,
    fields: HashMap<String, String>,
}

impl Record {
    /// Creates an empty record of the given kind with no citation key.
    #[must_use]
    pub fn new(kind: RecordKind<'static>) -> Self {
        Self {
            kind,
            cite: None,
            fields: HashMap::new(),
        }
    }

    /// Creates an empty record of the given kind with a citation key.
    ///
    /// The key is stored as given - whether it is emitted is decided by the
    /// serializer, see [`crate::format::compose_record`].
    #[must_use]
    pub fn with_cite<S: Into<String>>(kind: RecordKind<'static>, cite: S) -> Self {
        Self {
            kind,
            cite: Some(cite.into()),
            fields: HashMap::new(),
        }
    }

    /// Returns the kind of this record.
    #[must_use]
    pub const fn kind(&self) -> &RecordKind<'static> {
        &self.kind
    }

    /// Returns the citation key of this record, if one has been set.
    #[must_use]
    pub fn cite(&self) -> Option<&str> {
        self.cite.as_deref()
    }

    /// Sets the citation key of this record and returns the existing one.
    pub fn set_cite<S: Into<String>>(&mut self, cite: S) -> Option<String> {
        self.cite.replace(cite.into())
    }

    /// Sets a field value by field name.
    ///
    /// The `name` is transformed to lowercase internally so users of this API
    /// don't need to do this. When the field is set multiple times the last
    /// value wins.
    pub fn set_field<S: Into<String>>(&mut self, name: &str, value: S) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    /// Searches for a field value that matches the `name` given.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Returns an iterator over the `(name, value)` pairs of the fields
    /// present on this record, in no particular order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the [`Field`]s of the record, in no particular order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field<'_>> {
        self.iter()
            .map(|(name, value)| Field {
                name: Cow::Borrowed(name),
                value: Cow::Borrowed(value),
            })
            .collect()
    }

    /// Returns true when no fields are set on this record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
