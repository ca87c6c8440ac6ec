//! Structs for representing a generic bibliographic record and all its parts.
mod biblio;
mod record;

use std::borrow::Cow;

pub use biblio::Biblio;
pub use record::{Record, RecordKind};

/// A record field which is essentially a key value pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<'record> {
    /// Name of the record field.
    pub name: Cow<'record, str>,
    /// Value of the record field.
    pub value: Cow<'record, str>,
}
