use std::{borrow::Cow, io};

use crate::{
    ast::{Biblio, Record, RecordKind},
    Error, ErrorKind,
};

use super::{
    field::{self, SkippedField, Validated},
    order, Format,
};

use biblatex::{Bibliography, Chunk};

/// A type wrapper around [`String`] to represent a `BibTex` format string.
#[derive(Debug)]
pub struct BibTex(String);

impl Format for BibTex {
    fn new(val: String) -> Self {
        Self(val)
    }

    fn parse(self) -> Result<Biblio, Error> {
        let biblio = if self.0.is_empty() {
            Bibliography::new()
        } else {
            Bibliography::parse(&self.0)
                .filter(|b| b.len() != 0)
                .ok_or_else(|| {
                    Error::new(ErrorKind::Deserialize, "Unable to parse string as BibTeX")
                })?
        };
        let records = biblio.into_iter().map(Record::from).collect();
        Ok(Biblio::new(records))
    }

    fn compose(biblio: &Biblio) -> Self {
        Self(biblio.records().map(compose_record).collect())
    }

    fn compose_record(record: &Record) -> String {
        compose_record(record)
    }

    fn raw(self) -> String {
        self.0
    }

    fn name() -> &'static str {
        "BibTex"
    }

    fn ext() -> &'static str {
        "bib"
    }
}

/// Composes a record into its canonical entry block.
///
/// The block starts with a blank line, followed by a `@Kind{cite,` header,
/// one line per emitted field with the `=` column aligned, and a closing
/// brace. Field order is recomputed from the kind's policy, see
/// [`super::field_order`], and field values pass through the validators
/// before emission - an invalid value drops its field, it never fails the
/// composition.
#[must_use]
pub fn compose_record(record: &Record) -> String {
    compose_record_verbose(record).0
}

/// Composes a record like [`compose_record`] but also returns the fields
/// that validation left out of the output.
///
/// A rejected citation key is reported under the name `cite`.
#[must_use]
pub fn compose_record_verbose(record: &Record) -> (String, Vec<SkippedField>) {
    let order = order::field_order(record.kind());
    let mut emit = Vec::new();
    let mut skipped = Vec::new();

    for &name in order.primary.iter().chain(order.secondary) {
        if let Some(value) = record.get_field(name) {
            validate_into(name, value, &mut emit, &mut skipped);
        }
    }

    // fields named in neither sequence keep a stable lexicographic order
    let mut rest: Vec<(&str, &str)> = record
        .iter()
        .filter(|(name, _)| !order.primary.contains(name) && !order.secondary.contains(name))
        .collect();
    rest.sort_unstable_by_key(|&(name, _)| name);

    for (name, value) in rest {
        validate_into(name, value, &mut emit, &mut skipped);
    }

    let cite = match record.cite() {
        Some(cite) if field::valid_cite(cite) => cite,
        Some(cite) => {
            skipped.push(SkippedField {
                name: "cite".to_owned(),
                value: cite.to_owned(),
            });
            ""
        }
        None => "",
    };

    let width = emit.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut block = format!("\n@{}{{{cite},\n", capitalize(record.kind().tag()));
    for (name, value) in emit {
        block.push_str(&format!("  {name:<width$} = {{{value}}},\n"));
    }
    block.push_str("}\n");

    (block, skipped)
}

/// Writes the canonical entry block for `record` to `sink`.
///
/// # Errors
///
/// An `Err` is returned if and only if writing to the sink fails. Field
/// content never fails the write - invalid values are resolved by the
/// validators through clamping or omission.
pub fn write_record<W: io::Write>(record: &Record, sink: &mut W) -> Result<(), Error> {
    sink.write_all(compose_record(record).as_bytes())
        .map_err(|e| Error::wrap(ErrorKind::IO, e))
}

fn validate_into<'record>(
    name: &'record str,
    value: &'record str,
    emit: &mut Vec<(&'record str, Cow<'record, str>)>,
    skipped: &mut Vec<SkippedField>,
) {
    match field::validate(name, value) {
        Validated::Keep(value) => emit.push((name, value)),
        Validated::Drop => skipped.push(SkippedField {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

impl From<biblatex::EntryType> for RecordKind<'static> {
    fn from(entry_type: biblatex::EntryType) -> Self {
        use biblatex::EntryType;

        match entry_type.to_bibtex() {
            EntryType::Article => Self::Article,
            EntryType::Book | EntryType::SuppBook => Self::Book,
            EntryType::Booklet => Self::Booklet,
            EntryType::InBook => Self::InBook,
            EntryType::InCollection => Self::InCollection,
            EntryType::InProceedings => Self::InProceedings,
            EntryType::Manual => Self::Manual,
            EntryType::MastersThesis => Self::MasterThesis,
            EntryType::PhdThesis => Self::PhdThesis,
            EntryType::Proceedings => Self::Proceedings,
            EntryType::TechReport | EntryType::Report => Self::Report,
            EntryType::Unpublished => Self::Unpublished,
            kind => Self::Other(Cow::Owned(kind.to_string())),
        }
    }
}

impl From<biblatex::Entry> for Record {
    fn from(entry: biblatex::Entry) -> Self {
        // Deconstruct to avoid cloning
        let biblatex::Entry {
            key: cite,
            entry_type,
            mut fields,
        } = entry;

        let kind = entry_type.into();
        let mut record = if cite.is_empty() {
            Self::new(kind)
        } else {
            Self::with_cite(kind, cite)
        };

        for (name, value) in fields.drain() {
            record.set_field(&name, flatten_chunks(value));
        }

        record
    }
}

fn flatten_chunks(chunks: Vec<Chunk>) -> String {
    chunks
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Normal(s) | Chunk::Verbatim(s) => s,
        })
        .collect()
}
