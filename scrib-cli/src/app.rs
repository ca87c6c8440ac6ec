use std::{fs::File, io::BufReader, path::Path};

use eyre::{eyre, Context};
use log::trace;
use scrib::{
    ast::{Biblio, Record, RecordKind},
    format::compose_record_verbose,
    import,
};

use crate::interact::user_resolve_record;

pub fn import_file(biblio: &mut Biblio, path: &Path) -> eyre::Result<String> {
    trace!("Importing records from '{}'", path.display());

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open the '{}' file for importing", path.display()))?;
    let records = import::csv_records(BufReader::new(file))?;

    let count = records.len();
    for record in records {
        biblio.insert(record);
    }

    Ok(format!("Imported {count} record(s) into the bibliography"))
}

pub fn new_record(
    biblio: &mut Biblio,
    kind: RecordKind<'static>,
    cite: Option<String>,
) -> eyre::Result<String> {
    if let Some(cite) = &cite {
        check_cite_duplication(biblio, cite)?;
    }

    let mut record = match cite {
        Some(cite) => Record::with_cite(kind, cite),
        None => Record::new(kind),
    };

    user_resolve_record(&mut record)?;
    biblio.insert(record);
    Ok("New entry added to bibliography".to_owned())
}

pub fn check_cite_duplication(bib: &Biblio, cite: &str) -> eyre::Result<()> {
    trace!("Checking current bibliography for a possible duplicate of the cite key '{cite}'");
    if bib.contains_cite(cite) {
        Err(eyre!(
            "An entry already exists with the cite key of '{cite}'."
        ))
    } else {
        trace!("No duplicate found!");
        Ok(())
    }
}

pub fn check_report(biblio: &Biblio) -> String {
    let mut skipped_total = 0;

    for record in biblio.records() {
        let (_, skipped) = compose_record_verbose(record);
        let label = record
            .cite()
            .or_else(|| record.get_field("title"))
            .unwrap_or("<unnamed>");

        for field in &skipped {
            println!(
                "warning: {label}: the {} value '{}' will be omitted from output",
                field.name, field.value
            );
        }
        skipped_total += skipped.len();
    }

    if skipped_total == 0 {
        "All entries will serialize cleanly!".to_owned()
    } else {
        format!("{skipped_total} field(s) will be omitted from canonical output")
    }
}
