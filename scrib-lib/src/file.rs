//! Format supporting Filesystem operations.
//!
//! This module contains basic methods for opening/creating files into a supported format and also
//! provides types to read and write from those format files.

use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, Write},
    marker::PhantomData,
    path::Path,
};

use crate::{
    format::{Format, Reader, Writer},
    Error, ErrorKind,
};

use glob::glob;

/// A reference to an open file on the filesystem which should have the textual content that
/// matches the generic [`Format`].
///
/// `FormatFile`s are automatically closed when they go out of scope. Errors detected on closing are
/// ignored by the implementation of `Drop`.
#[allow(clippy::module_name_repetitions)]
pub struct FormatFile<F: Format> {
    file: File,
    _format: PhantomData<F>,
}

impl<F: Format> FormatFile<F> {
    fn new(file: File) -> Self {
        Self {
            file,
            _format: PhantomData,
        }
    }

    /// Attempts to open a format file in read and write mode.
    ///
    /// # Errors
    /// This function will return an error if `path` does not already exist or the user lacks
    /// permissions to open the file.
    ///
    /// # Examples
    /// ```no_run
    /// use scrib::{
    ///     file::FormatFile,
    ///     format::BibTex
    /// };
    ///
    /// fn main() -> Result<(), scrib::Error> {
    ///     let mut f = FormatFile::<BibTex>::open("foo.bib")?;
    ///     Ok(())
    /// }
    ///
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let path_buf = path.with_extension(F::ext());
        open_file_for_read_and_write(path_buf.as_path())
    }

    /// Attempts to find a single format file in the directory.
    ///
    /// This function will use the value from the [`Format::ext`] associated function to
    /// find a file with the same extension.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - The path is not a directory
    /// - No file can be found in the directory
    /// - More than one file with the extension is found
    /// - User lacks permissions to open the file
    ///
    /// # Examples
    /// ```no_run
    /// use scrib::{
    ///     file::FormatFile,
    ///     format::BibTex,
    /// };
    ///
    /// fn main() -> Result<(), scrib::Error> {
    ///     let mut f = FormatFile::<BibTex>::find(".")?;
    ///     Ok(())
    /// }
    ///
    /// ```
    pub fn find<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::new(
                ErrorKind::IO,
                format!("{} is not a directory", path.display()),
            ));
        }

        find_format_file_in_directory(path)
    }

    /// Opens a new format file in read and write mode.
    ///
    /// # Errors
    /// This function will return an error if the file already exists or the user lacks
    /// permissions to create the file.
    ///
    /// # Examples
    /// ```no_run
    /// use scrib::{
    ///     file::FormatFile,
    ///     format::BibTex
    /// };
    ///
    /// fn main() -> Result<(), scrib::Error> {
    ///     let f = FormatFile::<BibTex>::create("foo.bib")?;
    ///     Ok(())
    /// }
    ///
    /// ```
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let path_buf = path.with_extension(F::ext());
        create_file_for_read_and_write(path_buf.as_path())
    }
}

impl<F: Format> Reader for FormatFile<F> {
    type Format = F;

    fn read(&mut self) -> Result<Self::Format, Error> {
        read_file_to_string(&mut self.file).map(F::new)
    }
}

fn read_file_to_string(file: &mut File) -> Result<String, Error> {
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::wrap_with(ErrorKind::IO, e, "Cannot read contents of file"))
        .map(move |bytes| {
            log::trace!("{bytes} read from the file");
            content
        })
}

impl<F: Format> Writer for FormatFile<F> {
    type Format = F;

    fn write(&mut self, format: F) -> Result<(), Error> {
        fn overwrite_file_from_start(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
            // Rewind the cursor back to the start of the file to write over the contents and set
            // the length of the file to be equal to bytes so that existing data is removed
            log::trace!("rewind file cursor to start and write {} bytes", bytes.len());
            file.rewind()?;
            file.set_len(bytes.len() as u64)?;
            file.write_all(bytes)
        }

        let bytes = format.raw().into_bytes();
        overwrite_file_from_start(&mut self.file, &bytes)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
    }
}

#[inline]
fn open_file_for_read_and_write<F: Format>(path: &Path) -> Result<FormatFile<F>, Error> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map(FormatFile::<F>::new)
        .map_err(|e| {
            Error::wrap_with(
                ErrorKind::IO,
                e,
                format!(
                    "Failed to open the '{}' file for reading and writing",
                    path.display()
                ),
            )
        })
}

#[inline]
fn create_file_for_read_and_write<F: Format>(path: &Path) -> Result<FormatFile<F>, Error> {
    OpenOptions::new()
        .create_new(true)
        .read(true)
        .write(true)
        .open(path)
        .map(FormatFile::<F>::new)
        .map_err(|e| {
            Error::wrap_with(
                ErrorKind::IO,
                e,
                format!(
                    "Failed to create and open the '{}' file for reading and writing",
                    path.display()
                ),
            )
        })
}

fn find_format_file_in_directory<F, P>(dir: P) -> Result<FormatFile<F>, Error>
where
    F: Format,
    P: AsRef<Path>,
{
    let path = dir.as_ref();

    let pattern = format!("{}/*.{}", path.to_string_lossy(), F::ext());

    let mut iter = glob(&pattern).expect("File pattern should always be valid");

    let path_buf = iter
        .next()
        .ok_or_else(|| {
            Error::new(
                ErrorKind::IO,
                format!(
                    "No .{} file found in the '{}' directory",
                    F::ext(),
                    path.display()
                ),
            )
        })?
        .map_err(|e| {
            Error::wrap_with(
                ErrorKind::IO,
                e,
                "Cannot determine a file path - Do you have the correct permissions?",
            )
        })?;

    if iter.next().is_some() {
        return Err(Error::new(
            ErrorKind::IO,
            format!("More than one .{} file found", F::ext()),
        ));
    }

    open_file_for_read_and_write(path_buf.as_path())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{
        ast::{Record, RecordKind},
        format::BibTex,
    };

    use assert_fs::{
        fixture::{FileTouch, FileWriteStr, PathChild},
        NamedTempFile, TempDir,
    };

    #[test]
    #[should_panic(
        expected = "Failed to open the 'file does not exist.bib' file for reading and writing"
    )]
    fn err_when_trying_to_open_bib_file_that_does_not_exist() {
        FormatFile::<BibTex>::open("file does not exist").unwrap();
    }

    fn create_temp_file(name: &str) -> NamedTempFile {
        // create temp file locally
        let file = NamedTempFile::new(name).expect("Cannot create temp file for test");
        // touch the temp file so it can be discovered by code
        file.touch().expect("Failure on touch of new temp file");
        file
    }

    #[test]
    fn open_temp_bib_file_with_ext() {
        let file = create_temp_file("temp.bib");
        let path = NamedTempFile::path(&file);
        let res = FormatFile::<BibTex>::open(path);
        file.close().unwrap();

        assert!(res.is_ok());
    }

    #[test]
    fn open_temp_bib_file_by_name_without_ext() {
        let file = create_temp_file("temp.bib");
        // remove ext from temp path
        let path = NamedTempFile::path(&file).with_extension("");
        let res = FormatFile::<BibTex>::open(path);
        file.close().unwrap();

        assert!(res.is_ok());
    }

    #[test]
    #[should_panic(expected = "No .bib file found")]
    fn no_files_in_directory() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");

        find_format_file_in_directory::<BibTex, _>(TempDir::path(&dir)).unwrap();
    }

    #[test]
    #[should_panic(expected = "not a directory")]
    fn path_is_not_a_directory() {
        FormatFile::<BibTex>::find("not a directory").unwrap();
    }

    #[test]
    #[should_panic(expected = "More than one .bib file")]
    fn multiple_bib_files_in_directory() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        dir.child("one.bib").touch().unwrap();
        dir.child("two.bib").touch().unwrap();

        find_format_file_in_directory::<BibTex, _>(TempDir::path(&dir)).unwrap();
    }

    #[test]
    fn read_bib_file_as_bibliography() {
        let file = create_temp_file("temp.bib");
        file.write_str("@article{Br1234, author = {Brownie}, title = {The Best Brownie}, journal = {IJS}, year = {2016},}")
            .expect("Cannot write test content to temp file");

        let mut file = FormatFile::<BibTex>::open(NamedTempFile::path(&file))
            .expect("Cannot open the temp file");

        let biblio = file.read_ast().expect("temp file content is valid BibTeX");
        let record = biblio.into_records().remove(0);

        assert_eq!(Some("Br1234"), record.cite());
        assert_eq!(Some("Brownie"), record.get_field("author"));
    }

    #[test]
    fn written_bibliography_is_read_back_in_canonical_form() {
        let temp = create_temp_file("temp.bib");
        let mut file =
            FormatFile::<BibTex>::open(NamedTempFile::path(&temp)).expect("Cannot open temp file");

        let mut record = Record::with_cite(RecordKind::Article, "Br1234");
        record.set_field("author", "Brownie");
        record.set_field("title", "The Best Brownie");
        record.set_field("journal", "IJS");
        record.set_field("year", "2016");
        let expected = crate::format::compose_record(&record);

        file.write_ast(crate::ast::Biblio::new(vec![record]))
            .expect("Cannot write to temp file");

        let raw = FormatFile::<BibTex>::open(NamedTempFile::path(&temp))
            .expect("Cannot reopen temp file")
            .read()
            .expect("Cannot read temp file")
            .raw();

        assert_eq!(expected, raw);
    }
}
