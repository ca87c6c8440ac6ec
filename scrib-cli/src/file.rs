use std::path::PathBuf;

use eyre::Context;
use log::{info, trace};

use scrib::{file::FormatFile, format::Format};

#[allow(clippy::module_name_repetitions)]
pub fn open_or_create_format_file<F: Format>(
    file_name: Option<PathBuf>,
) -> eyre::Result<FormatFile<F>> {
    if let Some(path) = file_name {
        trace!("opening {} file as a {} file", path.display(), F::name());
        FormatFile::open(&path)
            .wrap_err_with(|| format!("Cannot use the '{}' file", path.display()))
    } else {
        trace!("Searching current directory for any {} files", F::name());
        if let Ok(file) = FormatFile::find(".") {
            Ok(file)
        } else {
            let path = PathBuf::from("bibliography").with_extension(F::ext());
            info!(
                "No .{} file found in current directory - creating the new file `{}`",
                F::ext(),
                path.display()
            );
            FormatFile::create(&path)
                .wrap_err_with(|| format!("Cannot create the '{}' file", path.display()))
        }
    }
}
