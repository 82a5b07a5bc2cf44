// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Returns the absolute, cleaned path of a file or directory.
pub fn absolute_path(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = path.as_ref();

    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(absolute_path.clean())
}
