//! Output locations of generated files, relative to the output root.

use std::path::PathBuf;

use gsl_model::PathsConfig;

/// File extension for generated JavaScript sources.
pub const FILE_EXTENSION: &str = "js";

/// `<blocks>/<module>/<block>.js`
pub fn block_file(paths: &PathsConfig, module: &str, block: &str) -> PathBuf {
    paths
        .blocks
        .join(module)
        .join(format!("{block}.{FILE_EXTENSION}"))
}

/// `<sdk>/<module>.js`
pub fn sdk_file(paths: &PathsConfig, module: &str) -> PathBuf {
    paths.sdk.join(format!("{module}.{FILE_EXTENSION}"))
}

/// `<executor>/<module>.js`
pub fn executor_file(paths: &PathsConfig, module: &str) -> PathBuf {
    paths.executor.join(format!("{module}.{FILE_EXTENSION}"))
}

/// `<classes>/<Class>.js`
pub fn class_file(paths: &PathsConfig, class: &str) -> PathBuf {
    paths.classes.join(format!("{class}.{FILE_EXTENSION}"))
}
