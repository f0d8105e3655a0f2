use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Messages, Model, Result};

/// A gsl.toml file with its raw content and the fully loaded model.
#[derive(Debug, Clone)]
pub struct GslToml {
    path: PathBuf,
    content: String,
    model: Model,
}

impl GslToml {
    /// Open and parse a gsl.toml file, then load its translation overlay.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let filename = path.display().to_string();
        let mut model = Model::from_str_with_filename(&content, &filename)?;

        if let Some(relative) = &model.project.messages {
            let messages_path = path
                .parent()
                .map(|dir| dir.join(relative))
                .unwrap_or_else(|| relative.clone());
            let overlay = read(&messages_path)?;
            let messages = Messages::from_str_with_filename(
                &overlay,
                &messages_path.display().to_string(),
            )?;
            debug!(
                path = %messages_path.display(),
                entries = messages.entries().count(),
                "loaded translation overlay"
            );
            messages.apply(&mut model);
            model.messages = messages;
        }

        debug!(
            path = %path.display(),
            modules = model.modules.len(),
            classes = model.classes.len(),
            "loaded model"
        );

        Ok(Self {
            path,
            content,
            model,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the file; the default output root.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_attaches_overlay() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("gsl.toml"),
            r#"
            [project]
            name = "ide"
            messages = "i18n/messages.toml"

            [[modules]]
            name = "misc"
            blocks = [{ name = "wait" }]
            "#,
        )
        .unwrap();
        fs::create_dir(temp.path().join("i18n")).unwrap();
        fs::write(
            temp.path().join("i18n/messages.toml"),
            "[misc.en.wait]\nmsg = \"wait %1 ms\"\n",
        )
        .unwrap();

        let file = GslToml::open(temp.path().join("gsl.toml")).unwrap();

        let block = &file.model().modules[0].blocks[0];
        let en = block.messages("en").unwrap();
        assert_eq!(en.msg.as_deref(), Some("wait %1 ms"));
        assert!(!file.model().messages.is_empty());
        assert_eq!(file.dir(), temp.path());
    }

    #[test]
    fn test_missing_overlay_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("gsl.toml"),
            "[project]\nname = \"ide\"\nmessages = \"nope.toml\"\n",
        )
        .unwrap();

        let err = GslToml::open(temp.path().join("gsl.toml")).unwrap_err();
        match *err {
            Error::Io { ref path, .. } => assert!(path.ends_with("nope.toml")),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = GslToml::open(temp.path().join("gsl.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
