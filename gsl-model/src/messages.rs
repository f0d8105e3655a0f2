//! Translation overlay: per-language block messages kept outside gsl.toml.
//!
//! ```toml
//! [hedgehog.en.hedgehog_read_analog]
//! msg = "analog port %1"
//! tooltip = "get the value of an analog port"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Model, Result, error::SourceContext};

/// Message and tooltip of a block in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockMessages {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl BlockMessages {
    /// Fill in fields from `other` where it has them.
    fn overlay(&mut self, other: &BlockMessages) {
        if other.msg.is_some() {
            self.msg.clone_from(&other.msg);
        }
        if other.tooltip.is_some() {
            self.tooltip.clone_from(&other.tooltip);
        }
    }
}

/// Address of one overlay entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageKey {
    pub module: String,
    pub lang: String,
    pub block: String,
}

/// module -> language -> block -> messages
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Messages(BTreeMap<String, BTreeMap<String, BTreeMap<String, BlockMessages>>>);

impl Messages {
    /// Parse an overlay file.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.parse_error(e))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, module: &str, lang: &str, block: &str) -> Option<&BlockMessages> {
        self.0.get(module)?.get(lang)?.get(block)
    }

    /// All entries, sorted by module, language and block.
    pub fn entries(&self) -> impl Iterator<Item = (MessageKey, &BlockMessages)> {
        self.0.iter().flat_map(|(module, langs)| {
            langs.iter().flat_map(move |(lang, blocks)| {
                blocks.iter().map(move |(block, messages)| {
                    (
                        MessageKey {
                            module: module.clone(),
                            lang: lang.clone(),
                            block: block.clone(),
                        },
                        messages,
                    )
                })
            })
        })
    }

    /// Entries naming a module or block the model does not declare.
    pub fn unknown_entries(&self, model: &Model) -> Vec<MessageKey> {
        self.entries()
            .filter(|(key, _)| {
                !model
                    .module(&key.module)
                    .is_some_and(|m| m.blocks.iter().any(|b| b.name == key.block))
            })
            .map(|(key, _)| key)
            .collect()
    }

    /// Attach overlay messages to the blocks they name.
    ///
    /// Overlay values win over messages written inline in gsl.toml.
    pub(crate) fn apply(&self, model: &mut Model) {
        for module in &mut model.modules {
            let Some(langs) = self.0.get(&module.name) else {
                continue;
            };
            for (lang, blocks) in langs {
                for block in &mut module.blocks {
                    if let Some(messages) = blocks.get(&block.name) {
                        block
                            .langs
                            .entry(lang.clone())
                            .or_default()
                            .overlay(messages);
                    }
                }
            }
        }
    }
}
