//! Region marker syntax.
//!
//! Markers live inside target-language comments:
//!
//! ```text
//! // <default GSL customizable: move_forward-body>
//! // </GSL customizable: move_forward-body>
//! // <GSL customizable: move_forward-extra-toolbox />
//! ```
//!
//! Everything on the line outside the `<...>` tag (indentation, comment
//! leader, trailing text) is ordinary structure.

/// The tag text shared by all markers.
pub const TAG: &str = "GSL customizable:";

/// Open-tag flavor. Both flavors merge identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `<default GSL customizable: ID>`
    Default,
    /// `<GSL customizable: ID>`
    Plain,
}

impl Flavor {
    fn prefix(&self) -> &'static str {
        match self {
            Flavor::Default => "<default ",
            Flavor::Plain => "<",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Default => "default",
            Flavor::Plain => "plain",
        }
    }
}

/// The role of a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Opens a bounded region.
    Open(Flavor),
    /// Closes the innermost bounded region.
    Close,
    /// A self-closing insertion point.
    Void(Flavor),
}

/// A recognized marker on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub kind: MarkerKind,
    /// Region identifier, trimmed. May be empty for broken markup.
    pub id: &'a str,
    /// Whether a closing tag was written in self-closing form (`</... />`).
    pub self_closing_close: bool,
}

impl<'a> Marker<'a> {
    /// Recognize a marker on `line`.
    ///
    /// Returns `None` for lines that are plain text.
    pub fn scan(line: &'a str) -> Option<Self> {
        for (pos, _) in line.match_indices(TAG) {
            let before = &line[..pos];
            let (closing, flavor) = if before.ends_with("</") {
                (true, Flavor::Plain)
            } else if before.ends_with(Flavor::Default.prefix()) {
                (false, Flavor::Default)
            } else if before.ends_with('<') {
                (false, Flavor::Plain)
            } else {
                continue;
            };

            let rest = &line[pos + TAG.len()..];
            let Some(end) = rest.find('>') else {
                continue;
            };
            let inner = rest[..end].trim_end();
            let (id, self_closing) = match inner.strip_suffix('/') {
                Some(id) => (id.trim(), true),
                None => (inner.trim(), false),
            };

            let kind = match (closing, self_closing) {
                (true, _) => MarkerKind::Close,
                (false, true) => MarkerKind::Void(flavor),
                (false, false) => MarkerKind::Open(flavor),
            };
            return Some(Self {
                kind,
                id,
                self_closing_close: closing && self_closing,
            });
        }
        None
    }
}

/// Tag text opening a bounded region.
pub fn open_tag(id: &str, flavor: Flavor) -> String {
    format!("{}{} {}>", flavor.prefix(), TAG, id)
}

/// Tag text closing a bounded region.
pub fn close_tag(id: &str) -> String {
    format!("</{} {}>", TAG, id)
}

/// Tag text for an insertion point.
pub fn void_tag(id: &str, flavor: Flavor) -> String {
    format!("{}{} {} />", flavor.prefix(), TAG, id)
}
