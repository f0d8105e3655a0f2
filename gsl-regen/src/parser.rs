//! Line scanner turning marker-annotated text into segments.

use std::collections::HashMap;

use gsl_core::join_lines;
use miette::{NamedSource, SourceSpan};

use crate::{
    error::MarkupError,
    marker::{Flavor, Marker, MarkerKind},
    region::{BodyOrigin, Bounded, Document, InsertionPoint, Region, RegionKind, Segment},
};

/// What kind of line sequence is being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Fresh template output: lines after an insertion point are plain text.
    Rendered,
    /// A file on disk: lines after an insertion point, up to the next marker,
    /// are that point's trailing content.
    Existing,
}

/// Stack-based scanner for region markers.
///
/// # Example
///
/// ```
/// use gsl_regen::{ParseMode, RegionParser};
///
/// let lines = [
///     "run() {",
///     "  // <default GSL customizable: run-body>",
///     "  return 1;",
///     "  // </GSL customizable: run-body>",
///     "}",
/// ];
/// let doc = RegionParser::new("run.js", ParseMode::Rendered).parse(&lines).unwrap();
/// assert_eq!(doc.regions().len(), 1);
/// assert_eq!(doc.regions()[0].id, "run-body");
/// ```
#[derive(Debug, Clone)]
pub struct RegionParser {
    name: String,
    mode: ParseMode,
}

/// An open bounded region waiting for its close marker.
struct Frame {
    id: String,
    index: usize,
    open: String,
    flavor: Flavor,
    children: Vec<Segment>,
}

impl RegionParser {
    /// Create a parser; `name` labels diagnostics (usually the file path).
    pub fn new(name: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Scan `lines` into a [`Document`].
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Document, MarkupError> {
        let mut root: Vec<Segment> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let Some(marker) = Marker::scan(line) else {
                self.push_text(current(&mut root, &mut stack), line);
                continue;
            };

            if marker.id.is_empty() {
                return Err(self.malformed(
                    lines,
                    index,
                    "region marker has no identifier",
                    "missing identifier",
                    "write the marker as `<GSL customizable: ID>` with a non-empty ID",
                ));
            }

            match marker.kind {
                MarkerKind::Open(flavor) => {
                    self.claim(lines, &mut seen, marker.id, index)?;
                    stack.push(Frame {
                        id: marker.id.to_string(),
                        index,
                        open: line.to_string(),
                        flavor,
                        children: Vec::new(),
                    });
                }
                MarkerKind::Void(flavor) => {
                    self.claim(lines, &mut seen, marker.id, index)?;
                    current(&mut root, &mut stack).push(Segment::Region(Region {
                        id: marker.id.to_string(),
                        line: index + 1,
                        kind: RegionKind::InsertionPoint(InsertionPoint {
                            marker: line.to_string(),
                            flavor,
                            trailing: Vec::new(),
                        }),
                    }));
                }
                MarkerKind::Close => {
                    if marker.self_closing_close {
                        return Err(self.malformed(
                            lines,
                            index,
                            format!("closing marker for '{}' is self-closing", marker.id),
                            "closing marker",
                            "insertion points use `<GSL customizable: ID />`; closing markers use `</GSL customizable: ID>`",
                        ));
                    }
                    let frame = match stack.pop() {
                        Some(frame) if frame.id == marker.id => frame,
                        Some(frame) => {
                            return Err(self.malformed(
                                lines,
                                index,
                                format!(
                                    "closing marker for '{}' does not match region '{}' opened at line {}",
                                    marker.id,
                                    frame.id,
                                    frame.index + 1
                                ),
                                format!("expected `</GSL customizable: {}>`", frame.id),
                                "regions must be closed in the reverse order they were opened",
                            ));
                        }
                        None => {
                            return Err(self.malformed(
                                lines,
                                index,
                                format!(
                                    "closing marker for '{}' has no matching opening marker",
                                    marker.id
                                ),
                                "unmatched closing marker",
                                "add the opening marker or remove this line",
                            ));
                        }
                    };
                    let region = Region {
                        id: frame.id,
                        line: frame.index + 1,
                        kind: RegionKind::Bounded(Bounded {
                            open: frame.open,
                            close: line.to_string(),
                            flavor: frame.flavor,
                            body: frame.children,
                            origin: BodyOrigin::Default,
                        }),
                    };
                    current(&mut root, &mut stack).push(Segment::Region(region));
                }
            }
        }

        if let Some(frame) = stack.last() {
            return Err(self.malformed(
                lines,
                frame.index,
                format!("region '{}' is never closed", frame.id),
                "opened here",
                format!("add `</GSL customizable: {}>` after the region body", frame.id),
            ));
        }

        Ok(Document::new(root))
    }

    fn push_text(&self, segments: &mut Vec<Segment>, line: &str) {
        match segments.last_mut() {
            Some(Segment::Region(Region {
                kind: RegionKind::InsertionPoint(point),
                ..
            })) if self.mode == ParseMode::Existing => point.trailing.push(line.to_string()),
            Some(Segment::Text(text)) => text.push(line.to_string()),
            _ => segments.push(Segment::Text(vec![line.to_string()])),
        }
    }

    /// Record `id` as used at `index`, failing on a second use.
    fn claim<S: AsRef<str>>(
        &self,
        lines: &[S],
        seen: &mut HashMap<String, usize>,
        id: &str,
        index: usize,
    ) -> Result<(), MarkupError> {
        if let Some(&first) = seen.get(id) {
            return Err(MarkupError::ConflictingRegionId {
                src: self.named_source(lines),
                first_span: line_span(lines, first),
                second_span: line_span(lines, index),
                id: id.to_string(),
                first_line: first + 1,
                line: index + 1,
            });
        }
        seen.insert(id.to_string(), index);
        Ok(())
    }

    fn malformed<S: AsRef<str>>(
        &self,
        lines: &[S],
        index: usize,
        message: impl Into<String>,
        caption: impl Into<String>,
        hint: impl Into<String>,
    ) -> MarkupError {
        MarkupError::MalformedRegionMarkup {
            src: self.named_source(lines),
            span: line_span(lines, index),
            message: message.into(),
            caption: caption.into(),
            hint: hint.into(),
            line: index + 1,
        }
    }

    fn named_source<S: AsRef<str>>(&self, lines: &[S]) -> NamedSource<String> {
        NamedSource::new(&self.name, join_lines(lines))
    }
}

/// Innermost open body, or the document root.
fn current<'s>(root: &'s mut Vec<Segment>, stack: &'s mut [Frame]) -> &'s mut Vec<Segment> {
    match stack.last_mut() {
        Some(frame) => &mut frame.children,
        None => root,
    }
}

/// Byte span of line `index` within the joined source.
fn line_span<S: AsRef<str>>(lines: &[S], index: usize) -> SourceSpan {
    let start: usize = lines[..index].iter().map(|l| l.as_ref().len() + 1).sum();
    SourceSpan::from((start, lines[index].as_ref().len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(lines: &[&str]) -> Result<Document, MarkupError> {
        RegionParser::new("test.js", ParseMode::Rendered).parse(lines)
    }

    fn existing(lines: &[&str]) -> Result<Document, MarkupError> {
        RegionParser::new("test.js", ParseMode::Existing).parse(lines)
    }

    #[test]
    fn test_plain_text_only() {
        let doc = rendered(&["a", "", "  b"]).unwrap();
        assert_eq!(
            doc.segments(),
            &[Segment::Text(vec!["a".into(), "".into(), "  b".into()])]
        );
        assert!(doc.regions().is_empty());
    }

    #[test]
    fn test_bounded_body_excludes_markers() {
        let doc = rendered(&[
            "fn() {",
            "  // <default GSL customizable: f-body>",
            "  const code = '';",
            "  return code;",
            "  // </GSL customizable: f-body>",
            "}",
        ])
        .unwrap();

        let region = doc.region("f-body").unwrap();
        assert_eq!(region.line, 2);
        let RegionKind::Bounded(bounded) = &region.kind else {
            panic!("expected bounded region");
        };
        assert_eq!(bounded.flavor, Flavor::Default);
        assert_eq!(bounded.origin, BodyOrigin::Default);
        assert_eq!(
            bounded.body_lines(),
            vec!["  const code = '';", "  return code;"]
        );
        assert_eq!(doc.segments().len(), 3);
    }

    #[test]
    fn test_empty_body() {
        let doc = rendered(&["// <GSL customizable: x>", "// </GSL customizable: x>"]).unwrap();
        assert_eq!(doc.region("x").unwrap().content_len(), 0);
    }

    #[test]
    fn test_nested_regions() {
        let doc = rendered(&[
            "// <GSL customizable: outer>",
            "a",
            "// <GSL customizable: inner>",
            "b",
            "// </GSL customizable: inner>",
            "// </GSL customizable: outer>",
        ])
        .unwrap();

        let ids: Vec<_> = doc.regions().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["outer", "inner"]);
        assert_eq!(doc.regions()[1].line, 3);
        assert_eq!(doc.to_lines().len(), 6);
    }

    #[test]
    fn test_void_in_rendered_mode_has_no_trailing() {
        let doc = rendered(&["// <default GSL customizable: x-extra />", "}", "end"]).unwrap();
        let region = doc.region("x-extra").unwrap();
        assert_eq!(region.content_len(), 0);
        assert_eq!(
            doc.segments()[1],
            Segment::Text(vec!["}".into(), "end".into()])
        );
    }

    #[test]
    fn test_void_in_existing_mode_captures_until_next_marker() {
        let doc = existing(&[
            "// <GSL customizable: x-extra />",
            "appended();",
            "}",
            "// <GSL customizable: y>",
            "// </GSL customizable: y>",
            "tail",
        ])
        .unwrap();

        let RegionKind::InsertionPoint(point) = &doc.region("x-extra").unwrap().kind else {
            panic!("expected insertion point");
        };
        assert_eq!(point.trailing, vec!["appended();", "}"]);
        assert_eq!(doc.segments().len(), 3);
    }

    #[test]
    fn test_void_inside_bounded_stops_at_close() {
        let doc = existing(&[
            "// <GSL customizable: outer>",
            "// <GSL customizable: point />",
            "kept",
            "// </GSL customizable: outer>",
            "after",
        ])
        .unwrap();

        let RegionKind::InsertionPoint(point) = &doc.region("point").unwrap().kind else {
            panic!("expected insertion point");
        };
        assert_eq!(point.trailing, vec!["kept"]);
        assert_eq!(doc.segments()[1], Segment::Text(vec!["after".into()]));
    }

    #[test]
    fn test_round_trip_preserves_lines() {
        let lines = [
            "// header",
            "  // <default GSL customizable: a>",
            "  body",
            "  // </GSL customizable: a>",
            "// <GSL customizable: b />",
            "extra",
            "",
        ];
        assert_eq!(existing(&lines).unwrap().to_lines(), lines);
        assert_eq!(rendered(&lines).unwrap().to_lines(), lines);
    }

    #[test]
    fn test_duplicate_id_conflicts() {
        let err = existing(&[
            "// <GSL customizable: X>",
            "// </GSL customizable: X>",
            "// <GSL customizable: X>",
            "// </GSL customizable: X>",
        ])
        .unwrap_err();

        match err {
            MarkupError::ConflictingRegionId {
                id,
                first_line,
                line,
                ..
            } => {
                assert_eq!(id, "X");
                assert_eq!(first_line, 1);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_between_void_and_bounded() {
        let err = rendered(&[
            "// <GSL customizable: X />",
            "// <GSL customizable: X>",
            "// </GSL customizable: X>",
        ])
        .unwrap_err();
        assert!(err.is_conflicting_id());
        assert_eq!(err.region_id(), Some("X"));
    }

    #[test]
    fn test_unterminated_region() {
        let err = rendered(&["a", "// <GSL customizable: open>", "b"]).unwrap_err();
        assert!(matches!(err, MarkupError::MalformedRegionMarkup { .. }));
        assert_eq!(err.line(), 2);
        assert!(err.to_string().contains("never closed"));
    }

    #[test]
    fn test_close_without_open() {
        let err = rendered(&["a", "// </GSL customizable: stray>"]).unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(err.to_string().contains("no matching opening marker"));
    }

    #[test]
    fn test_crossed_regions() {
        let err = rendered(&[
            "// <GSL customizable: a>",
            "// <GSL customizable: b>",
            "// </GSL customizable: a>",
            "// </GSL customizable: b>",
        ])
        .unwrap_err();
        assert_eq!(err.line(), 3);
        assert!(err.to_string().contains("does not match region 'b'"));
    }

    #[test]
    fn test_empty_identifier() {
        let err = rendered(&["// <GSL customizable: >"]).unwrap_err();
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_self_closing_close_marker() {
        let err = rendered(&["// </GSL customizable: a />"]).unwrap_err();
        assert!(err.to_string().contains("self-closing"));
    }

    #[test]
    fn test_line_span_points_at_marker_line() {
        let lines = ["ab", "cde", "f"];
        assert_eq!(line_span(&lines, 0), SourceSpan::from((0, 2)));
        assert_eq!(line_span(&lines, 1), SourceSpan::from((3, 3)));
        assert_eq!(line_span(&lines, 2), SourceSpan::from((7, 1)));
    }
}
