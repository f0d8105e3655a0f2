//! Segment and region types shared by the parser and the merge.

use gsl_core::join_lines;

use crate::marker::Flavor;

/// Where the body of a bounded region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyOrigin {
    /// Freshly rendered template default.
    Default,
    /// Carried over verbatim from the existing file.
    Preserved,
}

/// A bounded region: open marker, body, close marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded {
    /// The full open-marker line.
    pub open: String,
    /// The full close-marker line.
    pub close: String,
    pub flavor: Flavor,
    /// Lines strictly between the markers; may contain nested regions.
    pub body: Vec<Segment>,
    pub origin: BodyOrigin,
}

impl Bounded {
    /// Body flattened to lines, nested markers included.
    pub fn body_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        write_segments(&self.body, &mut out);
        out
    }
}

/// A self-closing marker, plus content appended after it in an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    /// The full marker line.
    pub marker: String,
    pub flavor: Flavor,
    /// Lines following the marker that belong to it.
    pub trailing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKind {
    Bounded(Bounded),
    InsertionPoint(InsertionPoint),
}

/// A named, delimited span of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    /// 1-based line of the (opening) marker in the scanned sequence.
    pub line: usize,
    pub kind: RegionKind,
}

impl Region {
    pub fn is_bounded(&self) -> bool {
        matches!(self.kind, RegionKind::Bounded(_))
    }

    pub fn flavor(&self) -> Flavor {
        match &self.kind {
            RegionKind::Bounded(b) => b.flavor,
            RegionKind::InsertionPoint(p) => p.flavor,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            RegionKind::Bounded(_) => "bounded",
            RegionKind::InsertionPoint(_) => "insertion point",
        }
    }

    /// Number of content lines owned by the region (body or trailing lines).
    pub fn content_len(&self) -> usize {
        match &self.kind {
            RegionKind::Bounded(b) => b.body_lines().len(),
            RegionKind::InsertionPoint(p) => p.trailing.len(),
        }
    }

    fn write(&self, out: &mut Vec<String>) {
        match &self.kind {
            RegionKind::Bounded(b) => {
                out.push(b.open.clone());
                write_segments(&b.body, out);
                out.push(b.close.clone());
            }
            RegionKind::InsertionPoint(p) => {
                out.push(p.marker.clone());
                out.extend(p.trailing.iter().cloned());
            }
        }
    }
}

/// One piece of a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Consecutive plain lines, verbatim.
    Text(Vec<String>),
    Region(Region),
}

/// A scanned line sequence: an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// All regions in file order, nested regions after their parent.
    pub fn regions(&self) -> Vec<&Region> {
        let mut out = Vec::new();
        collect_regions(&self.segments, &mut out);
        out
    }

    /// Find a region by id at any depth.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions().into_iter().find(|r| r.id == id)
    }

    /// Serialize back to lines.
    pub fn to_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        write_segments(&self.segments, &mut out);
        out
    }

    /// Serialize to file content.
    pub fn content(&self) -> String {
        join_lines(self.to_lines().as_slice())
    }
}

pub(crate) fn collect_regions<'a>(segments: &'a [Segment], out: &mut Vec<&'a Region>) {
    for segment in segments {
        if let Segment::Region(region) = segment {
            out.push(region);
            if let RegionKind::Bounded(b) = &region.kind {
                collect_regions(&b.body, out);
            }
        }
    }
}

fn write_segments(segments: &[Segment], out: &mut Vec<String>) {
    for segment in segments {
        match segment {
            Segment::Text(lines) => out.extend(lines.iter().cloned()),
            Segment::Region(region) => region.write(out),
        }
    }
}
