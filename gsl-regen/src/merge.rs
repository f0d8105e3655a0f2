//! Merging a fresh render with the regions of an existing file.
//!
//! Structure always comes from the render. Bounded bodies and insertion-point
//! trailing content come from the existing file whenever the same id exists
//! there with the same kind.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::region::{
    BodyOrigin, Bounded, Document, InsertionPoint, Region, RegionKind, Segment, collect_regions,
};

/// A region of the existing file that the merge did not carry over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedRegion {
    pub id: String,
    /// Line of the region in the existing file.
    pub line: usize,
    pub kind: &'static str,
    /// Number of content lines dropped with it.
    pub lines: usize,
}

/// Result of merging a render with an existing file.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub document: Document,
    /// Ids of bounded regions whose body was taken from the existing file.
    pub preserved: Vec<String>,
    /// Ids of insertion points that carried over appended content.
    pub inherited: Vec<String>,
    /// Existing regions with no counterpart in the render, in file order.
    pub orphans: Vec<OrphanedRegion>,
}

/// Merge `rendered` with the regions of `existing`.
pub fn merge(rendered: Document, existing: &Document) -> MergeOutcome {
    let index: IndexMap<&str, &Region> = existing
        .regions()
        .into_iter()
        .map(|region| (region.id.as_str(), region))
        .collect();

    let mut merger = Merger {
        index: &index,
        consumed: HashSet::new(),
        preserved: Vec::new(),
        inherited: Vec::new(),
    };
    let segments = merger.merge_segments(rendered.into_segments());

    let orphans = index
        .values()
        .filter(|region| !merger.consumed.contains(region.id.as_str()))
        .map(|region| OrphanedRegion {
            id: region.id.clone(),
            line: region.line,
            kind: region.kind_name(),
            lines: region.content_len(),
        })
        .collect();

    MergeOutcome {
        document: Document::new(segments),
        preserved: merger.preserved,
        inherited: merger.inherited,
        orphans,
    }
}

struct Merger<'e> {
    index: &'e IndexMap<&'e str, &'e Region>,
    consumed: HashSet<&'e str>,
    preserved: Vec<String>,
    inherited: Vec<String>,
}

impl<'e> Merger<'e> {
    fn merge_segments(&mut self, segments: Vec<Segment>) -> Vec<Segment> {
        let mut out = Vec::with_capacity(segments.len());
        let mut iter = segments.into_iter().peekable();

        while let Some(segment) = iter.next() {
            let mut region = match segment {
                Segment::Text(lines) => {
                    out.push(Segment::Text(lines));
                    continue;
                }
                Segment::Region(region) => region,
            };

            match &mut region.kind {
                RegionKind::Bounded(bounded) => self.merge_bounded(&region.id, bounded),
                RegionKind::InsertionPoint(point) => {
                    let following: &[String] = match iter.peek() {
                        Some(Segment::Text(lines)) => lines,
                        _ => &[],
                    };
                    self.merge_point(&region.id, point, following);
                }
            }
            out.push(Segment::Region(region));
        }

        out
    }

    fn merge_bounded(&mut self, id: &str, bounded: &mut Bounded) {
        let index = self.index;
        match index.get(id).copied() {
            Some(Region {
                id: prior_id,
                kind: RegionKind::Bounded(prior),
                ..
            }) => {
                self.consumed.insert(prior_id.as_str());
                // Regions inside a carried body travel with it.
                let mut nested = Vec::new();
                collect_regions(&prior.body, &mut nested);
                self.consumed
                    .extend(nested.into_iter().map(|r: &'e Region| r.id.as_str()));

                bounded.body = prior.body.clone();
                bounded.origin = BodyOrigin::Preserved;
                self.preserved.push(id.to_string());
            }
            _ => {
                let body = std::mem::take(&mut bounded.body);
                bounded.body = self.merge_segments(body);
                bounded.origin = BodyOrigin::Default;
            }
        }
    }

    fn merge_point(&mut self, id: &str, point: &mut InsertionPoint, following: &[String]) {
        let index = self.index;
        if let Some(Region {
            id: prior_id,
            kind: RegionKind::InsertionPoint(prior),
            ..
        }) = index.get(id).copied()
        {
            self.consumed.insert(prior_id.as_str());
            point.trailing = resync(&prior.trailing, following);
            if !point.trailing.is_empty() {
                self.inherited.push(id.to_string());
            }
        }
    }
}

/// Content appended after an insertion point, minus template structure.
///
/// When parsing an existing file, everything between a void marker and the
/// next marker is captured, which includes the plain text the template emits
/// after the marker. The longest common suffix of the captured lines and the
/// text the new render places after the marker is structure and is dropped
/// here; what remains is developer content.
fn resync(trailing: &[String], following: &[String]) -> Vec<String> {
    let max = trailing.len().min(following.len());
    let shared = trailing
        .iter()
        .rev()
        .zip(following.iter().rev())
        .take(max)
        .take_while(|(a, b)| a == b)
        .count();
    trailing[..trailing.len() - shared].to_vec()
}
