//! Sequence point extraction with resolved document names.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    debuginfo::types::SequencePoint,
    metadata::{
        accessor::MetadataAccessor,
        handles::{DocumentHandle, MethodHandle},
    },
    Result,
};

/// Produces the sequence points of a method with their document names resolved.
pub struct SequencePointExtractor<'a, A: ?Sized> {
    metadata: &'a A,
}

impl<'a, A: MetadataAccessor + ?Sized> SequencePointExtractor<'a, A> {
    /// Create an extractor reading through `metadata`.
    #[must_use]
    pub fn new(metadata: &'a A) -> Self {
        SequencePointExtractor { metadata }
    }

    /// Sequence points of `method` in the order the accessor yields them.
    ///
    /// Points are not sorted by offset. A point without a document has an empty
    /// `document_url`.
    ///
    /// # Errors
    /// Propagates malformed sequence point blobs and documents that cannot be resolved.
    pub fn sequence_points(&self, method: MethodHandle) -> Result<Vec<SequencePoint>> {
        let raw = self.metadata.sequence_points(method)?;
        let mut names: HashMap<DocumentHandle, String> = HashMap::new();
        let mut points = Vec::with_capacity(raw.len());

        for point in raw.0 {
            let document_url = match point.document {
                Some(document) => match names.get(&document) {
                    Some(name) => name.clone(),
                    None => {
                        let name = self.metadata.document_name(document)?;
                        names.insert(document, name.clone());
                        name
                    }
                },
                None => String::new(),
            };

            points.push(SequencePoint {
                offset: point.il_offset,
                start_line: point.start_line,
                start_column: point.start_column,
                end_line: point.end_line,
                end_column: point.end_column,
                document_url,
            });
        }

        trace!(%method, points = points.len(), "extracted sequence points");
        Ok(points)
    }
}
