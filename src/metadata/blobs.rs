//! In-memory blob storage backing [`crate::metadata::pdb::PdbMetadata`].
//!
//! Blobs are addressed by a 1-based index; index 0 is the empty blob, mirroring how a nil
//! blob reference behaves in the Portable PDB format. Document name parts, sequence point
//! blobs and custom debug information values are all kept here or inline in table rows.

use crate::Result;

/// Append-only list of blobs addressed by 1-based index.
#[derive(Debug, Default, Clone)]
pub struct BlobHeap {
    entries: Vec<Vec<u8>>,
}

impl BlobHeap {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        BlobHeap::default()
    }

    /// Store `data` and return its index. Empty blobs are not stored and map to index 0.
    pub fn add(&mut self, data: &[u8]) -> u32 {
        if data.is_empty() {
            return 0;
        }

        self.entries.push(data.to_vec());
        u32::try_from(self.entries.len()).unwrap_or(u32::MAX)
    }

    /// Resolve a blob index.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `index` does not address a stored blob.
    pub fn get(&self, index: u32) -> Result<&[u8]> {
        if index == 0 {
            return Ok(&[]);
        }

        self.entries
            .get(index as usize - 1)
            .map(Vec::as_slice)
            .ok_or(out_of_bounds_error!())
    }

    /// Number of stored blobs, not counting the implicit empty blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing but the implicit empty blob is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn add_and_get() {
        let mut heap = BlobHeap::new();
        assert!(heap.is_empty());

        let first = heap.add(b"src");
        let second = heap.add(&[0x01, 0x02]);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(heap.len(), 2);

        assert_eq!(heap.get(1).unwrap(), b"src");
        assert_eq!(heap.get(2).unwrap(), &[0x01, 0x02]);
    }

    #[test]
    fn empty_blob_is_index_zero() {
        let mut heap = BlobHeap::new();
        assert_eq!(heap.add(&[]), 0);
        assert!(heap.get(0).unwrap().is_empty());
        assert!(heap.is_empty());
    }

    #[test]
    fn out_of_range() {
        let heap = BlobHeap::new();
        assert!(matches!(heap.get(1), Err(Error::OutOfBounds { .. })));
    }
}
