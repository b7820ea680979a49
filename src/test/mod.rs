pub mod factories;

use crate::file::io::{write_compressed_int, write_compressed_uint};

/// Encoder for sequence points blobs, the inverse of
/// [`crate::metadata::sequencepoints::parse_sequence_points`].
pub struct SequencePointsBlob {
    bytes: Vec<u8>,
    first: bool,
    previous_il: u32,
    previous_start: Option<(u32, u16)>,
}

impl SequencePointsBlob {
    /// Start a blob. `initial_document` must be given iff the row has no document.
    pub fn new(initial_document: Option<u32>) -> Self {
        let mut bytes = Vec::new();
        write_compressed_uint(0, &mut bytes).unwrap();
        if let Some(document) = initial_document {
            write_compressed_uint(document, &mut bytes).unwrap();
        }

        SequencePointsBlob {
            bytes,
            first: true,
            previous_il: 0,
            previous_start: None,
        }
    }

    fn il_offset(&mut self, il: u32) {
        let delta = if self.first { il } else { il - self.previous_il };
        write_compressed_uint(delta, &mut self.bytes).unwrap();
        self.first = false;
        self.previous_il = il;
    }

    pub fn point(
        mut self,
        il: u32,
        start_line: u32,
        start_column: u16,
        end_line: u32,
        end_column: u16,
    ) -> Self {
        self.il_offset(il);

        let delta_lines = end_line - start_line;
        let delta_columns = i32::from(end_column) - i32::from(start_column);
        write_compressed_uint(delta_lines, &mut self.bytes).unwrap();
        if delta_lines == 0 {
            write_compressed_uint(delta_columns as u32, &mut self.bytes).unwrap();
        } else {
            write_compressed_int(delta_columns, &mut self.bytes).unwrap();
        }

        match self.previous_start {
            None => {
                write_compressed_uint(start_line, &mut self.bytes).unwrap();
                write_compressed_uint(u32::from(start_column), &mut self.bytes).unwrap();
            }
            Some((line, column)) => {
                let delta_line = start_line as i32 - line as i32;
                let delta_column = i32::from(start_column) - i32::from(column);
                write_compressed_int(delta_line, &mut self.bytes).unwrap();
                write_compressed_int(delta_column, &mut self.bytes).unwrap();
            }
        }
        self.previous_start = Some((start_line, start_column));
        self
    }

    pub fn hidden(mut self, il: u32) -> Self {
        self.il_offset(il);
        write_compressed_uint(0, &mut self.bytes).unwrap();
        write_compressed_uint(0, &mut self.bytes).unwrap();
        self
    }

    pub fn document(mut self, rid: u32) -> Self {
        write_compressed_uint(0, &mut self.bytes).unwrap();
        write_compressed_uint(rid, &mut self.bytes).unwrap();
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{handles::DocumentHandle, sequencepoints::parse_sequence_points};

    #[test]
    fn encoder_matches_decoder() {
        let blob = SequencePointsBlob::new(Some(1))
            .point(0, 10, 5, 10, 20)
            .point(6, 11, 9, 12, 4)
            .document(2)
            .hidden(9)
            .point(12, 3, 1, 3, 8)
            .build();

        let points = parse_sequence_points(&blob, None).unwrap();
        let decoded: Vec<_> = points
            .0
            .iter()
            .map(|p| {
                (
                    p.il_offset,
                    p.start_line,
                    p.start_column,
                    p.end_line,
                    p.end_column,
                    p.document.map(|d| d.rid()),
                )
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                (0, 10, 5, 10, 20, Some(1)),
                (6, 11, 9, 12, 4, Some(1)),
                (9, 0xFEEFEE, 0, 0xFEEFEE, 0, Some(2)),
                (12, 3, 1, 3, 8, Some(2)),
            ]
        );
        assert_eq!(points.0[2].document, DocumentHandle::new(2));
    }
}
