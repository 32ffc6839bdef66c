use super::table::CorrespondenceTable;
use crate::error::{E2oError, Result};
use crate::frame::{CHANNELS, Frame};

/// Fill `output` by copying, for every output pixel, the input pixel named
/// by the table. Dimensions are checked once up front.
pub fn apply_table(table: &CorrespondenceTable, input: &Frame, output: &mut Frame) -> Result<()> {
    if input.size() != table.input_size() {
        return Err(E2oError::FrameMismatch {
            expected: table.input_size(),
            actual: input.size(),
        });
    }
    if output.size() != table.output_size() {
        return Err(E2oError::FrameMismatch {
            expected: table.output_size(),
            actual: output.size(),
        });
    }

    let input_width = input.width();
    let src = input.as_bytes()?;
    let dst = output.as_bytes_mut()?;

    for (out_px, entry) in dst.chunks_exact_mut(CHANNELS).zip(table.entries()) {
        let offset = (entry.v as usize * input_width + entry.u as usize) * CHANNELS;
        out_px.copy_from_slice(&src[offset..offset + CHANNELS]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::table::SourcePixel;

    fn swap_table() -> CorrespondenceTable {
        // 2x1 output reading a 2x2 input: right pixel of the bottom row, then top-left
        CorrespondenceTable::from_entries(
            (2, 1),
            (2, 2),
            vec![SourcePixel::new(1, 1), SourcePixel::SENTINEL],
            1,
        )
    }

    #[test]
    fn test_copies_named_pixels() {
        let table = swap_table();
        let mut input = Frame::new(2, 2);
        input.set_pixel(0, 0, [1, 1, 1, 1]);
        input.set_pixel(1, 1, [9, 8, 7, 6]);

        let mut output = Frame::new(2, 1);
        apply_table(&table, &input, &mut output).unwrap();

        assert_eq!(output.pixel(0, 0), [9, 8, 7, 6]);
        assert_eq!(output.pixel(1, 0), [1, 1, 1, 1]);
    }

    #[test]
    fn test_rejects_wrong_input_size() {
        let table = swap_table();
        let input = Frame::new(3, 2);
        let mut output = Frame::new(2, 1);
        let res = apply_table(&table, &input, &mut output);
        assert!(matches!(
            res,
            Err(E2oError::FrameMismatch { expected: (2, 2), actual: (3, 2) })
        ));
    }

    #[test]
    fn test_rejects_wrong_output_size() {
        let table = swap_table();
        let input = Frame::new(2, 2);
        let mut output = Frame::new(1, 2);
        let res = apply_table(&table, &input, &mut output);
        assert!(matches!(res, Err(E2oError::FrameMismatch { .. })));
    }
}
