//! Transform file parsing.
//!
//! A transform file is text holding either six numbers (the 2x3 affine matrix,
//! row-major) or nine numbers (a 3x3 homogeneous matrix whose last row is
//! `0 0 1`). Numbers are separated by commas and/or whitespace; `#` starts a
//! comment that runs to the end of the line.

use std::path::Path;

use tracing::debug;

use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::transform::affine::AffineTransform;

const AFFINE_ROW: [f64; 3] = [0.0, 0.0, 1.0];

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
}

pub fn parse_transform(text: &str) -> Result<AffineTransform> {
    let values = tokens(text)
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                ColorPairsError::TransformParseError(format!("'{token}' is not a number"))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    debug!("Parsed {} transform values", values.len());

    match values.len() {
        6 => {}
        9 => {
            if values[6..] != AFFINE_ROW {
                return Err(ColorPairsError::TransformParseError(format!(
                    "third row must be 0 0 1 for an affine transform, got {:?}",
                    &values[6..]
                )));
            }
        }
        n => {
            return Err(ColorPairsError::TransformParseError(format!(
                "expected 6 or 9 values, found {n}"
            )));
        }
    }

    let mut coefficients = [0.0; 6];
    coefficients.copy_from_slice(&values[..6]);
    AffineTransform::new(coefficients)
}

pub fn read_transform_file<P: AsRef<Path>>(path: P) -> Result<AffineTransform> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        ColorPairsError::TransformLoadError(format!("{}: {}", path.display(), e))
    })?;
    parse_transform(&text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{parse_transform, read_transform_file};
    use crate::color_pairs::common::error::ColorPairsError;

    #[test]
    fn parses_two_row_csv() {
        let tf = parse_transform("1, 0, 12.5\n0, 1, -3\n").expect("valid transform");
        assert_eq!(tf.coefficients(), &[1.0, 0.0, 12.5, 0.0, 1.0, -3.0]);
    }

    #[test]
    fn parses_homogeneous_matrix_with_comments() {
        let text = "# hrsc -> basemap\n0.25 0 4\n0 0.25 8 # scaled\n0 0 1\n";
        let tf = parse_transform(text).expect("valid transform");
        assert_eq!(tf.coefficients(), &[0.25, 0.0, 4.0, 0.0, 0.25, 8.0]);
    }

    #[test]
    fn rejects_too_few_values() {
        let err = parse_transform("1, 0, 0\n0, 1\n").unwrap_err();
        assert!(matches!(err, ColorPairsError::TransformParseError(_)));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_transform("1, 0, 0\n0, one, 0\n").unwrap_err();
        match err {
            ColorPairsError::TransformParseError(msg) => assert!(msg.contains("one")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_projective_third_row() {
        let err = parse_transform("1 0 0\n0 1 0\n0.1 0 1\n").unwrap_err();
        assert!(matches!(err, ColorPairsError::TransformParseError(_)));
    }

    #[test]
    fn rejects_non_finite_value() {
        let err = parse_transform("1 0 inf\n0 1 0\n").unwrap_err();
        assert!(matches!(err, ColorPairsError::NonFiniteCoefficient { index: 2 }));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_transform_file(dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ColorPairsError::TransformLoadError(_)));
    }

    #[test]
    fn reads_transform_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "2,0,1").expect("write");
        writeln!(file, "0,2,1").expect("write");

        let tf = read_transform_file(file.path()).expect("valid transform");
        assert_eq!(tf.apply(1.0, 1.0), (3.0, 3.0));
    }
}
