//! Integration tests for image import.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};
use lifepat_import::{GrayMatrix, ImageImportError, Polarity, import_pixels};
use lifepat_model::{GridDims, alive_set};
use proptest::prelude::*;

fn dims(rows: i32, cols: i32) -> GridDims {
    GridDims::new(rows, cols).expect("valid dims")
}

fn png_bytes(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |x, y| image::Luma([f(x, y)]));
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[test]
fn light_background_marks_dark_pixels() {
    // Left half black, right half white: mean 127.5 counts as light.
    let img = GrayMatrix::from_fn(4, 4, |x, _| if x < 2 { 0 } else { 255 }).expect("matrix");
    let result = import_pixels(&img, 128, dims(4, 4)).expect("import");
    assert_eq!(result.polarity, Polarity::LightBackground);
    assert_eq!(
        result.cells,
        alive_set([(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)])
    );
}

#[test]
fn dark_background_marks_bright_pixels() {
    let img = GrayMatrix::from_fn(5, 5, |x, y| if (x, y) == (2, 3) { 250 } else { 10 })
        .expect("matrix");
    let result = import_pixels(&img, 128, dims(5, 5)).expect("import");
    assert_eq!(result.polarity, Polarity::DarkBackground);
    assert_eq!(result.cells, alive_set([(3, 2)]));
}

#[test]
fn wide_image_is_centred_vertically() {
    // 8x2 image on a 4x4 grid resamples to 4x1 and lands on row 1.
    let img = GrayMatrix::from_fn(8, 2, |x, _| if x >= 4 { 255 } else { 0 }).expect("matrix");
    let result = import_pixels(&img, 128, dims(4, 4)).expect("import");
    assert_eq!((result.fit.target_w, result.fit.target_h), (4, 1));
    assert_eq!(result.fit.offset_y, 1);
    assert_eq!(result.polarity, Polarity::LightBackground);
    assert_eq!(result.cells, alive_set([(1, 0), (1, 1)]));
}

#[test]
fn tall_image_is_centred_horizontally() {
    let img = GrayMatrix::from_fn(2, 4, |_, _| 255).expect("matrix");
    let result = import_pixels(&img, 0, dims(4, 8)).expect("import");
    // Uniform white is light-background; nothing is darker than 0.
    assert!(result.cells.is_empty());
    assert_eq!((result.fit.target_w, result.fit.target_h), (2, 4));
    assert_eq!(result.fit.offset_x, 3);
}

#[test]
fn decodes_png_bytes() {
    let bytes = png_bytes(3, 3, |x, y| if x == y { 255 } else { 0 });
    let img = GrayMatrix::from_bytes(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (3, 3));
    let result = import_pixels(&img, 128, dims(3, 3)).expect("import");
    assert_eq!(result.cells, alive_set([(0, 0), (1, 1), (2, 2)]));
}

#[test]
fn reads_png_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dot.png");
    std::fs::write(&path, png_bytes(2, 2, |x, y| if (x, y) == (1, 0) { 255 } else { 0 }))
        .expect("write png");
    let img = GrayMatrix::from_path(&path).expect("read png");
    assert_eq!(img.get(1, 0), Some(255));
}

#[test]
fn corrupt_bytes_are_decode_errors() {
    let err = GrayMatrix::from_bytes(b"definitely not an image").unwrap_err();
    assert!(matches!(err, ImageImportError::Decode(_)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = GrayMatrix::from_path(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ImageImportError::Io { .. }));
}

#[test]
fn degenerate_fit_is_reported() {
    let img = GrayMatrix::from_fn(200, 1, |_, _| 0).expect("matrix");
    let err = import_pixels(&img, 128, dims(10, 10)).unwrap_err();
    assert!(matches!(err, ImageImportError::DegenerateFit { .. }));
}

proptest! {
    #[test]
    fn imported_cells_stay_inside_fit(
        width in 1u32..24,
        height in 1u32..24,
        rows in 4i32..24,
        cols in 4i32..24,
        threshold in any::<u8>(),
        seed in any::<u64>(),
    ) {
        let img = GrayMatrix::from_fn(width, height, |x, y| {
            let mixed = seed ^ (u64::from(x) * 31 + u64::from(y) * 17);
            (mixed.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 56) as u8
        })
        .expect("matrix");
        let grid = dims(rows, cols);
        match import_pixels(&img, threshold, grid) {
            Ok(result) => {
                let fit = result.fit;
                for cell in &result.cells {
                    prop_assert!(grid.contains(*cell));
                    prop_assert!(cell.row >= fit.offset_y && cell.row < fit.offset_y + fit.target_h as i32);
                    prop_assert!(cell.col >= fit.offset_x && cell.col < fit.offset_x + fit.target_w as i32);
                }
            }
            Err(err) => prop_assert!(matches!(err, ImageImportError::DegenerateFit { .. }), "unexpected error: {:?}", err),
        }
    }
}
