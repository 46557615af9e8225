use slide_puzzle::formats::png::{ihdr_checksum_matches, read_dimensions, PNG_SIGNATURE};
use slide_puzzle::{HeaderErrorKind, ImageFormat, ImageMetadata};
use std::io::Write;

fn make_png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    let crc = hasher.finalize();
    chunk.extend_from_slice(&crc.to_be_bytes());
    chunk
}

fn make_png(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr_payload = Vec::new();
    ihdr_payload.extend_from_slice(&width.to_be_bytes());
    ihdr_payload.extend_from_slice(&height.to_be_bytes());
    ihdr_payload.push(8);
    ihdr_payload.push(2);
    ihdr_payload.extend_from_slice(&[0, 0, 0]);

    let mut data = Vec::new();
    data.extend_from_slice(&PNG_SIGNATURE);
    data.extend_from_slice(&make_png_chunk(b"IHDR", &ihdr_payload));
    data.extend_from_slice(&make_png_chunk(b"IDAT", &[0xAA; 32]));
    data.extend_from_slice(&make_png_chunk(b"IEND", &[]));
    data
}

#[test]
fn test_width_then_height_at_offset_16() {
    let mut png = vec![0u8; 24];
    png[16..20].copy_from_slice(&[0, 0, 0, 10]);
    png[20..24].copy_from_slice(&[0, 0, 0, 5]);
    let size = read_dimensions(&png).unwrap();
    assert_eq!(size.width, 10);
    assert_eq!(size.height, 5);
}

#[test]
fn test_real_header() {
    let png = make_png(1920, 1080);
    let size = read_dimensions(&png).unwrap();
    assert_eq!((size.width, size.height), (1920, 1080));
    assert!(ihdr_checksum_matches(&png));
}

#[test]
fn test_checksum_mismatch_still_reads_dimensions() {
    let mut png = make_png(64, 48);
    png[29] ^= 0xFF;
    assert!(!ihdr_checksum_matches(&png));
    let size = read_dimensions(&png).unwrap();
    assert_eq!((size.width, size.height), (64, 48));
}

#[test]
fn test_too_short() {
    let png = make_png(64, 48);
    let err = read_dimensions(&png[..23]).unwrap_err();
    assert_eq!(err.kind(), HeaderErrorKind::MalformedHeader);
}

#[test]
fn test_zero_dimension_rejected() {
    let png = make_png(0, 48);
    let err = read_dimensions(&png).unwrap_err();
    assert_eq!(err.kind(), HeaderErrorKind::MalformedHeader);
}

#[test]
fn test_metadata_keeps_raw_bytes() {
    let png = make_png(30, 20);
    let metadata = ImageMetadata::parse(png.clone(), "Holiday.PNG").unwrap();
    assert_eq!(metadata.format(), ImageFormat::Png);
    assert_eq!((metadata.width(), metadata.height()), (30, 20));
    assert_eq!(metadata.into_raw_bytes(), png);
}

#[test]
fn test_from_path() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(&make_png(320, 240)).unwrap();
    file.flush().unwrap();

    let metadata = ImageMetadata::from_path(file.path()).unwrap();
    assert_eq!((metadata.width(), metadata.height()), (320, 240));
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ImageMetadata::from_path(dir.path().join("missing.png")).unwrap_err();
    assert_eq!(err.kind(), HeaderErrorKind::Io);
}

#[test]
fn test_from_path_wrong_extension() {
    let mut file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
    file.write_all(&make_png(320, 240)).unwrap();
    let err = ImageMetadata::from_path(file.path()).unwrap_err();
    assert_eq!(err.kind(), HeaderErrorKind::UnsupportedFormat);
}
