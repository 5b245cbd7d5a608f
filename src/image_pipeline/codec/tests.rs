use std::io::SeekFrom;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::image_pipeline::codec::{
    CodecConfig, CodecReader, CodecWriter, ImageFormat, PngCompression, RawImageReader,
    RawImageWriter, decode, encode, encode_with_extension, probe,
};
use crate::image_pipeline::common::error::ImageError;
use crate::image_pipeline::layout::{BasePixelType, ColorSpace, PixelDepth};
use crate::image_pipeline::raw::RawImage;
use crate::image_pipeline::stream::{MemoryStream, Stream};

fn pattern(width: u16, height: u16, depth: PixelDepth) -> RawImage<'static> {
    let mut image = RawImage::new(width, height, depth).unwrap();
    for (i, b) in image.data_mut().iter_mut().enumerate() {
        *b = (i * 37 % 251) as u8;
    }
    image
}

fn encoded(image: &RawImage<'_>, format: ImageFormat) -> MemoryStream {
    let mut stream = MemoryStream::new();
    encode(image, format, &mut stream).unwrap();
    stream.seek(SeekFrom::Start(0)).unwrap();
    stream
}

#[test]
fn test_png_round_trip_is_lossless_for_every_base_type() {
    for depth in [
        PixelDepth::Luminance8,
        PixelDepth::LuminanceAlpha8,
        PixelDepth::Rgb8,
        PixelDepth::Rgba8,
    ] {
        let original = pattern(7, 5, depth);
        let mut stream = encoded(&original, ImageFormat::Png);
        let decoded = decode(&mut stream).unwrap();

        assert_eq!(decoded.width(), 7);
        assert_eq!(decoded.height(), 5);
        assert_eq!(decoded.depth(), depth);
        assert_eq!(decoded.base_type(), depth.base_type());
        assert_eq!(decoded.data(), original.data(), "{:?}", depth);
    }
}

#[test]
fn test_bmp_round_trip() {
    let original = pattern(5, 3, PixelDepth::Rgb8);
    let mut stream = encoded(&original, ImageFormat::Bmp);
    assert_eq!(&stream.as_bytes()[..2], b"BM");

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.depth(), PixelDepth::Rgb8);
    assert_eq!(decoded.data(), original.data());
}

#[test]
fn test_tga_round_trip_without_signature() {
    let original = pattern(4, 3, PixelDepth::Rgba8);
    let mut stream = encoded(&original, ImageFormat::Tga);

    let info = probe(&mut stream).unwrap();
    assert_eq!(info.format, Some(ImageFormat::Tga));
    assert_eq!(info.channels, 4);

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.depth(), PixelDepth::Rgba8);
    assert_eq!(decoded.data(), original.data());
}

#[test]
fn test_jpeg_drops_alpha() {
    let original = pattern(16, 8, PixelDepth::Rgba8);
    let mut stream = encoded(&original, ImageFormat::Jpeg);
    assert_eq!(&stream.as_bytes()[..2], &[0xFF, 0xD8]);

    let decoded = decode(&mut stream).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 8));
    assert_eq!(decoded.base_type(), BasePixelType::Rgb);
}

#[test]
fn test_jpeg_keeps_luminance() {
    let original = pattern(8, 8, PixelDepth::LuminanceAlpha8);
    let mut stream = encoded(&original, ImageFormat::Jpeg);

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.base_type(), BasePixelType::L);
    assert_eq!(decoded.data_length(), 64);
}

#[test]
fn test_packed_depth_is_expanded_before_encoding() {
    let mut packed = RawImage::new(2, 1, PixelDepth::Rgba4).unwrap();
    // Opaque red, then transparent blue.
    packed.data_mut().copy_from_slice(&[0x0F, 0xF0, 0xF0, 0x00]);

    let mut stream = encoded(&packed, ImageFormat::Png);
    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.depth(), PixelDepth::Rgba8);
    assert_eq!(decoded.data(), &[255, 0, 0, 255, 0, 0, 255, 0]);
}

#[test]
fn test_sixteen_bit_png_is_narrowed() {
    let mut stream = MemoryStream::new();
    let samples: [u16; 6] = [0xFFFF, 0, 0xFFFF, 0, 0xFFFF, 0];
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_ne_bytes()).collect();
    {
        let mut io = crate::image_pipeline::stream::CodecIo::new(&mut stream);
        PngEncoder::new(&mut io)
            .write_image(&bytes, 2, 1, ExtendedColorType::Rgb16)
            .unwrap();
    }
    stream.seek(SeekFrom::Start(0)).unwrap();

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.depth(), PixelDepth::Rgb8);
    assert_eq!(decoded.data(), &[255, 0, 255, 0, 255, 0]);
}

#[test]
fn test_probe_leaves_position_unchanged() {
    let original = pattern(9, 4, PixelDepth::LuminanceAlpha8);
    let png = encoded(&original, ImageFormat::Png).into_bytes();

    let mut bytes = b"prefix".to_vec();
    bytes.extend_from_slice(&png);
    let mut stream = MemoryStream::from_bytes(bytes);
    stream.seek(SeekFrom::Start(6)).unwrap();

    let info = probe(&mut stream).unwrap();
    assert_eq!(stream.position().unwrap(), 6);
    assert_eq!((info.width, info.height, info.channels), (9, 4, 2));
    assert_eq!(info.format, Some(ImageFormat::Png));
}

#[test]
fn test_decode_image_embedded_at_offset() {
    let original = pattern(6, 6, PixelDepth::Rgb8);
    let bmp = encoded(&original, ImageFormat::Bmp).into_bytes();

    let mut bytes = vec![0xEEu8; 13];
    bytes.extend_from_slice(&bmp);
    let mut stream = MemoryStream::from_bytes(bytes);
    stream.seek(SeekFrom::Start(13)).unwrap();

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.data(), original.data());
}

#[test]
fn test_truncated_input_is_decode_error() {
    let original = pattern(32, 32, PixelDepth::Rgba8);
    let mut png = encoded(&original, ImageFormat::Png).into_bytes();
    png.truncate(png.len() / 2);

    let err = decode(&mut MemoryStream::from_bytes(png)).unwrap_err();
    assert!(matches!(err, ImageError::DecodeError(_)));
}

#[test]
fn test_garbage_and_empty_input_are_decode_errors() {
    let err = decode(&mut MemoryStream::from_bytes(b"not an image at all".to_vec())).unwrap_err();
    assert!(matches!(err, ImageError::DecodeError(_)));

    let err = decode(&mut MemoryStream::new()).unwrap_err();
    assert!(matches!(err, ImageError::DecodeError(_)));
}

#[test]
fn test_max_dimension_rejects_large_images() {
    let original = pattern(8, 2, PixelDepth::Rgb8);
    let mut stream = encoded(&original, ImageFormat::Png);
    let config = CodecConfig::builder().max_dimension(Some(4)).build();

    let err = CodecReader.read_image(&mut stream, &config).unwrap_err();
    assert!(matches!(err, ImageError::InvalidDimensions(8, 2)));
}

#[test]
fn test_encode_with_extension_selects_container() {
    let image = pattern(2, 2, PixelDepth::Rgb8);
    let png_signature = [0x89, b'P', b'N', b'G'];

    let cases: [(&str, &[u8]); 6] = [
        (".bmp", b"BM"),
        ("bmp", b"BM"),
        (".jpg", &[0xFF, 0xD8]),
        ("", &png_signature),
        (".JPG", &png_signature),
        ("webp", &png_signature),
    ];
    for (extension, magic) in cases {
        let mut stream = MemoryStream::new();
        encode_with_extension(&image, extension, &mut stream).unwrap();
        assert!(stream.as_bytes().starts_with(magic), "{:?}", extension);
    }
}

#[test]
fn test_encode_borrowed_image() {
    let mut memory = vec![0x40u8; 3 * 2 * 4];
    let image = RawImage::from_buffer(&mut memory, 3, 2).unwrap();

    let mut stream = MemoryStream::new();
    encode(&image, ImageFormat::Png, &mut stream).unwrap();
    stream.seek(SeekFrom::Start(0)).unwrap();

    let decoded = decode(&mut stream).unwrap();
    assert_eq!(decoded.data(), image.data());
    assert_eq!(decoded.colorspace(), ColorSpace::Linear);
}

#[test]
fn test_png_compression_levels_decode_identically() {
    let original = pattern(20, 20, PixelDepth::Rgba8);
    for compression in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
        let config = CodecConfig::builder().png_compression(compression).build();
        let mut stream = MemoryStream::new();
        CodecWriter
            .write_image(&original, ImageFormat::Png, &mut stream, &config)
            .unwrap();
        stream.seek(SeekFrom::Start(0)).unwrap();

        let decoded = CodecReader.read_image(&mut stream, &config).unwrap();
        assert_eq!(decoded.data(), original.data());
    }
}

/// Accepts seeks but refuses to store bytes.
struct RejectingStream {
    fail_writes: bool,
    inner: MemoryStream,
}

impl RejectingStream {
    fn failing_writes() -> Self {
        Self { fail_writes: true, inner: MemoryStream::new() }
    }

    fn failing_flush() -> Self {
        Self { fail_writes: false, inner: MemoryStream::new() }
    }
}

impl Stream for RejectingStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.fail_writes {
            return Err(std::io::Error::other("disk full"));
        }
        self.inner.write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }

    fn position(&mut self) -> std::io::Result<u64> {
        self.inner.position()
    }

    fn length(&mut self) -> std::io::Result<u64> {
        self.inner.length()
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("device gone"))
    }
}

#[test]
fn test_write_failure_is_encode_error_for_every_format() {
    let image = pattern(4, 4, PixelDepth::Rgba8);
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Tga, ImageFormat::Jpeg] {
        let err = encode(&image, format, &mut RejectingStream::failing_writes()).unwrap_err();
        assert!(matches!(err, ImageError::EncodeError(_)), "{:?}: {:?}", format, err);
    }
}

#[test]
fn test_flush_failure_is_encode_error() {
    let image = pattern(4, 4, PixelDepth::Rgb8);
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Tga, ImageFormat::Jpeg] {
        let err = encode(&image, format, &mut RejectingStream::failing_flush()).unwrap_err();
        assert!(matches!(err, ImageError::EncodeError(_)), "{:?}: {:?}", format, err);
    }
}

#[test]
fn test_zero_sized_image_encoding() {
    let empty = RawImage::new(0, 0, PixelDepth::Rgba8).unwrap();

    for format in [ImageFormat::Png, ImageFormat::Tga, ImageFormat::Jpeg] {
        let err = encode(&empty, format, &mut MemoryStream::new()).unwrap_err();
        assert!(matches!(err, ImageError::EncodeError(_)), "{:?}: {:?}", format, err);
    }

    // BMP has no lower bound on dimensions and writes a header-only file.
    let mut stream = MemoryStream::new();
    encode(&empty, ImageFormat::Bmp, &mut stream).unwrap();
    assert!(stream.as_bytes().starts_with(b"BM"));
}

#[test]
fn test_dimensions_beyond_u16_are_rejected() {
    let mut stream = MemoryStream::new();
    let pixels = vec![0x55u8; 70_000];
    {
        let mut io = crate::image_pipeline::stream::CodecIo::new(&mut stream);
        PngEncoder::new(&mut io)
            .write_image(&pixels, 70_000, 1, ExtendedColorType::L8)
            .unwrap();
    }
    stream.seek(SeekFrom::Start(0)).unwrap();

    let info = probe(&mut stream).unwrap();
    assert_eq!((info.width, info.height), (70_000, 1));

    let err = decode(&mut stream).unwrap_err();
    assert!(matches!(err, ImageError::InvalidDimensions(70_000, 1)));
}
