use crate::dimensions::Dimensions;
use bytes::Bytes;

/// Pixel layout of a raw video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Bi-planar 4:2:0 YCbCr, full range.
    Nv12FullRange,
    /// Bi-planar 4:2:0 YCbCr, video range.
    Nv12VideoRange,
    /// Tri-planar 4:2:0 YCbCr.
    I420,
    /// Packed 32-bit BGRA.
    Bgra,
    /// Packed 32-bit ARGB.
    Argb,
    /// Packed 24-bit RGB.
    Rgb24,
    /// Any other FOURCC.
    Unknown([u8; 4]),
}

/// Pixel formats a capturer accepts. Frames in any other format are dropped
/// without resolving dimensions.
pub const SUPPORTED_PIXEL_FORMATS: &[PixelFormat] = &[
    PixelFormat::Nv12FullRange,
    PixelFormat::Nv12VideoRange,
    PixelFormat::I420,
    PixelFormat::Bgra,
    PixelFormat::Argb,
];

impl PixelFormat {
    /// Create pixel format from FOURCC bytes
    pub fn from_fourcc(fourcc: &[u8; 4]) -> Self {
        match fourcc {
            b"420f" => PixelFormat::Nv12FullRange,
            b"420v" => PixelFormat::Nv12VideoRange,
            b"I420" => PixelFormat::I420,
            b"BGRA" => PixelFormat::Bgra,
            b"ARGB" => PixelFormat::Argb,
            b"RGB3" => PixelFormat::Rgb24,
            other => PixelFormat::Unknown(*other),
        }
    }

    /// Get FOURCC bytes for this pixel format
    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            PixelFormat::Nv12FullRange => *b"420f",
            PixelFormat::Nv12VideoRange => *b"420v",
            PixelFormat::I420 => *b"I420",
            PixelFormat::Bgra => *b"BGRA",
            PixelFormat::Argb => *b"ARGB",
            PixelFormat::Rgb24 => *b"RGB3",
            PixelFormat::Unknown(fourcc) => *fourcc,
        }
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_PIXEL_FORMATS.contains(self)
    }
}

/// A raw, untimed video frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    format: PixelFormat,
    data: Bytes,
}

impl PixelBuffer {
    pub fn new(dimensions: Dimensions, format: PixelFormat, data: Bytes) -> Self {
        Self {
            dimensions,
            format,
            data,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// A video frame that carries its own presentation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    pixel_buffer: PixelBuffer,
    timestamp_ns: i64,
}

impl SampleBuffer {
    pub fn new(pixel_buffer: PixelBuffer, timestamp_ns: i64) -> Self {
        Self {
            pixel_buffer,
            timestamp_ns,
        }
    }

    /// Wraps `pixel_buffer` stamped with the current capture clock.
    pub fn now(pixel_buffer: PixelBuffer) -> Self {
        Self::new(pixel_buffer, shared::time::timestamp_ns())
    }

    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    pub fn timestamp_ns(&self) -> i64 {
        self.timestamp_ns
    }

    pub fn dimensions(&self) -> Dimensions {
        self.pixel_buffer.dimensions()
    }

    pub fn format(&self) -> PixelFormat {
        self.pixel_buffer.format()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pixel_format_fourcc() {
        for format in SUPPORTED_PIXEL_FORMATS {
            assert_eq!(PixelFormat::from_fourcc(&format.fourcc()), *format);
        }
        assert_eq!(PixelFormat::from_fourcc(b"RGB3"), PixelFormat::Rgb24);
        assert_eq!(
            PixelFormat::from_fourcc(b"YUY2"),
            PixelFormat::Unknown(*b"YUY2")
        );
    }

    #[test]
    fn test_pixel_format_is_supported() {
        assert!(PixelFormat::Nv12FullRange.is_supported());
        assert!(PixelFormat::Bgra.is_supported());
        assert!(!PixelFormat::Rgb24.is_supported());
        assert!(!PixelFormat::Unknown(*b"YUY2").is_supported());
    }

    #[test]
    fn test_sample_buffer_accessors() {
        let pixel_buffer = PixelBuffer::new(
            Dimensions::new(4, 2),
            PixelFormat::Bgra,
            Bytes::from_static(&[0u8; 32]),
        );
        let sample = SampleBuffer::new(pixel_buffer.clone(), 42);
        assert_eq!(sample.timestamp_ns(), 42);
        assert_eq!(sample.dimensions(), Dimensions::new(4, 2));
        assert_eq!(sample.format(), PixelFormat::Bgra);
        assert_eq!(sample.pixel_buffer().data().len(), 32);

        let stamped = SampleBuffer::now(pixel_buffer);
        assert!(stamped.timestamp_ns() >= 0);
    }
}
