//! Gzip encoding shared by the read and write paths
//!
//! Entry files are a bare gzip stream of the value bytes with no extra
//! header or footer, so any gzip reader can open them.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

/// Compress `data` into `writer` and hand the writer back once the gzip
/// trailer is written
pub fn compress_into<W: Write>(writer: W, data: &[u8], level: Compression) -> io::Result<W> {
    let mut encoder = GzEncoder::new(writer, level);
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompress a complete gzip stream
pub fn decompress(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut data = Vec::new();
    decoder.read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_plain_gzip() {
        let compressed = compress_into(Vec::new(), b"value1\nvalue2", Compression::default())
            .unwrap();

        // gzip magic and deflate method
        assert_eq!(&compressed[..3], &[0x1f, 0x8b, 0x08]);
        assert_eq!(decompress(&compressed).unwrap(), b"value1\nvalue2");
    }

    #[test]
    fn test_truncated_stream_is_an_error() {
        let compressed =
            compress_into(Vec::new(), "x".repeat(4096).as_bytes(), Compression::best()).unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        assert!(decompress(truncated).is_err());
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(decompress(b"definitely not gzip").is_err());
    }
}
