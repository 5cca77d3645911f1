//! Binary PPM (P6) output.
//!
//! The whole file is encoded in memory before the destination is opened,
//! then written to a sibling `.partial` file and renamed into place, so a
//! failed render, allocation or write never leaves a truncated image behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{Color, FrameBuffer, RenderError};
use sable_math::Interval;

/// Convert a color to 8-bit RGB.
///
/// Channels are clamped to [0, 1] and scaled by 255, truncating.
#[inline]
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Encode a frame as a P6 image: `P6\n<w> <h>\n255\n` followed by packed
/// RGB bytes, top row first.
pub fn encode_ppm(frame: &FrameBuffer) -> Result<Vec<u8>, RenderError> {
    let header = format!("P6\n{} {}\n255\n", frame.width, frame.height);
    let bytes = frame
        .pixels
        .len()
        .checked_mul(3)
        .and_then(|n| n.checked_add(header.len()))
        .unwrap_or(usize::MAX);

    let mut out = Vec::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| RenderError::ResourceExhaustion { bytes })?;

    out.extend_from_slice(header.as_bytes());
    for color in &frame.pixels {
        out.extend_from_slice(&color_to_rgb(*color));
    }

    Ok(out)
}

/// Encode and write a frame to any byte sink.
pub fn write_ppm(frame: &FrameBuffer, mut writer: impl Write) -> Result<(), RenderError> {
    let bytes = encode_ppm(frame)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encode a frame and save it to `path`.
pub fn save_ppm(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    let bytes = encode_ppm(frame)?;

    write_file(path, |writer| writer.write_all(&bytes))?;

    log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Staging file written next to `path`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

/// Run `write` against a staging file, then move it over `path`.
///
/// On any failure the staging file is removed and `path` is untouched.
fn write_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), RenderError> {
    let staging = partial_path(path);
    let file = File::create(&staging).map_err(|source| RenderError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| writer.flush());
    drop(writer);
    let result = written.and_then(|()| fs::rename(&staging, path));

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(&staging) {
            log::warn!("Could not remove {}: {}", staging.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_2x2() -> FrameBuffer {
        let mut frame = FrameBuffer::try_new(2, 2).unwrap();
        frame.set(0, 0, Color::new(1.0, 0.0, 0.0));
        frame.set(1, 0, Color::new(0.0, 1.0, 0.0));
        frame.set(0, 1, Color::new(0.0, 0.0, 1.0));
        frame.set(1, 1, Color::new(0.5, 2.0, -1.0));
        frame
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        // Truncates, does not round
        assert_eq!(color_to_rgb(Color::new(0.5, 0.999, 0.2)), [127, 254, 51]);
        // Clamps out-of-range channels
        assert_eq!(color_to_rgb(Color::new(1.7, -0.3, f32::INFINITY)), [255, 0, 255]);
    }

    #[test]
    fn test_encode_ppm_layout() {
        let bytes = encode_ppm(&frame_2x2()).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        #[rustfmt::skip]
        assert_eq!(&bytes[header.len()..], &[
            255, 0, 0,    0, 255, 0,
            0, 0, 255,    127, 255, 0,
        ]);
    }

    #[test]
    fn test_encode_non_square_is_row_major() {
        let mut frame = FrameBuffer::try_new(3, 1).unwrap();
        frame.set(2, 0, Color::ONE);
        let bytes = encode_ppm(&frame).unwrap();

        assert!(bytes.starts_with(b"P6\n3 1\n255\n"));
        assert_eq!(bytes.len(), 11 + 9);
        assert_eq!(&bytes[bytes.len() - 3..], &[255, 255, 255]);
    }

    #[test]
    fn test_write_ppm_to_vec() {
        let mut sink = Vec::new();
        write_ppm(&frame_2x2(), &mut sink).unwrap();
        assert_eq!(sink, encode_ppm(&frame_2x2()).unwrap());
    }

    #[test]
    fn test_save_ppm() {
        let path = std::env::temp_dir().join(format!("sable_out_{}.ppm", std::process::id()));
        save_ppm(&frame_2x2(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written, encode_ppm(&frame_2x2()).unwrap());
    }

    #[test]
    fn test_save_ppm_unopenable_sink() {
        let path = std::env::temp_dir().join("sable_missing_dir_for_test/out.ppm");
        let err = save_ppm(&frame_2x2(), &path).unwrap_err();

        match err {
            RenderError::SinkUnavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let path = std::env::temp_dir().join(format!("sable_failed_{}.ppm", std::process::id()));

        let err = write_file(&path, |writer| {
            writer.write_all(b"P6\n2 2\n255\n")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        })
        .unwrap_err();

        assert!(matches!(err, RenderError::Io(_)));
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_image() {
        let path = std::env::temp_dir().join(format!("sable_keep_{}.ppm", std::process::id()));
        save_ppm(&frame_2x2(), &path).unwrap();

        let err = write_file(&path, |_| Err(io::Error::new(io::ErrorKind::Other, "disk full")));

        let kept = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(err.is_err());
        assert_eq!(kept, encode_ppm(&frame_2x2()).unwrap());
    }
}
