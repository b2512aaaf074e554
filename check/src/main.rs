#[macro_use]
extern crate tracing;

use anyhow::{Context, bail};
use image::GenericImageView;
use itertools::Itertools;
use promo_art_common::{ARTWORK_FILES, FRAME_HEIGHT, FRAME_WIDTH};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// verify a directory of rendered promo images
struct Args {
    #[argh(positional)]
    /// path to the directory the images were written to
    path: PathBuf,
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

fn check_image(path: &Path) -> anyhow::Result<()> {
    let size = fs::metadata(path)
        .with_context(|| format!("{} is missing", path.display()))?
        .len();
    if size == 0 {
        bail!("{} is empty", path.display());
    }

    let image = image::open(path).with_context(|| format!("{} is not a jpeg", path.display()))?;
    let (width, height) = image.dimensions();
    if (width, height) != (FRAME_WIDTH, FRAME_HEIGHT) {
        bail!(
            "{} is {width}x{height}, expected {FRAME_WIDTH}x{FRAME_HEIGHT}",
            path.display()
        );
    }

    debug!(path = %path.display(), size, "ok");
    Ok(())
}

/// Names of jpegs in `dir` that no artwork produces
fn strays(dir: &Path) -> anyhow::Result<Vec<String>> {
    let files: Vec<PathBuf> = fs::read_dir(dir)?
        .map_ok(|entry| entry.path())
        .try_collect()?;

    Ok(files
        .iter()
        .filter(|path| is_jpeg(path))
        .filter_map(|path| path.file_name()?.to_str())
        .filter(|name| !ARTWORK_FILES.iter().any(|expected| expected == name))
        .map(str::to_owned)
        .sorted()
        .collect())
}

fn check_dir(dir: &Path) -> anyhow::Result<()> {
    let failures = ARTWORK_FILES
        .iter()
        .filter_map(|name| check_image(&dir.join(name)).err())
        .inspect(|error| error!("{error:#}"))
        .count();

    for stray in strays(dir)? {
        warn!(file = %stray, "unexpected jpeg in output directory");
    }

    if failures > 0 {
        bail!("{failures} of {} images failed verification", ARTWORK_FILES.len());
    }

    info!(dir = %dir.display(), "all {} images verified", ARTWORK_FILES.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    check_dir(&args.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, codecs::jpeg::JpegEncoder};

    fn write_jpeg(path: &Path, width: u32, height: u32) {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgb([10, 15, 30]));

        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, 90)
            .encode(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        fs::write(path, out).unwrap();
    }

    #[test]
    fn accepts_a_complete_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path();
        for name in ARTWORK_FILES {
            write_jpeg(&dir.join(name), FRAME_WIDTH, FRAME_HEIGHT);
        }
        write_jpeg(&dir.join("old-cover.jpg"), 8, 8);

        check_dir(dir).unwrap();
        assert_eq!(strays(dir).unwrap(), vec!["old-cover.jpg".to_string()]);
    }

    #[test]
    fn rejects_missing_and_misshapen_images() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path();
        for name in &ARTWORK_FILES[1..] {
            write_jpeg(&dir.join(name), FRAME_WIDTH, FRAME_HEIGHT);
        }
        assert!(check_dir(dir).is_err());

        write_jpeg(&dir.join(ARTWORK_FILES[0]), 640, 480);
        let error = check_image(&dir.join(ARTWORK_FILES[0])).unwrap_err();
        assert!(error.to_string().contains("640x480"));

        fs::write(dir.join(ARTWORK_FILES[0]), b"").unwrap();
        let error = check_image(&dir.join(ARTWORK_FILES[0])).unwrap_err();
        assert!(error.to_string().contains("empty"));
    }

    #[test]
    fn jpeg_extension_is_case_insensitive() {
        assert!(is_jpeg(Path::new("a/01-main.JPG")));
        assert!(is_jpeg(Path::new("cover.jpeg")));
        assert!(!is_jpeg(Path::new("notes.txt")));
        assert!(!is_jpeg(Path::new("jpg")));
    }
}
