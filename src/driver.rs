use crate::scenes::{ARTWORKS, Artwork, SceneContext};
use promo_art_common::{
    Error, FRAME_HEIGHT, FRAME_WIDTH, FontBook, JPEG_QUALITY, JpegEncoder, Result, render,
    write_to_file,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, path::PathBuf};

pub struct RunOptions {
    pub output_dir: PathBuf,
    /// Seed for decorative randomness, OS entropy when `None`
    pub seed: Option<u64>,
}

pub struct Report {
    pub outcomes: Vec<(&'static str, Result<usize>)>,
}

impl Report {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Render, encode and write a single artwork
fn produce(
    artwork: &Artwork,
    ctx: &mut SceneContext<'_>,
    encoder: &JpegEncoder,
    options: &RunOptions,
) -> Result<usize> {
    let canvas = render(FRAME_WIDTH, FRAME_HEIGHT, |canvas| (artwork.scene)(canvas, ctx))?;
    let bytes = encoder.encode(&canvas)?;
    drop(canvas);

    write_to_file(&bytes, &options.output_dir.join(artwork.file_name))?;
    Ok(bytes.len())
}

/// Per-artwork copy of a font loading failure
fn fonts_unavailable(error: &Error) -> Error {
    match error {
        Error::Font(reason) => Error::Font(reason.clone()),
        other => Error::Font(other.to_string()),
    }
}

/// Produce every artwork in order
///
/// A failing artwork never stops the batch; write failures are logged as
/// warnings, everything else as errors.
pub fn run(options: &RunOptions) -> Report {
    if let Err(error) = fs::create_dir_all(&options.output_dir) {
        warn!(?error, dir = %options.output_dir.display(), "couldn't create output directory");
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let encoder = JpegEncoder::new(JPEG_QUALITY);
    let fonts = FontBook::system();
    if let Err(error) = &fonts {
        error!(%error, "no usable fonts, every image will fail");
    }

    println!("Generating images...");

    let mut outcomes = Vec::with_capacity(ARTWORKS.len());
    for artwork in &ARTWORKS {
        info!(file = artwork.file_name, "rendering");

        let outcome = match &fonts {
            Ok(fonts) => {
                let mut ctx = SceneContext {
                    fonts,
                    rng: &mut rng,
                };
                produce(artwork, &mut ctx, &encoder, options)
            }
            Err(error) => Err(fonts_unavailable(error)),
        };

        match &outcome {
            Ok(bytes) => {
                info!(file = artwork.file_name, bytes, "written");
                println!("✓ {}", artwork.file_name);
            }
            Err(error @ Error::Io { .. }) => {
                warn!(file = artwork.file_name, %error, "write failed");
                println!("✗ {}", artwork.file_name);
            }
            Err(error) => {
                error!(file = artwork.file_name, %error, "generation failed");
                println!("✗ {}", artwork.file_name);
            }
        }

        outcomes.push((artwork.file_name, outcome));
    }

    let report = Report { outcomes };
    if report.failed() == 0 {
        println!("\n✅ All images generated!");
    } else {
        println!(
            "\n⚠️ {} of {} images failed, see the log for details",
            report.failed(),
            report.outcomes.len()
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::BTreeSet, path::Path};

    fn listing(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn writes_the_five_images_and_overwrites_on_rerun() {
        let scratch = tempfile::tempdir().unwrap();
        let options = RunOptions {
            // created by the run itself
            output_dir: scratch.path().join("images"),
            seed: Some(42),
        };
        let expected: BTreeSet<String> = ARTWORKS
            .iter()
            .map(|artwork| artwork.file_name.to_string())
            .collect();

        let first = run(&options);
        assert_eq!(first.written(), 5);
        assert_eq!(listing(&options.output_dir), expected);

        let mut contents = Vec::new();
        for name in &expected {
            let bytes = fs::read(options.output_dir.join(name)).unwrap();
            assert!(!bytes.is_empty());

            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (FRAME_WIDTH, FRAME_HEIGHT));
            contents.push(bytes);
        }

        let second = run(&options);
        assert_eq!(second.failed(), 0);
        assert_eq!(listing(&options.output_dir), expected);

        // same seed, same bytes
        for (name, before) in expected.iter().zip(&contents) {
            let after = fs::read(options.output_dir.join(name)).unwrap();
            assert!(&after == before, "{name} changed between runs");
        }
    }

    #[test]
    fn font_failures_are_not_wrapped_twice() {
        let error = fonts_unavailable(&Error::Font("no regular face".into()));
        assert_eq!(error.to_string(), Error::Font("no regular face".into()).to_string());

        let error = fonts_unavailable(&Error::Encoding("bad".into()));
        assert!(matches!(error, Error::Font(reason) if reason.contains("bad")));
    }

    #[test]
    fn unwritable_output_fails_every_image_without_aborting() {
        // a plain file where the directory should be
        let scratch = tempfile::tempdir().unwrap();
        let blocker = scratch.path().join("blocked");
        fs::write(&blocker, b"not a directory").unwrap();

        let report = run(&RunOptions {
            output_dir: blocker.clone(),
            seed: Some(1),
        });

        assert_eq!(report.outcomes.len(), ARTWORKS.len());
        assert_eq!(report.written(), 0);
        assert!(
            report
                .outcomes
                .iter()
                .all(|(_, outcome)| matches!(outcome, Err(Error::Io { .. })))
        );
    }
}
