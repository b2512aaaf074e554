#[macro_use]
extern crate tracing;

use std::path::PathBuf;

mod driver;
mod scenes;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const OUTPUT_DIR: &str = "images";

#[derive(argh::FromArgs)]
/// Render the promotional images for the Sleepless Agent article
struct Args {
    #[argh(option, default = "PathBuf::from(OUTPUT_DIR)")]
    /// directory the jpegs are written to
    output: PathBuf,

    #[argh(option)]
    /// seed for the decorative scatter, random when omitted
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let report = driver::run(&driver::RunOptions {
        output_dir: args.output,
        seed: args.seed,
    });

    // failures are reported above, the batch itself always completes
    info!(
        written = report.written(),
        failed = report.failed(),
        "done"
    );

    Ok(())
}
