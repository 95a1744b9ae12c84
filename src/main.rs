use clap::Parser;
use reframe::{CropOrigin, OptionMap, ProcessRequest, RotateFlip, TransformOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reframe")]
#[command(about = "Transform an image the way the request pipeline would")]
#[command(long_about = "\
Transform an image the way the request pipeline would.

Flags build the same option set a media URL would carry; the tool
round-trips them through the codec, runs the transform pipeline, and
writes the result. The output file's extension selects the container
(jpg, png or gif; anything else falls back to jpg).

Cropping needs --width/--height plus --crop-x/--crop-y; center-cropping
needs --width/--height and only applies when the aspect ratio actually
changes.")]
#[command(version)]
struct Cli {
    /// Source image file
    input: PathBuf,

    /// Destination file; its extension selects the output container
    output: PathBuf,

    /// Requested output width in pixels
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Requested output height in pixels
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Convert to grayscale
    #[arg(long)]
    greyscale: bool,

    /// Correct orientation from the source's EXIF metadata
    #[arg(long)]
    keep_orientation: bool,

    /// Center-crop to the requested aspect ratio
    #[arg(long)]
    center_crop: bool,

    /// Rotate/flip combination, e.g. Rotate90FlipNone or RotateNoneFlipX
    #[arg(long)]
    rotate_flip: Option<String>,

    /// Pixel-exact crop origin X (needs --crop-y, --width and --height)
    #[arg(long)]
    crop_x: Option<i32>,

    /// Pixel-exact crop origin Y
    #[arg(long)]
    crop_y: Option<i32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let bundle = TransformOptions {
        keep_orientation: cli.keep_orientation,
        grey_scale: cli.greyscale,
        rotate_flip: cli
            .rotate_flip
            .as_deref()
            .map_or(RotateFlip::IDENTITY, RotateFlip::from_name),
        center_crop: cli.center_crop,
        crop_origin: match (cli.crop_x, cli.crop_y) {
            (Some(x), Some(y)) => Some(CropOrigin { x, y }),
            _ => None,
        },
        ..TransformOptions::default()
    };

    let source_bytes = std::fs::read(&cli.input)?;
    let image = image::load_from_memory(&source_bytes)?;
    let extension = cli
        .output
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut options = OptionMap::parse(&bundle.to_query_fragment());
    let result = reframe::process(
        ProcessRequest {
            image,
            source_bytes: &source_bytes,
            target_width: cli.width,
            target_height: cli.height,
            extension: &extension,
        },
        &mut options,
    );

    match result {
        Some(encoded) => {
            if encoded.extension != extension {
                eprintln!("note: no encoder for {extension:?}, wrote {}", encoded.extension);
            }
            std::fs::write(&cli.output, &encoded.bytes)?;
            println!(
                "{} -> {} ({} bytes)",
                cli.input.display(),
                cli.output.display(),
                encoded.bytes.len()
            );
        }
        None => {
            // Pipeline declined or failed: serve the original bytes.
            std::fs::write(&cli.output, &source_bytes)?;
            println!(
                "{} -> {} (unmodified)",
                cli.input.display(),
                cli.output.display()
            );
        }
    }

    Ok(())
}
