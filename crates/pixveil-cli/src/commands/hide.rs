use std::path::PathBuf;

use clap::Args;
use pixveil_core::Scheme;

use crate::CliResult;

/// Hides a text message in a PNG, JPEG or BMP image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, defaults to a name derived from the scheme
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, scheme: Scheme) -> CliResult<()> {
        let output =
            pixveil_core::commands::hide(&self.media, self.write_to_file, self.message, scheme)?;
        println!("{}", output.display());

        Ok(())
    }
}
