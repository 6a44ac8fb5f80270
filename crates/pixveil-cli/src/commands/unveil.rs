use std::path::PathBuf;

use clap::Args;
use pixveil_core::Scheme;

use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file as well
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, scheme: Scheme) -> CliResult<()> {
        let msg = pixveil_core::commands::unveil(&self.media, self.output_file, scheme)?;
        println!("{msg}");

        Ok(())
    }
}
