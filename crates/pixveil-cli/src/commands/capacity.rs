use std::path::PathBuf;

use clap::Args;
use pixveil_core::Scheme;

use crate::CliResult;

/// Shows how long a message an image can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG, JPEG or BMP
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, scheme: Scheme) -> CliResult<()> {
        let capacity = pixveil_core::commands::capacity(&self.media, scheme)?;
        println!(
            "{}: {} channel bytes, {} bits, up to {} message bytes",
            capacity.scheme,
            capacity.channel_bytes,
            capacity.capacity_bits,
            capacity.max_message_bytes
        );

        Ok(())
    }
}
