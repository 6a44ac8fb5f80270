use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, RgbImage};
use pixveil_core::commands::{capacity, hide, unveil};
use pixveil_core::{PixveilError, Result, Scheme};
use tempfile::TempDir;

fn prepare_gradient_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 + y) as u8, (y * 5 + x * 3) as u8, (x ^ y) as u8])
    })
}

fn prepare_carrier(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let carrier = dir.join(name);
    DynamicImage::ImageRgb8(prepare_gradient_image(40, 30))
        .save_with_format(&carrier, format)
        .expect("Failed to write carrier image");
    carrier
}

#[test]
fn should_hide_and_unveil_with_every_scheme() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.png", ImageFormat::Png);
    let secret = "Leveraging image data security 🔐";

    for scheme in Scheme::ALL {
        let secret_image = out_dir.path().join(format!("secret-{scheme}.png"));
        hide(&carrier, Some(secret_image.clone()), secret.to_owned(), scheme)?;

        let l = fs::metadata(&secret_image)
            .expect("Output image was not written.")
            .len();
        assert!(l > 0, "File is not supposed to be empty");

        assert_eq!(unveil(&secret_image, None, scheme)?, secret);
    }

    Ok(())
}

#[test]
fn should_keep_the_image_dimensions_and_layout() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.png", ImageFormat::Png);
    let secret_image = out_dir.path().join("secret.png");

    hide(&carrier, Some(secret_image.clone()), "hi".to_owned(), Scheme::LSB1)?;

    let before = image::open(&carrier).expect("carrier not readable");
    let after = image::open(&secret_image).expect("secret image not readable");
    assert_eq!(before.dimensions(), after.dimensions());
    assert_eq!(before.color(), after.color());

    Ok(())
}

#[test]
fn should_take_a_jpeg_carrier_and_write_a_png() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.jpg", ImageFormat::Jpeg);
    let secret_image = out_dir.path().join("secret.png");

    hide(&carrier, Some(secret_image.clone()), "from jpeg".to_owned(), Scheme::LSB2)?;

    assert_eq!(
        image::guess_format(&fs::read(&secret_image)?).expect("unknown format"),
        ImageFormat::Png
    );
    assert_eq!(unveil(&secret_image, None, Scheme::LSB2)?, "from jpeg");

    Ok(())
}

#[test]
fn should_take_a_bmp_carrier() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.bmp", ImageFormat::Bmp);
    let secret_image = out_dir.path().join("secret.png");

    hide(&carrier, Some(secret_image.clone()), "from bmp".to_owned(), Scheme::SPREAD5)?;
    assert_eq!(unveil(&secret_image, None, Scheme::SPREAD5)?, "from bmp");

    Ok(())
}

#[test]
fn should_write_the_unveiled_message_to_a_file() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.png", ImageFormat::Png);
    let secret_image = out_dir.path().join("secret.png");
    let message_file = out_dir.path().join("secret-message.txt");

    hide(&carrier, Some(secret_image.clone()), "Hello World!".to_owned(), Scheme::LSB1)?;
    unveil(&secret_image, Some(message_file.clone()), Scheme::LSB1)?;

    assert_eq!(fs::read_to_string(message_file)?, "Hello World!");

    Ok(())
}

#[test]
fn should_not_unveil_with_a_different_scheme() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.png", ImageFormat::Png);
    let secret_image = out_dir.path().join("secret.png");

    hide(&carrier, Some(secret_image.clone()), "hi".to_owned(), Scheme::SPREAD5)?;

    assert!(!matches!(
        unveil(&secret_image, None, Scheme::LSB2),
        Ok(ref msg) if msg == "hi"
    ));

    Ok(())
}

#[test]
fn should_report_too_small_carriers() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier(out_dir.path(), "carrier.png", ImageFormat::Png);
    let c = capacity(&carrier, Scheme::SPREAD5)?;
    assert_eq!(c.channel_bytes, 40 * 30 * 3);
    assert_eq!(c.capacity_bits, 720);
    assert_eq!(c.max_message_bytes, 88);

    let result = hide(
        &carrier,
        Some(out_dir.path().join("secret.png")),
        "x".repeat(c.max_message_bytes + 1),
        Scheme::SPREAD5,
    );
    match result {
        Err(PixveilError::CapacityExceeded {
            needed: 728,
            available: 720,
        }) => (),
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }

    hide(
        &carrier,
        Some(out_dir.path().join("secret.png")),
        "x".repeat(c.max_message_bytes),
        Scheme::SPREAD5,
    )?;

    Ok(())
}

#[test]
fn should_refuse_unsupported_media() {
    match unveil(Path::new("Cargo.toml"), None, Scheme::LSB1) {
        Err(PixveilError::UnsupportedMedia) => (),
        other => panic!("expected UnsupportedMedia, got {other:?}"),
    }
}
