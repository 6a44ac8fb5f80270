use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer};
use pixveil_core::{encode, Scheme};

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = DynamicImage::ImageRgba8(ImageBuffer::from_fn(512, 512, |x, y| {
        image::Rgba([(x ^ y) as u8, (x + y) as u8, (x * y) as u8, 255])
    }));
    let secret_message = "Hello World!".repeat(100);

    for scheme in Scheme::ALL {
        c.bench_function(&format!("Image Encoding {scheme}"), |b| {
            b.iter(|| {
                encode(&plain_image, &secret_message, scheme).expect("Cannot hide secret message")
            })
        });
    }
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
