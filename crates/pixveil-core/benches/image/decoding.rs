use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer};
use pixveil_core::{decode, encode, Scheme};

pub fn image_decoding(c: &mut Criterion) {
    let plain_image = DynamicImage::ImageRgba8(ImageBuffer::from_fn(512, 512, |x, y| {
        image::Rgba([(x ^ y) as u8, (x + y) as u8, (x * y) as u8, 255])
    }));

    for scheme in Scheme::ALL {
        let img = encode(&plain_image, "Hello World!", scheme).expect("Cannot hide secret message");

        c.bench_function(&format!("Image Decoding {scheme}"), |b| {
            b.iter(|| decode(&img, scheme).expect("Cannot unveil secret message"))
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
