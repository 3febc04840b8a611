//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_assemble() {
    use rebit::{ChannelPlane, Planes};
    use rgb::Rgba;

    let planes = Planes::new(
        ChannelPlane::new(5, vec![0b10101, 0b11111]).unwrap(),
        ChannelPlane::new(6, vec![0b110011, 0]).unwrap(),
        ChannelPlane::new(5, vec![0, 0b11111]).unwrap(),
        ChannelPlane::absent(),
    );
    let img = rebit::assemble(2, 1, &planes).unwrap();
    assert_eq!(
        img.buf(),
        &[Rgba::new(0xAD, 0xCF, 0, 255), Rgba::new(255, 0, 255, 255)]
    );
}

#[test]
fn readme_loader() {
    use rebit::{ChannelPlane, ChannelSource, ImageLoader, Limits, Planes};

    struct Mask;

    impl ChannelSource for Mask {
        type Error = std::io::Error;
        fn width(&self) -> usize {
            4
        }
        fn height(&self) -> usize {
            1
        }
        fn read_channels(&mut self) -> Result<Planes, Self::Error> {
            Ok(Planes::luma(ChannelPlane::new(1, vec![1, 0, 1, 0]).unwrap()))
        }
    }

    let mut loader = ImageLoader::new(Mask).with_limits(Limits::none().with_max_pixels(1 << 24));
    let img = loader.load().unwrap();
    assert_eq!(img.buf()[0].r, 255);
    assert_eq!(img.buf()[1].r, 0);
}

#[test]
fn readme_packed_words() {
    use rebit::{Channel, ImageLoader};

    let words = [0xFF00_0002, 0xFF00_0001];
    let mut loader = ImageLoader::from_words(1, 2, &words, true).unwrap();
    assert_eq!(loader.planes().unwrap()[Channel::Red].samples(), &[1, 2]);
    assert_eq!(
        rebit::packed::to_words(loader.load().unwrap()),
        [0xFF00_0001, 0xFF00_0002]
    );
}

#[test]
fn readme_row_kernels() {
    let (r, g, b, a) = ([1u8, 5], [2u8, 6], [3u8, 7], [4u8, 8]);
    let mut rgba = [0u8; 8];
    rebit::bytes::interleave_rgba(&r, &g, &b, &a, &mut rgba).unwrap();
    assert_eq!(rgba, [1, 2, 3, 4, 5, 6, 7, 8]);
}
