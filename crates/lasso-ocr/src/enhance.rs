use xcap::image::{DynamicImage, RgbaImage};

/// Grayscale + contrast boost before recognition.
pub fn enhance_for_ocr(image: &RgbaImage) -> RgbaImage {
    DynamicImage::ImageRgba8(image.clone())
        .grayscale()
        .adjust_contrast(30.0)
        .to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcap::image::Rgba;

    #[test]
    fn output_keeps_dimensions() {
        let input = RgbaImage::from_pixel(64, 32, Rgba([120, 80, 200, 255]));
        let output = enhance_for_ocr(&input);
        assert_eq!((output.width(), output.height()), (64, 32));
    }

    #[test]
    fn output_is_grayscale() {
        let input = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        let output = enhance_for_ocr(&input);
        let px = output.get_pixel(4, 4);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}
