use image::{imageops, DynamicImage};

pub const INPUT_WIDTH: u32 = 30;
pub const INPUT_HEIGHT: u32 = 30;
pub const INPUT_CHANNELS: usize = 3;

/// The one shape the model accepts: a 30x30 RGB image in NHWC layout with a
/// leading batch dimension of 1. Channel values keep the raw 0..255 range as
/// f32, matching the pipeline the model was trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    data: Vec<f32>,
}

impl InputTensor {
    /// Stretch-resizes the image to 30x30. Aspect ratio is not preserved and
    /// nothing is letterboxed; the model was trained on exactly this
    /// transform.
    pub fn from_image(image: &DynamicImage) -> Self {
        let resized = image.resize_exact(INPUT_WIDTH, INPUT_HEIGHT, imageops::FilterType::Triangle);
        let rgb = resized.to_rgb8();

        let mut data =
            Vec::with_capacity(INPUT_HEIGHT as usize * INPUT_WIDTH as usize * INPUT_CHANNELS);
        for y in 0..INPUT_HEIGHT {
            for x in 0..INPUT_WIDTH {
                let pixel = rgb.get_pixel(x, y);
                for c in 0..INPUT_CHANNELS {
                    data.push(pixel[c] as f32);
                }
            }
        }

        Self { data }
    }

    pub fn shape(&self) -> [usize; 4] {
        [
            1,
            INPUT_HEIGHT as usize,
            INPUT_WIDTH as usize,
            INPUT_CHANNELS,
        ]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_shape_and_length() {
        let tensor = InputTensor::from_image(&solid_image(100, 100, [255, 0, 0]));

        assert_eq!(tensor.shape(), [1, 30, 30, 3]);
        assert_eq!(tensor.as_slice().len(), 30 * 30 * 3);
    }

    #[test]
    fn test_channel_order_is_interleaved() {
        let tensor = InputTensor::from_image(&solid_image(100, 100, [255, 0, 0]));
        let slice = tensor.as_slice();

        // First pixel: red channel, then green, then blue
        assert_eq!(slice[0], 255.0);
        assert_eq!(slice[1], 0.0);
        assert_eq!(slice[2], 0.0);
    }

    #[test]
    fn test_values_keep_raw_range() {
        let tensor = InputTensor::from_image(&solid_image(100, 100, [128, 128, 128]));
        let slice = tensor.as_slice();

        assert!((slice[0] - 128.0).abs() < 0.0001);
        assert!((slice[1] - 128.0).abs() < 0.0001);
        assert!((slice[2] - 128.0).abs() < 0.0001);
    }

    #[test]
    fn test_rectangle_is_stretched_not_padded() {
        // A non-square solid image must stay solid after the stretch resize;
        // letterboxing would introduce black bars.
        let tensor = InputTensor::from_image(&solid_image(200, 100, [255, 0, 0]));
        let slice = tensor.as_slice();

        for chunk in slice.chunks(3) {
            assert_eq!(chunk[0], 255.0);
            assert_eq!(chunk[1], 0.0);
            assert_eq!(chunk[2], 0.0);
        }
    }

    #[test]
    fn test_black_image_is_all_zero() {
        let tensor = InputTensor::from_image(&solid_image(32, 32, [0, 0, 0]));

        assert!(tensor.as_slice().iter().all(|v| *v == 0.0));
    }
}
