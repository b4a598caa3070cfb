use dfdx::tensor::{Tensor, ZerosTensor};
use image::RgbImage;

pub const CHANNELS: usize = 3;
pub const HEIGHT: usize = 32;
pub const WIDTH: usize = 32;

/// An image that only knows its `(channels, height, width)` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderImage {
    channels: usize,
    height: usize,
    width: usize,
}

impl Default for PlaceholderImage {
    fn default() -> Self {
        Self::cifar()
    }
}

impl PlaceholderImage {
    pub fn new(channels: usize, height: usize, width: usize) -> Self {
        Self {
            channels,
            height,
            width,
        }
    }

    /// A 3x32x32 color image.
    pub fn cifar() -> Self {
        Self::new(CHANNELS, HEIGHT, WIDTH)
    }

    pub fn with_shape(self, channels: usize, height: usize, width: usize) -> Self {
        Self::new(channels, height, width)
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn numel(&self) -> usize {
        self.channels * self.height * self.width
    }

    /// A black [RgbImage] of the same size, or `None` unless there are exactly 3 channels.
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        if self.channels != 3 {
            return None;
        }
        Some(RgbImage::new(self.width as u32, self.height as u32))
    }

    /// A zero filled tensor with this image's runtime shape.
    pub fn to_tensor<D: ZerosTensor<f32>>(&self, dev: &D) -> Tensor<(usize, usize, usize), f32, D> {
        dev.zeros_like(&self.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfdx::prelude::*;

    #[test]
    fn test_default_is_cifar_shape() {
        let img = PlaceholderImage::default();
        assert_eq!(img.shape(), (3, 32, 32));
        assert_eq!(img.numel(), 3072);
    }

    #[test]
    fn test_with_shape() {
        let img = PlaceholderImage::cifar().with_shape(1, 28, 28);
        assert_eq!(img.channels(), 1);
        assert_eq!(img.height(), 28);
        assert_eq!(img.width(), 28);
    }

    #[test]
    fn test_to_rgb_image() {
        let rgb = PlaceholderImage::cifar().to_rgb_image().unwrap();
        assert_eq!(rgb.dimensions(), (32, 32));
        assert!(rgb.pixels().all(|p| p.0 == [0, 0, 0]));
        assert!(PlaceholderImage::new(1, 32, 32).to_rgb_image().is_none());
    }

    #[test]
    fn test_to_tensor() {
        let dev: Cpu = Default::default();
        let t = PlaceholderImage::cifar().to_tensor(&dev);
        assert_eq!(t.shape(), &(3, 32, 32));
    }
}
