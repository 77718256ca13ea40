// Window frame capture and coordinate handling. One full-window frame is
// grabbed per poll and all region crops and pixel probes read from it.

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, Rgba};
use serde::{Deserialize, Serialize};
use xcap::Window;

use crate::config::{PixelCoord, Region};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalCoordinates {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LogicalCoordinates {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Converts logical window coordinates to physical pixels on scaled displays.
pub fn logical_to_physical(logical: &LogicalCoordinates, scale_factor: f64) -> PhysicalCoordinates {
    PhysicalCoordinates {
        x: (logical.x.max(0) as f64 * scale_factor).round() as u32,
        y: (logical.y.max(0) as f64 * scale_factor).round() as u32,
        width: (logical.width as f64 * scale_factor).round() as u32,
        height: (logical.height as f64 * scale_factor).round() as u32,
    }
}

pub fn physical_to_logical(physical: &PhysicalCoordinates, scale_factor: f64) -> LogicalCoordinates {
    LogicalCoordinates {
        x: (physical.x as f64 / scale_factor).round() as i32,
        y: (physical.y as f64 / scale_factor).round() as i32,
        width: (physical.width as f64 / scale_factor).round() as u32,
        height: (physical.height as f64 / scale_factor).round() as u32,
    }
}

/// One captured frame of a table window.
pub struct Frame {
    image: DynamicImage,
}

impl Frame {
    pub fn new(image: DynamicImage) -> Frame {
        Frame { image }
    }

    /// Captures the window's current contents.
    pub fn capture(window: &Window) -> Result<Frame> {
        let buffer = window
            .capture_image()
            .with_context(|| format!("failed to capture window {:?}", window.title()))?;
        Ok(Frame {
            image: DynamicImage::ImageRgba8(buffer),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Crops a region, clamping to the frame bounds.
    pub fn crop(&self, region: Region) -> Result<DynamicImage> {
        if region.left >= self.image.width() || region.top >= self.image.height() {
            return Err(anyhow!(
                "region ({}, {}) outside {}x{} frame",
                region.left,
                region.top,
                self.image.width(),
                self.image.height()
            ));
        }
        let width = region.width.min(self.image.width() - region.left);
        let height = region.height.min(self.image.height() - region.top);
        Ok(self.image.crop_imm(region.left, region.top, width, height))
    }

    /// Reads one pixel, None when the coordinate falls outside the frame.
    pub fn pixel(&self, coord: PixelCoord) -> Option<Rgba<u8>> {
        if coord.left >= self.image.width() || coord.top >= self.image.height() {
            return None;
        }
        self.image
            .as_rgba8()
            .map(|buf| *buf.get_pixel(coord.left, coord.top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn solid_frame(width: u32, height: u32, color: [u8; 4]) -> Frame {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        Frame::new(DynamicImage::ImageRgba8(img))
    }

    #[test]
    fn test_logical_to_physical_2x_scaling() {
        let logical = LogicalCoordinates {
            x: 100,
            y: 200,
            width: 800,
            height: 600,
        };
        let physical = logical_to_physical(&logical, 2.0);
        assert_eq!(physical.x, 200);
        assert_eq!(physical.y, 400);
        assert_eq!(physical.width, 1600);
        assert_eq!(physical.height, 1200);
    }

    #[test]
    fn test_physical_to_logical_round_trip() {
        let physical = PhysicalCoordinates {
            x: 200,
            y: 400,
            width: 1600,
            height: 1200,
        };
        let logical = physical_to_logical(&physical, 2.0);
        assert_eq!(logical.x, 100);
        assert_eq!(logical.height, 600);
        assert_eq!(logical_to_physical(&logical, 2.0), physical);
    }

    #[test]
    fn test_negative_coordinates_clamped() {
        let logical = LogicalCoordinates {
            x: -50,
            y: -100,
            width: 800,
            height: 600,
        };
        let physical = logical_to_physical(&logical, 2.0);
        assert_eq!(physical.x, 0);
        assert_eq!(physical.y, 0);
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let frame = solid_frame(100, 100, [10, 20, 30, 255]);
        let crop = frame.crop(Region::new(90, 90, 50, 50)).unwrap();
        assert_eq!(crop.width(), 10);
        assert_eq!(crop.height(), 10);

        assert!(frame.crop(Region::new(200, 0, 10, 10)).is_err());
    }

    #[test]
    fn test_pixel_read() {
        let frame = solid_frame(10, 10, [200, 50, 60, 255]);
        let px = frame.pixel(PixelCoord::new(5, 5)).unwrap();
        assert_eq!(px.0[0], 200);
        assert!(frame.pixel(PixelCoord::new(10, 5)).is_none());
    }
}
