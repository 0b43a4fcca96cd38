//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture, and
//! the loading path used by the textured exercises.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
}

impl Texture {
    /// Creates a new texture from the given [`image::DynamicImage`], converted to RGBA8 and
    /// mipmapped.
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        let data = image.to_rgba8().into_raw();
        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
            })
        }
    }

    /// Loads the image at `path`, flipped so its first row is the bottom of the texture. A
    /// missing or undecodable file is replaced by a checkerboard.
    pub fn load_or_checker(gl: &Arc<glow::Context>, path: &Path) -> Result<Self, String> {
        let image = match image::open(path) {
            Ok(image) => {
                let (width, height) = image.dimensions();
                log::info!("Loaded texture {} ({}x{})", path.display(), width, height);
                image.flipv()
            }
            Err(e) => {
                log::warn!(
                    "Could not load texture {}: {}; using a checkerboard",
                    path.display(),
                    e
                );
                DynamicImage::ImageRgba8(checkerboard(64, 8))
            }
        };
        Self::new(gl, &image)
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

/// A `size`×`size` magenta and black checkerboard with square cells of `cell` pixels.
pub fn checkerboard(size: u32, cell: u32) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([255, 0, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_cells() {
        let board = checkerboard(16, 4);
        assert_eq!(board.dimensions(), (16, 16));
        assert_eq!(board.get_pixel(0, 0), &Rgba([255, 0, 255, 255]));
        assert_eq!(board.get_pixel(3, 3), &Rgba([255, 0, 255, 255]));
        assert_eq!(board.get_pixel(4, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(board.get_pixel(4, 4), &Rgba([255, 0, 255, 255]));
        assert_eq!(board.get_pixel(15, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_checkerboard_zero_cell() {
        let board = checkerboard(2, 0);
        assert_eq!(board.get_pixel(0, 0), &Rgba([255, 0, 255, 255]));
        assert_eq!(board.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
    }
}
