//! Camera for Pong game
//!
//! 2D orthographic camera in surface pixels: origin at the top-left, y down

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map `0..width` x `0..height` pixels onto clip space with y flipped
    pub fn pixels(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        // bottom = height, top = 0 puts y = 0 at the top of the surface
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches WGSL `Camera` struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}
