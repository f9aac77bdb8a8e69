use super::resources::{InstanceData, MAX_DISCS, MAX_RECTS};
use super::Renderer;
use game_core::{Scene, Shape};
use wgpu::*;

/// Instances for one frame, split by mesh
#[derive(Debug, Default, PartialEq)]
pub struct FrameInstances {
    pub rects: Vec<InstanceData>,
    pub discs: Vec<InstanceData>,
}

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let srgb = renderer.surface_config.format.is_srgb();
    let instances = scene_instances(scene, srgb);
    upload_instances(renderer, &instances);

    {
        let [r, g, b, a] = to_surface_color(scene.clear, srgb);
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, &instances);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Convert scene shapes to mesh instances, keeping scene order within each
/// mesh. Discs are drawn after rects, matching the scene's layering.
pub fn scene_instances(scene: &Scene, srgb: bool) -> FrameInstances {
    let mut out = FrameInstances::default();
    for shape in &scene.shapes {
        match *shape {
            Shape::Rect { min, size, color } => out.rects.push(InstanceData {
                transform: [min.x, min.y, size.x, size.y],
                tint: to_surface_color(color, srgb),
            }),
            Shape::Disc {
                center,
                radius,
                color,
            } => out.discs.push(InstanceData {
                transform: [center.x, center.y, radius, radius],
                tint: to_surface_color(color, srgb),
            }),
        }
    }

    if out.rects.len() > MAX_RECTS {
        log::warn!("Dropping {} rects over capacity", out.rects.len() - MAX_RECTS);
        out.rects.truncate(MAX_RECTS);
    }
    out.discs.truncate(MAX_DISCS);
    out
}

/// Scene colors are sRGB; an sRGB surface expects linear shader output
fn to_surface_color(color: [f32; 4], srgb: bool) -> [f32; 4] {
    if !srgb {
        return color;
    }
    let [r, g, b, a] = color;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn upload_instances(renderer: &Renderer, instances: &FrameInstances) {
    if !instances.rects.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.rects,
            0,
            bytemuck::cast_slice(&instances.rects),
        );
    }
    if !instances.discs.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.discs,
            0,
            bytemuck::cast_slice(&instances.discs),
        );
    }
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, instances: &FrameInstances) {
    pass.set_pipeline(&renderer.shape_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (divider dashes, paddles)
    let rect = &renderer.meshes.0;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..instances.rects.len() as u32);

    // Circle (Ball)
    let circle = &renderer.meshes.1;
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.discs.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..instances.discs.len() as u32);
}
