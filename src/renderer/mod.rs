//! Scene rendering: one depth-tested pass that draws a [`FramePlan`].
//!
//! The quad and the mesh are uploaded once. Each frame the renderer writes
//! the frame uniform and one object uniform per draw, then replays the plan
//! in order with the pipeline matching each target's culling mode.

/// CPU-side assets loaded before GPU upload.
pub mod assets;
/// Static vertex/index buffers.
pub mod geometry_buffer;

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

pub use assets::SceneAssets;
use geometry_buffer::GeometryBuffer;

use crate::gpu::pipeline_helpers::{
    create_mesh_pipeline, filtering_sampler, linear_sampler, texture_2d,
    uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{DepthTarget, SampledTexture};
use crate::gpu::uniforms::{FrameUniform, ObjectUniform};
use crate::options::{LightingOptions, Options};
use crate::scene::{DrawTarget, FramePlan};

/// A uniform buffer and the bind group exposing it to one draw.
struct ObjectSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Owns every GPU resource of the fixed scene.
pub struct SceneRenderer {
    culled_pipeline: wgpu::RenderPipeline,
    double_sided_pipeline: wgpu::RenderPipeline,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    object_slots: Vec<ObjectSlot>,

    quad: GeometryBuffer,
    mesh: GeometryBuffer,
    quad_texture: wgpu::BindGroup,
    mesh_texture: wgpu::BindGroup,

    depth: DepthTarget,
    clear_color: wgpu::Color,
    lighting: LightingOptions,
}

impl SceneRenderer {
    /// Upload the assets and build both pipelines.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        assets: &SceneAssets,
        options: &Options,
    ) -> Self {
        let device = &context.device;

        let frame_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame Layout"),
                entries: &[uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });
        let object_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Object Layout"),
                entries: &[uniform_buffer(0, wgpu::ShaderStages::VERTEX)],
            });
        let texture_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Layout"),
                entries: &[texture_2d(0), filtering_sampler(1)],
            });

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Standard Shading"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/standard_shading.wgsl")
                        .into(),
                ),
            });
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[
                    &frame_layout,
                    &object_layout,
                    &texture_layout,
                ],
                push_constant_ranges: &[],
            });
        let culled_pipeline = create_mesh_pipeline(
            device,
            "Mesh",
            &shader,
            context.format(),
            &pipeline_layout,
            false,
        );
        let double_sided_pipeline = create_mesh_pipeline(
            device,
            "Quad",
            &shader,
            context.format(),
            &pipeline_layout,
            true,
        );

        let frame_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Frame Uniform"),
                contents: bytemuck::bytes_of(&FrameUniform::zeroed()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let frame_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Frame Bind Group"),
                layout: &frame_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_buffer.as_entire_binding(),
                }],
            });

        let sampler = linear_sampler(device, "Scene Sampler");
        let quad_texture = texture_bind_group(
            device,
            &texture_layout,
            &sampler,
            &SampledTexture::from_image(
                device,
                &context.queue,
                "Quad Texture",
                &assets.quad_image,
            ),
        );
        let mesh_texture = texture_bind_group(
            device,
            &texture_layout,
            &sampler,
            &SampledTexture::from_image(
                device,
                &context.queue,
                "Mesh Texture",
                &assets.mesh_image,
            ),
        );

        let (width, height) = context.size();
        let [r, g, b, a] = options.scene.clear_color;

        Self {
            culled_pipeline,
            double_sided_pipeline,
            frame_buffer,
            frame_bind_group,
            object_layout,
            object_slots: Vec::new(),
            quad: GeometryBuffer::from_quad(device, &assets.quad),
            mesh: GeometryBuffer::from_mesh(device, &assets.mesh),
            quad_texture,
            mesh_texture,
            depth: DepthTarget::new(device, width, height),
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: f64::from(a),
            },
            lighting: options.lighting.clone(),
        }
    }

    /// Recreate the depth target to match the current surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        let (width, height) = context.size();
        self.depth = DepthTarget::new(&context.device, width, height);
    }

    /// Draw one frame and present it.
    ///
    /// # Errors
    ///
    /// Returns the surface error when no swapchain image could be acquired.
    pub fn render(
        &mut self,
        context: &RenderContext,
        plan: &FramePlan,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms(context, plan);

        let mut encoder = context.create_encoder();
        self.encode_scene_pass(&mut encoder, &view, plan);
        context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn write_uniforms(&mut self, context: &RenderContext, plan: &FramePlan) {
        let frame = FrameUniform::new(plan, &self.lighting);
        context
            .queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        self.ensure_object_slots(&context.device, plan.draws.len());
        for (draw, slot) in plan.draws.iter().zip(&self.object_slots) {
            let object = ObjectUniform::new(draw.mvp, draw.model);
            context
                .queue
                .write_buffer(&slot.buffer, 0, bytemuck::bytes_of(&object));
        }
    }

    /// Grow the per-draw uniform slots so each draw in a frame has its own
    /// buffer.
    fn ensure_object_slots(&mut self, device: &wgpu::Device, count: usize) {
        while self.object_slots.len() < count {
            let buffer =
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Object Uniform"),
                    contents: bytemuck::bytes_of(&ObjectUniform::zeroed()),
                    usage: wgpu::BufferUsages::UNIFORM
                        | wgpu::BufferUsages::COPY_DST,
                });
            let bind_group =
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Object Bind Group"),
                    layout: &self.object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
            self.object_slots.push(ObjectSlot { buffer, bind_group });
        }
    }

    fn encode_scene_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        plan: &FramePlan,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.frame_bind_group, &[]);
        for (draw, slot) in plan.draws.iter().zip(&self.object_slots) {
            let (geometry, texture) = match draw.target {
                DrawTarget::Quad => (&self.quad, &self.quad_texture),
                DrawTarget::Mesh => (&self.mesh, &self.mesh_texture),
            };
            let pipeline = if draw.target.double_sided() {
                &self.double_sided_pipeline
            } else {
                &self.culled_pipeline
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(1, &slot.bind_group, &[]);
            pass.set_bind_group(2, texture, &[]);
            geometry.draw(&mut pass);
        }
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    texture: &SampledTexture,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Texture Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
