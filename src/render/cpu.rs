//! CPU raster backend powered by `vello_cpu`.
//!
//! Executes a [`FramePlan`] op-by-op against a `RenderContext` and
//! reads the result back as premultiplied RGBA8. The context is reset
//! at the start of every frame, so no transform, paint or stroke state
//! leaks between calls.

use crate::foundation::core::{Affine, BezPath, FrameRGBA, Rgba8};
use crate::foundation::error::{OculyteError, OculyteResult};
use crate::render::plan::{DrawOp, FramePlan};

/// Reusable plan executor. Holds the render context across frames so
/// animation loops do not reallocate per tick.
#[derive(Default)]
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    /// Rasterize `plan` into a fresh frame buffer.
    #[tracing::instrument(level = "debug", skip(self, plan), fields(ops = plan.ops.len()))]
    pub fn render(&mut self, plan: &FramePlan) -> OculyteResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| OculyteError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| OculyteError::render("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        for planned in &plan.ops {
            match &planned.op {
                DrawOp::FillPath {
                    path,
                    transform,
                    color,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
                DrawOp::StrokePath {
                    path,
                    transform,
                    color,
                    width,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
