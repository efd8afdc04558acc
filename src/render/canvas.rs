use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::DrawOp;

/// Replays a display list onto the canvas.
pub fn paint(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawOp::FillRect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *w, *h);
            }
            DrawOp::StrokeRect { x, y, w, h, color } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(1.0);
                ctx.stroke_rect(*x, *y, *w, *h);
            }
            DrawOp::FillCircle { x, y, radius, color } => {
                ctx.begin_path();
                ctx.set_fill_style_str(color);
                ctx.arc(*x, *y, *radius, 0.0, TAU).ok();
                ctx.fill();
            }
            DrawOp::Polyline {
                points,
                color,
                line_width,
            } => {
                let Some(((x0, y0), rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.move_to(*x0, *y0);
                for (x, y) in rest {
                    ctx.line_to(*x, *y);
                }
                ctx.stroke();
            }
        }
    }
}
