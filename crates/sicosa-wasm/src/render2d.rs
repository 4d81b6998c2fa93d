//! Canvas2D renderer for the hero particle field.

use sicosa_core::ParticleField;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

/// Clear, advance the simulation one frame, then draw particles and connections.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, field: &mut ParticleField) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);

    field.step();

    draw_particles(ctx, field);
    draw_connections(ctx, field);
}

// ─── Drawing primitives ─────────────────────────────────────────────────

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let color = field.config().particle_color;
    for p in field.particles() {
        ctx.begin_path();
        // Only fails on a negative radius, which config validation rejects.
        if ctx.arc(p.pos.x, p.pos.y, p.radius, 0.0, TAU).is_err() {
            continue;
        }
        ctx.set_fill_style_str(&color.to_css_rgba(p.opacity));
        ctx.fill();
    }
}

fn draw_connections(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let config = field.config();
    ctx.set_line_width(config.line_width);
    field.for_each_connection(|c| {
        ctx.begin_path();
        ctx.move_to(c.from.x, c.from.y);
        ctx.line_to(c.to.x, c.to.y);
        ctx.set_stroke_style_str(&config.line_color.to_css_rgba(c.alpha));
        ctx.stroke();
    });
}
