// Canvas-2d drawing for the field. Plain functions that take the context
// explicitly; all geometry arrives already computed by the sim, so nothing
// here owns state.

use crate::field::Edge;
use crate::particle::Particle;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const LINE_WIDTH: f64 = 1.0;

pub fn clear(context: &CanvasRenderingContext2d, width: f64, height: f64) {
    context.clear_rect(0.0, 0.0, width, height);
}

/// Filled disc at the particle's position, fully opaque in its shade.
pub fn draw_particle(
    context: &CanvasRenderingContext2d,
    particle: &Particle,
) -> Result<(), JsValue> {
    context.begin_path();
    context.arc(
        particle.pos[0],
        particle.pos[1],
        particle.radius,
        0.0,
        std::f64::consts::PI * 2.0,
    )?;
    context.set_fill_style(&JsValue::from(particle.shade.color().to_css(1.0)));
    context.fill();
    Ok(())
}

/// Line segment between two linked particles, faded by their separation.
pub fn draw_edge(context: &CanvasRenderingContext2d, edge: &Edge) {
    context.begin_path();
    context.set_stroke_style(&JsValue::from(edge.shade.color().to_css(edge.opacity)));
    context.set_line_width(LINE_WIDTH);
    context.move_to(edge.from[0], edge.from[1]);
    context.line_to(edge.to[0], edge.to[1]);
    context.stroke();
}
