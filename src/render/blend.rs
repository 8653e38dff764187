use crate::{
    foundation::core::{Rgb8, VideoFrame},
    foundation::error::{GlimmerError, GlimmerResult},
    render::canvas::Canvas,
};

/// `alpha * src + (1 - alpha) * dst`, truncated to u8. `alpha <= 0` leaves `dst` untouched.
pub fn mix(dst: Rgb8, src: Rgb8, alpha: f32) -> Rgb8 {
    if alpha <= 0.0 {
        return dst;
    }
    let a = alpha.min(1.0);
    let ch = |s: u8, d: u8| (a * f32::from(s) + (1.0 - a) * f32::from(d)).clamp(0.0, 255.0) as u8;
    Rgb8::new(ch(src.r, dst.r), ch(src.g, dst.g), ch(src.b, dst.b))
}

/// Blend a finalized canvas (alpha already clamped and scaled) onto an rgb24 frame in place.
pub fn blend_canvas_onto(frame: &mut VideoFrame, canvas: &Canvas) -> GlimmerResult<()> {
    if frame.size() != canvas.size() {
        return Err(GlimmerError::validation(format!(
            "canvas is {}x{} but frame is {}x{}",
            canvas.size().width,
            canvas.size().height,
            frame.width,
            frame.height
        )));
    }
    for ((px, &color), &alpha) in frame
        .data
        .chunks_exact_mut(3)
        .zip(canvas.colors())
        .zip(canvas.alphas())
    {
        if alpha <= 0.0 {
            continue;
        }
        let out = mix(Rgb8::new(px[0], px[1], px[2]), color, alpha);
        px.copy_from_slice(&out.channels());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
