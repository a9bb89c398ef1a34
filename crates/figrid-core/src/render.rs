// File: crates/figrid-core/src/render.rs
// Summary: Headless figure rendering to RGBA8 buffers and PNG using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use std::io::Cursor;

use crate::artist::{Image, Line, Scatter};
use crate::axes::Axes;
use crate::color::Color;
use crate::config::FigureConfig;
use crate::figure::Figure;
use crate::geometry::RectF;
use crate::grid::{format_tick, nice_ticks};
use crate::scale::LinearScale;
use crate::text::{HAlign, TextShaper, TextStyle, VAlign};
use crate::theme::Theme;

/// Tick mark length in points.
const TICK_LEN_PT: f32 = 3.5;
/// Gap between a tick mark and its label, in points.
const TICK_PAD_PT: f32 = 3.5;
/// Gap between the top of a region and its title, in points.
const TITLE_PAD_PT: f32 = 6.0;
const TICK_LABEL_SIZE_PT: f32 = 10.0;
const TITLE_SIZE_PT: f32 = 12.0;
const FRAME_WIDTH_PT: f32 = 0.8;

pub struct RenderOptions {
    /// Draw text (labels, ticks, titles). Off gives font-independent pixels.
    pub draw_text: bool,
    /// Overrides the theme background.
    pub background: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_text: true, background: None }
    }
}

impl Figure {
    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.config().pixel_size();
        tracing::debug!(regions = self.len(), width = w, height = h, "rendering figure");

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        {
            let canvas = surface.canvas();
            draw_figure(canvas, self, opts, w, h)?;
        }

        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        if !surface.read_pixels(&info, px.as_mut_slice(), stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Per-render context shared by the region painters.
struct Painter<'a> {
    canvas: &'a skia::Canvas,
    config: &'a FigureConfig,
    theme: Theme,
    shaper: Option<TextShaper>,
}

impl Painter<'_> {
    fn pt(&self, points: f32) -> f32 {
        self.config.points_to_px(points)
    }

    fn text(&self, content: &str, x: f32, y: f32, style: &TextStyle) {
        if let Some(shaper) = &self.shaper {
            shaper.draw_aligned(self.canvas, content, x, y, self.pt(style.fontsize), style);
        }
    }
}

fn stroke_paint(color: Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color.to_skia());
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width_px);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color.to_skia());
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn sk_rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn draw_figure(canvas: &skia::Canvas, fig: &Figure, opts: &RenderOptions, w: i32, h: i32) -> Result<()> {
    let theme = fig.theme();
    canvas.clear(opts.background.unwrap_or(theme.background).to_skia());

    let painter = Painter {
        canvas,
        config: fig.config(),
        theme,
        shaper: opts.draw_text.then(TextShaper::new),
    };

    for (id, ax) in fig.iter() {
        let rect = ax.position.to_pixels(w, h);
        let limits = fig.view_limits(id)?;
        let sx = LinearScale::new(limits.x, (rect.left, rect.right));
        let sy = LinearScale::new(limits.y, (rect.bottom, rect.top));

        if ax.frame_visible() {
            canvas.draw_rect(sk_rect(&rect), &fill_paint(painter.theme.axes_face));
        }

        canvas.save();
        canvas.clip_rect(sk_rect(&rect), skia::ClipOp::Intersect, true);
        for img in &ax.images {
            draw_image(&painter, &sx, &sy, img);
        }
        for line in &ax.lines {
            draw_line(&painter, &sx, &sy, line);
        }
        for scatter in &ax.collections {
            draw_scatter(&painter, &sx, &sy, scatter);
        }
        canvas.restore();

        if ax.frame_visible() {
            let paint = stroke_paint(painter.theme.frame, painter.pt(FRAME_WIDTH_PT));
            canvas.draw_rect(sk_rect(&rect), &paint);
        }
        if ax.axis_on {
            draw_ticks(&painter, &rect, &sx, &sy, ax);
        }
        if let Some(title) = &ax.title {
            let style = TextStyle::new()
                .color(painter.theme.title)
                .fontsize(TITLE_SIZE_PT)
                .ha(HAlign::Center)
                .va(VAlign::Bottom);
            painter.text(title, rect.center_x(), rect.top - painter.pt(TITLE_PAD_PT), &style);
        }
        // Text is not clipped to its region.
        for t in &ax.texts {
            painter.text(&t.content, sx.to_px(t.x), sy.to_px(t.y), &t.style);
        }
    }
    Ok(())
}

fn draw_line(p: &Painter, sx: &LinearScale, sy: &LinearScale, line: &Line) {
    if line.points.len() < 2 {
        return;
    }
    let paint = stroke_paint(line.color, p.pt(line.linewidth));
    for pair in line.points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            continue;
        }
        p.canvas.draw_line((sx.to_px(x0), sy.to_px(y0)), (sx.to_px(x1), sy.to_px(y1)), &paint);
    }
}

fn draw_scatter(p: &Painter, sx: &LinearScale, sy: &LinearScale, scatter: &Scatter) {
    let paint = fill_paint(scatter.color);
    // Marker size is an area in points^2.
    let radius = p.pt(scatter.size.max(0.0).sqrt() * 0.5);
    for &(x, y) in &scatter.points {
        if x.is_finite() && y.is_finite() {
            p.canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius, &paint);
        }
    }
}

fn draw_image(p: &Painter, sx: &LinearScale, sy: &LinearScale, img: &Image) {
    let (lo, hi) = img.value_range();
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    for row in 0..img.rows {
        let (ya, yb) = (sy.to_px(row as f64 - 0.5), sy.to_px(row as f64 + 0.5));
        for col in 0..img.cols {
            let v = img.value(row, col);
            if !v.is_finite() {
                continue;
            }
            let (xa, xb) = (sx.to_px(col as f64 - 0.5), sx.to_px(col as f64 + 0.5));
            paint.set_color(Color::gray((v - lo) / (hi - lo)).to_skia());
            let r = skia::Rect::from_ltrb(xa.min(xb), ya.min(yb), xa.max(xb), ya.max(yb));
            p.canvas.draw_rect(r, &paint);
        }
    }
}

fn draw_ticks(p: &Painter, rect: &RectF, sx: &LinearScale, sy: &LinearScale, ax: &Axes) {
    let paint = stroke_paint(p.theme.tick, p.pt(FRAME_WIDTH_PT));
    let tick_len = p.pt(TICK_LEN_PT);
    let pad = p.pt(TICK_PAD_PT);
    let label_style = TextStyle::new().color(p.theme.tick_label).fontsize(TICK_LABEL_SIZE_PT);

    if ax.xaxis.show_ticks {
        let ticks = nice_ticks(sx.d0, sx.d1, 5);
        let step = ticks.windows(2).next().map_or(1.0, |w| w[1] - w[0]);
        for v in ticks {
            let x = sx.to_px(v);
            p.canvas.draw_line((x, rect.bottom), (x, rect.bottom + tick_len), &paint);
            if ax.x_ticklabels_visible() {
                let style = label_style.clone().ha(HAlign::Center).va(VAlign::Top);
                p.text(&format_tick(v, step), x, rect.bottom + tick_len + pad, &style);
            }
        }
    }

    if ax.yaxis.show_ticks {
        let ticks = nice_ticks(sy.d0, sy.d1, 5);
        let step = ticks.windows(2).next().map_or(1.0, |w| w[1] - w[0]);
        for v in ticks {
            let y = sy.to_px(v);
            p.canvas.draw_line((rect.left - tick_len, y), (rect.left, y), &paint);
            if ax.y_ticklabels_visible() {
                let style = label_style.clone().ha(HAlign::Right).va(VAlign::Center);
                p.text(&format_tick(v, step), rect.left - tick_len - pad, y, &style);
            }
        }
    }
}
