// File: crates/figrid-demo/src/gallery.rs
// Summary: Example panels (image, sinusoids, strip plot, scatter) and the four-panel layout.

use anyhow::Result;
use figrid_core::{
    add_labels, place_axes_on_grid, scalebar, AxesId, Color, Figure, FontWeight, GridPlacement, HAlign, Image,
    LabelSpec, Line, Placement, ScaleBar, Scatter, VAlign,
};

/// Deterministic noise source so the gallery renders the same pixels every run.
struct Noise(u64);

impl Noise {
    fn new(seed: u64) -> Self { Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1)) }

    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64) / ((1u64 << 53) as f64)
    }

    /// Standard normal via Box-Muller.
    fn normal(&mut self) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

/// 100x100 noise image with a white 60 um scale bar.
pub fn heatmap(fig: &mut Figure, id: AxesId) -> Result<()> {
    let mut noise = Noise::new(1);
    let data = (0..100 * 100).map(|_| noise.normal()).collect();
    let image = Image::new(100, 100, data).ok_or_else(|| anyhow::anyhow!("image shape mismatch"))?;
    fig.axes_mut(id)?.imshow(image).set_title("An image").axis_off();

    let bar = ScaleBar::new(10.0, 85.0)
        .horizontal(30.0, "60 um")
        .colors(Color::WHITE, Color::WHITE)
        .fontsize(12.0)
        .buffers(0.25, -2.0);
    scalebar(fig, id, &bar)?;
    Ok(())
}

/// Three sinusoids stacked in a 3x1 placement, with an L-shaped scale bar on the last one.
pub fn sinusoids(fig: &mut Figure, axes: &Placement) -> Result<()> {
    let ids: Vec<AxesId> = axes.iter().collect();
    let t: Vec<f64> = (0..1000).map(|i| i as f64 * 0.01).collect();
    for (row, &id) in ids.iter().enumerate() {
        let f = 0.8 * (row + 1) as f64;
        let y: Vec<f64> = t.iter().map(|&t| (2.0 * std::f64::consts::PI * f * t).sin()).collect();
        fig.axes_mut(id)?
            .plot(Line::from_xy(&t, &y).with_color(Color::BLACK).with_linewidth(2.0))
            .axis_off()
            .set_title(format!("frequency = {f:0.1} Hz"));
        fig.set_xlim(id, -0.5, 10.5)?;
        fig.set_ylim(id, -1.35, 1.05)?;
    }

    if let Some(&last) = ids.last() {
        let bar = ScaleBar::new(-0.25, -1.25).horizontal(1.0, "1 s").vertical(1.0, "1 u");
        scalebar(fig, last, &bar)?;
    }
    Ok(())
}

/// Eight groups of 40 samples drawn as horizontal strips.
pub fn strips(fig: &mut Figure, id: AxesId) -> Result<()> {
    let mut noise = Noise::new(7);
    let ax = fig.axes_mut(id)?;
    for group in 0..8 {
        let center = ((group + 1) as f64).ln() * -5.0 + 10.0;
        let points = (0..40)
            .map(|_| (center + 2.0 * noise.normal(), group as f64 + 0.15 * noise.normal()))
            .collect();
        let shade = 40 + 20 * group as u8;
        ax.scatter(Scatter::new(points).with_size(9.0).with_color(Color::rgb(shade / 2, shade + 40, shade / 2)));
    }
    Ok(())
}

/// Correlated bivariate cloud.
pub fn scatterplot(fig: &mut Figure, id: AxesId) -> Result<()> {
    let mut noise = Noise::new(0);
    let points = (0..2000)
        .map(|_| {
            let a = noise.normal();
            let b = noise.normal();
            let x = 2f64.sqrt() * a;
            // cov(x, y) = 0.4, var(y) = 0.2
            let y = 0.4 / 2f64.sqrt() * a + (0.2f64 - 0.08).sqrt() * b;
            (x, y)
        })
        .collect();
    fig.axes_mut(id)?.scatter(Scatter::new(points).with_size(5.0).with_color(Color::gray(0.15)));
    Ok(())
}

/// The four-panel layout with A-D labels.
pub fn layout(fig: &mut Figure) -> Result<()> {
    let panel_a = place_axes_on_grid(fig, &GridPlacement::new().xspan(0.05, 0.3).yspan(0.05, 0.45))?;
    let panel_b = place_axes_on_grid(
        fig,
        &GridPlacement::new().xspan(0.4, 1.0).yspan(0.05, 0.45).dim(3, 1).hspace(0.4),
    )?;
    let panel_c = place_axes_on_grid(fig, &GridPlacement::new().xspan(0.05, 0.4).yspan(0.57, 1.0))?;
    let panel_d = place_axes_on_grid(fig, &GridPlacement::new().xspan(0.5, 1.0).yspan(0.57, 1.0))?;

    heatmap(fig, panel_a.first())?;
    sinusoids(fig, &panel_b)?;
    strips(fig, panel_c.first())?;
    scatterplot(fig, panel_d.first())?;

    let labels: Vec<LabelSpec> = [("A", 0.0, 0.05), ("B", 0.37, 0.05), ("C", 0.0, 0.55), ("D", 0.45, 0.55)]
        .into_iter()
        .map(|(text, x, y)| LabelSpec {
            fontsize: Some(20.0),
            weight: Some(FontWeight::Bold),
            ha: Some(HAlign::Right),
            va: Some(VAlign::Bottom),
            ..LabelSpec::new(text, x, y)
        })
        .collect();
    add_labels(fig, &labels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figrid_core::FigureConfig;

    fn figure() -> Figure {
        Figure::with_config(FigureConfig::square(10.0))
    }

    fn single(fig: &mut Figure) -> AxesId {
        place_axes_on_grid(fig, &GridPlacement::new()).expect("place").first()
    }

    #[test]
    fn heatmap_adds_image_and_scale_bar() {
        let mut fig = figure();
        let id = single(&mut fig);
        heatmap(&mut fig, id).expect("heatmap");
        let ax = fig.axes(id).expect("axes");
        assert_eq!(ax.images.len(), 1);
        assert_eq!(ax.lines.len(), 1);
        assert_eq!(ax.texts.len(), 1);
        assert_eq!(ax.texts[0].content, "60 um");
        assert!(!ax.axis_on);
    }

    #[test]
    fn sinusoids_fill_each_row_and_bar_the_last() {
        let mut fig = figure();
        let placed = place_axes_on_grid(&mut fig, &GridPlacement::new().dim(3, 1)).expect("place");
        sinusoids(&mut fig, &placed).expect("sinusoids");
        let ids = placed.as_row().expect("flat").to_vec();
        for &id in &ids[..2] {
            let ax = fig.axes(id).expect("axes");
            assert_eq!(ax.lines.len(), 1);
            assert!(ax.texts.is_empty());
        }
        let last = fig.axes(ids[2]).expect("axes");
        assert_eq!(last.lines.len(), 3);
        let texts: Vec<&str> = last.texts.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(texts, vec!["1 s", "1 u"]);
        assert_eq!(fig.view_limits(ids[0]).expect("limits").x, (-0.5, 10.5));
    }

    #[test]
    fn strips_and_scatter_add_collections() {
        let mut fig = figure();
        let strip_id = single(&mut fig);
        let scatter_id = single(&mut fig);
        strips(&mut fig, strip_id).expect("strips");
        scatterplot(&mut fig, scatter_id).expect("scatter");
        assert_eq!(fig.axes(strip_id).expect("axes").collections.len(), 8);
        let scatter = fig.axes(scatter_id).expect("axes");
        assert_eq!(scatter.collections.len(), 1);
        assert_eq!(scatter.collections[0].points.len(), 2000);
    }

    #[test]
    fn layout_places_panels_and_labels() {
        let mut fig = figure();
        layout(&mut fig).expect("layout");
        // 6 panel regions plus 4 label regions
        assert_eq!(fig.len(), 10);
        for label in ["A", "B", "C", "D"] {
            assert!(fig.texts().any(|t| t == label), "missing label {label}");
        }
    }
}
