//! Demo scenes.

use anyhow::{Context, Result};
use clap::ValueEnum;
use ppmkit_engine::{PixelCanvas, Point2D, RasterConfig};

use crate::palette::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Purple three-point Bézier on black, corner to corner.
    Curve,
    /// Checkerboard framed by a red border.
    Checker,
    /// One of every primitive.
    Showcase,
}

impl Scene {
    /// Default file name for the rendered image.
    pub fn file_name(self) -> &'static str {
        match self {
            Scene::Curve => "Image.ppm",
            Scene::Checker => "Checker.ppm",
            Scene::Showcase => "Showcase.ppm",
        }
    }
}

pub fn render(scene: Scene, width: u32, height: u32, config: RasterConfig) -> Result<PixelCanvas> {
    let w = i32::try_from(width).context("width does not fit in canvas coordinates")?;
    let h = i32::try_from(height).context("height does not fit in canvas coordinates")?;

    let base = match scene {
        Scene::Curve | Scene::Checker => BLACK,
        Scene::Showcase => WHITE,
    };
    let mut canvas = PixelCanvas::new(scene.file_name(), base, width, height)?;
    log::info!("rendering {scene:?} scene at {width}x{height}");

    let mut r = canvas.raster_with(config);
    log::debug!("raster config: {:?}", r.config());
    match scene {
        Scene::Curve => {
            r.draw_bezier(&[Point2D::new(w, 0), Point2D::new(0, h), Point2D::new(0, 0)], PURPLE, 1)?;
        }
        Scene::Checker => {
            r.draw_checkered(8.min(width), 6.min(height), WHITE, BLACK)?
                .draw_border(RED, 2);
        }
        Scene::Showcase => {
            let (qw, qh) = (w / 4, h / 4);
            // At most one cell per pixel; an empty region ignores the count.
            let cells = |extent: i32| extent.clamp(1, 4) as u32;
            r.draw_checkered_pattern(0, 0, 2 * qw, 2 * qh, cells(2 * qw), cells(2 * qh), YELLOW, ORANGE)?
                .draw_rect(2 * qw, 0, w, qh, BLUE)
                .draw_empty_rect(2 * qw, qh, w, 2 * qh, GREEN, 3)
                .draw_hline(0, 2 * qh + 4, w, BLACK, 2)
                .draw_vline(w / 2, 2 * qh, h, BLACK, 2)
                .draw_line(0, h - 1, w / 2, 2 * qh, RED, 2);
            if qw > 0 {
                r.draw_quad_bezier(
                    Point2D::new(w / 2, h - 1),
                    Point2D::new(3 * qw, 2 * qh),
                    Point2D::new(w - 1, h - 1),
                    BLUE,
                    1,
                )?;
            }
            let wave = [(0, h / 2), (qw, 0), (3 * qw, h), (w - 1, h / 2)].map(Point2D::<i32>::from);
            r.draw_bezier(&wave, PURPLE, 2)?;
        }
    }
    Ok(canvas)
}
