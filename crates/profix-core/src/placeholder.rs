//! Placeholder hero frames for development
//!
//! Writes SVG stand-ins for the exported sequence so the site can be run
//! before the real WebP frames exist.

use std::f64::consts::PI;
use std::fmt::Write as _;

use tracing::{debug, info};

use crate::motion::{frame_filename_with_extension, FrameSequence};
use crate::Result;

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const PART_COUNT: usize = 12;

pub const PLACEHOLDER_EXTENSION: &str = "svg";
pub const POSTER_FILENAME: &str = "poster.svg";

/// Render one placeholder frame
///
/// `total_frames` of 0 is treated as 1.
pub fn render_placeholder_svg(frame_index: u32, total_frames: u32) -> String {
    let total = total_frames.max(1);
    let progress = f64::from(frame_index) / f64::from(total);
    let rotation = (progress * 360.0).round();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect fill="#050505" width="{w}" height="{h}"/>
  <defs>
    <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
      <path d="M 40 0 L 0 0 0 40" fill="none" stroke="rgba(255,255,255,0.03)" stroke-width="1"/>
    </pattern>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#grid)"/>
  <g transform="translate({cx}, {cy})">
    <g transform="rotate({tilt})">
      <ellipse cx="0" cy="0" rx="{outer_rx}" ry="{outer_ry}" fill="none" stroke="rgba(255,255,255,{outer_alpha})" stroke-width="2"/>
      <ellipse cx="0" cy="0" rx="{inner_rx}" ry="{inner_ry}" fill="none" stroke="rgba(255,255,255,{inner_alpha})" stroke-width="1"/>
{parts}    </g>
  </g>
  <text x="1880" y="1050" text-anchor="end" font-family="Inter, sans-serif" font-size="14" fill="rgba(255,255,255,0.2)">Frame {index:04} / {total}</text>
  <rect x="40" y="1050" width="200" height="4" rx="2" fill="rgba(255,255,255,0.1)"/>
  <rect x="40" y="1050" width="{bar}" height="4" rx="2" fill="rgba(255,255,255,0.4)"/>
  <text x="960" y="520" text-anchor="middle" font-family="Inter, sans-serif" font-size="24" fill="rgba(255,255,255,0.15)">PLACEHOLDER FRAME</text>
  <text x="960" y="560" text-anchor="middle" font-family="Inter, sans-serif" font-size="16" fill="rgba(255,255,255,0.1)">Replace with actual car animation sequence</text>
</svg>
"##,
        w = WIDTH,
        h = HEIGHT,
        cx = WIDTH / 2,
        cy = HEIGHT / 2,
        tilt = rotation * 0.1,
        outer_rx = 200.0 + progress * 100.0,
        outer_ry = 80.0 + progress * 40.0,
        outer_alpha = 0.1 + progress * 0.2,
        inner_rx = 150.0 + progress * 80.0,
        inner_ry = 60.0 + progress * 30.0,
        inner_alpha = 0.15 + progress * 0.15,
        parts = exploding_parts(progress),
        index = frame_index,
        total = total,
        bar = 200.0 * progress,
    )
}

/// Squares flying outward on a ring flattened for perspective
fn exploding_parts(progress: f64) -> String {
    let mut out = String::new();
    let distance = 50.0 + progress * 200.0;
    let opacity = 0.1 + (1.0 - progress) * 0.3;
    let size = 10.0 + progress * 20.0;

    for i in 0..PART_COUNT {
        let angle = (i as f64 / PART_COUNT as f64) * PI * 2.0;
        let x = angle.cos() * distance;
        let y = angle.sin() * distance * 0.5;
        let _ = writeln!(
            out,
            r#"      <rect x="{}" y="{}" width="{size}" height="{size}" fill="none" stroke="rgba(255,255,255,{opacity})" stroke-width="1" transform="rotate({})"/>"#,
            x - size / 2.0,
            y - size / 2.0,
            angle.to_degrees() + progress * 90.0,
        );
    }
    out
}

/// Write `poster.svg` plus frames `0..=total_frames` into the sequence
/// directory; returns the number of files written
pub fn generate_placeholders(sequence: &FrameSequence) -> Result<usize> {
    let dir = sequence.directory();
    std::fs::create_dir_all(dir)?;
    info!("Generating placeholder frames in {}", dir.display());

    std::fs::write(
        dir.join(POSTER_FILENAME),
        render_placeholder_svg(1, sequence.total_frames),
    )?;
    let mut written = 1;

    for index in 0..=sequence.total_frames {
        let filename =
            frame_filename_with_extension(index, sequence.padding, PLACEHOLDER_EXTENSION);
        std::fs::write(
            dir.join(filename),
            render_placeholder_svg(index, sequence.total_frames),
        )?;
        written += 1;

        if index % 20 == 0 {
            debug!("Created frame {}/{}", index, sequence.total_frames);
        }
    }

    info!("Wrote {} placeholder files", written);
    Ok(written)
}
