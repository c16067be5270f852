//! Braille-dot rasterizer for the chamber view.
//!
//! Each terminal cell carries a 2x4 braille dot grid, and one dot is one
//! canvas pixel for [`World::to_canvas`]. Plain glyphs (field markers,
//! labels) occupy whole cells underneath the braille layers.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::chamber::{Drawing, Point, Scenario, Stroke, World};

pub const BG: Color = Color::Rgb(10, 10, 18);
pub const TRACK_COLOR: Color = Color::Rgb(220, 20, 60);
const AXIS_COLOR: Color = Color::Rgb(150, 150, 170);
const FIELD_COLOR: Color = Color::Rgb(70, 70, 95);
const STUB_COLOR: Color = Color::Rgb(235, 235, 245);
const VERTEX_COLOR: Color = Color::Rgb(255, 220, 80);

const FIELD_XS: [f32; 4] = [-6.0, -2.0, 2.0, 6.0];
const FIELD_YS: [f32; 5] = [6.0, 3.0, 0.0, -3.0, -6.0];
/// Axes sit just inside the world corner.
const AXIS_AT: f32 = -9.0;
const AXIS_END: f32 = 9.0;

type DotMap = HashMap<(usize, usize), u8>;

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn line_dots(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut dots = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut cx, mut cy) = (x0, y0);
    loop {
        dots.push((cx, cy));
        if cx == x1 && cy == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cx += sx;
        }
        if e2 <= dx {
            err += dx;
            cy += sy;
        }
    }
    dots
}

pub struct Sketch {
    world: World,
    width: usize,
    height: usize,
    grid: Vec<Vec<(char, Style)>>,
}

impl Sketch {
    /// A blank sketch `width` x `height` terminal cells in size.
    pub fn new(world: World, width: usize, height: usize) -> Self {
        Self {
            world,
            width,
            height,
            grid: vec![vec![(' ', Style::default().bg(BG)); width]; height],
        }
    }

    fn dots_wide(&self) -> i32 {
        (self.width * 2) as i32
    }

    fn dots_high(&self) -> i32 {
        (self.height * 4) as i32
    }

    fn to_dot(&self, p: Point) -> (i32, i32) {
        let (x, y) = self
            .world
            .to_canvas(p, self.dots_wide() as f32, self.dots_high() as f32);
        (x.round() as i32, y.round() as i32)
    }

    fn to_cell(&self, p: Point) -> (i32, i32) {
        let (bx, by) = self.to_dot(p);
        (bx.div_euclid(2), by.div_euclid(4))
    }

    fn set_dot(&self, map: &mut DotMap, bx: i32, by: i32) {
        if bx < 0 || by < 0 || bx >= self.dots_wide() || by >= self.dots_high() {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        *map.entry((bx / 2, by / 4)).or_insert(0) |= braille_bit(bx % 2, by % 4);
    }

    fn write_layer(&mut self, map: &DotMap, color: Color, bold: bool) {
        for (&(cx, cy), &bits) in map {
            if cx >= self.width || cy >= self.height || bits == 0 {
                continue;
            }
            let mut style = Style::default().fg(color).bg(BG);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            let existing = self.grid[cy][cx].0 as u32;
            let merged = if (0x2800..0x2900).contains(&existing) {
                (existing - 0x2800) as u8 | bits
            } else {
                bits
            };
            let ch = char::from_u32(0x2800 + merged as u32).unwrap_or(' ');
            self.grid[cy][cx] = (ch, style);
        }
    }

    /// Rasterize a polyline. Thick strokes use a 2x2 dot brush.
    pub fn polyline(&mut self, points: &[Point], stroke: Stroke, color: Color) {
        let mut map = DotMap::new();
        let brush: &[(i32, i32)] = match stroke {
            Stroke::Thin => &[(0, 0)],
            Stroke::Thick => &[(0, 0), (1, 0), (0, 1), (1, 1)],
        };
        let dots: Vec<(i32, i32)> = points.iter().map(|&p| self.to_dot(p)).collect();
        for pair in dots.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            for (x, y) in line_dots(x0, y0, x1, y1) {
                for &(dx, dy) in brush {
                    self.set_dot(&mut map, x + dx, y + dy);
                }
            }
        }
        if let [(x, y)] = dots.as_slice() {
            self.set_dot(&mut map, *x, *y);
        }
        self.write_layer(&map, color, stroke == Stroke::Thick);
    }

    /// Put `text` starting at a cell, clipped to the sketch.
    pub fn text(&mut self, col: i32, row: i32, text: &str, style: Style) {
        if row < 0 || row as usize >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let x = col + i as i32;
            if x >= 0 && (x as usize) < self.width {
                self.grid[row as usize][x as usize] = (ch, style.bg(BG));
            }
        }
    }

    /// Put a glyph on the cell holding `p`, shifted by whole cells.
    pub fn glyph(&mut self, p: Point, offset: (i32, i32), ch: char, style: Style) {
        let (cx, cy) = self.to_cell(p);
        let mut buf = [0u8; 4];
        self.text(cx + offset.0, cy + offset.1, ch.encode_utf8(&mut buf), style);
    }

    /// Static decoration shared by the clues and game views: field markers,
    /// axes, the caption and the upward initial-motion stub.
    pub fn background(&mut self) {
        let field = Style::default().fg(FIELD_COLOR);
        for &y in &FIELD_YS {
            for &x in &FIELD_XS {
                self.glyph(Point::new(x, y), (0, 0), '⊗', field);
            }
        }

        let axis = Style::default().fg(AXIS_COLOR);
        let origin = Point::new(AXIS_AT, AXIS_AT);
        let y_tip = Point::new(AXIS_AT, AXIS_END);
        let x_tip = Point::new(AXIS_END, AXIS_AT);
        self.polyline(&[origin, y_tip], Stroke::Thin, AXIS_COLOR);
        self.polyline(&[origin, x_tip], Stroke::Thin, AXIS_COLOR);
        self.glyph(y_tip, (0, 0), '▲', axis);
        self.glyph(y_tip, (-2, -1), 'y', axis);
        self.glyph(x_tip, (0, 0), '▶', axis);
        self.glyph(x_tip, (1, 1), 'x', axis);

        let bold = Style::default().fg(STUB_COLOR).add_modifier(Modifier::BOLD);
        self.text(1, 0, "B field: ⊗ into page", bold);

        let stub_top = Point::new(0.0, 0.5);
        self.polyline(&[Point::new(0.0, -0.5), stub_top], Stroke::Thick, STUB_COLOR);
        self.glyph(stub_top, (2, -1), '↑', bold);
    }

    pub fn drawing(&mut self, drawing: &Drawing) {
        for track in &drawing.tracks {
            self.polyline(&track.points, track.stroke, TRACK_COLOR);
        }
        if let Some(vertex) = drawing.vertex {
            let marker = Style::default().fg(VERTEX_COLOR).add_modifier(Modifier::BOLD);
            self.glyph(vertex, (0, 0), '●', marker);
        }
    }

    /// Sample and draw a scenario. A geometry error skips the track.
    pub fn scenario(&mut self, scenario: &Scenario) {
        match scenario.drawing() {
            Ok(drawing) => {
                log::trace!("sketching {}: {} points", scenario.answer, drawing.point_count());
                self.drawing(&drawing);
            }
            Err(e) => log::warn!("skipping track for {}: {}", scenario.answer, e),
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
