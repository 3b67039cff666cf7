//! Clap Button Widget
//!
//! Draws one frame of the clap control: the (scaled) button box, the two
//! particle bursts, the floating "+N" badge and the community total.
//! All animated values arrive as pre-sampled track values; this widget is
//! pure presentation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::effects::TrackSample;
use crate::state::CounterProps;
use crate::theme;

/// Effect units per terminal row/column pair.
const UNITS_PER_CELL: f32 = 12.0;

/// One frame of the clap control.
pub struct ClapButton {
    pub pressed: bool,
    pub counter: CounterProps,
    pub count_total: u32,
    /// Live trigger scale: pulse sample times the out-of-band override.
    pub scale: f32,
    pub burst_polygon: Option<TrackSample>,
    pub burst_circle: Option<TrackSample>,
    pub counter_fade: Option<TrackSample>,
    pub total_fade: Option<TrackSample>,
    /// Show the badge without animation (reduced-motion rendering).
    pub static_counter: bool,
}

/// Bounds-checked single-string write.
fn put(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    if x < area.x as i32 || y < area.y as i32 {
        return;
    }
    let (x, y) = (x as u16, y as u16);
    if y >= area.y + area.height || x + text.chars().count() as u16 > area.x + area.width {
        return;
    }
    buf.set_string(x, y, text, style);
}

impl ClapButton {
    fn render_button(&self, area: Rect, buf: &mut Buffer, cx: i32, cy: i32) {
        let color = if self.pressed {
            theme::BUTTON_PRESSED
        } else {
            theme::BUTTON_IDLE
        };
        let style = Style::default().fg(color);

        let half_w = ((5.0 * self.scale).round() as i32).max(3);
        let half_h = ((1.5 * self.scale).round() as i32).max(1);

        let horizontal = "─".repeat((half_w as usize) * 2 - 1);
        put(buf, area, cx - half_w, cy - half_h, &format!("┌{horizontal}┐"), style);
        put(buf, area, cx - half_w, cy + half_h, &format!("└{horizontal}┘"), style);
        for row in (cy - half_h + 1)..(cy + half_h) {
            put(buf, area, cx - half_w, row, "│", style);
            put(buf, area, cx + half_w, row, "│", style);
        }
        put(buf, area, cx - 1, cy, "👏", style);
    }

    fn render_burst(
        &self,
        area: Rect,
        buf: &mut Buffer,
        cx: i32,
        cy: i32,
        sample: &TrackSample,
        glyph: &str,
        color: ratatui::style::Color,
    ) {
        let TrackSample::Burst { radius, particles } = sample else {
            return;
        };
        let ring = radius / UNITS_PER_CELL;
        for particle in particles {
            // Fully shrunk particles are gone.
            if particle.radius <= 0.1 {
                continue;
            }
            let rad = particle.angle_deg.to_radians();
            // Terminal cells are roughly twice as tall as wide.
            let x = cx + (ring * 2.0 * rad.cos()).round() as i32;
            let y = cy - (ring * rad.sin()).round() as i32;
            let opacity = (particle.radius / 3.0).min(1.0);
            put(
                buf,
                area,
                x,
                y,
                glyph,
                Style::default().fg(theme::faded(color, opacity)),
            );
        }
    }

    fn render_counter(&self, area: Rect, buf: &mut Buffer, cx: i32, cy: i32, button_top: i32) {
        let text = format!("+{}", self.counter.count);
        let x = cx - text.chars().count() as i32 / 2;

        if let Some(TrackSample::Fade { opacity, y }) = self.counter_fade {
            if opacity > 0.05 {
                let row = button_top - 1 + (y / 10.0).round() as i32;
                put(
                    buf,
                    area,
                    x,
                    row,
                    &text,
                    Style::default().fg(theme::faded(theme::COUNTER_BADGE, opacity)),
                );
            }
        } else if self.static_counter && self.counter.count > 0 {
            put(
                buf,
                area,
                x,
                button_top - 1,
                &text,
                Style::default().fg(theme::COUNTER_BADGE),
            );
        }
    }

    fn render_total(&self, area: Rect, buf: &mut Buffer, cx: i32, button_bottom: i32) {
        let text = format!("{}", self.count_total);
        let x = cx - text.chars().count() as i32 / 2;
        let (opacity, y) = match self.total_fade {
            Some(TrackSample::Fade { opacity, y }) => (opacity, y),
            _ => (1.0, 0.0),
        };
        if opacity <= 0.05 {
            return;
        }
        let row = button_bottom + 1 + (y / 10.0).round() as i32;
        put(
            buf,
            area,
            x,
            row,
            &text,
            Style::default().fg(theme::faded(theme::TOTAL_TEXT, opacity)),
        );
    }
}

impl Widget for &ClapButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 7 {
            return;
        }

        let cx = (area.x + area.width / 2) as i32;
        let cy = (area.y + area.height / 2) as i32;
        let half_h = ((1.5 * self.scale).round() as i32).max(1);

        self.render_button(area, buf, cx, cy);
        if let Some(sample) = &self.burst_polygon {
            self.render_burst(area, buf, cx, cy, sample, "✦", theme::BURST_POLYGON);
        }
        if let Some(sample) = &self.burst_circle {
            self.render_burst(area, buf, cx, cy, sample, "•", theme::BURST_CIRCLE);
        }
        self.render_counter(area, buf, cx, cy, cy - half_h);
        self.render_total(area, buf, cx, cy + half_h);

        let hint = "space: clap  q: quit";
        put(
            buf,
            area,
            (area.x + area.width / 2) as i32 - hint.len() as i32 / 2,
            (area.y + area.height) as i32 - 1,
            hint,
            Style::default().fg(theme::DIM_GRAY),
        );
    }
}
