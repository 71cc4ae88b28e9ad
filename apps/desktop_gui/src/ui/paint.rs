//! The draw step. Geometry comes from the widget registry; this module only turns it into
//! egui shapes, offset by the canvas origin.

use client_core::{
    floor_bands, Cabin, FloorBand, Geometry, LayoutConfig, Widget, WidgetRegistry, WidgetShape,
};
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Stroke};
use shared::protocol::ElevatorSnapshot;

use crate::ui::theme;

const COLUMN_WIDTH: f32 = 80.0;
const LABEL_SIZE: f32 = 20.0;
const LABEL_Y: f32 = 30.0;
const OVERLAY_POS: (f32, f32) = (430.0, 10.0);
const OVERLAY_SIZE: f32 = 10.0;
const BAND_WIDTH: f32 = 70.0;
const CABIN_MARKER_OVERHANG: f32 = 10.0;

/// (centre x, label x, label)
const COLUMNS: [(f32, f32, &str); 3] = [
    (40.0, 10.0, "CABIN"),
    (270.0, 250.0, "UP"),
    (370.0, 340.0, "DOWN"),
];

pub struct Canvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> Canvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn at(&self, x: f32, y: f32) -> Pos2 {
        self.origin + egui::vec2(x, y)
    }

    fn centered_rect(&self, x: f32, y: f32, width: f32, height: f32) -> egui::Rect {
        egui::Rect::from_center_size(self.at(x, y), egui::vec2(width, height))
    }

    fn text(&self, x: f32, y: f32, anchor: Align2, text: &str, font: FontId, color: Color32) {
        self.painter.text(self.at(x, y), anchor, text, font, color);
    }
}

fn paint_background(canvas: &Canvas<'_>, layout: &LayoutConfig) {
    canvas.painter.rect_filled(
        canvas.centered_rect(
            layout.width / 2.0,
            layout.height / 2.0,
            layout.width,
            layout.height,
        ),
        0.0,
        theme::BACKGROUND,
    );
}

fn paint_columns(canvas: &Canvas<'_>, layout: &LayoutConfig) {
    for (center_x, label_x, label) in COLUMNS {
        canvas.painter.rect_filled(
            canvas.centered_rect(center_x, layout.height / 2.0, COLUMN_WIDTH, layout.height),
            0.0,
            theme::COLUMN_PANEL,
        );
        canvas.text(
            label_x,
            LABEL_Y,
            Align2::LEFT_BOTTOM,
            label,
            FontId::proportional(LABEL_SIZE),
            theme::COLUMN_LABEL,
        );
    }
}

fn paint_bands(canvas: &Canvas<'_>, layout: &LayoutConfig, bands: &[FloorBand]) {
    for band in bands {
        let fill = if band.current {
            theme::BAND_CURRENT
        } else {
            theme::BAND_OTHER
        };
        let rect = egui::Rect::from_min_max(
            canvas.at(layout.shaft_x - BAND_WIDTH / 2.0, band.top),
            canvas.at(layout.shaft_x + BAND_WIDTH / 2.0, band.bottom),
        );
        canvas.painter.rect_filled(rect, 0.0, fill);
    }
}

fn paint_widget(canvas: &Canvas<'_>, widget: &Widget) {
    let Geometry {
        x,
        y,
        width,
        height,
    } = widget.geometry;
    let button_fill = if widget.visual_state {
        theme::BUTTON_REGISTERED
    } else {
        theme::BUTTON_IDLE
    };

    match widget.kind.shape() {
        WidgetShape::Square => {
            canvas
                .painter
                .rect_filled(canvas.centered_rect(x, y, height, width), 0.0, button_fill);
        }
        WidgetShape::UpTriangle => {
            let points = vec![
                canvas.at(x - width / 2.0, y + height / 2.0),
                canvas.at(x + width / 2.0, y + height / 2.0),
                canvas.at(x, y - height / 2.0),
            ];
            canvas
                .painter
                .add(egui::Shape::convex_polygon(points, button_fill, Stroke::NONE));
        }
        WidgetShape::DownTriangle => {
            let points = vec![
                canvas.at(x - width / 2.0, y - height / 2.0),
                canvas.at(x + width / 2.0, y - height / 2.0),
                canvas.at(x, y + height / 2.0),
            ];
            canvas
                .painter
                .add(egui::Shape::convex_polygon(points, button_fill, Stroke::NONE));
        }
        WidgetShape::Lamp => {
            let fill = if widget.visual_state {
                theme::LAMP_ON
            } else {
                theme::LAMP_OFF
            };
            canvas
                .painter
                .circle_filled(canvas.at(x, y), width.min(height) / 2.0, fill);
        }
        WidgetShape::Label => {
            let color = if widget.visual_state {
                theme::INDICATOR_ACTIVE
            } else {
                theme::INDICATOR_IDLE
            };
            canvas.text(
                x,
                y,
                Align2::LEFT_BOTTOM,
                &widget.floor.to_string(),
                FontId::proportional(height),
                color,
            );
        }
    }
}

fn paint_cabin(canvas: &Canvas<'_>, cabin: &Cabin) {
    let Geometry {
        x,
        y,
        width,
        height,
    } = cabin.geometry;
    let fill = if cabin.door_open {
        theme::CABIN_DOOR_OPEN
    } else {
        theme::CABIN_DOOR_CLOSED
    };
    canvas.painter.line_segment(
        [
            canvas.at(x - width / 2.0 - CABIN_MARKER_OVERHANG, y),
            canvas.at(x + width / 2.0 + CABIN_MARKER_OVERHANG, y),
        ],
        Stroke::new(1.0, Color32::BLACK),
    );
    canvas
        .painter
        .rect_filled(canvas.centered_rect(x, y, width, height), 0.0, fill);
}

/// Draws one frame. Without a snapshot only the static chrome and `status` are shown.
pub fn paint_frame(
    canvas: &Canvas<'_>,
    layout: &LayoutConfig,
    registry: &WidgetRegistry,
    snapshot: Option<&ElevatorSnapshot>,
    overlay: Option<&str>,
    status: Option<&str>,
) {
    paint_background(canvas, layout);
    if let Some(snapshot) = snapshot {
        paint_bands(canvas, layout, &floor_bands(registry.mapper(), snapshot));
    }
    paint_columns(canvas, layout);

    if let Some(overlay) = overlay {
        canvas.text(
            OVERLAY_POS.0,
            OVERLAY_POS.1,
            Align2::LEFT_TOP,
            overlay,
            FontId::monospace(OVERLAY_SIZE),
            theme::OVERLAY_TEXT,
        );
    }

    if snapshot.is_some() {
        for widget in registry.widgets() {
            paint_widget(canvas, widget);
        }
        paint_cabin(canvas, registry.cabin());
    }

    if let Some(status) = status {
        canvas.text(
            layout.width - 10.0,
            layout.height - 10.0,
            Align2::RIGHT_BOTTOM,
            status,
            FontId::proportional(12.0),
            theme::STATUS_TEXT,
        );
    }
}
