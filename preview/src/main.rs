//! Desktop preview app for motion-paper
//!
//! Simulates the accelerometer and compass feeds with sliders, drives the
//! scheduler on synthetic time, and paints the composed background plus the
//! touch circle. Dragging on the canvas stands in for the touch-move stream.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use motion_paper::{
    Engine, FrameScheduler, Instant, PaintSurface, Rgb, SensorHub, SensorSource,
    TOUCH_RADIUS, TOUCH_STROKE_WIDTH, TouchPoint,
};

/// Shared sensor state between the simulated feeds and the render loop
static SENSORS: SensorHub = SensorHub::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_title("Motion Paper Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "motion-paper-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Paint target that remembers the last frame for egui to draw
#[derive(Default)]
struct CanvasSurface {
    color: Rgb,
    touch: Option<TouchPoint>,
}

impl PaintSurface for CanvasSurface {
    fn paint(&mut self, color: Rgb, touch: Option<TouchPoint>) {
        self.color = color;
        self.touch = touch;
    }
}

struct PreviewApp {
    /// The render loop under preview
    scheduler: FrameScheduler<'static, CanvasSurface>,
    /// Producer handle for the simulated sensor feeds
    sensors: SensorSource<'static>,

    /// Simulated acceleration components (m/s²)
    accel: [f32; 3],
    /// Simulated compass heading (degrees)
    heading: f32,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Canvas size from the previous frame, to detect geometry changes
    canvas_size: (u32, u32),
}

impl PreviewApp {
    fn new() -> Self {
        let mut scheduler =
            FrameScheduler::new(Engine::new(SENSORS.reader()), CanvasSurface::default());
        scheduler.set_visible(true, Instant::from_millis(0));

        Self {
            scheduler,
            sensors: SENSORS.source(),
            accel: [0.0, 0.0, 0.0],
            heading: 0.0,
            t_ms: 0,
            last_frame: StdInstant::now(),
            canvas_size: (0, 0),
        }
    }

    /// Advance synthetic time by the wall-clock delta
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = delta.as_millis() as u64;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        // Feed the simulated sensors; the scheduler downsamples to its own
        // cadence regardless of how often this runs.
        self.sensors
            .record_motion(self.accel[0], self.accel[1], self.accel[2]);
        self.sensors.record_heading(self.heading);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Accel x:");
                ui.add(egui::Slider::new(&mut self.accel[0], -10.0..=10.0));
                ui.label("y:");
                ui.add(egui::Slider::new(&mut self.accel[1], -10.0..=10.0));
                ui.label("z:");
                ui.add(egui::Slider::new(&mut self.accel[2], -10.0..=10.0));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Heading:");
                ui.add(egui::Slider::new(&mut self.heading, 0.0..=360.0).suffix("°"));

                ui.add_space(8.0);

                let engine = self.scheduler.engine();
                let color = engine.smoothed_color();
                ui.label(format!(
                    "smoothed: rgb({}, {}, {})  heading {:.1}°",
                    color.r,
                    color.g,
                    color.b,
                    engine.smoothed_heading()
                ));
            });

            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());

            // Geometry changes reach the scheduler like a surface resize
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = (
                response.rect.width() as u32,
                response.rect.height() as u32,
            );
            if size != self.canvas_size {
                self.canvas_size = size;
                self.scheduler.surface_changed(size.0, size.1);
            }

            // Dragging stands in for the touch-move stream; anything else
            // clears the touch point.
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - response.rect.min;
                    self.scheduler.touch_moved(local.x, local.y);
                }
            } else {
                self.scheduler.touch_ended();
            }

            self.scheduler.poll(Instant::from_millis(self.t_ms));

            let canvas = self.scheduler.surface();
            let fill = egui::Color32::from_rgb(canvas.color.r, canvas.color.g, canvas.color.b);
            painter.rect_filled(response.rect, 0.0, fill);

            if let Some(touch) = canvas.touch {
                let center = response.rect.min + egui::vec2(touch.x, touch.y);
                painter.circle_stroke(
                    center,
                    TOUCH_RADIUS,
                    egui::Stroke::new(TOUCH_STROKE_WIDTH, egui::Color32::WHITE),
                );
            }
        });
    }
}
