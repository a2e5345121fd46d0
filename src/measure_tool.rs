//! Point-to-point distance measurement.

use crate::config::MeasureStyle;
use crate::picker::{pick, PointerEvent};
use crate::session::{Measurement, MeasurementSession, Transition};
use crate::tool::Tool;
use crate::viewer::{CursorStyle, Host};
use glam::Vec3;
use meshprobe_overlay::{
    ArtifactHandle, DepthMode, FrameContext, FrameObserver, Marker, ObserverId, ScreenLabel,
    Segment3D,
};
use tracing::{debug, info};

/// Keeps the distance label over the segment midpoint as the camera moves.
struct LabelTracker {
    label: ArtifactHandle,
}

impl FrameObserver for LabelTracker {
    fn on_frame(&mut self, ctx: &mut FrameContext<'_>) {
        if let Some(label) = ctx.overlay.label_mut(self.label) {
            label.place(ctx.camera, &ctx.viewport);
        }
    }
}

/// Click two surface points to measure the distance between them.
///
/// While active, camera rotation is disabled so clicks are not mistaken for
/// drags; pan and zoom stay available.
#[derive(Debug, Default)]
pub struct MeasureTool {
    style: MeasureStyle,
    active: bool,
    session: MeasurementSession,
    markers: Vec<ArtifactHandle>,
    line: Option<ArtifactHandle>,
    label: Option<ArtifactHandle>,
    label_observer: Option<ObserverId>,
    saved_rotate: Option<bool>,
    saved_cursor: Option<CursorStyle>,
}

impl MeasureTool {
    /// Inactive tool drawing with `style`.
    pub fn new(style: MeasureStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Styling in use.
    pub fn style(&self) -> &MeasureStyle {
        &self.style
    }

    /// The completed measurement, if two points are picked.
    pub fn measurement(&self) -> Option<&Measurement> {
        self.session.measurement()
    }

    /// Picked points in order.
    pub fn points(&self) -> Vec<Vec3> {
        self.session.points()
    }

    /// Marker handles currently owned.
    pub fn markers(&self) -> &[ArtifactHandle] {
        &self.markers
    }

    /// Line handle, once two points are picked.
    pub fn line(&self) -> Option<ArtifactHandle> {
        self.line
    }

    /// Label handle, once two points are picked.
    pub fn label(&self) -> Option<ArtifactHandle> {
        self.label
    }

    /// Handle a click on the surface. Returns the picked point, if any.
    ///
    /// Ignored while inactive, for non-primary buttons and when the ray
    /// misses the model.
    pub fn handle_pointer(&mut self, event: &PointerEvent, host: &mut Host<'_>) -> Option<Vec3> {
        if !self.active {
            return None;
        }
        let point = pick(event, &host.surface.viewport, host.camera, host.content)?;

        match self.session.record(point) {
            Transition::Started => self.add_marker(point, host),
            Transition::Completed(measurement) => {
                self.add_marker(point, host);
                self.show_measurement(&measurement, host);
                debug!(
                    distance = measurement.distance,
                    label = %measurement.label(),
                    "measurement complete"
                );
            }
            Transition::Restarted => {
                self.clear_visuals(host);
                self.add_marker(point, host);
            }
        }
        Some(point)
    }

    /// Remove every artifact and forget the picked points. The tool stays active.
    pub fn reset(&mut self, host: &mut Host<'_>) {
        self.clear_visuals(host);
        self.session.reset();
    }

    fn marker_radius(&self, host: &Host<'_>) -> f32 {
        let diagonal = host
            .content
            .and_then(|content| content.world_bounds())
            .map_or(1.0, |bounds| bounds.diagonal() as f32);
        diagonal * self.style.marker_radius_fraction
    }

    fn add_marker(&mut self, point: Vec3, host: &mut Host<'_>) {
        let marker = Marker::new(point, self.marker_radius(host))
            .with_color(self.style.marker_color)
            .with_segments(self.style.marker_segments)
            .with_depth_mode(DepthMode::AlwaysOnTop)
            .with_render_order(self.style.render_order);
        self.markers.push(host.overlay.add_marker(marker));
    }

    fn show_measurement(&mut self, measurement: &Measurement, host: &mut Host<'_>) {
        let line = Segment3D::new(measurement.start, measurement.end)
            .with_color(self.style.line_color)
            .with_depth_mode(DepthMode::AlwaysOnTop)
            .with_render_order(self.style.render_order);
        self.line = Some(host.overlay.add_segment(line));

        let mut label = ScreenLabel::new(measurement.midpoint(), measurement.label());
        label.place(host.camera, &host.surface.viewport);
        let handle = host.overlay.add_label(label);
        self.label = Some(handle);
        self.label_observer = Some(
            host.render_loop
                .register(Box::new(LabelTracker { label: handle })),
        );
    }

    fn clear_visuals(&mut self, host: &mut Host<'_>) {
        for marker in self.markers.drain(..) {
            host.overlay.remove(marker);
        }
        if let Some(line) = self.line.take() {
            host.overlay.remove(line);
        }
        if let Some(label) = self.label.take() {
            host.overlay.remove(label);
        }
        if let Some(observer) = self.label_observer.take() {
            host.render_loop.unregister(observer);
        }
    }
}

impl Tool for MeasureTool {
    fn name(&self) -> &'static str {
        "measure"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, host: &mut Host<'_>) {
        if self.active {
            return;
        }
        self.active = true;
        self.saved_rotate = Some(host.controls.enable_rotate);
        self.saved_cursor = Some(host.surface.cursor);
        host.controls.enable_rotate = false;
        host.surface.cursor = CursorStyle::Crosshair;
        info!("measure tool activated");
    }

    fn deactivate(&mut self, host: &mut Host<'_>) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(rotate) = self.saved_rotate.take() {
            host.controls.enable_rotate = rotate;
        }
        if let Some(cursor) = self.saved_cursor.take() {
            host.surface.cursor = cursor;
        }
        self.reset(host);
        info!("measure tool deactivated");
    }
}
