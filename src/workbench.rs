//! Toolbar shell: one viewer, one measure tool, one volume tool.

use crate::config::ProbeConfig;
use crate::measure_tool::MeasureTool;
use crate::picker::PointerEvent;
use crate::tool::Tool;
use crate::viewer::Viewer;
use crate::volume_tool::VolumeTool;
use glam::Vec3;
use meshprobe_scene::SceneNode;
use tracing::info;

/// Owns the viewer and both analysis tools and routes input between them.
#[derive(Debug)]
pub struct Workbench {
    /// The viewer the tools operate on.
    pub viewer: Viewer,
    measure: MeasureTool,
    volume: VolumeTool,
}

impl Workbench {
    /// Workbench over `viewer`, styled by `config`.
    pub fn new(viewer: Viewer, config: ProbeConfig) -> Self {
        Self {
            viewer,
            measure: MeasureTool::new(config.measure),
            volume: VolumeTool::new(config.volume),
        }
    }

    /// Measure tool state.
    pub fn measure(&self) -> &MeasureTool {
        &self.measure
    }

    /// Volume tool state.
    pub fn volume(&self) -> &VolumeTool {
        &self.volume
    }

    /// Toolbar measure button. Returns whether it is now pressed.
    pub fn toggle_measure(&mut self) -> bool {
        self.measure.toggle(&mut self.viewer.host())
    }

    /// Toolbar volume button. Returns whether it is now pressed.
    pub fn toggle_volume(&mut self) -> bool {
        self.volume.toggle(&mut self.viewer.host())
    }

    /// Route a surface click to the measure tool.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Vec3> {
        self.measure.handle_pointer(event, &mut self.viewer.host())
    }

    /// Draw one frame.
    pub fn render_frame(&mut self) -> u64 {
        self.viewer.render_frame()
    }

    /// Load a new model. Both tools are disposed first, so toolbar buttons
    /// come back up.
    pub fn content_replaced(&mut self, content: SceneNode) {
        self.dispose_tools();
        self.viewer.set_content(content);
    }

    /// Tear down every tool artifact and observer.
    pub fn dispose(&mut self) {
        self.dispose_tools();
        info!("workbench disposed");
    }

    fn dispose_tools(&mut self) {
        let mut host = self.viewer.host();
        self.measure.dispose(&mut host);
        self.volume.dispose(&mut host);
    }
}
