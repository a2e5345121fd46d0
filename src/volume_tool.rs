//! Volume analysis panel.

use crate::config::VolumeStyle;
use crate::estimator::{estimate, VolumeResult};
use crate::tool::Tool;
use crate::viewer::Host;
use meshprobe_core::{format_length, format_volume};
use meshprobe_overlay::{ArtifactHandle, Panel, PanelRow, PanelSection};
use tracing::info;

/// Lay out the panel for an estimate, or the placeholder when there is none.
pub fn build_panel(result: Option<&VolumeResult>, style: &VolumeStyle) -> Panel {
    let panel = Panel::new(style.title.as_str());
    let Some(result) = result else {
        return panel.with_note(style.empty_message.as_str());
    };

    let bbox = &result.bounding_box;
    panel
        .with_section(
            PanelSection::new("Bounding Box")
                .with_row(PanelRow::new("Width", format_length(bbox.width)))
                .with_row(PanelRow::new("Height", format_length(bbox.height)))
                .with_row(PanelRow::new("Depth", format_length(bbox.depth)))
                .with_row(PanelRow::highlighted("BB Volume", format_volume(bbox.volume))),
        )
        .with_section(
            PanelSection::new("Mesh Volume")
                .with_row(PanelRow::highlighted(
                    "Volume",
                    format_volume(result.mesh_volume),
                ))
                .with_note(style.watertight_note.as_str()),
        )
}

/// Shows bounding-box and mesh-volume figures for the loaded model.
///
/// The figures are computed once on activation; reload by toggling.
#[derive(Debug, Default)]
pub struct VolumeTool {
    style: VolumeStyle,
    active: bool,
    panel: Option<ArtifactHandle>,
    result: Option<VolumeResult>,
}

impl VolumeTool {
    /// Inactive tool labelled with `style`.
    pub fn new(style: VolumeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Panel handle while shown.
    pub fn panel(&self) -> Option<ArtifactHandle> {
        self.panel
    }

    /// Estimate behind the current panel, if there was a model.
    pub fn result(&self) -> Option<&VolumeResult> {
        self.result.as_ref()
    }

    fn remove_panel(&mut self, host: &mut Host<'_>) {
        if let Some(panel) = self.panel.take() {
            host.overlay.remove(panel);
        }
    }
}

impl Tool for VolumeTool {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    /// Compute a fresh estimate and show it, replacing any panel already up.
    fn activate(&mut self, host: &mut Host<'_>) {
        self.active = true;
        self.remove_panel(host);
        self.result = estimate(host.content);
        let panel = build_panel(self.result.as_ref(), &self.style);
        self.panel = Some(host.overlay.add_panel(panel));
        info!(has_model = self.result.is_some(), "volume tool activated");
    }

    fn deactivate(&mut self, host: &mut Host<'_>) {
        if !self.active {
            return;
        }
        self.active = false;
        self.remove_panel(host);
        self.result = None;
        info!("volume tool deactivated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::BoxMetrics;
    use glam::DVec3;
    use meshprobe_core::BoundingBox;

    #[test]
    fn placeholder_without_model() {
        let panel = build_panel(None, &VolumeStyle::default());
        assert_eq!(panel.title, "Volume Analysis");
        assert_eq!(
            panel.note.as_deref(),
            Some("Load a model to calculate volume.")
        );
        assert!(panel.sections.is_empty());
    }

    #[test]
    fn rows_use_length_and_volume_units() {
        let bounds = BoundingBox::new(DVec3::ZERO, DVec3::new(0.1, 0.2, 0.025));
        let result = VolumeResult {
            bounding_box: BoxMetrics::from(bounds),
            mesh_volume: 0.0004,
        };
        let panel = build_panel(Some(&result), &VolumeStyle::default());

        assert_eq!(panel.row("Width").unwrap().value, "10.000 cm");
        assert_eq!(panel.row("Depth").unwrap().value, "2.500 cm");
        assert_eq!(panel.row("BB Volume").unwrap().value, "0.5000 L");
        let volume = panel.row("Volume").unwrap();
        assert_eq!(volume.value, "0.4000 L");
        assert!(volume.highlight);
        assert_eq!(
            panel.sections[1].note.as_deref(),
            Some("Accurate for closed (watertight) meshes")
        );
    }
}
