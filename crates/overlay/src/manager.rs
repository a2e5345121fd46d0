//! Overlay container - Holds every live artifact behind a handle

use crate::components::{DepthMode, Marker, Panel, ScreenLabel, Segment3D};
use std::collections::HashMap;
use tracing::trace;

/// Handle to an artifact for lookup/removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactHandle(u64);

/// Any artifact the overlay can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// Sphere glyph
    Marker(Marker),
    /// Line between two points
    Segment(Segment3D),
    /// Screen-space text
    Label(ScreenLabel),
    /// Information panel
    Panel(Panel),
}

impl Artifact {
    /// Depth policy; screen-space artifacts always draw on top.
    pub fn depth_mode(&self) -> DepthMode {
        match self {
            Artifact::Marker(marker) => marker.depth_mode,
            Artifact::Segment(segment) => segment.depth_mode,
            Artifact::Label(_) | Artifact::Panel(_) => DepthMode::AlwaysOnTop,
        }
    }

    fn render_order(&self) -> i32 {
        match self {
            Artifact::Marker(marker) => marker.render_order,
            Artifact::Segment(segment) => segment.render_order,
            Artifact::Label(_) | Artifact::Panel(_) => i32::MAX,
        }
    }
}

/// Container of every artifact currently on screen
#[derive(Debug, Default)]
pub struct Overlay {
    artifacts: HashMap<ArtifactHandle, Artifact>,
    next_handle: u64,
}

impl Overlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any artifact
    pub fn add(&mut self, artifact: Artifact) -> ArtifactHandle {
        let handle = ArtifactHandle(self.next_handle);
        self.next_handle += 1;
        trace!(handle = handle.0, "overlay artifact added");
        self.artifacts.insert(handle, artifact);
        handle
    }

    /// Add a marker
    pub fn add_marker(&mut self, marker: Marker) -> ArtifactHandle {
        self.add(Artifact::Marker(marker))
    }

    /// Add a line segment
    pub fn add_segment(&mut self, segment: Segment3D) -> ArtifactHandle {
        self.add(Artifact::Segment(segment))
    }

    /// Add a screen label
    pub fn add_label(&mut self, label: ScreenLabel) -> ArtifactHandle {
        self.add(Artifact::Label(label))
    }

    /// Add a panel
    pub fn add_panel(&mut self, panel: Panel) -> ArtifactHandle {
        self.add(Artifact::Panel(panel))
    }

    /// Remove an artifact, returning it if it was present
    pub fn remove(&mut self, handle: ArtifactHandle) -> Option<Artifact> {
        let removed = self.artifacts.remove(&handle);
        if removed.is_some() {
            trace!(handle = handle.0, "overlay artifact removed");
        }
        removed
    }

    /// Check whether a handle is still live
    pub fn contains(&self, handle: ArtifactHandle) -> bool {
        self.artifacts.contains_key(&handle)
    }

    /// Look up any artifact
    pub fn get(&self, handle: ArtifactHandle) -> Option<&Artifact> {
        self.artifacts.get(&handle)
    }

    /// Look up a marker
    pub fn marker(&self, handle: ArtifactHandle) -> Option<&Marker> {
        match self.artifacts.get(&handle) {
            Some(Artifact::Marker(marker)) => Some(marker),
            _ => None,
        }
    }

    /// Look up a segment
    pub fn segment(&self, handle: ArtifactHandle) -> Option<&Segment3D> {
        match self.artifacts.get(&handle) {
            Some(Artifact::Segment(segment)) => Some(segment),
            _ => None,
        }
    }

    /// Look up a label
    pub fn label(&self, handle: ArtifactHandle) -> Option<&ScreenLabel> {
        match self.artifacts.get(&handle) {
            Some(Artifact::Label(label)) => Some(label),
            _ => None,
        }
    }

    /// Look up a label for repositioning
    pub fn label_mut(&mut self, handle: ArtifactHandle) -> Option<&mut ScreenLabel> {
        match self.artifacts.get_mut(&handle) {
            Some(Artifact::Label(label)) => Some(label),
            _ => None,
        }
    }

    /// Look up a panel
    pub fn panel(&self, handle: ArtifactHandle) -> Option<&Panel> {
        match self.artifacts.get(&handle) {
            Some(Artifact::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    /// All markers, unordered
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.artifacts.values().filter_map(|artifact| match artifact {
            Artifact::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    /// All segments, unordered
    pub fn segments(&self) -> impl Iterator<Item = &Segment3D> {
        self.artifacts.values().filter_map(|artifact| match artifact {
            Artifact::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    /// All labels, unordered
    pub fn labels(&self) -> impl Iterator<Item = &ScreenLabel> {
        self.artifacts.values().filter_map(|artifact| match artifact {
            Artifact::Label(label) => Some(label),
            _ => None,
        })
    }

    /// All panels, unordered
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.artifacts.values().filter_map(|artifact| match artifact {
            Artifact::Panel(panel) => Some(panel),
            _ => None,
        })
    }

    /// Handles in draw order: depth-tested first, then always-on-top, each
    /// by ascending render order, ties by insertion.
    pub fn draw_order(&self) -> Vec<ArtifactHandle> {
        let mut handles: Vec<_> = self.artifacts.keys().copied().collect();
        handles.sort_by_key(|handle| {
            let artifact = &self.artifacts[handle];
            (
                artifact.depth_mode() == DepthMode::AlwaysOnTop,
                artifact.render_order(),
                *handle,
            )
        });
        handles
    }

    /// Number of live artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether no artifact is live
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
