//! Lifecycle shared by the analysis tools.

use crate::viewer::Host;

/// An analysis tool toggled from the toolbar.
///
/// `deactivate` and `dispose` must be idempotent and leave no artifact,
/// observer or input-gate change behind.
pub trait Tool {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Whether the tool is currently on.
    fn is_active(&self) -> bool;

    /// Turn the tool on.
    fn activate(&mut self, host: &mut Host<'_>);

    /// Turn the tool off and release everything it put on screen.
    fn deactivate(&mut self, host: &mut Host<'_>);

    /// Flip the tool and return the new state.
    fn toggle(&mut self, host: &mut Host<'_>) -> bool {
        if self.is_active() {
            self.deactivate(host);
        } else {
            self.activate(host);
        }
        self.is_active()
    }

    /// Final teardown, e.g. before the viewer or model is replaced.
    fn dispose(&mut self, host: &mut Host<'_>) {
        self.deactivate(host);
    }
}
