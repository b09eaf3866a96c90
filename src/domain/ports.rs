use crate::domain::model::Snapshot;
use crate::utils::error::Result;

/// Where the display text ends up. The engine never touches a concrete UI.
pub trait Render {
    fn set_display_text(&mut self, text: &str) -> Result<()>;

    /// Renderers that want the full session state override this.
    fn render_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.set_display_text(&snapshot.display)
    }
}

impl<R: Render + ?Sized> Render for &mut R {
    fn set_display_text(&mut self, text: &str) -> Result<()> {
        (**self).set_display_text(text)
    }

    fn render_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        (**self).render_snapshot(snapshot)
    }
}
