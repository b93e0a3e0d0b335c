use crate::model::module::NotchModule;
use crate::model::side::Side;
use crate::model::view::{ModuleView, Surface};
use std::sync::atomic::{AtomicBool, Ordering};

/// Now-playing controls for the active media player.
///
/// Contributes a collapsed icon only while something is playing.
#[derive(Debug, Default)]
pub struct MediaControllerModule {
    playing: AtomicBool,
}

impl MediaControllerModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }
}

impl NotchModule for MediaControllerModule {
    fn id(&self) -> &str {
        "media"
    }

    fn name(&self) -> &str {
        "Media"
    }

    fn icon(&self) -> &str {
        "play.rectangle"
    }

    fn mini_icon(&self) -> &str {
        "waveform"
    }

    fn default_side(&self) -> Side {
        Side::Right
    }

    fn priority(&self) -> i32 {
        100
    }

    fn show_in_collapsed(&self) -> bool {
        self.is_playing()
    }

    fn render_expanded(&self) -> ModuleView {
        let view = ModuleView::new(self.id(), Surface::Expanded, self.icon(), self.name());
        if self.is_playing() {
            view.with_badge("playing")
        } else {
            view
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MediaControllerModule;
    use crate::model::module::NotchModule;

    #[test]
    fn collapsed_visibility_follows_playback() {
        let media = MediaControllerModule::new();
        assert!(!media.show_in_collapsed());

        media.set_playing(true);
        assert!(media.show_in_collapsed());
        assert_eq!(media.render_expanded().badge.as_deref(), Some("playing"));

        media.set_playing(false);
        assert!(!media.show_in_collapsed());
    }
}
