use crate::model::module::NotchModule;
use crate::model::side::Side;
use crate::model::view::{ModuleView, Surface};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Drop tray for files dragged onto the panel.
#[derive(Debug, Default)]
pub struct FileManagerModule {
    tray_files: AtomicUsize,
}

impl FileManagerModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tray_file_count(&self, count: usize) {
        self.tray_files.store(count, Ordering::Relaxed);
    }

    pub fn tray_file_count(&self) -> usize {
        self.tray_files.load(Ordering::Relaxed)
    }
}

impl NotchModule for FileManagerModule {
    fn id(&self) -> &str {
        "filemanager"
    }

    fn name(&self) -> &str {
        "Files"
    }

    fn icon(&self) -> &str {
        "tray.full"
    }

    fn mini_icon(&self) -> &str {
        "doc.circle"
    }

    fn default_side(&self) -> Side {
        Side::Right
    }

    fn priority(&self) -> i32 {
        70
    }

    fn show_in_collapsed(&self) -> bool {
        self.tray_file_count() > 0
    }

    fn render_collapsed(&self) -> ModuleView {
        ModuleView::new(self.id(), Surface::Collapsed, self.mini_icon(), self.name())
            .with_badge(self.tray_file_count().to_string())
    }
}
