//! Built-in notch modules.
//!
//! Identity and dynamic display state only; the OS integrations behind each
//! module (EventKit, media player automation, file tray storage) live outside
//! this crate and drive the setters exposed here.

mod calculator;
mod calendar;
mod file_manager;
mod media;
mod todo_list;

pub use calculator::CalculatorModule;
pub use calendar::CalendarModule;
pub use file_manager::FileManagerModule;
pub use media::MediaControllerModule;
pub use todo_list::TodoListModule;

use crate::model::module::ModuleHandle;
use std::sync::Arc;

/// Typed handles to the built-in modules.
///
/// The integration layer keeps this to update dynamic state; the registry
/// receives the type-erased catalog from [`BuiltinModules::catalog`].
#[derive(Clone)]
pub struct BuiltinModules {
    pub calendar: Arc<CalendarModule>,
    pub todo_list: Arc<TodoListModule>,
    pub media: Arc<MediaControllerModule>,
    pub file_manager: Arc<FileManagerModule>,
    pub calculator: Arc<CalculatorModule>,
}

impl BuiltinModules {
    pub fn new() -> Self {
        Self {
            calendar: Arc::new(CalendarModule::new()),
            todo_list: Arc::new(TodoListModule::new()),
            media: Arc::new(MediaControllerModule::new()),
            file_manager: Arc::new(FileManagerModule::new()),
            calculator: Arc::new(CalculatorModule::new()),
        }
    }

    /// Catalog in registration order.
    pub fn catalog(&self) -> Vec<ModuleHandle> {
        vec![
            self.calendar.clone() as ModuleHandle,
            self.todo_list.clone() as ModuleHandle,
            self.media.clone() as ModuleHandle,
            self.file_manager.clone() as ModuleHandle,
            self.calculator.clone() as ModuleHandle,
        ]
    }
}

impl Default for BuiltinModules {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh built-in catalog with no external handles kept.
pub fn default_catalog() -> Vec<ModuleHandle> {
    BuiltinModules::new().catalog()
}
