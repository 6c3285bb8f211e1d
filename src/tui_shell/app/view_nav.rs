use std::any::Any;

use super::*;

impl App {
    pub(in crate::tui_shell) fn mode(&self) -> UiMode {
        self.frames
            .last()
            .map(|f| f.view.mode())
            .unwrap_or(UiMode::Explorer)
    }

    pub(super) fn view(&self) -> Option<&dyn View> {
        self.frames.last().map(|f| f.view.as_ref())
    }

    pub(super) fn view_mut(&mut self) -> Option<&mut dyn View> {
        self.frames.last_mut().map(|f| f.view.as_mut())
    }

    pub(in crate::tui_shell) fn current_view_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.frames
            .last_mut()
            .and_then(|f| f.view.as_any_mut().downcast_mut::<T>())
    }

    #[cfg(test)]
    pub(in crate::tui_shell) fn current_view<T: Any>(&self) -> Option<&T> {
        self.frames
            .last()
            .and_then(|f| f.view.as_any().downcast_ref::<T>())
    }

    /// The explorer sits at the bottom of the stack for the app's lifetime.
    pub(in crate::tui_shell) fn explorer_view_mut(&mut self) -> Option<&mut ExplorerView> {
        self.frames
            .first_mut()
            .and_then(|f| f.view.as_any_mut().downcast_mut::<ExplorerView>())
    }

    pub(super) fn push_view<V: View>(&mut self, view: V) {
        self.frames.push(ViewFrame {
            view: Box::new(view),
        });
    }

    pub(super) fn pop_mode(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Switches to `mode`, reusing the explorer at the root of the stack.
    pub(super) fn show_mode(&mut self, mode: UiMode) {
        if self.mode() == mode {
            return;
        }
        self.frames.truncate(1);
        match mode {
            UiMode::Explorer => {}
            UiMode::Exams => {
                let view = ExamsView::new(self.exams.clone());
                self.push_view(view);
            }
            UiMode::Performance => {
                let view = self.load_performance();
                self.push_view(view);
            }
        }
        tracing::debug!(mode = mode.label(), "switched view");
    }
}
