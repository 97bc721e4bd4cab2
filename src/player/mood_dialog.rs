//! Mood dialog state.
//!
//! The dialog opens in one of two modes: browsing moods (play or delete one) or
//! picking a mood to add the current song to. Both modes share a text field for
//! creating a new mood on the spot.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoodDialogMode {
    Browse,
    AddSong,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoodDialogFocus {
    MoodList,
    NameField,
}

#[derive(Debug, Clone)]
pub struct MoodDialog {
    pub mode: MoodDialogMode,
    pub focus: MoodDialogFocus,
    pub selected_index: usize,
    pub new_name: String,
    pub pending_delete: Option<usize>,
    mood_count: usize,
}

impl MoodDialog {
    pub fn new(mode: MoodDialogMode, mood_count: usize) -> Self {
        Self {
            mode,
            // Nothing to pick from yet, so start in the name field
            focus: if mood_count == 0 {
                MoodDialogFocus::NameField
            } else {
                MoodDialogFocus::MoodList
            },
            selected_index: 0,
            new_name: String::new(),
            pending_delete: None,
            mood_count,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            MoodDialogMode::Browse => " Your moods ",
            MoodDialogMode::AddSong => " Save to a mood ",
        }
    }

    /// Keep the selection valid after moods were created or deleted.
    pub fn refresh(&mut self, mood_count: usize) {
        self.mood_count = mood_count;
        if self.selected_index >= mood_count {
            self.selected_index = mood_count.saturating_sub(1);
        }
        self.pending_delete = None;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.mood_count.saturating_sub(1);
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index < self.mood_count.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        (self.selected_index < self.mood_count).then_some(self.selected_index)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            MoodDialogFocus::MoodList => MoodDialogFocus::NameField,
            MoodDialogFocus::NameField => MoodDialogFocus::MoodList,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if self.focus == MoodDialogFocus::NameField {
            self.new_name.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.focus == MoodDialogFocus::NameField {
            self.new_name.pop();
        }
    }

    pub fn request_delete(&mut self) {
        if self.mode == MoodDialogMode::Browse {
            self.pending_delete = self.selected();
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
