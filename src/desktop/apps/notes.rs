//! Notes - In-memory note list with search and a plain-text editor

use egui::{Color32, RichText, ScrollArea, TextEdit, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Relative date label, as shown in the list
    pub date: String,
}

impl Note {
    fn new(id: u64, title: &str, content: &str, date: &str) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }

    fn preview(&self) -> &str {
        self.content.lines().nth(1).unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Notes {
    notes: Vec<Note>,
    selected: Option<u64>,
    next_id: u64,
    search: String,
}

impl Default for Notes {
    fn default() -> Self {
        let notes = vec![
            Note::new(
                1,
                "Welcome to Notes",
                "Start writing your thoughts here. Notes syncs across all your devices with iCloud.",
                "Today",
            ),
            Note::new(
                2,
                "Shopping List",
                "- Milk\n- Eggs\n- Bread\n- Butter\n- Coffee",
                "Yesterday",
            ),
            Note::new(
                3,
                "Meeting Notes",
                "Q4 Planning Meeting:\n- Review OKRs\n- Budget allocation\n- Team expansion",
                "Dec 1",
            ),
        ];
        Self {
            selected: notes.first().map(|n| n.id),
            next_id: 4,
            notes,
            search: String::new(),
        }
    }
}

impl Notes {
    pub fn selected(&self) -> Option<&Note> {
        let id = self.selected?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes whose title or body contains the search text, ignoring case
    pub fn filtered(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(move |n| n.matches(&self.search))
    }

    pub fn select(&mut self, id: u64) {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected = Some(id);
        }
    }

    /// New empty note at the top of the list, selected
    pub fn create(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(0, Note::new(id, "New Note", "", "Just now"));
        self.selected = Some(id);
        id
    }

    /// Replace the body of the selected note. Its first line becomes the title.
    pub fn update_selected(&mut self, content: String) {
        let Some(id) = self.selected else {
            return;
        };
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.title = match content.lines().next() {
                Some(first) if !first.is_empty() => first.to_string(),
                _ => "New Note".into(),
            };
            note.content = content;
            note.date = "Just now".into();
        }
    }

    pub fn delete(&mut self, id: u64) {
        self.notes.retain(|n| n.id != id);
        if self.selected == Some(id) {
            self.selected = self.notes.first().map(|n| n.id);
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let mut select = None;
        let mut create = false;
        let mut delete = None;
        let mut edited = None;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(180.0);
                ui.add(TextEdit::singleline(&mut self.search).hint_text("Search"));
                ui.horizontal(|ui| {
                    ui.label(RichText::new("📂 All Notes").strong());
                    ui.label(RichText::new(self.notes.len().to_string()).weak());
                });
                ui.separator();
                ScrollArea::vertical().id_salt("note_list").show(ui, |ui| {
                    for note in self.filtered() {
                        let selected = self.selected == Some(note.id);
                        let text = format!("{}\n{}  {}", note.title, note.date, note.preview());
                        if ui.selectable_label(selected, text).clicked() {
                            select = Some(note.id);
                        }
                    }
                });
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("+").on_hover_text("New Note").clicked() {
                        create = true;
                    }
                    let selected = self.selected();
                    if ui
                        .add_enabled(selected.is_some(), egui::Button::new("🗑"))
                        .on_hover_text("Delete")
                        .clicked()
                    {
                        delete = self.selected;
                    }
                    if let Some(note) = selected {
                        ui.label(RichText::new(&note.date).size(11.0).color(Color32::GRAY));
                    }
                });
                match self.selected() {
                    Some(note) => {
                        let mut buffer = note.content.clone();
                        let response = ui.add_sized(
                            ui.available_size(),
                            TextEdit::multiline(&mut buffer).frame(false),
                        );
                        if response.changed() {
                            edited = Some(buffer);
                        }
                    }
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new("No Note Selected").weak());
                        });
                    }
                }
            });
        });

        if let Some(id) = select {
            self.select(id);
        }
        if let Some(content) = edited {
            self.update_selected(content);
        }
        if create {
            self.create();
        }
        if let Some(id) = delete {
            self.delete(id);
        }
    }
}
