//! Prompt loop rendering the note store as plain text.
//!
//! # Responsibility
//! - Read commands and dialog fields line by line from any `BufRead`.
//! - Ask the yes/no delete question on the same input stream.
//!
//! # Invariants
//! - Dialog forms go through the store's draft / edit-session protocol;
//!   nothing is written to the collection until submit.
//! - End of input while a dialog is open discards that dialog.

use crate::command::{parse_command, Command, HELP_TEXT};
use meetnote_core::view::{
    detail_view, record_button_label, sidebar_items, EMPTY_DETAIL_MESSAGE, SIDEBAR_HEADING,
};
use meetnote_core::{DeleteOutcome, DetailTab, Importance, Note, NoteId, NoteStore};
use std::io::{self, BufRead, Write};

const FIELD_TERMINATOR: &str = ".";
const CLEAR_TOKEN: &str = "-";
const DELETE_QUESTION: &str = "Are you sure you want to delete this note? [y/N] ";

/// Terminal view over one store.
pub struct Repl<R, W> {
    store: NoteStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(store: NoteStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", record_button_label(self.store.is_recording()))?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(());
            };
            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::List => self.list(),
            Command::Show(id) => self.show(id),
            Command::Select(id) => {
                if self.store.select_note(id) {
                    self.show(None)
                } else {
                    writeln!(self.output, "no note {id}")
                }
            }
            Command::New => self.new_note(),
            Command::Edit(id) => self.edit_note(id),
            Command::Delete(id) => self.delete_note(id),
            Command::Record => {
                let recording = self.store.toggle_recording();
                writeln!(self.output, "{}", record_button_label(recording))
            }
            Command::Help => writeln!(self.output, "{HELP_TEXT}"),
            Command::Quit => Ok(()),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.output, "{SIDEBAR_HEADING}")?;
        for item in sidebar_items(&self.store) {
            let marker = if item.is_active { '*' } else { ' ' };
            writeln!(
                self.output,
                "{marker} [{}] {} | {} | {} | {}",
                item.id, item.title, item.date, item.duration, item.importance_badge
            )?;
        }
        Ok(())
    }

    fn show(&mut self, id: Option<NoteId>) -> io::Result<()> {
        if let Some(id) = id {
            if !self.store.select_note(id) {
                return writeln!(self.output, "no note {id}");
            }
        }
        let Some(detail) = detail_view(&self.store) else {
            return writeln!(self.output, "{EMPTY_DETAIL_MESSAGE}");
        };

        let note = &detail.note;
        writeln!(self.output, "{} ({})", note.title, detail.importance_badge)?;
        writeln!(self.output, "{} | {}", note.date, note.duration)?;
        for tab in DetailTab::ALL {
            writeln!(self.output, "-- {} --", tab.label())?;
            for line in detail.tab_lines(tab) {
                writeln!(self.output, "  {line}")?;
            }
        }
        Ok(())
    }

    fn new_note(&mut self) -> io::Result<()> {
        self.store.open_draft();
        let Some(fields) = self.read_form("Create New Note", None)? else {
            self.store.discard_draft();
            return Ok(());
        };
        if let Some(draft) = self.store.draft_mut() {
            draft.title = fields.title;
            draft.importance = fields.importance;
            draft.summary = fields.summary;
            draft.action_items = fields.action_items;
            draft.key_decisions = fields.key_decisions;
        }

        match self.store.submit_draft() {
            Ok(Some(id)) => writeln!(self.output, "created note {id}"),
            Ok(None) => Ok(()),
            Err(err) => {
                self.store.discard_draft();
                writeln!(self.output, "not created: {err}")
            }
        }
    }

    fn edit_note(&mut self, id: NoteId) -> io::Result<()> {
        if !self.store.begin_edit(id) {
            return writeln!(self.output, "no note {id}");
        }
        let current = self.store.note(id).cloned();
        let Some(fields) = self.read_form("Edit Note", current.as_ref())? else {
            self.store.discard_edit();
            return Ok(());
        };
        if let Some(session) = self.store.edit_session_mut() {
            session.title = fields.title;
            session.importance = fields.importance;
            session.summary = fields.summary;
            session.action_items = fields.action_items;
            session.key_decisions = fields.key_decisions;
        }

        match self.store.save_edit() {
            Ok(Some(id)) => writeln!(self.output, "saved note {id}"),
            Ok(None) => writeln!(self.output, "no note {id}"),
            Err(err) => {
                self.store.discard_edit();
                writeln!(self.output, "not saved: {err}")
            }
        }
    }

    fn delete_note(&mut self, id: NoteId) -> io::Result<()> {
        let Self {
            store,
            input,
            output,
        } = self;
        let mut prompt_error = None;
        let mut ask = |note: &Note| match ask_yes_no(&mut *input, &mut *output, &note.title) {
            Ok(answer) => answer,
            Err(err) => {
                prompt_error = Some(err);
                false
            }
        };

        let outcome = store.delete_note(id, &mut ask);
        if let Some(err) = prompt_error {
            return Err(err);
        }
        match outcome {
            DeleteOutcome::Deleted => writeln!(output, "deleted note {id}"),
            DeleteOutcome::Declined => writeln!(output, "kept note {id}"),
            DeleteOutcome::NotFound => writeln!(output, "no note {id}"),
        }
    }

    /// Prompts for every dialog field; `None` means input ended mid-form.
    fn read_form(
        &mut self,
        heading: &str,
        current: Option<&Note>,
    ) -> io::Result<Option<FormFields>> {
        writeln!(self.output, "{heading}")?;
        if current.is_some() {
            writeln!(
                self.output,
                "(empty answer keeps the current value, `{CLEAR_TOKEN}` clears it)"
            )?;
        }

        let title_label = if self.store.config().require_title {
            "Meeting Title (required)"
        } else {
            "Meeting Title"
        };
        let Some(title) = self.prompt_line(title_label, current.map(|n| n.title.as_str()))? else {
            return Ok(None);
        };
        let importance_label = format!(
            "Importance ({})",
            Importance::ALL
                .iter()
                .map(|importance| importance.as_str())
                .collect::<Vec<_>>()
                .join("|")
        );
        for importance in Importance::ALL {
            writeln!(
                self.output,
                "  {:<6} {}",
                importance.as_str(),
                importance.select_label()
            )?;
        }
        let importance = loop {
            let Some(raw) = self.prompt_line(
                &importance_label,
                Some(current.map_or(Importance::default(), |n| n.importance).as_str()),
            )?
            else {
                return Ok(None);
            };
            match Importance::parse(&raw) {
                Ok(value) => break value,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };
        let Some(summary) =
            self.prompt_line("Meeting Summary", current.map(|n| n.summary.as_str()))?
        else {
            return Ok(None);
        };
        let Some(action_items) = self.prompt_block(
            "Action Items (one per line)",
            current.map(|n| n.action_items.as_slice()),
        )?
        else {
            return Ok(None);
        };
        let Some(key_decisions) = self.prompt_block(
            "Key Decisions (one per line)",
            current.map(|n| n.key_decisions.as_slice()),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(FormFields {
            title,
            importance,
            summary,
            action_items,
            key_decisions,
        }))
    }

    fn prompt_line(&mut self, label: &str, current: Option<&str>) -> io::Result<Option<String>> {
        match current {
            Some(value) => write!(self.output, "{label} [{value}]: ")?,
            None => write!(self.output, "{label}: ")?,
        }
        self.output.flush()?;
        let Some(line) = read_line(&mut self.input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(current.unwrap_or_default().to_string()));
        }
        if line.trim() == CLEAR_TOKEN {
            return Ok(Some(String::new()));
        }
        Ok(Some(line))
    }

    /// Reads lines until a lone `.`; an immediate `.` keeps `current` and a
    /// lone `-` as the only line clears the list.
    fn prompt_block(
        &mut self,
        label: &str,
        current: Option<&[String]>,
    ) -> io::Result<Option<String>> {
        writeln!(self.output, "{label}, end with `{FIELD_TERMINATOR}`:")?;
        let mut lines = Vec::new();
        loop {
            let Some(line) = read_line(&mut self.input)? else {
                return Ok(None);
            };
            if line.trim() == FIELD_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        match lines.as_slice() {
            [] => Ok(Some(current.map(|items| items.join("\n")).unwrap_or_default())),
            [only] if only.trim() == CLEAR_TOKEN => Ok(Some(String::new())),
            _ => Ok(Some(lines.join("\n"))),
        }
    }
}

struct FormFields {
    title: String,
    importance: Importance,
    summary: String,
    action_items: String,
    key_decisions: String,
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn ask_yes_no(input: &mut impl BufRead, output: &mut impl Write, title: &str) -> io::Result<bool> {
    write!(output, "`{title}`: {DELETE_QUESTION}")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::Repl;
    use meetnote_core::NoteStore;
    use std::io::Cursor;

    fn run_script(store: NoteStore, script: &str) -> (NoteStore, String) {
        let mut output = Vec::new();
        let mut repl = Repl::new(store, Cursor::new(script.as_bytes().to_vec()), &mut output);
        repl.run().expect("in-memory io should not fail");
        let Repl { store, .. } = repl;
        (store, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn new_command_creates_note_from_prompts() {
        let script = "new\nStandup\nhigh\nDaily sync\na\n\nb\n.\n.\nquit\n";
        let (store, output) = run_script(NoteStore::empty(), script);

        assert!(output.contains("created note 1"));
        let note = &store.notes()[0];
        assert_eq!(note.title, "Standup");
        assert_eq!(note.action_items, vec!["a".to_string(), "b".to_string()]);
        assert!(note.key_decisions.is_empty());
        assert!(store.draft().is_none());
    }

    #[test]
    fn invalid_importance_is_asked_again() {
        let script = "new\nRetro\ncritical\nurgent\n\n.\n.\n";
        let (store, output) = run_script(NoteStore::empty(), script);
        assert!(output.contains("unsupported importance"));
        assert_eq!(store.notes()[0].importance.as_str(), "urgent");
    }

    #[test]
    fn end_of_input_mid_form_discards_draft() {
        let (store, _) = run_script(NoteStore::empty(), "new\nHalf typed\n");
        assert!(store.is_empty());
        assert!(store.draft().is_none());
    }

    #[test]
    fn edit_keeps_values_on_empty_answers() {
        let script = "edit 2\nMarketing Sync\n\n\n.\nNew decision\n.\n";
        let (store, output) = run_script(NoteStore::default(), script);
        assert!(output.contains("saved note 2"));

        let note = store.note(2).expect("note 2 still exists");
        assert_eq!(note.title, "Marketing Sync");
        assert_eq!(note.importance.as_str(), "medium");
        assert_eq!(note.action_items.len(), 3);
        assert_eq!(note.key_decisions, vec!["New decision".to_string()]);
        assert_eq!(note.duration, "30 min");
        assert_eq!(store.active_note_id(), Some(2));
    }

    #[test]
    fn edit_clears_fields_with_dash() {
        let script = "edit 2\n-\n\n-\n-\n.\n-\n.\n";
        let (store, output) = run_script(NoteStore::default(), script);
        assert!(output.contains("saved note 2"));

        let note = store.note(2).expect("note 2 still exists");
        assert!(note.title.is_empty());
        assert!(note.summary.is_empty());
        assert!(note.action_items.is_empty());
        assert!(note.key_decisions.is_empty());
        assert_eq!(note.importance.as_str(), "medium");
        assert_eq!(note.date, "Dec 14, 2024");
    }

    #[test]
    fn importance_prompt_lists_select_labels() {
        let (_, output) = run_script(NoteStore::empty(), "new\nRetro\nlow\n\n.\n.\n");
        assert!(output.contains("Importance (low|medium|high|urgent)"));
        assert!(output.contains("urgent Urgent"));
        assert!(output.contains("medium Medium Priority"));
    }

    #[test]
    fn required_title_is_shown_in_prompt() {
        let config = meetnote_core::StoreConfig {
            require_title: true,
            ..meetnote_core::StoreConfig::default()
        };
        let (_, output) = run_script(NoteStore::new(config), "new\n");
        assert!(output.contains("Meeting Title (required)"));
    }

    #[test]
    fn delete_asks_and_respects_answer() {
        let (store, output) = run_script(NoteStore::default(), "delete 1\nn\ndelete 1\ny\n");
        assert!(output.contains("Are you sure you want to delete this note?"));
        assert!(output.contains("kept note 1"));
        assert!(output.contains("deleted note 1"));
        assert!(store.note(1).is_none());
    }

    #[test]
    fn show_selects_and_renders_tabs() {
        let (store, output) = run_script(NoteStore::default(), "show\nshow 1\nrecord\nshow\n");
        assert!(output.contains("Select a meeting or start recording to view notes"));
        assert!(output.contains("-- Key Decisions --"));
        assert!(output.contains("Postponing API migration to Q2"));
        assert!(output.contains("Stop Recording"));
        assert!(output.contains("Recording in progress... Transcript will appear here."));
        assert_eq!(store.active_note_id(), Some(1));
    }

    #[test]
    fn list_marks_active_note() {
        let (_, output) = run_script(NoteStore::default(), "select 2\nlist\n");
        assert!(output.contains("Recent Meetings"));
        assert!(output.contains("* [2] Marketing Strategy"));
        assert!(output.contains("  [1] Product Team Sync"));
    }
}
