//! Edit records produced by the dock management dialog.
//!
//! Each row pairs the persisted binding it was loaded from (if any) with
//! the user's current edit. Names are validated as they are typed, so the
//! reconciler never sees two rows with the same identity.

use windock_common::DockId;
use windock_config::DockBinding;
use windock_platform::extract_title_from_label;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no row {0} in the edit session")]
    NoSuchRow(usize),

    #[error("dock name must not be empty")]
    EmptyName,

    #[error("dock name {0:?} is already in use")]
    DuplicateName(String),
}

/// How an edit record relates to what is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    New,
    Modified,
    Unchanged,
}

/// One row of the management dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEdit {
    /// The persisted binding this row was loaded from.
    pub old: Option<DockBinding>,
    /// The row's current values.
    pub new: DockBinding,
}

impl BindingEdit {
    pub fn kind(&self) -> EditKind {
        match &self.old {
            None => EditKind::New,
            Some(old) if old == &self.new => EditKind::Unchanged,
            Some(_) => EditKind::Modified,
        }
    }

    pub fn old_id(&self) -> Option<&DockId> {
        self.old.as_ref().map(|b| &b.id)
    }

    /// A row is persisted only once it has a name and a real window.
    pub fn is_eligible(&self) -> bool {
        !self.new.name.trim().is_empty() && !self.new.window_title.is_empty()
    }
}

/// The rows of an open management dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    rows: Vec<BindingEdit>,
}

impl EditSession {
    /// One row per persisted binding, old and new identical.
    pub fn load(bindings: &[DockBinding]) -> Self {
        let rows = bindings
            .iter()
            .map(|b| BindingEdit {
                old: Some(b.clone()),
                new: b.clone(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[BindingEdit] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&BindingEdit> {
        self.rows.get(row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append an empty row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(BindingEdit {
            old: None,
            new: DockBinding::default(),
        });
        self.rows.len() - 1
    }

    /// Accept a new display name for `row`.
    ///
    /// The trimmed name must be non-empty and must not collide with another
    /// row's name or derived identity. A rejected edit leaves the row at its
    /// last accepted name.
    pub fn rename(&mut self, row: usize, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if row >= self.rows.len() {
            return Err(SessionError::NoSuchRow(row));
        }
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if self.rows[row].new.name == name {
            return Ok(());
        }

        let id = DockId::from_display_name(name);
        let taken = self
            .rows
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != row)
            .any(|(_, other)| other.new.name.trim() == name || other.new.id == id);
        if taken {
            return Err(SessionError::DuplicateName(name.to_string()));
        }

        let edit = &mut self.rows[row].new;
        edit.name = name.to_string();
        edit.id = id;
        Ok(())
    }

    /// Set the row's target from a picker label, or clear it when the
    /// placeholder entry (`None`) is chosen.
    pub fn choose_window(&mut self, row: usize, label: Option<&str>) -> Result<(), SessionError> {
        let edit = &mut self
            .rows
            .get_mut(row)
            .ok_or(SessionError::NoSuchRow(row))?
            .new;
        match label {
            Some(label) => {
                edit.window_title = extract_title_from_label(label).to_string();
                edit.window_label = label.to_string();
            }
            None => {
                edit.window_title.clear();
                edit.window_label.clear();
            }
        }
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) -> Result<BindingEdit, SessionError> {
        if row >= self.rows.len() {
            return Err(SessionError::NoSuchRow(row));
        }
        Ok(self.rows.remove(row))
    }

    /// Rows that qualify for persistence, in dialog order.
    pub fn eligible(&self) -> impl Iterator<Item = &BindingEdit> {
        self.rows.iter().filter(|r| r.is_eligible())
    }

    /// The binding set to write back to the store.
    pub fn persistable(&self) -> Vec<DockBinding> {
        self.eligible().map(|r| r.new.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat() -> DockBinding {
        DockBinding::new("Chat", "Chat - Browser", "[browser.exe]: Chat - Browser")
    }

    fn notes() -> DockBinding {
        DockBinding::new("Notes", "notes.txt - Editor", "[editor.exe]: notes.txt - Editor")
    }

    #[test]
    fn loaded_rows_are_unchanged() {
        let session = EditSession::load(&[chat(), notes()]);
        assert_eq!(session.len(), 2);
        assert!(session
            .rows()
            .iter()
            .all(|r| r.kind() == EditKind::Unchanged));
    }

    #[test]
    fn added_row_is_new_and_ineligible() {
        let mut session = EditSession::default();
        let row = session.add_row();
        assert_eq!(session.rows()[row].kind(), EditKind::New);
        assert!(!session.rows()[row].is_eligible());
        assert!(session.persistable().is_empty());
    }

    #[test]
    fn rename_derives_new_identity() {
        let mut session = EditSession::load(&[chat()]);
        session.rename(0, "  Twitch Chat ").unwrap();

        let row = &session.rows()[0];
        assert_eq!(row.new.name, "Twitch Chat");
        assert_eq!(row.new.id.as_str(), "window_dock_Twitch_Chat");
        assert_eq!(row.old_id().unwrap().as_str(), "window_dock_Chat");
        assert_eq!(row.kind(), EditKind::Modified);
    }

    #[test]
    fn rename_to_same_name_keeps_row_unchanged() {
        let mut session = EditSession::load(&[chat()]);
        session.rename(0, "Chat ").unwrap();
        assert_eq!(session.rows()[0].kind(), EditKind::Unchanged);
    }

    #[test]
    fn empty_name_is_rejected_and_reverted() {
        let mut session = EditSession::load(&[chat()]);
        assert_eq!(session.rename(0, "   "), Err(SessionError::EmptyName));
        assert_eq!(session.rows()[0].new.name, "Chat");
    }

    #[test]
    fn duplicate_name_is_rejected_and_reverted() {
        let mut session = EditSession::load(&[chat(), notes()]);
        assert_eq!(
            session.rename(1, " Chat"),
            Err(SessionError::DuplicateName("Chat".into()))
        );
        assert_eq!(session.rows()[1].new.name, "Notes");
        assert_eq!(session.rows()[1].kind(), EditKind::Unchanged);
    }

    #[test]
    fn names_colliding_after_sanitizing_are_rejected() {
        let mut session = EditSession::load(&[DockBinding::new("My Chat", "t", "l")]);
        let row = session.add_row();
        assert!(matches!(
            session.rename(row, "My/Chat"),
            Err(SessionError::DuplicateName(_))
        ));
    }

    #[test]
    fn choosing_window_sets_title_from_label() {
        let mut session = EditSession::default();
        let row = session.add_row();
        session.rename(row, "Editor").unwrap();
        session
            .choose_window(row, Some("[editor.exe]: notes.txt - Editor"))
            .unwrap();

        let edit = &session.rows()[row].new;
        assert_eq!(edit.window_title, "notes.txt - Editor");
        assert_eq!(edit.window_label, "[editor.exe]: notes.txt - Editor");
        assert!(session.rows()[row].is_eligible());
        assert_eq!(session.persistable().len(), 1);
    }

    #[test]
    fn choosing_placeholder_clears_target() {
        let mut session = EditSession::load(&[chat()]);
        session.choose_window(0, None).unwrap();
        assert!(session.rows()[0].new.window_title.is_empty());
        assert!(!session.rows()[0].is_eligible());
    }

    #[test]
    fn out_of_range_rows_are_reported() {
        let mut session = EditSession::default();
        assert_eq!(session.rename(3, "X"), Err(SessionError::NoSuchRow(3)));
        assert_eq!(session.choose_window(0, None), Err(SessionError::NoSuchRow(0)));
        assert_eq!(session.remove_row(1), Err(SessionError::NoSuchRow(1)));
    }

    #[test]
    fn remove_row_drops_it_from_persistence() {
        let mut session = EditSession::load(&[chat(), notes()]);
        let removed = session.remove_row(0).unwrap();
        assert_eq!(removed.new.name, "Chat");
        assert_eq!(session.persistable(), vec![notes()]);
    }
}
