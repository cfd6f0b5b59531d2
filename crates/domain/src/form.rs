use crate::{ExerciseRow, ProgramSelection, RowID, UnsavedChanges};

pub const REMOVE_ROW_QUESTION: &str = "Are you sure you want to delete this exercise?";

/// State of the exercise log form.
///
/// Rows are kept in display order. A row's index is always derived from its current position,
/// rows are addressed by their stable ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseForm {
    visible: bool,
    rows: Vec<ExerciseRow>,
    pending_removal: Option<RowID>,
    unsaved_changes: UnsavedChanges,
    pub program: ProgramSelection,
}

impl ExerciseForm {
    #[must_use]
    pub fn new(program: ProgramSelection) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    #[must_use]
    pub fn rows(&self) -> &[ExerciseRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, id: RowID) -> Option<&ExerciseRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn row_mut(&mut self, id: RowID) -> Option<&mut ExerciseRow> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn row_index(&self, id: RowID) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn add_row(&mut self) -> RowID {
        let mut id = RowID::new();
        while id.is_nil() || self.row(id).is_some() {
            id = RowID::new();
        }
        self.push_row(ExerciseRow::new(id));
        id
    }

    fn push_row(&mut self, row: ExerciseRow) {
        self.rows.push(row);
    }

    /// Regenerates the reps inputs of a row. Returns `false` if the row does not exist.
    pub fn set_sets(&mut self, id: RowID, input: &str) -> bool {
        self.update_row(id, |row| row.set_sets(input))
    }

    pub fn set_exercise_name(&mut self, id: RowID, value: &str) -> bool {
        self.update_row(id, |row| row.exercise_name = value.to_string())
    }

    pub fn set_load(&mut self, id: RowID, value: &str) -> bool {
        self.update_row(id, |row| row.load = value.to_string())
    }

    pub fn set_rir(&mut self, id: RowID, value: &str) -> bool {
        self.update_row(id, |row| row.rir = value.to_string())
    }

    pub fn set_reps(&mut self, id: RowID, set_index: usize, value: &str) -> bool {
        self.row_mut(id)
            .is_some_and(|row| row.set_reps(set_index, value))
    }

    fn update_row(&mut self, id: RowID, update: impl FnOnce(&mut ExerciseRow)) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                update(row);
                true
            }
            None => false,
        }
    }

    /// Asks for the removal of a row, which only takes effect after confirmation.
    ///
    /// A previous unconfirmed request is replaced.
    pub fn request_removal(&mut self, id: RowID) -> bool {
        if self.row(id).is_none() {
            return false;
        }
        self.pending_removal = Some(id);
        true
    }

    #[must_use]
    pub fn pending_removal(&self) -> Option<RowID> {
        self.pending_removal
    }

    /// Removes the row of the pending removal request and returns it.
    pub fn confirm_removal(&mut self) -> Option<ExerciseRow> {
        let id = self.pending_removal.take()?;
        let index = self.row_index(id)?;
        Some(self.rows.remove(index))
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    pub fn mark_changed(&mut self) {
        self.unsaved_changes.mark();
    }

    #[must_use]
    pub fn unsaved_changes(&self) -> UnsavedChanges {
        self.unsaved_changes
    }

    #[must_use]
    pub fn missing_required(&self) -> usize {
        self.rows.iter().map(ExerciseRow::missing_required).sum()
    }

    /// Fields as submitted by the browser, with row indices computed from the current order.
    #[must_use]
    pub fn form_data(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(index, row)| row.form_data(index))
            .chain(self.program.form_data())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Program, TrainingWeeks};

    use super::*;

    fn row(id: u128, name: &str, sets: &str) -> ExerciseRow {
        let mut row = ExerciseRow::new(id.into());
        row.exercise_name = name.to_string();
        row.set_sets(sets);
        row
    }

    fn form_with_rows(rows: Vec<ExerciseRow>) -> ExerciseForm {
        let mut form = ExerciseForm::default();
        for row in rows {
            form.push_row(row);
        }
        form
    }

    #[test]
    fn test_form_initially_hidden() {
        let form = ExerciseForm::default();

        assert!(!form.is_visible());
        assert!(form.rows().is_empty());
        assert_eq!(form.pending_removal(), None);
        assert!(!form.unsaved_changes().has_unsaved_changes());
    }

    #[test]
    fn test_show() {
        let mut form = ExerciseForm::default();

        form.show();
        assert!(form.is_visible());

        form.show();
        assert!(form.is_visible());
    }

    #[test]
    fn test_add_row() {
        let mut form = ExerciseForm::default();

        let first = form.add_row();
        let second = form.add_row();

        assert_ne!(first, second);
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.row_index(first), Some(0));
        assert_eq!(form.row_index(second), Some(1));
        assert_eq!(form.row(second), Some(&ExerciseRow::new(second)));
    }

    #[test]
    fn test_add_row_keeps_reps_of_other_rows() {
        let mut form = form_with_rows(vec![row(1, "A", "3"), row(2, "B", "0")]);

        form.add_row();

        assert_eq!(form.rows()[0].reps().len(), 3);
        assert_eq!(form.rows()[1].reps().len(), 0);
        assert_eq!(form.rows()[2].reps().len(), 0);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("4", 4)]
    #[case("", 0)]
    #[case("four", 0)]
    fn test_set_sets(#[case] input: &str, #[case] expected: usize) {
        let mut form = form_with_rows(vec![row(1, "A", "2"), row(2, "B", "1")]);

        assert!(form.set_sets(2.into(), input));

        assert_eq!(form.rows()[1].reps().len(), expected);
        assert_eq!(form.rows()[0].reps().len(), 2);
    }

    #[test]
    fn test_set_sets_unknown_row() {
        let mut form = form_with_rows(vec![row(1, "A", "2")]);

        assert!(!form.set_sets(2.into(), "3"));

        assert_eq!(form.rows(), &[row(1, "A", "2")]);
    }

    #[test]
    fn test_field_setters() {
        let mut form = form_with_rows(vec![row(1, "A", "2"), row(2, "B", "1")]);

        assert!(form.set_exercise_name(2.into(), "Bench press"));
        assert!(form.set_load(2.into(), "80"));
        assert!(form.set_rir(2.into(), "2"));
        assert!(form.set_reps(2.into(), 0, "8"));
        assert!(!form.set_reps(2.into(), 1, "8"));
        assert!(!form.set_load(3.into(), "80"));

        let changed = form.row(2.into()).unwrap();
        assert_eq!(changed.exercise_name, "Bench press");
        assert_eq!(changed.load, "80");
        assert_eq!(changed.rir, "2");
        assert_eq!(changed.reps(), &["8".to_string()]);
        assert_eq!(form.row(1.into()), Some(&row(1, "A", "2")));
    }

    #[test]
    fn test_cancel_removal() {
        let mut form = form_with_rows(vec![row(1, "A", "2"), row(2, "B", "3")]);
        let rows = form.rows().to_vec();

        assert!(form.request_removal(1.into()));
        assert_eq!(form.pending_removal(), Some(1.into()));
        form.cancel_removal();

        assert_eq!(form.pending_removal(), None);
        assert_eq!(form.confirm_removal(), None);
        assert_eq!(form.rows(), rows);
    }

    #[test]
    fn test_confirm_removal() {
        let mut form = form_with_rows(vec![row(1, "A", "2"), row(2, "B", "3"), row(3, "C", "1")]);

        assert!(form.request_removal(2.into()));
        assert_eq!(form.confirm_removal(), Some(row(2, "B", "3")));

        assert_eq!(form.pending_removal(), None);
        assert_eq!(form.rows(), &[row(1, "A", "2"), row(3, "C", "1")]);
        assert_eq!(form.row_index(3.into()), Some(1));
    }

    #[test]
    fn test_request_removal_unknown_row() {
        let mut form = form_with_rows(vec![row(1, "A", "2")]);

        assert!(!form.request_removal(2.into()));

        assert_eq!(form.pending_removal(), None);
    }

    #[test]
    fn test_confirm_removal_of_row_at_any_position() {
        let mut form = form_with_rows(vec![row(1, "A", "1"), row(2, "B", "1"), row(3, "C", "1")]);

        form.request_removal(1.into());
        form.confirm_removal();
        form.request_removal(3.into());
        form.confirm_removal();

        assert_eq!(form.rows(), &[row(2, "B", "1")]);
    }

    #[test]
    fn test_form_data_after_removal() {
        let mut form = form_with_rows(vec![row(1, "A", "1"), row(2, "B", "2")]);
        form.row_mut(2.into()).unwrap().set_reps(0, "8");
        form.row_mut(2.into()).unwrap().set_reps(1, "6");

        assert!(
            form.form_data()
                .iter()
                .any(|(name, value)| name == "reps[1][]" && value == "8")
        );

        form.request_removal(1.into());
        form.confirm_removal();

        assert_eq!(
            form.form_data(),
            vec![
                ("exercise_name[]".to_string(), "B".to_string()),
                ("load[]".to_string(), String::new()),
                ("sets[]".to_string(), "2".to_string()),
                ("reps[0][]".to_string(), "8".to_string()),
                ("reps[0][]".to_string(), "6".to_string()),
                ("rir[]".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_form_data_with_program() {
        let mut form = ExerciseForm::new(ProgramSelection::new(vec![Program {
            id: 2.into(),
            name: "Full body".to_string(),
        }]));
        form.add_row();
        let load = form.program.select(Some(2.into())).unwrap();
        form.program
            .apply_weeks(load.weeks, Ok(TrainingWeeks { total_weeks: 2 }));
        form.program.select_week("2");

        let data = form.form_data();

        assert_eq!(data.len(), 6);
        assert_eq!(
            data[4..].to_vec(),
            vec![
                ("program".to_string(), "2".to_string()),
                ("week_number".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_required() {
        let mut form = form_with_rows(vec![row(1, "A", "2"), row(2, "", "")]);

        assert_eq!(form.missing_required(), 4 + 4);

        form.row_mut(1.into()).unwrap().set_reps(0, "10");
        assert_eq!(form.missing_required(), 3 + 4);
    }

    #[test]
    fn test_mark_changed() {
        let mut form = ExerciseForm::default();
        assert_eq!(form.unsaved_changes().before_unload(), None);

        form.mark_changed();

        assert!(form.unsaved_changes().has_unsaved_changes());
        assert!(form.unsaved_changes().before_unload().is_some());
    }
}
