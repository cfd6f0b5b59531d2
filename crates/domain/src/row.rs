use derive_more::{Deref, Display};
use log::warn;
use uuid::Uuid;

use crate::{Name, NameError};

pub const EXERCISE_NAME_FIELD: &str = "exercise_name[]";
pub const LOAD_FIELD: &str = "load[]";
pub const SETS_FIELD: &str = "sets[]";
pub const RIR_FIELD: &str = "rir[]";

/// Largest number of sets a row accepts. Larger values create no reps inputs.
pub const MAX_SETS: u32 = 100;

/// Name of the reps inputs of the row at `row_index`.
///
/// The index is positional, so the name of a row's reps inputs changes when a preceding row is
/// removed.
#[must_use]
pub fn reps_field_name(row_index: usize) -> String {
    format!("reps[{row_index}][]")
}

#[must_use]
pub fn reps_label(set: usize) -> String {
    format!("Set {set} Reps")
}

/// Number of sets entered into a sets input.
///
/// Follows the browser's `parseInt`: leading whitespace and an optional sign are accepted, parsing
/// stops at the first non-digit. Empty, non-numeric, negative and out of range input count as zero.
#[must_use]
pub fn parse_sets(input: &str) -> u32 {
    let input = input.trim_start();
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if negative {
        return 0;
    }

    unsigned[..end].parse().unwrap_or(0)
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowID(Uuid);

impl RowID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RowID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RowID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Inputs of a single exercise entry.
///
/// All values are kept as entered. The number of reps inputs always equals the parsed value of
/// the sets input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRow {
    id: RowID,
    pub exercise_name: String,
    pub load: String,
    sets: String,
    reps: Vec<String>,
    pub rir: String,
}

impl ExerciseRow {
    #[must_use]
    pub fn new(id: RowID) -> Self {
        Self {
            id,
            exercise_name: String::new(),
            load: String::new(),
            sets: String::new(),
            reps: vec![],
            rir: String::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> RowID {
        self.id
    }

    #[must_use]
    pub fn sets(&self) -> &str {
        &self.sets
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        parse_sets(&self.sets)
    }

    #[must_use]
    pub fn reps(&self) -> &[String] {
        &self.reps
    }

    /// Replaces the sets input and regenerates all reps inputs.
    ///
    /// Previously entered reps are discarded, even if the number of sets did not change. More than
    /// `MAX_SETS` sets count as zero.
    pub fn set_sets(&mut self, input: &str) {
        self.sets = input.to_string();
        let mut sets = self.num_sets();
        if sets > MAX_SETS {
            warn!("ignoring {sets} sets, at most {MAX_SETS} sets are supported");
            sets = 0;
        }
        self.reps = vec![String::new(); sets as usize];
    }

    /// Returns `false` if the row has no reps input at `set_index`.
    pub fn set_reps(&mut self, set_index: usize, value: &str) -> bool {
        match self.reps.get_mut(set_index) {
            Some(reps) => {
                *reps = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn name(&self) -> Result<Name, NameError> {
        Name::new(&self.exercise_name)
    }

    /// Number of required inputs which are still empty.
    #[must_use]
    pub fn missing_required(&self) -> usize {
        let name = usize::from(self.name().is_err());
        [&self.load, &self.sets, &self.rir]
            .into_iter()
            .chain(self.reps.iter())
            .filter(|value| value.trim().is_empty())
            .count()
            + name
    }

    /// Submitted fields of this row in input order.
    #[must_use]
    pub fn form_data(&self, row_index: usize) -> Vec<(String, String)> {
        let reps_name = reps_field_name(row_index);
        let mut result = vec![
            (EXERCISE_NAME_FIELD.to_string(), self.exercise_name.clone()),
            (LOAD_FIELD.to_string(), self.load.clone()),
            (SETS_FIELD.to_string(), self.sets.clone()),
        ];
        result.extend(
            self.reps
                .iter()
                .map(|reps| (reps_name.clone(), reps.clone())),
        );
        result.push((RIR_FIELD.to_string(), self.rir.clone()));
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("3", 3)]
    #[case(" 4", 4)]
    #[case("+5", 5)]
    #[case("2.7", 2)]
    #[case("6 sets", 6)]
    #[case("0", 0)]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("-2", 0)]
    #[case("-", 0)]
    #[case("99999999999", 0)]
    fn test_parse_sets(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_sets(input), expected);
    }

    #[test]
    fn test_reps_field_name() {
        assert_eq!(reps_field_name(0), "reps[0][]");
        assert_eq!(reps_field_name(12), "reps[12][]");
    }

    #[test]
    fn test_reps_label() {
        assert_eq!(reps_label(1), "Set 1 Reps");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(12)]
    #[case(MAX_SETS)]
    fn test_set_sets_labels(#[case] sets: u32) {
        let mut row = ExerciseRow::new(1.into());
        row.set_sets(&sets.to_string());

        let labels = (1..=row.reps().len()).map(reps_label).collect::<Vec<_>>();

        assert_eq!(row.reps().len(), sets as usize);
        assert_eq!(
            labels,
            (1..=sets as usize).map(reps_label).collect::<Vec<_>>()
        );
        assert_eq!(labels.last().cloned(), (sets > 0).then(|| format!("Set {sets} Reps")));
    }

    #[rstest]
    #[case("101")]
    #[case("100000000")]
    #[case("4294967295")]
    fn test_set_sets_above_maximum(#[case] input: &str) {
        let mut row = ExerciseRow::new(1.into());
        row.set_sets("2");

        row.set_sets(input);

        assert_eq!(row.sets(), input);
        assert!(row.reps().is_empty());
    }

    #[test]
    fn test_row_new() {
        let row = ExerciseRow::new(1.into());
        assert_eq!(row.id(), 1.into());
        assert_eq!(row.exercise_name, "");
        assert_eq!(row.load, "");
        assert_eq!(row.sets(), "");
        assert!(row.reps().is_empty());
        assert_eq!(row.rir, "");
    }

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("5", 5)]
    #[case("x", 0)]
    fn test_set_sets(#[case] input: &str, #[case] expected: usize) {
        let mut row = ExerciseRow::new(1.into());
        row.set_sets(input);
        assert_eq!(row.sets(), input);
        assert_eq!(row.reps().len(), expected);
        assert!(row.reps().iter().all(String::is_empty));
    }

    #[rstest]
    #[case(3, 5)]
    #[case(5, 3)]
    #[case(4, 4)]
    #[case(2, 0)]
    fn test_set_sets_replaces_reps(#[case] before: u32, #[case] after: u32) {
        let mut row = ExerciseRow::new(1.into());
        row.set_sets(&before.to_string());
        for i in 0..before as usize {
            assert!(row.set_reps(i, "10"));
        }

        row.set_sets(&after.to_string());

        assert_eq!(row.reps(), vec![String::new(); after as usize]);
    }

    #[test]
    fn test_set_reps_out_of_range() {
        let mut row = ExerciseRow::new(1.into());
        row.set_sets("2");
        assert!(!row.set_reps(2, "8"));
        assert_eq!(row.reps(), &[String::new(), String::new()]);
    }

    #[test]
    fn test_missing_required() {
        let mut row = ExerciseRow::new(1.into());
        assert_eq!(row.missing_required(), 4);

        row.exercise_name = "Squat".into();
        row.load = "100".into();
        row.set_sets("2");
        assert_eq!(row.missing_required(), 3);

        row.set_reps(0, "5");
        row.set_reps(1, "5");
        row.rir = "2".into();
        assert_eq!(row.missing_required(), 0);

        row.exercise_name = "  ".into();
        assert_eq!(row.missing_required(), 1);
    }

    #[test]
    fn test_form_data() {
        let mut row = ExerciseRow::new(1.into());
        row.exercise_name = "Deadlift".into();
        row.load = "140".into();
        row.set_sets("2");
        row.set_reps(0, "5");
        row.set_reps(1, "4");
        row.rir = "1".into();

        assert_eq!(
            row.form_data(3),
            vec![
                ("exercise_name[]".to_string(), "Deadlift".to_string()),
                ("load[]".to_string(), "140".to_string()),
                ("sets[]".to_string(), "2".to_string()),
                ("reps[3][]".to_string(), "5".to_string()),
                ("reps[3][]".to_string(), "4".to_string()),
                ("rir[]".to_string(), "1".to_string()),
            ]
        );
    }
}
