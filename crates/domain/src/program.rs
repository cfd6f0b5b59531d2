use std::ops::RangeInclusive;

use derive_more::{Deref, Display};
use log::{info, warn};

use crate::ReadError;

pub const PROGRAM_FIELD: &str = "program";
pub const SESSION_DAY_FIELD: &str = "session_day";
pub const WEEK_NUMBER_FIELD: &str = "week_number";

pub const PROGRAM_PLACEHOLDER: &str = "Select Program";
pub const DAY_PLACEHOLDER: &str = "Select Day";
pub const WEEK_PLACEHOLDER: &str = "Select a Week";

/// Largest number of training weeks offered for selection. Programs with more weeks offer none.
pub const MAX_TRAINING_WEEKS: u32 = 520;

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn get_training_days(&self, id: ProgramID) -> Result<Vec<TrainingDay>, ReadError>;
    async fn get_training_weeks(&self, id: ProgramID) -> Result<TrainingWeeks, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn read_training_days(&self, id: ProgramID) -> Result<Vec<TrainingDay>, ReadError>;
    async fn read_training_weeks(&self, id: ProgramID) -> Result<TrainingWeeks, ReadError>;
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramID(u32);

impl ProgramID {
    /// Parses the value of a program select option. The placeholder's empty value yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

impl From<u32> for ProgramID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub id: ProgramID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingDay {
    pub value: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingWeeks {
    pub total_weeks: u32,
}

impl TrainingWeeks {
    #[must_use]
    pub fn week_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_weeks
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub text: String,
}

/// A select whose options are loaded on demand.
///
/// Every reset issues a new request token. Options are only accepted together with the token of
/// the latest reset, so a late response to an earlier request cannot replace newer options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    placeholder: &'static str,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    token: RequestToken,
}

impl Dropdown {
    #[must_use]
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            options: vec![],
            selected: None,
            token: RequestToken::default(),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    #[must_use]
    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Returns `false` if no option has the given value.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = Some(value.to_string());
            true
        } else {
            false
        }
    }

    fn reset(&mut self) -> RequestToken {
        self.options.clear();
        self.selected = None;
        self.token = self.token.next();
        self.token
    }

    fn populate(&mut self, token: RequestToken, options: Vec<DropdownOption>) -> bool {
        if token != self.token {
            return false;
        }
        self.options = options;
        true
    }
}

/// Tokens of the requests started by a program selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramLoad {
    pub program: ProgramID,
    pub days: RequestToken,
    pub weeks: RequestToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSelection {
    programs: Vec<Program>,
    program: Option<ProgramID>,
    days: Dropdown,
    weeks: Dropdown,
}

impl Default for ProgramSelection {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl ProgramSelection {
    #[must_use]
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            programs,
            program: None,
            days: Dropdown::new(DAY_PLACEHOLDER),
            weeks: Dropdown::new(WEEK_PLACEHOLDER),
        }
    }

    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    #[must_use]
    pub fn program(&self) -> Option<ProgramID> {
        self.program
    }

    #[must_use]
    pub fn days(&self) -> &Dropdown {
        &self.days
    }

    #[must_use]
    pub fn weeks(&self) -> &Dropdown {
        &self.weeks
    }

    /// Changes the selected program and clears both dependent dropdowns.
    ///
    /// Returns the tokens to pass along with the loaded days and weeks, or `None` if no program
    /// is selected and therefore nothing needs to be loaded.
    pub fn select(&mut self, program: Option<ProgramID>) -> Option<ProgramLoad> {
        self.program = program;
        let days = self.days.reset();
        let weeks = self.weeks.reset();
        program.map(|program| ProgramLoad {
            program,
            days,
            weeks,
        })
    }

    pub fn select_day(&mut self, value: &str) -> bool {
        self.days.select(value)
    }

    pub fn select_week(&mut self, value: &str) -> bool {
        self.weeks.select(value)
    }

    /// Fills the day dropdown if `token` belongs to the latest selection.
    ///
    /// A failed request leaves the dropdown cleared.
    pub fn apply_days(
        &mut self,
        token: RequestToken,
        result: Result<Vec<TrainingDay>, ReadError>,
    ) -> bool {
        let Ok(days) = result else {
            return false;
        };
        self.days.populate(
            token,
            days.into_iter()
                .map(|day| DropdownOption {
                    value: day.value,
                    text: day.name,
                })
                .collect(),
        )
    }

    /// Fills the week dropdown with one option per week if `token` belongs to the latest
    /// selection.
    pub fn apply_weeks(
        &mut self,
        token: RequestToken,
        result: Result<TrainingWeeks, ReadError>,
    ) -> bool {
        let Ok(weeks) = result else {
            return false;
        };
        if token != self.weeks.token() {
            return false;
        }
        if weeks.total_weeks == 0 {
            if let Some(program) = self.program {
                info!("no training weeks found for program {program}");
            }
        }
        if weeks.total_weeks > MAX_TRAINING_WEEKS {
            warn!(
                "ignoring {} training weeks, at most {MAX_TRAINING_WEEKS} weeks are supported",
                weeks.total_weeks
            );
            return self.weeks.populate(token, vec![]);
        }
        self.weeks.populate(
            token,
            weeks
                .week_numbers()
                .map(|week| DropdownOption {
                    value: week.to_string(),
                    text: format!("Week {week}"),
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn form_data(&self) -> Vec<(String, String)> {
        let mut result = vec![];
        if let Some(program) = self.program {
            result.push((PROGRAM_FIELD.to_string(), program.to_string()));
        }
        if let Some(day) = self.days.selected() {
            result.push((SESSION_DAY_FIELD.to_string(), day.to_string()));
        }
        if let Some(week) = self.weeks.selected() {
            result.push((WEEK_NUMBER_FIELD.to_string(), week.to_string()));
        }
        result
    }
}
