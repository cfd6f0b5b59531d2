use log::error;

use crate::{ProgramID, ProgramRepository, ProgramService, ReadError, TrainingDay, TrainingWeeks};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    async fn get_training_days(&self, id: ProgramID) -> Result<Vec<TrainingDay>, ReadError> {
        log_on_error!(
            self.repository.read_training_days(id),
            "get",
            "training days"
        )
    }

    async fn get_training_weeks(&self, id: ProgramID) -> Result<TrainingWeeks, ReadError> {
        log_on_error!(
            self.repository.read_training_weeks(id),
            "get",
            "training weeks"
        )
    }
}
