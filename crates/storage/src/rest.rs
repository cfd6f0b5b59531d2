use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tytan_domain as domain;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sender: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> domain::ProgramRepository for REST<S> {
    async fn read_training_days(
        &self,
        id: domain::ProgramID,
    ) -> Result<Vec<domain::TrainingDay>, domain::ReadError> {
        let days: Vec<TrainingDay> = self
            .fetch(Request::get(&format!("/get_training_days/{id}")))
            .await?;
        Ok(days.into_iter().map(domain::TrainingDay::from).collect())
    }

    async fn read_training_weeks(
        &self,
        id: domain::ProgramID,
    ) -> Result<domain::TrainingWeeks, domain::ReadError> {
        let weeks: TrainingWeeks = self
            .fetch(Request::get(&format!("/get_training_weeks/{id}")))
            .await?;
        Ok(weeks.into())
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch<T>(&self, request: RequestBuilder) -> Result<T, domain::ReadError>
    where
        T: 'static + for<'de> serde::Deserialize<'de>,
    {
        let request = request
            .build()
            .map_err(|err| domain::ReadError::Other(err.into()))?;
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<T>().await {
                        Ok(data) => Ok(data),
                        Err(error) => Err(domain::ReadError::Other(
                            format!("deserialization failed: {error}").into(),
                        )),
                    }
                } else {
                    Err(domain::StorageError::Other(
                        format!("{} {}", response.status(), response.status_text()).into(),
                    )
                    .into())
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection.into()),
        }
    }
}

/// Day of a training program as `[value, name]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingDay(pub DayValue, pub String);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DayValue {
    Number(i64),
    Text(String),
}

impl From<TrainingDay> for domain::TrainingDay {
    fn from(value: TrainingDay) -> Self {
        let TrainingDay(day, name) = value;
        domain::TrainingDay {
            value: match day {
                DayValue::Number(number) => number.to_string(),
                DayValue::Text(text) => text,
            },
            name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingWeeks {
    pub total_weeks: i64,
}

impl From<TrainingWeeks> for domain::TrainingWeeks {
    fn from(value: TrainingWeeks) -> Self {
        domain::TrainingWeeks {
            total_weeks: u32::try_from(value.total_weeks).unwrap_or(0),
        }
    }
}
