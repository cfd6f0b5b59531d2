//! Data embedded into the page by the server.

use serde::{Deserialize, Serialize};
use tytan_domain as domain;

pub const PROGRAMS_ELEMENT_ID: &str = "programs";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub id: u32,
    pub name: String,
}

impl From<Program> for domain::Program {
    fn from(value: Program) -> Self {
        domain::Program {
            id: value.id.into(),
            name: value.name,
        }
    }
}

/// Reads the programs from the JSON document in the element with ID `programs`.
pub fn read_programs() -> Result<Vec<domain::Program>, domain::ReadError> {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(PROGRAMS_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .ok_or_else(|| {
            domain::ReadError::Other(format!("no element with ID {PROGRAMS_ELEMENT_ID}").into())
        })?;
    parse_programs(&content)
}

pub fn parse_programs(content: &str) -> Result<Vec<domain::Program>, domain::ReadError> {
    let programs: Vec<Program> = serde_json::from_str(content)
        .map_err(|err| domain::ReadError::Other(format!("deserialization failed: {err}").into()))?;
    Ok(programs.into_iter().map(domain::Program::from).collect())
}
