use serde::{Deserialize, Serialize};

use crate::coder::Coder;
use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamId(String);

impl TeamId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        TeamId(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// The members of a team as returned by a single API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSnapshot {
    pub coders: Vec<Coder>,
}

#[derive(Deserialize)]
struct TeamMembers {
    data: Vec<Coder>,
}

impl TeamSnapshot {
    pub fn len(&self) -> usize {
        self.coders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coders.is_empty()
    }
}

/// Parse the body of a `teams/{team}/members` response.
pub fn parse_snapshot(body: &[u8]) -> Result<TeamSnapshot> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let members = TeamMembers::deserialize(&mut deserializer)?;
    deserializer.end()?;

    Ok(TeamSnapshot {
        coders: members.data,
    })
}
