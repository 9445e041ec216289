use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FrqQuestion {
    pub question: String,
    pub rubric: BTreeMap<String, RubricCriterion>,
    pub answer: String, // model answer
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RubricCriterion {
    pub description: String,
    pub points: Points,
}

/// Models return rubric points either as numbers or as text like `"1-10"`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Points {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Points::Number(n) => write!(f, "{}", n),
            Points::Text(s) => f.write_str(s),
        }
    }
}
