use serde::{Deserialize, Serialize};

/// A product extracted from the dataset.
///
/// `ingredient_id` stays `0` until a later linking step assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    code: String,
    ingredient_id: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ingredient_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn ingredient_id(&self) -> i64 {
        self.ingredient_id
    }
}
