use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl Claims {
    pub fn new(user_id: i64, iat: usize, exp: usize) -> Self {
        Self { exp, iat, user_id }
    }
}
