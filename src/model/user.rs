use serde::Deserialize;

#[derive(Debug, Clone, Eq, Hash, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
}
