use serde::{Deserialize, Serialize};

/// Registered client application a post was made from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let application: Application =
            serde_json::from_str(r#"{"id":1,"name":"name"}"#).unwrap();

        assert_eq!(application.id, 1);
        assert_eq!(application.name, "name");
    }
}
