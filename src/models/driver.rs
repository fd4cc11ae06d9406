use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "employeeId", default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl Driver {
    /// Employee id, or the tail of the backend id when none was assigned
    pub fn display_employee_id(&self) -> String {
        match self.employee_id.as_deref().filter(|e| !e.is_empty()) {
            Some(employee_id) => employee_id.to_string(),
            None => {
                let chars: Vec<char> = self.id.chars().collect();
                let start = chars.len().saturating_sub(8);
                chars[start..].iter().collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_driver_list() {
        let json = r#"[
            {"_id":"6650c2e9f1a2b3c4d5e6f708","name":"Otieno","employeeId":"EMP-014","status":"On delivery"},
            {"_id":"6650c2e9f1a2b3c4d5e6f709","name":"Wanjiru","status":"Available"}
        ]"#;
        let drivers: Vec<Driver> = serde_json::from_str(json).unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].display_employee_id(), "EMP-014");
        assert_eq!(drivers[1].employee_id, None);
        assert_eq!(drivers[1].display_employee_id(), "d5e6f709");
    }

    #[test]
    fn short_ids_are_shown_whole() {
        let driver = Driver {
            id: "42".into(),
            name: "Kamau".into(),
            employee_id: Some(String::new()),
            status: "Off duty".into(),
        };
        assert_eq!(driver.display_employee_id(), "42");
    }
}
