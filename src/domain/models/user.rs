use serde::{Deserialize, Serialize};

/// Signed-in user summary displayed in the profile menus.
/// Missing JSON fields fall back to the placeholder student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentity {
    pub display_name: String,
    pub department: String,
    pub student_id: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            display_name: "Alex Johnson".to_string(),
            department: "Computer Science".to_string(),
            student_id: "202312345".to_string(),
        }
    }
}

impl UserIdentity {
    /// Label shown under the name in the mobile identity card
    pub fn student_id_label(&self) -> String {
        format!("Student ID: {}", self.student_id)
    }
}

/// Logo block contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandInfo {
    pub initials: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            initials: "CT".to_string(),
            title: "CampusTools".to_string(),
            subtitle: "University Portal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_label() {
        let user = UserIdentity::default();
        assert_eq!(user.student_id_label(), "Student ID: 202312345");
    }

    #[test]
    fn test_partial_identity_keeps_defaults() {
        let user: UserIdentity =
            serde_json::from_str(r#"{"display_name": "Sam Lee"}"#).unwrap();

        assert_eq!(user.display_name, "Sam Lee");
        assert_eq!(user.department, "Computer Science");
    }
}
