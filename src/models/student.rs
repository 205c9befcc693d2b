use serde::{Deserialize, Serialize};

/// One trainee row, as read from a bulk import sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub section: String,
}
