//! Sample data for the lab run

use olab_model::Record;
use olab_roster::{AdvancedStudent, Student};

/// Student the lab is built around
#[must_use]
pub fn sample_student() -> Student {
    Student::new("Alice Johnson", 21).with_courses([
        "JavaScript",
        "Python",
        "Data Structures",
        "Web Development",
    ])
}

/// Extra fields merged into the student record
#[must_use]
pub fn additional_info() -> Record {
    Record::new()
        .with("major", "Computer Science")
        .with("semester", 6)
}

/// Student used for the study/graduate demo
#[must_use]
pub fn advanced_student() -> AdvancedStudent {
    AdvancedStudent::new("Jordan Lee", 22)
}

/// Three-level record for nested destructuring
#[must_use]
pub fn complex_object() -> Record {
    let settings = Record::new()
        .with("theme", "dark")
        .with("notifications", true);
    let profile = Record::new()
        .with("name", "John Doe")
        .with("settings", settings);
    let metadata = Record::new()
        .with("created", "2024")
        .with("updated", "2025");

    Record::new()
        .with("user", Record::new().with("id", 1).with("profile", profile))
        .with("courses", vec!["JS", "React", "Node"])
        .with("metadata", metadata)
}

/// Grades recorded through the chaining demo
pub const SAMPLE_GRADES: [(&str, u32); 4] = [
    ("JavaScript", 92),
    ("Python", 88),
    ("Data Structures", 95),
    ("Web Development", 90),
];
