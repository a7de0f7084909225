//! Static curriculum catalogs shared by signup, the assistant, and quiz
//! generation.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Subjects offered across the platform.
pub const SUBJECTS: [&str; 12] = [
    "Mathematics",
    "Science",
    "History",
    "Literature",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
    "Languages",
    "Art",
    "Music",
    "Geography",
];

/// Selectable learning goals.
pub const LEARNING_GOALS: [&str; 8] = [
    "Improve grades",
    "Learn new skills",
    "Prepare for exams",
    "Career advancement",
    "Personal development",
    "Language learning",
    "STEM education",
    "Creative thinking",
];

/// Selectable strengths.
pub const STRENGTHS: [&str; 6] = [
    "Problem Solving",
    "Memorization",
    "Critical Thinking",
    "Communication",
    "Creativity",
    "Analysis",
];

/// Selectable areas for improvement.
pub const WEAKNESSES: [&str; 6] = [
    "Time Management",
    "Focus",
    "Understanding Concepts",
    "Practice",
    "Study Habits",
    "Test Taking",
];

/// Suggested topics for a subject. Subjects without a curated list get an
/// empty slice and free-text topic entry in the UI.
pub fn topics_for(subject: &str) -> &'static [&'static str] {
    match subject {
        "Mathematics" => &["Algebra", "Geometry", "Calculus", "Statistics", "Trigonometry"],
        "Science" => &["Physics", "Chemistry", "Biology", "Earth Science"],
        "History" => &["World History", "Ancient Civilizations", "Modern History"],
        "Literature" => &["Poetry", "Fiction", "Drama", "Literary Analysis"],
        "Physics" => &["Mechanics", "Thermodynamics", "Electricity", "Optics"],
        "Chemistry" => &["Organic Chemistry", "Inorganic Chemistry", "Physical Chemistry"],
        "Biology" => &["Cell Biology", "Genetics", "Ecology", "Human Biology"],
        "Computer Science" => &["Programming", "Algorithms", "Data Structures", "Web Development"],
        _ => &[],
    }
}
