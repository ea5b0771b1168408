//! Console output formatter for student records

use colored::Colorize;
use registrar_domain::{Course, Semester, Student};

/// Formats records and messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed once when the shell starts
    pub fn banner(store_location: &str, student_count: usize) -> String {
        format!(
            "{}\n{} {} ({} student(s))\n",
            "Student Management System".cyan().bold(),
            "Records:".dimmed(),
            store_location,
            student_count
        )
    }

    /// The numbered dashboard menu
    pub fn menu() -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", "Dash Board:".cyan().bold()));
        output.push_str("1. Add New Student\n");
        output.push_str("2. View Student Details\n");
        output.push_str("3. Delete Student\n");
        output.push_str("4. Add New Semester\n");
        output.push_str("5. View Students (first name starting with A)\n");
        output.push_str("6. Save and Exit\n");
        output
    }

    pub fn section(title: &str) -> String {
        format!("\n{}", title.cyan().bold())
    }

    pub fn success(message: &str) -> String {
        message.green().to_string()
    }

    pub fn error(message: &str) -> String {
        message.red().to_string()
    }

    pub fn warning(message: &str) -> String {
        message.yellow().to_string()
    }

    /// Full record as pretty-printed JSON
    pub fn student_json(student: &Student) -> serde_json::Result<String> {
        serde_json::to_string_pretty(student)
    }

    /// Each semester followed by its courses, in stored order
    pub fn sorted_courses(semesters: &[Semester]) -> String {
        let mut output = format!("\n{}\n", "Sorted Courses:".cyan().bold());
        for semester in semesters {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Semester: {}, Year: {}",
                    semester.semester_name, semester.year
                )
                .yellow()
            ));
            for course in &semester.courses {
                output.push_str(&format!("{}\n", course));
            }
            output.push('\n');
        }
        output
    }

    /// One `ID - Name` line per course
    pub fn course_list(courses: &[Course]) -> String {
        if courses.is_empty() {
            return format!("{}\n", "  (none)".dimmed());
        }
        courses
            .iter()
            .map(|c| format!("{}\n", c))
            .collect()
    }

    /// One line per listed student
    pub fn student_list(students: &[&Student]) -> String {
        if students.is_empty() {
            return format!("{}\n", "  (no matching students)".dimmed());
        }
        students
            .iter()
            .map(|s| {
                format!(
                    "Name: {}, Student ID: {}\n",
                    s.display_name(),
                    s.student_id
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::{Degree, Department};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_menu_lists_six_options() {
        plain();
        let menu = ConsoleFormatter::menu();
        for n in 1..=6 {
            assert!(menu.contains(&format!("{}. ", n)));
        }
        assert!(menu.contains("6. Save and Exit"));
    }

    #[test]
    fn test_student_json_uses_record_field_names() {
        let student = Student::new("Alice", "Rahman", "001", "22", Department::Cse, Degree::Bsc);
        let json = ConsoleFormatter::student_json(&student).unwrap();
        assert!(json.contains("\"FirstName\": \"Alice\""));
        assert!(json.contains("\"SemestersAttended\": []"));
    }

    #[test]
    fn test_sorted_courses_layout() {
        plain();
        let semester = Semester::new("Fall", "2024").with_courses(vec![Course::new(
            "CSC 101",
            "Introduction to Computer Science",
            "Prof. Smith",
            3,
        )]);
        let text = ConsoleFormatter::sorted_courses(&[semester]);
        assert!(text.contains("Semester: Fall, Year: 2024"));
        assert!(text.contains("CSC 101 - Introduction to Computer Science"));
    }

    #[test]
    fn test_student_list() {
        plain();
        let alice = Student::new("Alice", "Rahman", "001", "22", Department::Cse, Degree::Bsc);
        let text = ConsoleFormatter::student_list(&[&alice]);
        assert_eq!(text, "Name: Alice Rahman, Student ID: 001\n");
        assert!(ConsoleFormatter::student_list(&[]).contains("no matching students"));
    }

    #[test]
    fn test_course_list_empty() {
        plain();
        assert!(ConsoleFormatter::course_list(&[]).contains("(none)"));
    }
}
