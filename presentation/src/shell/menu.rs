//! Dashboard menu options

/// A dashboard menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ViewStudent,
    DeleteStudent,
    AddSemester,
    ListStudents,
    SaveAndExit,
}

impl MenuChoice {
    /// Parse a typed option number ("1" through "6"), matched exactly
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddStudent),
            "2" => Some(MenuChoice::ViewStudent),
            "3" => Some(MenuChoice::DeleteStudent),
            "4" => Some(MenuChoice::AddSemester),
            "5" => Some(MenuChoice::ListStudents),
            "6" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddStudent));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::AddSemester));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::SaveAndExit));
    }

    #[test]
    fn test_parse_rejects_others() {
        for input in ["0", "7", "", " ", "one", "1.", "66", " 4 ", "4 "] {
            assert_eq!(MenuChoice::parse(input), None, "{input:?}");
        }
    }
}
