//! SQL analysis profile. Probes are case-insensitive, unlike the other
//! profiles: query keywords are conventionally written either way.

use crate::analyze::{Check, Profile};

fn has_keyword(code: &str, keyword: &str) -> bool {
    code.to_uppercase().contains(keyword)
}

pub(crate) static PROFILE: Profile = Profile {
    intro: "SQL execution requires a database connection and backend service.",
    source_label: "Your SQL code:",
    needs_header: "To run SQL code, you would need:",
    needs: &[
        "Database server (MySQL, PostgreSQL, SQLite, etc.)",
        "A backend service that can execute SQL queries",
        "Or use an online SQL runner with sample data",
    ],
    features_label: "Query type detected:",
    checks: &[
        Check {
            present: "SELECT query",
            absent: "No SELECT query",
            test: |code| has_keyword(code, "SELECT"),
        },
        Check {
            present: "INSERT query",
            absent: "No INSERT query",
            test: |code| has_keyword(code, "INSERT"),
        },
        Check {
            present: "UPDATE query",
            absent: "No UPDATE query",
            test: |code| has_keyword(code, "UPDATE"),
        },
        Check {
            present: "DELETE query",
            absent: "No DELETE query",
            test: |code| has_keyword(code, "DELETE"),
        },
        Check {
            present: "CREATE statement",
            absent: "No CREATE statement",
            test: |code| has_keyword(code, "CREATE"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_select() {
        let report = PROFILE.render("select * from users where id = 1;");
        assert!(report.starts_with("SQL execution requires a database connection and backend service."));
        assert!(report.contains("Query type detected:"));
        assert!(report.contains("- ✅ SELECT query"));
        assert!(report.contains("- ❌ No INSERT query"));
    }

    #[test]
    fn test_ddl_statement() {
        let report = PROFILE.render("CREATE TABLE t (id INTEGER);");
        assert!(report.contains("- ✅ CREATE statement"));
        assert!(report.contains("- ❌ No SELECT query"));
    }
}
