//! Utility functions for common operations.

/// Format an hours value with exactly one decimal place for display.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Format a complexity value: whole numbers without a decimal, half steps
/// with one ("3" and "3.5", not "3.0" and "3.50").
pub fn format_complexity(complexity: f64) -> String {
    if complexity.fract() == 0.0 {
        format!("{:.0}", complexity)
    } else {
        format!("{:.1}", complexity)
    }
}

/// Azure DevOps organization URL.
pub fn org_url(organization: &str) -> String {
    format!("https://dev.azure.com/{}", organization)
}

/// Azure DevOps project URL.
pub fn project_url(organization: &str, project: &str) -> String {
    format!("{}/{}", org_url(organization), project)
}

/// Human-friendly form of an iteration path: strips the leading
/// `\Project\Iteration\` prefix and joins the rest with ` > `.
/// `\rocket\Iteration\Year 2026\Sprint 14` becomes `Year 2026 > Sprint 14`.
pub fn friendly_sprint_name(iteration_path: &str) -> String {
    let parts: Vec<&str> = iteration_path.split('\\').collect();
    // Leading backslash yields an empty first element, then project, then
    // the literal "Iteration" node.
    if parts.len() > 3 {
        parts[3..].join(" > ")
    } else {
        iteration_path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(14.0), "14.0");
        assert_eq!(format_hours(3.7), "3.7");
        assert_eq!(format_hours(0.0), "0.0");
    }

    #[test]
    fn test_format_complexity() {
        assert_eq!(format_complexity(3.0), "3");
        assert_eq!(format_complexity(3.5), "3.5");
        assert_eq!(format_complexity(5.0), "5");
    }

    #[test]
    fn test_org_and_project_urls() {
        assert_eq!(org_url("acme"), "https://dev.azure.com/acme");
        assert_eq!(
            project_url("acme", "rocket"),
            "https://dev.azure.com/acme/rocket"
        );
    }

    #[test]
    fn test_friendly_sprint_name() {
        assert_eq!(
            friendly_sprint_name("\\rocket\\Iteration\\Year 2026\\Sprint 14"),
            "Year 2026 > Sprint 14"
        );
        assert_eq!(
            friendly_sprint_name("\\rocket\\Iteration\\Sprint 1"),
            "Sprint 1"
        );
    }

    #[test]
    fn test_friendly_sprint_name_short_path() {
        assert_eq!(friendly_sprint_name("Sprint 1"), "Sprint 1");
        assert_eq!(friendly_sprint_name(""), "");
    }
}
