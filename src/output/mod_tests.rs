use super::*;

#[test]
fn banner_wraps_title_in_rules() {
    let text = banner("TITLE");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "=".repeat(80));
    assert_eq!(lines[1], "TITLE");
    assert_eq!(lines[2], lines[0]);
}
