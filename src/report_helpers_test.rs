use super::*;

#[test]
fn column_width_with_urls() {
    let urls = ["/a", "/blog/very-long-post"];
    let w = column_width(urls.iter().copied(), 4, 60);
    assert_eq!(w, "/blog/very-long-post".len());
}

#[test]
fn column_width_empty() {
    let urls: [&str; 0] = [];
    assert_eq!(column_width(urls.iter().copied(), 4, 60), 4);
}

#[test]
fn column_width_clamped() {
    let long = "x".repeat(100);
    assert_eq!(column_width([long.as_str()].into_iter(), 4, 40), 40);
    assert_eq!(column_width(["a"].into_iter(), 10, 40), 10);
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}

#[test]
fn format_thousands_groups() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234567), "1,234,567");
}

#[test]
fn format_rate_percent() {
    assert_eq!(format_rate(0.095), "9.50%");
    assert_eq!(format_rate(0.0), "0.00%");
}

#[test]
fn truncate_start_short_unchanged() {
    assert_eq!(truncate_start("/about", 10), "/about");
}

#[test]
fn truncate_start_keeps_tail() {
    let t = truncate_start("https://example.com/blog/post-name", 12);
    assert_eq!(t, "...post-name");
    assert_eq!(t.width(), 12);
}

#[test]
fn truncate_start_wide_chars() {
    // each CJK char is two columns wide
    let t = truncate_start("/ブログ/記事", 7);
    assert!(t.width() <= 7, "got {t} ({} cols)", t.width());
    assert!(t.starts_with("..."));
}

#[test]
fn pad_display_fills_columns() {
    assert_eq!(pad_display("ab", 4), "ab  ");
    assert_eq!(pad_display("abcdef", 4), "abcdef");
}
