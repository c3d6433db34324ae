//! Assertions over printed grid pages.

/// Assert that some page contains specific text
#[macro_export]
macro_rules! assert_pages_contain_text {
    ($printed:expr, $text:expr) => {
        let all = $printed.text();
        assert!(
            all.contains($text),
            "Pages should contain '{}', but text was:\n{}",
            $text,
            all
        );
    };
}

/// Assert that a given page contains specific text
#[macro_export]
macro_rules! assert_page_contains_text {
    ($printed:expr, $page:expr, $text:expr) => {
        assert!(
            $printed.pages[$page].contains($text),
            "Page {} should contain '{}', but it was:\n{}",
            $page,
            $text,
            $printed.pages[$page]
        );
    };
}

/// Assert the number of printed pages
#[macro_export]
macro_rules! assert_page_count {
    ($printed:expr, $count:expr) => {
        assert_eq!(
            $printed.page_count(),
            $count,
            "Expected {} pages, got {}:\n{}",
            $count,
            $printed.page_count(),
            $printed.pages.join("\n----\n")
        );
    };
}
