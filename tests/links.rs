use clinician_scope::report::professional_search_url;

#[test]
fn jane_doe_url_targets_linkedin() {
    assert_eq!(
        professional_search_url("Jane Doe"),
        "https://www.google.com/search?q=Jane+Doe+site:linkedin.com"
    );
}

#[test]
fn whitespace_runs_collapse_to_plus() {
    assert_eq!(
        professional_search_url("  Jane   Q.  Doe "),
        "https://www.google.com/search?q=Jane+Q.+Doe+site:linkedin.com"
    );
}
