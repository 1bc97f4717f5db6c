use super::*;

#[test]
fn file_under_root_is_in_scope() {
    let filter = PathFilter::new("/work/src");
    assert!(filter.in_scope("/work/src/foo.cpp"));
    assert!(filter.in_scope("/work/src/nested/deep/foo.h"));
}

#[test]
fn file_outside_root_is_out_of_scope() {
    let filter = PathFilter::new("/work/src");
    assert!(!filter.in_scope("/usr/include/vector"));
    assert!(!filter.in_scope("/work/other/foo.cpp"));
}

#[test]
fn excluded_substrings_reject_even_under_root() {
    let filter = PathFilter::new("/work/src");
    assert!(!filter.in_scope("/work/src/tests/helper.h"));
    assert!(!filter.in_scope("/work/src/third_party/lib/lib.h"));
    assert!(!filter.in_scope("/work/src/vendor/skia/canvas.h"));
}

#[test]
fn exclusion_is_plain_substring_search() {
    // No glob semantics: the substring must literally appear.
    let filter = PathFilter::new("/work/src");
    assert!(filter.in_scope("/work/src/contests.cpp"));
    assert!(filter.in_scope("/work/src/latest/foo.h"));
}

#[test]
fn custom_excludes_replace_the_defaults() {
    let filter = PathFilter::with_excludes("/work/src", vec!["/generated/".to_owned()]);
    assert!(filter.in_scope("/work/src/tests/helper.h"));
    assert!(!filter.in_scope("/work/src/generated/foo.h"));
}
