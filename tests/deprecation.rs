//! The deprecated `Validation::get` keeps working and says so in the logs

#![allow(deprecated)]

use std::sync::Mutex;

use tracing_test::traced_test;
use unionkit::diagnostics::DeprecationNotice;
use unionkit::Validation;

#[test]
#[traced_test]
fn get_returns_value_and_warns() {
    let value = Validation::<_, Vec<String>>::success(5).get();
    assert_eq!(value, 5);
    assert!(logs_contain("`Validation::get` is deprecated"));
    assert!(logs_contain("Validation::unsafe_get"));
}

#[test]
#[should_panic(expected = "on a `Failure` value")]
fn get_on_failure_still_panics() {
    let _ = Validation::<i32, _>::failure(vec!["bad"]).get();
}

#[test]
fn custom_sink_receives_each_use() {
    let seen = Mutex::new(Vec::new());
    let sink = |notice: &DeprecationNotice| {
        seen.lock().unwrap().push(notice.to_string());
    };

    let a = Validation::<_, ()>::success("a").get_reporting(&sink);
    let b = Validation::<_, ()>::success("b").get_reporting(&sink);

    assert_eq!((a, b), ("a", "b"));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            "`Validation::get` is deprecated, use `Validation::unsafe_get` instead".to_string();
            2
        ]
    );
}
