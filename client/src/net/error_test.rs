use super::*;

#[test]
fn empty_canvas_is_a_warning() {
    assert!(CalculateError::EmptyCanvas.is_warning());
    assert!(!CalculateError::EmptyCanvas.is_silent());
}

#[test]
fn failures_are_not_warnings() {
    for err in [
        CalculateError::Encode("bad".to_owned()),
        CalculateError::Network("offline".to_owned()),
        CalculateError::MalformedResponse("eof".to_owned()),
    ] {
        assert!(!err.is_warning(), "{err}");
        assert!(!err.is_silent(), "{err}");
    }
}

#[test]
fn cancelled_is_silent() {
    assert!(CalculateError::Cancelled.is_silent());
    assert!(!CalculateError::Cancelled.is_warning());
}

#[test]
fn messages_include_detail() {
    assert_eq!(
        CalculateError::Network("status 502".to_owned()).to_string(),
        "recognition request failed: status 502"
    );
    assert_eq!(
        CalculateError::MalformedResponse("missing field `data`".to_owned()).to_string(),
        "unexpected response from the recognition service: missing field `data`"
    );
    assert_eq!(CalculateError::EmptyCanvas.to_string(), "nothing to calculate: the canvas is empty");
}
