use crate::probs::*;

#[test]
fn test_problem_type_urn() {
    assert_eq!(ProblemType::Connection.to_str(), "urn:acme:error:connection");
    assert_eq!(ProblemType::Connection.to_string(), "urn:acme:error:connection");
}

#[test]
fn test_problem_details_display() {
    let prob = ProblemDetails::connection("DNS query timed out");
    assert_eq!(prob.problem_type, ProblemType::Connection);
    assert_eq!(prob.to_string(), "urn:acme:error:connection :: DNS query timed out");
}

#[test]
fn test_problem_type_serde_uses_urn() {
    let json = serde_json::to_string(&ProblemType::Connection).unwrap();
    assert_eq!(json, "\"urn:acme:error:connection\"");
    assert!(serde_json::from_str::<ProblemType>("\"urn:acme:error:tls\"").is_err());

    let prob: ProblemDetails =
        serde_json::from_str(r#"{"type": "urn:acme:error:connection", "detail": "boom"}"#).unwrap();
    assert_eq!(prob, ProblemDetails::connection("boom"));
}
