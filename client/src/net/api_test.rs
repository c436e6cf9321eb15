use super::*;

#[test]
fn lead_endpoint_formats_expected_path() {
    let id = Uuid::nil();
    assert_eq!(lead_endpoint(id), "/api/leads/00000000-0000-0000-0000-000000000000");
}

#[test]
fn collection_endpoints_match_server_routes() {
    assert_eq!(SAMPLE_TRANSCRIPTS_ENDPOINT, "/api/sample-transcripts");
    assert_eq!(LEADS_ENDPOINT, "/api/leads");
    assert_eq!(LEAD_GROUPS_ENDPOINT, "/api/lead-groups");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("leads", 503), "leads request failed: 503");
}
