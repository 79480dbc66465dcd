use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAccepted {
    pub message: String,
    pub submission_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SubmissionRejected {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionFailed {
    pub message: String,
    pub error: String,
}
