use crate::gitlab::{GitlabClient, ResourcePath, Transport};
use crate::model::{Issue, Note, Result};

pub trait NoteRequester {
    async fn fetch_issue_notes(&self, issue: &Issue) -> Result<Vec<Note>>;
}

impl<T: Transport> NoteRequester for GitlabClient<T> {
    async fn fetch_issue_notes(&self, issue: &Issue) -> Result<Vec<Note>> {
        let resource = ResourcePath::new(format!(
            "projects/{}/issues/{}/notes",
            issue.project_id, issue.iid
        ));
        self.fetch_all(&resource).await
    }
}
