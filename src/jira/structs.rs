use serde::Serialize;

/// One submittable work log: everything the driver derives from a row plus a
/// single parsed time range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogEntry {
    pub issue_key: String,
    pub comment: String,
    /// UTC instant, already rendered as `YYYY-MM-DDTHH:MM:SS.mmm+0000`.
    pub started: String,
    pub time_spent_seconds: i64,
}

#[derive(Serialize, Debug)]
pub struct WorklogRequest {
    pub comment: CommentDoc,
    pub started: String,
    #[serde(rename = "timeSpentSeconds")]
    pub time_spent_seconds: i64,
}

/// Jira cloud wants comments as an Atlassian Document Format tree; a single
/// paragraph with one text node is enough for plain text.
#[derive(Serialize, Debug)]
pub struct CommentDoc {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    pub content: Vec<Paragraph>,
}

#[derive(Serialize, Debug)]
pub struct Paragraph {
    #[serde(rename = "type")]
    pub node_type: String,
    pub content: Vec<TextNode>,
}

#[derive(Serialize, Debug)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub text: String,
}

impl WorklogRequest {
    pub fn from_entry(entry: &WorklogEntry) -> WorklogRequest {
        WorklogRequest {
            comment: CommentDoc {
                doc_type: "doc".to_string(),
                version: 1,
                content: vec![Paragraph {
                    node_type: "paragraph".to_string(),
                    content: vec![TextNode {
                        node_type: "text".to_string(),
                        text: entry.comment.to_string(),
                    }],
                }],
            },
            started: entry.started.to_string(),
            time_spent_seconds: entry.time_spent_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_jira_comment_document() {
        let entry = WorklogEntry {
            issue_key: "AB-12".to_string(),
            comment: "Fireworks".to_string(),
            started: "2024-07-04T18:00:00.000+0000".to_string(),
            time_spent_seconds: 5400,
        };
        let body = serde_json::to_value(WorklogRequest::from_entry(&entry)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "comment": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": "Fireworks" }]
                    }]
                },
                "started": "2024-07-04T18:00:00.000+0000",
                "timeSpentSeconds": 5400
            })
        );
    }
}
