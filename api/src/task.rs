use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::GraphqlClient;
use crate::Result;
use crate::organization_or_identity;
use crate::run;
use crate::types::PersonRef;
use crate::types::TaskState;

const CREATE_TASK: &str = r#"
mutation CreateTask($input: CreateTaskInput!) {
  createTask(input: $input) {
    taskEdge { node { id name description state timeEstimate deadline assignedTo { id fullName } } }
  }
}"#;

const UPDATE_TASK: &str = r#"
mutation UpdateTask($input: UpdateTaskInput!) {
  updateTask(input: $input) {
    task { id name description state timeEstimate deadline assignedTo { id fullName } }
  }
}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: TaskState,
    /// ISO-8601 duration, e.g. `PT2H`.
    #[serde(default)]
    pub time_estimate: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<PersonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub task_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

pub async fn create_task(client: &GraphqlClient, mut input: CreateTaskInput) -> Result<Task> {
    organization_or_identity(client, &mut input.organization_id)?;
    run(
        client,
        CREATE_TASK,
        json!({ "input": input }),
        "/createTask/taskEdge/node",
    )
    .await
}

pub async fn update_task(client: &GraphqlClient, input: UpdateTaskInput) -> Result<Task> {
    run(client, UPDATE_TASK, json!({ "input": input }), "/updateTask/task").await
}
