//! Task tools.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn task_id() -> Param {
    Param::path("task_id", ParamKind::Integer, "The unique identifier of the task")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_tasks", "/tasks", "List all tasks with pagination.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_task", "/tasks/{task_id}", "Get detailed information about a specific task.")
            .param(task_id()),
        Endpoint::post("create_task", "/tasks", "Create a new task.")
            .param(Param::body("title", ParamKind::String, "Task title").required())
            .param(Param::body("due_date", ParamKind::String, "Due date (ISO 8601)"))
            .param(Param::body("candidate_id", ParamKind::Integer, "Related candidate id"))
            .param(Param::body("job_id", ParamKind::Integer, "Related job id"))
            .param(Param::body("assigned_to", ParamKind::Integer, "Assignee user id"))
            .param(Param::body("description", ParamKind::String, "Task description")),
        Endpoint::put("update_task", "/tasks/{task_id}", "Update an existing task.")
            .param(task_id())
            .param(Param::body("title", ParamKind::String, "Updated title"))
            .param(Param::body("due_date", ParamKind::String, "Updated due date"))
            .param(Param::body("status", ParamKind::String, "Updated status"))
            .param(Param::body("assigned_to", ParamKind::Integer, "Updated assignee user id"))
            .param(Param::body("description", ParamKind::String, "Updated description")),
        Endpoint::delete("delete_task", "/tasks/{task_id}", "Delete a task.").param(task_id()),
    ]
}
