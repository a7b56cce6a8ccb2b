//! Pipeline tools: candidate-in-job entries, workflows and statuses.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn pipeline_id() -> Param {
    Param::path("pipeline_id", ParamKind::Integer, "The unique identifier of the pipeline")
}

fn workflow_id() -> Param {
    Param::path("workflow_id", ParamKind::Integer, "The unique identifier of the workflow")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_pipelines", "/pipelines", "List all pipelines with pagination.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get(
            "get_pipeline",
            "/pipelines/{pipeline_id}",
            "Get detailed information about a specific pipeline.",
        )
        .param(pipeline_id()),
        Endpoint::post(
            "create_pipeline",
            "/pipelines",
            "Create a new pipeline entry (candidate in job pipeline).",
        )
        .param(Param::body("name", ParamKind::String, "Pipeline name").required())
        .param(Param::body("job_id", ParamKind::Integer, "Job id"))
        .param(Param::body("candidate_id", ParamKind::Integer, "Candidate id"))
        .param(Param::body("status_id", ParamKind::Integer, "Initial status id")),
        Endpoint::put("update_pipeline", "/pipelines/{pipeline_id}", "Update a pipeline's properties.")
            .param(pipeline_id())
            .param(Param::body("name", ParamKind::String, "Updated pipeline name"))
            .param(Param::body("status_id", ParamKind::Integer, "Updated status id")),
        Endpoint::delete("delete_pipeline", "/pipelines/{pipeline_id}", "Delete a pipeline entry.")
            .param(pipeline_id()),
        Endpoint::get(
            "filter_pipelines",
            "/pipelines",
            "Filter pipelines by job, candidate, or status.",
        )
        .param(Param::query("job_id", ParamKind::Integer, "Job id to filter by"))
        .param(Param::query("candidate_id", ParamKind::Integer, "Candidate id to filter by"))
        .param(Param::query("status_id", ParamKind::Integer, "Status id to filter by"))
        .param(per_page(25))
        .param(page()),
        Endpoint::get(
            "list_pipeline_workflows",
            "/pipelines/{pipeline_id}/workflows",
            "List all workflows for a pipeline.",
        )
        .param(pipeline_id()),
        Endpoint::get(
            "get_pipeline_workflow",
            "/pipelines/{pipeline_id}/workflows/{workflow_id}",
            "Get details of a specific pipeline workflow.",
        )
        .param(pipeline_id())
        .param(workflow_id()),
        Endpoint::get(
            "list_pipeline_workflow_statuses",
            "/workflows/{workflow_id}/statuses",
            "List all statuses/stages in a workflow.",
        )
        .param(workflow_id()),
        Endpoint::get(
            "get_pipeline_workflow_status",
            "/workflows/{workflow_id}/statuses/{status_id}",
            "Get details of a specific workflow status.",
        )
        .param(workflow_id())
        .param(Param::path("status_id", ParamKind::Integer, "The unique identifier of the status")),
        Endpoint::get(
            "get_pipeline_statuses",
            "/pipelines/{pipeline_id}/statuses",
            "Get available statuses for a pipeline.",
        )
        .param(pipeline_id()),
        Endpoint::put(
            "change_pipeline_status",
            "/pipelines/{pipeline_id}/status",
            "Move a pipeline to a different status/stage.",
        )
        .param(pipeline_id())
        .param(Param::body("status_id", ParamKind::Integer, "Target status id").required())
        .param(Param::body("notes", ParamKind::String, "Notes about the status change")),
    ]
}
