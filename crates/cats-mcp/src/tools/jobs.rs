//! Job tools, including job lists and applications.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn job_id() -> Param {
    Param::path("job_id", ParamKind::Integer, "The unique identifier of the job")
}

fn list_id() -> Param {
    Param::path("list_id", ParamKind::Integer, "The unique identifier of the job list")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_jobs", "/jobs", "List all jobs with pagination.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_job", "/jobs/{job_id}", "Get detailed information about a specific job.")
            .param(job_id()),
        Endpoint::post("create_job", "/jobs", "Create a new job posting.")
            .param(Param::body("title", ParamKind::String, "Job title").required())
            .param(Param::body("description", ParamKind::String, "Job description").required())
            .param(Param::body("department", ParamKind::String, "Department name"))
            .param(Param::body("location", ParamKind::String, "Job location"))
            .param(
                Param::body("employment_type", ParamKind::String, "Employment type (e.g., 'full-time', 'contract')")
                    .with_default("full-time"),
            )
            .param(Param::body("salary_min", ParamKind::Integer, "Minimum salary"))
            .param(Param::body("salary_max", ParamKind::Integer, "Maximum salary")),
        Endpoint::put("update_job", "/jobs/{job_id}", "Update an existing job posting.")
            .param(job_id())
            .param(Param::body("title", ParamKind::String, "Updated job title"))
            .param(Param::body("description", ParamKind::String, "Updated job description"))
            .param(Param::body("status", ParamKind::String, "Updated job status"))
            .param(Param::body("location", ParamKind::String, "Updated job location")),
        Endpoint::delete("delete_job", "/jobs/{job_id}", "Permanently delete a job posting.")
            .param(job_id()),
        Endpoint::get("search_jobs", "/jobs/search", "Search jobs by title, description, or other fields.")
            .param(Param::query("query", ParamKind::String, "Search query string").required().as_key("q"))
            .param(per_page(25)),
        Endpoint::post("filter_jobs", "/jobs/search", "Filter jobs with advanced criteria.")
            .param(Param::body("status", ParamKind::String, "Job status to filter by"))
            .param(Param::body("department", ParamKind::String, "Department to filter by"))
            .param(Param::body("location", ParamKind::String, "Location to filter by"))
            .param(per_page(25))
            .param(page()),
        Endpoint::get("list_job_pipelines", "/jobs/{job_id}/pipelines", "List all pipelines for a job.")
            .param(job_id())
            .param(per_page(25)),
        Endpoint::get(
            "list_job_candidates",
            "/jobs/{job_id}/candidates",
            "List all candidates who applied to a job.",
        )
        .param(job_id())
        .param(per_page(25)),
        Endpoint::get("list_job_activities", "/jobs/{job_id}/activities", "List all activities for a job.")
            .param(job_id())
            .param(per_page(25)),
        Endpoint::get("list_job_attachments", "/jobs/{job_id}/attachments", "List all attachments for a job.")
            .param(job_id())
            .param(per_page(25)),
        Endpoint::get("list_job_custom_fields", "/jobs/{job_id}/custom_fields", "Get all custom fields for a job.")
            .param(job_id()),
        Endpoint::put("update_job_custom_fields", "/jobs/{job_id}/custom_fields", "Update custom fields for a job.")
            .param(job_id())
            .param(Param::whole_body("fields", "Custom field values keyed by field id or name")),
        Endpoint::get("list_job_tags", "/jobs/{job_id}/tags", "List all tags assigned to a job.")
            .param(job_id()),
        Endpoint::post("attach_job_tags", "/jobs/{job_id}/tags", "Add tags to a job (keeps existing tags).")
            .param(job_id())
            .param(Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()),
        Endpoint::delete("delete_job_tag", "/jobs/{job_id}/tags", "Remove a specific tag from a job.")
            .param(job_id())
            .param(Param::body("tag_id", ParamKind::Integer, "Tag id to remove").required()),
        Endpoint::get("list_job_tasks", "/jobs/{job_id}/tasks", "List all tasks associated with a job.")
            .param(job_id())
            .param(per_page(25)),
        Endpoint::get("list_job_lists", "/lists", "List all job lists/collections.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_job_list", "/lists/{list_id}", "Get details of a specific job list.")
            .param(list_id()),
        Endpoint::post("create_job_list", "/lists", "Create a new job list/collection.")
            .param(Param::body("name", ParamKind::String, "List name").required())
            .param(Param::body("description", ParamKind::String, "List description"))
            .constant("type", "job"),
        Endpoint::put("update_job_list", "/lists/{list_id}", "Update a job list's properties.")
            .param(list_id())
            .param(Param::body("name", ParamKind::String, "Updated list name"))
            .param(Param::body("description", ParamKind::String, "Updated list description")),
        Endpoint::delete("delete_job_list", "/lists/{list_id}", "Delete a job list.")
            .param(list_id()),
        Endpoint::get("list_job_list_items", "/lists/{list_id}/candidates", "List all jobs in a specific job list.")
            .param(list_id())
            .param(per_page(25)),
        Endpoint::get(
            "get_job_list_item",
            "/lists/{list_id}/candidates/{job_id}",
            "Get a specific job from a job list.",
        )
        .param(list_id())
        .param(job_id()),
        // List membership endpoints name their members candidates regardless of list type.
        Endpoint::post("create_job_list_items", "/lists/{list_id}/candidates", "Add jobs to a job list.")
            .param(list_id())
            .param(Param::body("job_ids", ParamKind::IntegerArray, "Job ids to add").required().as_key("candidate_ids")),
        Endpoint::delete("delete_job_list_item", "/lists/{list_id}/candidates", "Remove a job from a job list.")
            .param(list_id())
            .param(Param::body("job_id", ParamKind::Integer, "Job id to remove").required().as_key("candidate_id")),
        Endpoint::get(
            "list_job_applications",
            "/jobs/{job_id}/applications",
            "List all applications for a specific job.",
        )
        .param(job_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::get(
            "get_job_application",
            "/applications/{application_id}",
            "Get details of a specific application.",
        )
        .param(Param::path("application_id", ParamKind::Integer, "The unique identifier of the application")),
        Endpoint::get(
            "list_job_application_fields",
            "/jobs/{job_id}/application_fields",
            "List all application form fields for a job.",
        )
        .param(job_id()),
    ]
}
