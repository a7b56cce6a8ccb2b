//! Work history tools. Entries are created through `create_candidate_work_history`.

use super::{Endpoint, Param, ParamKind};

fn work_history_id() -> Param {
    Param::path("work_history_id", ParamKind::Id, "The unique identifier of the work history entry")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_work_history",
            "/work_history/{work_history_id}",
            "Get detailed information about a specific work history entry.",
        )
        .param(work_history_id()),
        Endpoint::put(
            "update_work_history",
            "/work_history/{work_history_id}",
            "Update an existing work history entry.",
        )
        .param(work_history_id())
        .param(Param::body("company_name", ParamKind::String, "Employer name"))
        .param(Param::body("title", ParamKind::String, "Job title"))
        .param(Param::body("start_date", ParamKind::String, "Start date (YYYY-MM-DD)"))
        .param(Param::body("end_date", ParamKind::String, "End date (YYYY-MM-DD)"))
        .param(Param::body("description", ParamKind::String, "Role description"))
        .param(Param::body("currently_employed", ParamKind::Boolean, "Whether this is the current position")),
        Endpoint::delete(
            "delete_work_history",
            "/work_history/{work_history_id}",
            "Delete a work history entry (permanent).",
        )
        .param(work_history_id()),
    ]
}
