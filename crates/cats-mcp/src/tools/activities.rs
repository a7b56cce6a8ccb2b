//! Activity log tools.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn activity_id() -> Param {
    Param::path("activity_id", ParamKind::Id, "The unique identifier of the activity")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_activities", "/activities", "List all activities with pagination.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get(
            "get_activity",
            "/activities/{activity_id}",
            "Get detailed information about a specific activity.",
        )
        .param(activity_id()),
        Endpoint::put("update_activity", "/activities/{activity_id}", "Update an existing activity.")
            .param(activity_id())
            .param(Param::body("activity_type", ParamKind::String, "Type of activity").as_key("type"))
            .param(Param::body("description", ParamKind::String, "Activity description"))
            .param(Param::body("notes", ParamKind::String, "Additional notes"))
            .param(Param::body("completed", ParamKind::Boolean, "Whether the activity is completed")),
        Endpoint::delete("delete_activity", "/activities/{activity_id}", "Delete an activity record (permanent).")
            .param(activity_id()),
        Endpoint::get(
            "search_activities",
            "/activities/search",
            "Search activities by description or other criteria.",
        )
        .param(Param::query("query", ParamKind::String, "Search query string").required())
        .param(per_page(25)),
        Endpoint::post(
            "filter_activities",
            "/activities/search",
            "Filter activities using advanced criteria.",
        )
        .param(Param::merge("filters", "Filter criteria merged into the search body"))
        .param(per_page(25).in_body())
        .param(page().in_body()),
    ]
}
