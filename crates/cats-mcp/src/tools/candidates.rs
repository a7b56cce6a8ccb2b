//! Candidate tools: records, search, activities, attachments, emails,
//! phones, tags and work history.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn candidate_id() -> Param {
    Param::path("candidate_id", ParamKind::Integer, "The unique identifier of the candidate")
}

/// Candidate id carried in the request body rather than the path.
fn candidate_id_body() -> Param {
    Param::body("candidate_id", ParamKind::Integer, "The unique identifier of the candidate").required()
}

fn tag_ids() -> Param {
    Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_candidates", "/candidates", "List all candidates with pagination.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get(
            "get_candidate",
            "/candidates/{candidate_id}",
            "Get detailed information about a specific candidate.",
        )
        .param(candidate_id()),
        Endpoint::post("create_candidate", "/candidates", "Create a new candidate in the system.")
            .param(Param::body("first_name", ParamKind::String, "Candidate's first name").required())
            .param(Param::body("last_name", ParamKind::String, "Candidate's last name").required())
            .param(Param::body("email", ParamKind::String, "Candidate's email address").required())
            .param(Param::body("phone", ParamKind::String, "Candidate's phone number"))
            .param(Param::body("resume_url", ParamKind::String, "URL to the candidate's resume"))
            .param(Param::body("linkedin_url", ParamKind::String, "LinkedIn profile URL")),
        Endpoint::put(
            "update_candidate",
            "/candidates/{candidate_id}",
            "Update an existing candidate's information.",
        )
        .param(candidate_id())
        .param(Param::body("first_name", ParamKind::String, "Updated first name"))
        .param(Param::body("last_name", ParamKind::String, "Updated last name"))
        .param(Param::body("email", ParamKind::String, "Updated email address"))
        .param(Param::body("phone", ParamKind::String, "Updated phone number")),
        Endpoint::delete(
            "delete_candidate",
            "/candidates/{candidate_id}",
            "Permanently delete a candidate from the system.",
        )
        .param(candidate_id()),
        Endpoint::get(
            "search_candidates",
            "/candidates/search",
            "Search candidates by name, email, or other fields.",
        )
        .param(Param::query("query", ParamKind::String, "Search query string").required().as_key("q"))
        .param(per_page(25)),
        Endpoint::post(
            "filter_candidates",
            "/candidates/search",
            "Filter candidates with advanced criteria.",
        )
        .param(Param::body("status", ParamKind::String, "Candidate status to filter by"))
        .param(Param::body("job_id", ParamKind::Integer, "Only candidates in this job's pipeline"))
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "authorize_candidate",
            "/candidates/authorization",
            "Authorize a candidate action (e.g., portal access).",
        )
        .param(candidate_id_body())
        .param(Param::body("action", ParamKind::String, "Action to authorize").required()),
        Endpoint::get(
            "list_candidate_pipelines",
            "/candidates/{candidate_id}/pipelines",
            "List all pipelines associated with a candidate.",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::get(
            "list_candidate_activities",
            "/candidates/{candidate_id}/activities",
            "List all activities for a candidate.",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::post(
            "create_candidate_activity",
            "/activities",
            "Create a new activity for a candidate.",
        )
        .param(candidate_id_body())
        .param(
            Param::body("activity_type", ParamKind::String, "Type of activity (e.g., 'call', 'email', 'meeting')")
                .required()
                .as_key("type"),
        )
        .param(Param::body("description", ParamKind::String, "Activity description").required())
        .param(Param::body("date", ParamKind::String, "Activity date (ISO 8601)")),
        Endpoint::get(
            "list_candidate_attachments",
            "/candidates/{candidate_id}/attachments",
            "List all attachments for a candidate (resume, cover letter, etc).",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::post(
            "upload_candidate_attachment",
            "/attachments",
            "Upload an attachment for a candidate.",
        )
        .param(candidate_id_body())
        .param(Param::body("file_name", ParamKind::String, "Name of the file").required())
        .param(Param::body("file_type", ParamKind::String, "Type of file (e.g., 'resume', 'cover_letter')").required())
        .param(Param::body("file_url", ParamKind::String, "URL to the file to upload").required()),
        Endpoint::get(
            "list_candidate_custom_fields",
            "/candidates/{candidate_id}/custom_fields",
            "Get all custom fields for a candidate.",
        )
        .param(candidate_id()),
        Endpoint::get(
            "list_candidate_emails",
            "/candidates/{candidate_id}/emails",
            "List all email addresses for a candidate.",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::post(
            "create_candidate_email",
            "/candidates/{candidate_id}/emails",
            "Add a new email address for a candidate.",
        )
        .param(candidate_id())
        .param(Param::body("email", ParamKind::String, "Email address").required())
        .param(
            Param::body("email_type", ParamKind::String, "Type of email (e.g., 'personal', 'work')")
                .with_default("personal")
                .as_key("type"),
        ),
        Endpoint::put(
            "update_candidate_email",
            "/emails/{email_id}",
            "Update a candidate's email address.",
        )
        .param(candidate_id_body())
        .param(Param::path("email_id", ParamKind::Integer, "The unique identifier of the email"))
        .param(Param::body("email", ParamKind::String, "Updated email address").required())
        .param(Param::body("email_type", ParamKind::String, "Updated email type").as_key("type")),
        Endpoint::delete(
            "delete_candidate_email",
            "/emails/{email_id}",
            "Delete a candidate's email address.",
        )
        .param(Param::path("email_id", ParamKind::Integer, "The unique identifier of the email")),
        Endpoint::get(
            "list_candidate_phones",
            "/candidates/{candidate_id}/phones",
            "List all phone numbers for a candidate.",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::post("create_candidate_phone", "/phones", "Add a new phone number for a candidate.")
            .param(candidate_id_body())
            .param(Param::body("phone", ParamKind::String, "Phone number").required())
            .param(
                Param::body("phone_type", ParamKind::String, "Type of phone (e.g., 'mobile', 'home', 'work')")
                    .with_default("mobile")
                    .as_key("type"),
            ),
        Endpoint::put(
            "update_candidate_phone",
            "/phones/{phone_id}",
            "Update a candidate's phone number.",
        )
        .param(Param::path("phone_id", ParamKind::Integer, "The unique identifier of the phone"))
        .param(Param::body("phone", ParamKind::String, "Updated phone number").required())
        .param(Param::body("phone_type", ParamKind::String, "Updated phone type").as_key("type")),
        Endpoint::delete(
            "delete_candidate_phone",
            "/phones/{phone_id}",
            "Delete a candidate's phone number.",
        )
        .param(Param::path("phone_id", ParamKind::Integer, "The unique identifier of the phone")),
        Endpoint::get(
            "list_candidate_tags",
            "/candidates/{candidate_id}/tags",
            "List all tags assigned to a candidate.",
        )
        .param(candidate_id()),
        Endpoint::put(
            "replace_candidate_tags",
            "/candidates/{candidate_id}/tags",
            "Replace all tags for a candidate (removes existing, adds new).",
        )
        .param(candidate_id())
        .param(tag_ids()),
        Endpoint::post(
            "attach_candidate_tags",
            "/candidates/{candidate_id}/tags",
            "Add tags to a candidate (keeps existing tags).",
        )
        .param(candidate_id())
        .param(tag_ids()),
        Endpoint::delete(
            "delete_candidate_tag",
            "/candidates/{candidate_id}/tags",
            "Remove a specific tag from a candidate.",
        )
        .param(candidate_id())
        .param(Param::body("tag_id", ParamKind::Integer, "Tag id to remove").required()),
        Endpoint::get(
            "list_candidate_work_history",
            "/candidates/{candidate_id}/work_history",
            "List all work history entries for a candidate.",
        )
        .param(candidate_id())
        .param(per_page(25)),
        Endpoint::post(
            "create_candidate_work_history",
            "/candidates/{candidate_id}/work_history",
            "Add a work history entry for a candidate.",
        )
        .param(candidate_id())
        .param(Param::body("company", ParamKind::String, "Company name").required())
        .param(Param::body("title", ParamKind::String, "Job title").required())
        .param(Param::body("start_date", ParamKind::String, "Start date (YYYY-MM-DD)").required())
        .param(Param::body("end_date", ParamKind::String, "End date (YYYY-MM-DD)"))
        .param(Param::body("description", ParamKind::String, "Role description")),
    ]
}
