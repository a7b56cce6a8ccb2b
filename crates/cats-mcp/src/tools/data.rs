//! Data and configuration toolsets: tags, webhooks, users, triggers,
//! attachments, backups and the audit event stream.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn id(name: &'static str, description: &'static str) -> Param {
    Param::path(name, ParamKind::Id, description)
}

pub fn tags() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_tags", "/tags", "List all tags in the system.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_tag", "/tags/{tag_id}", "Get details of a specific tag.")
            .param(id("tag_id", "The unique identifier of the tag")),
    ]
}

pub fn webhooks() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_webhooks", "/webhooks", "List all configured webhooks.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_webhook", "/webhooks/{webhook_id}", "Get details of a specific webhook configuration.")
            .param(id("webhook_id", "The unique identifier of the webhook")),
        Endpoint::post("create_webhook", "/webhooks", "Create a new webhook subscription.")
            .param(Param::body("target_url", ParamKind::String, "HTTPS URL receiving event notifications").required())
            .param(Param::body("events", ParamKind::StringArray, "Event types to subscribe to (e.g., 'candidate.created')").required())
            .param(
                Param::body("signing_key", ParamKind::String, "Secret used to sign webhook payloads")
                    .required()
                    .as_key("secret"),
            ),
        Endpoint::delete("delete_webhook", "/webhooks/{webhook_id}", "Delete a webhook subscription.")
            .param(id("webhook_id", "The unique identifier of the webhook")),
    ]
}

pub fn users() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_users", "/users", "List all users in the organization.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_user", "/users/{user_id}", "Get details of a specific user.")
            .param(id("user_id", "The unique identifier of the user")),
    ]
}

pub fn triggers() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_triggers", "/triggers", "List all configured triggers.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get("get_trigger", "/triggers/{trigger_id}", "Get details of a specific trigger configuration.")
            .param(id("trigger_id", "The unique identifier of the trigger")),
    ]
}

pub fn attachments() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_attachment", "/attachments/{attachment_id}", "Get metadata for a specific attachment.")
            .param(id("attachment_id", "The unique identifier of the attachment")),
        Endpoint::delete("delete_attachment", "/attachments/{attachment_id}", "Delete an attachment.")
            .param(id("attachment_id", "The unique identifier of the attachment")),
        Endpoint::get(
            "download_attachment",
            "/attachments/{attachment_id}/download",
            "Download an attachment file.",
        )
        .param(id("attachment_id", "The unique identifier of the attachment")),
        Endpoint::post("parse_resume", "/attachments/parse", "Parse a resume using AI to extract structured data.")
            .param(
                Param::body("file_content", ParamKind::String, "Base64-encoded resume file")
                    .required()
                    .as_key("file"),
            )
            .param(Param::body("filename", ParamKind::String, "Original file name (e.g., 'resume.pdf')").required()),
    ]
}

pub fn backups() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_backups", "/backups", "List all system backups.")
            .param(per_page(25))
            .param(page())
            .param(Param::query("status", ParamKind::String, "Backup status to filter by")),
        Endpoint::get("get_backup", "/backups/{backup_id}", "Get details of a specific backup.")
            .param(id("backup_id", "The unique identifier of the backup")),
        Endpoint::post("create_backup", "/backups", "Create a new system backup.")
            .param(Param::body("include_attachments", ParamKind::Boolean, "Include attachment files").with_default(true))
            .param(Param::body("include_emails", ParamKind::Boolean, "Include email history").with_default(true))
            .param(Param::body("description", ParamKind::String, "Backup description")),
    ]
}

pub fn events() -> Vec<Endpoint> {
    vec![Endpoint::get("list_events", "/events", "List system events (audit log stream).")
        .param(Param::query("starting_after_id", ParamKind::Integer, "Return events after this event id"))
        .param(Param::query(
            "starting_after_timestamp",
            ParamKind::String,
            "Return events after this timestamp (ISO 8601)",
        ))]
}
