//! Contact tools.
//!
//! The list, search and filter tools return summaries; use `get_contact` for
//! the full record.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn contact_id() -> Param {
    Param::path("contact_id", ParamKind::Id, "The unique identifier of the contact")
}

fn email_id() -> Param {
    Param::path("email_id", ParamKind::Id, "The unique identifier of the email")
}

fn phone_id() -> Param {
    Param::path("phone_id", ParamKind::Id, "The unique identifier of the phone")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "list_contacts",
            "/contacts",
            "List contacts with pagination (returns SUMMARY by default).",
        )
        .param(per_page(10))
        .param(page())
        .summarized("contacts"),
        Endpoint::get(
            "get_contact",
            "/contacts/{contact_id}",
            "Get detailed information about a specific contact.",
        )
        .param(contact_id()),
        Endpoint::post("create_contact", "/contacts", "Create a new contact record.")
            .param(Param::body("first_name", ParamKind::String, "Contact's first name").required())
            .param(Param::body("last_name", ParamKind::String, "Contact's last name").required())
            .param(Param::body("email", ParamKind::String, "Contact's email address").required())
            .param(Param::body("company_id", ParamKind::Integer, "Company the contact belongs to"))
            .param(Param::body("title", ParamKind::String, "Job title"))
            .param(Param::body("phone", ParamKind::String, "Phone number"))
            .param(Param::body("notes", ParamKind::String, "Notes")),
        Endpoint::put("update_contact", "/contacts/{contact_id}", "Update an existing contact record.")
            .param(contact_id())
            .param(Param::body("first_name", ParamKind::String, "First name"))
            .param(Param::body("last_name", ParamKind::String, "Last name"))
            .param(Param::body("email", ParamKind::String, "Email address"))
            .param(Param::body("company_id", ParamKind::Integer, "Company id"))
            .param(Param::body("title", ParamKind::String, "Job title"))
            .param(Param::body("phone", ParamKind::String, "Phone number"))
            .param(Param::body("notes", ParamKind::String, "Notes")),
        Endpoint::delete("delete_contact", "/contacts/{contact_id}", "Delete a contact record (permanent).")
            .param(contact_id()),
        Endpoint::get(
            "search_contacts",
            "/contacts/search",
            "Search contacts by name, email, or other criteria (returns SUMMARY by default).",
        )
        .param(Param::query("query", ParamKind::String, "Search query string").required())
        .param(per_page(10))
        .summarized("contacts"),
        Endpoint::post(
            "filter_contacts",
            "/contacts/search",
            "Filter contacts using advanced criteria (returns SUMMARY by default).",
        )
        .param(Param::merge("filters", "Filter criteria merged into the search body"))
        .param(per_page(10).in_body())
        .param(page().in_body())
        .summarized("contacts"),
        Endpoint::get(
            "list_contact_activities",
            "/contacts/{contact_id}/activities",
            "List all activities for a specific contact.",
        )
        .param(contact_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "create_contact_activity",
            "/contacts/{contact_id}/activities",
            "Create an activity for a contact.",
        )
        .param(contact_id())
        .param(Param::body("activity_type", ParamKind::String, "Type of activity").required().as_key("type"))
        .param(Param::body("description", ParamKind::String, "Activity description").required())
        .param(Param::body("notes", ParamKind::String, "Additional notes")),
        Endpoint::get(
            "list_contact_attachments",
            "/contacts/{contact_id}/attachments",
            "List all attachments for a contact.",
        )
        .param(contact_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "upload_contact_attachment",
            "/contacts/{contact_id}/attachments",
            "Upload an attachment to a contact.",
        )
        .param(contact_id())
        .param(Param::whole_body("file_data", "Attachment payload")),
        Endpoint::get(
            "get_contact_custom_fields",
            "/contacts/{contact_id}/custom_fields",
            "Get custom fields for a contact.",
        )
        .param(contact_id()),
        Endpoint::get(
            "list_contact_emails",
            "/contacts/{contact_id}/emails",
            "List all email addresses for a contact.",
        )
        .param(contact_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "create_contact_email",
            "/contacts/{contact_id}/emails",
            "Add an email address to a contact.",
        )
        .param(contact_id())
        .param(Param::body("email", ParamKind::String, "Email address").required())
        .param(Param::body("email_type", ParamKind::String, "Type of email").with_default("work").as_key("type")),
        Endpoint::put(
            "update_contact_email",
            "/contacts/{contact_id}/emails/{email_id}",
            "Update a contact's email address.",
        )
        .param(contact_id())
        .param(email_id())
        .param(Param::body("email", ParamKind::String, "Email address").required())
        .param(Param::body("email_type", ParamKind::String, "Type of email").required().as_key("type")),
        Endpoint::delete(
            "delete_contact_email",
            "/contacts/{contact_id}/emails/{email_id}",
            "Delete a contact's email address.",
        )
        .param(contact_id())
        .param(email_id()),
        Endpoint::get(
            "list_contact_phones",
            "/contacts/{contact_id}/phones",
            "List all phone numbers for a contact.",
        )
        .param(contact_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "create_contact_phone",
            "/contacts/{contact_id}/phones",
            "Add a phone number to a contact.",
        )
        .param(contact_id())
        .param(Param::body("phone", ParamKind::String, "Phone number").required())
        .param(Param::body("phone_type", ParamKind::String, "Type of phone").with_default("work").as_key("type")),
        Endpoint::put(
            "update_contact_phone",
            "/contacts/{contact_id}/phones/{phone_id}",
            "Update a contact's phone number.",
        )
        .param(contact_id())
        .param(phone_id())
        .param(Param::body("phone", ParamKind::String, "Phone number").required())
        .param(Param::body("phone_type", ParamKind::String, "Type of phone").required().as_key("type")),
        Endpoint::delete(
            "delete_contact_phone",
            "/contacts/{contact_id}/phones/{phone_id}",
            "Delete a contact's phone number.",
        )
        .param(contact_id())
        .param(phone_id()),
        Endpoint::get(
            "list_contact_pipelines",
            "/contacts/{contact_id}/pipelines",
            "List all pipelines associated with a contact.",
        )
        .param(contact_id()),
        Endpoint::get("list_contact_tags", "/contacts/{contact_id}/tags", "List all tags applied to a contact.")
            .param(contact_id()),
        Endpoint::post(
            "replace_contact_tags",
            "/contacts/{contact_id}/tags",
            "Replace all tags on a contact (replaces existing tags).",
        )
        .param(contact_id())
        .param(Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()),
        Endpoint::put(
            "attach_contact_tags",
            "/contacts/{contact_id}/tags",
            "Attach additional tags to a contact (additive).",
        )
        .param(contact_id())
        .param(Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()),
        Endpoint::delete(
            "delete_contact_tag",
            "/contacts/{contact_id}/tags/{tag_id}",
            "Remove a specific tag from a contact.",
        )
        .param(contact_id())
        .param(Param::path("tag_id", ParamKind::Id, "The unique identifier of the tag")),
        Endpoint::get(
            "get_contact_custom_field",
            "/contacts/{contact_id}/custom_fields/{field_id}",
            "Get a specific custom field for a contact.",
        )
        .param(contact_id())
        .param(Param::path("field_id", ParamKind::Id, "The unique identifier of the custom field")),
        Endpoint::get(
            "get_contact_thumbnail",
            "/contacts/{contact_id}/thumbnail",
            "Get a contact's thumbnail image.",
        )
        .param(contact_id()),
        Endpoint::put(
            "change_contact_thumbnail",
            "/contacts/{contact_id}/thumbnail",
            "Update a contact's thumbnail image.",
        )
        .param(contact_id())
        .param(Param::body("image_data", ParamKind::String, "Image data (URL or base64)").required().as_key("image")),
    ]
}
