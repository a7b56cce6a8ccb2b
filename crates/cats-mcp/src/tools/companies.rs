//! Company tools.
//!
//! The list, search and filter tools return summaries; use `get_company` for
//! the full record.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn company_id() -> Param {
    Param::path("company_id", ParamKind::Id, "The unique identifier of the company")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "list_companies",
            "/companies",
            "List companies with pagination (returns SUMMARY by default).",
        )
        .param(per_page(10))
        .param(page())
        .summarized("companies"),
        Endpoint::get(
            "get_company",
            "/companies/{company_id}",
            "Get detailed information about a specific company.",
        )
        .param(company_id()),
        Endpoint::post("create_company", "/companies", "Create a new company record.")
            .param(Param::body("name", ParamKind::String, "Company name").required())
            .param(Param::body("website", ParamKind::String, "Company website"))
            .param(Param::body("phone", ParamKind::String, "Main phone number"))
            .param(Param::body("address", ParamKind::String, "Street address"))
            .param(Param::body("city", ParamKind::String, "City"))
            .param(Param::body("state", ParamKind::String, "State or region"))
            .param(Param::body("zip_code", ParamKind::String, "Postal code"))
            .param(Param::body("notes", ParamKind::String, "Notes")),
        Endpoint::put("update_company", "/companies/{company_id}", "Update an existing company record.")
            .param(company_id())
            .param(Param::body("name", ParamKind::String, "Company name"))
            .param(Param::body("website", ParamKind::String, "Company website"))
            .param(Param::body("phone", ParamKind::String, "Main phone number"))
            .param(Param::body("address", ParamKind::String, "Street address"))
            .param(Param::body("city", ParamKind::String, "City"))
            .param(Param::body("state", ParamKind::String, "State or region"))
            .param(Param::body("zip_code", ParamKind::String, "Postal code"))
            .param(Param::body("notes", ParamKind::String, "Notes")),
        Endpoint::delete("delete_company", "/companies/{company_id}", "Delete a company record (permanent).")
            .param(company_id()),
        Endpoint::get(
            "search_companies",
            "/companies/search",
            "Search companies by name or other criteria (returns SUMMARY by default).",
        )
        .param(Param::query("query", ParamKind::String, "Search query string").required())
        .param(per_page(10))
        .summarized("companies"),
        Endpoint::post(
            "filter_companies",
            "/companies/search",
            "Filter companies using advanced criteria (returns SUMMARY by default).",
        )
        .param(Param::merge("filters", "Filter criteria merged into the search body"))
        .param(per_page(10).in_body())
        .param(page().in_body())
        .summarized("companies"),
        Endpoint::get(
            "list_company_activities",
            "/companies/{company_id}/activities",
            "List all activities for a specific company.",
        )
        .param(company_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "create_company_activity",
            "/companies/{company_id}/activities",
            "Create an activity for a company.",
        )
        .param(company_id())
        .param(Param::body("activity_type", ParamKind::String, "Type of activity").required().as_key("type"))
        .param(Param::body("description", ParamKind::String, "Activity description").required())
        .param(Param::body("notes", ParamKind::String, "Additional notes")),
        Endpoint::get(
            "list_company_attachments",
            "/companies/{company_id}/attachments",
            "List all attachments for a company.",
        )
        .param(company_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "upload_company_attachment",
            "/companies/{company_id}/attachments",
            "Upload an attachment to a company.",
        )
        .param(company_id())
        .param(Param::whole_body("file_data", "Attachment payload")),
        Endpoint::get(
            "list_company_contacts",
            "/companies/{company_id}/contacts",
            "List all contacts associated with a company.",
        )
        .param(company_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::get(
            "get_company_custom_fields",
            "/companies/{company_id}/custom_fields",
            "Get custom fields for a company.",
        )
        .param(company_id()),
        Endpoint::get(
            "list_company_departments",
            "/companies/{company_id}/departments",
            "List all departments within a company.",
        )
        .param(company_id()),
        Endpoint::post(
            "create_company_department",
            "/companies/{company_id}/departments",
            "Create a new department for a company.",
        )
        .param(company_id())
        .param(Param::body("name", ParamKind::String, "Department name").required())
        .param(Param::body("description", ParamKind::String, "Department description")),
        Endpoint::put(
            "update_company_department",
            "/companies/{company_id}/departments/{department_id}",
            "Update a company department.",
        )
        .param(company_id())
        .param(Param::path("department_id", ParamKind::Id, "The unique identifier of the department"))
        .param(Param::body("name", ParamKind::String, "Department name"))
        .param(Param::body("description", ParamKind::String, "Department description")),
        Endpoint::delete(
            "delete_company_department",
            "/companies/{company_id}/departments/{department_id}",
            "Delete a company department.",
        )
        .param(company_id())
        .param(Param::path("department_id", ParamKind::Id, "The unique identifier of the department")),
        Endpoint::get(
            "list_company_pipelines",
            "/companies/{company_id}/pipelines",
            "List all pipelines associated with a company.",
        )
        .param(company_id()),
        Endpoint::get("list_company_tags", "/companies/{company_id}/tags", "List all tags applied to a company.")
            .param(company_id()),
        Endpoint::post(
            "replace_company_tags",
            "/companies/{company_id}/tags",
            "Replace all tags on a company (replaces existing tags).",
        )
        .param(company_id())
        .param(Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()),
        Endpoint::put(
            "attach_company_tags",
            "/companies/{company_id}/tags",
            "Attach additional tags to a company (additive).",
        )
        .param(company_id())
        .param(Param::body("tag_ids", ParamKind::IntegerArray, "Tag ids").required()),
        Endpoint::delete(
            "delete_company_tag",
            "/companies/{company_id}/tags/{tag_id}",
            "Remove a specific tag from a company.",
        )
        .param(company_id())
        .param(Param::path("tag_id", ParamKind::Id, "The unique identifier of the tag")),
        Endpoint::get(
            "list_company_phones",
            "/companies/{company_id}/phones",
            "List all phone numbers for a company.",
        )
        .param(company_id())
        .param(per_page(25)),
        Endpoint::get(
            "get_company_phone",
            "/companies/{company_id}/phones/{phone_id}",
            "Get a specific company phone.",
        )
        .param(company_id())
        .param(Param::path("phone_id", ParamKind::Id, "The unique identifier of the phone")),
        Endpoint::post(
            "create_company_phone",
            "/companies/{company_id}/phones",
            "Add a phone number for a company.",
        )
        .param(company_id())
        .param(Param::body("phone", ParamKind::String, "Phone number").required())
        .param(Param::body("phone_type", ParamKind::String, "Type of phone").with_default("work").as_key("type")),
        Endpoint::put(
            "update_company_phone",
            "/companies/{company_id}/phones/{phone_id}",
            "Update a company phone number.",
        )
        .param(company_id())
        .param(Param::path("phone_id", ParamKind::Id, "The unique identifier of the phone"))
        .param(Param::body("phone", ParamKind::String, "Phone number"))
        .param(Param::body("phone_type", ParamKind::String, "Type of phone").as_key("type")),
        Endpoint::delete(
            "delete_company_phone",
            "/companies/{company_id}/phones/{phone_id}",
            "Delete a company phone number.",
        )
        .param(company_id())
        .param(Param::path("phone_id", ParamKind::Id, "The unique identifier of the phone")),
        Endpoint::get(
            "get_company_custom_field",
            "/companies/{company_id}/custom_fields/{field_id}",
            "Get a specific custom field for a company.",
        )
        .param(company_id())
        .param(Param::path("field_id", ParamKind::Id, "The unique identifier of the custom field")),
        Endpoint::get(
            "get_company_thumbnail",
            "/companies/{company_id}/thumbnail",
            "Get a company's thumbnail image.",
        )
        .param(company_id()),
        Endpoint::put(
            "change_company_thumbnail",
            "/companies/{company_id}/thumbnail",
            "Update a company's thumbnail image.",
        )
        .param(company_id())
        .param(Param::body("image_data", ParamKind::String, "Image data (URL or base64)").required().as_key("image")),
    ]
}
