//! Job portal tools: published jobs, applications and registration.

use super::{page, per_page, Endpoint, Param, ParamKind};

fn portal_id() -> Param {
    Param::path("portal_id", ParamKind::Id, "The unique identifier of the portal")
}

fn job_id() -> Param {
    Param::path("job_id", ParamKind::Id, "The unique identifier of the job")
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("list_portals", "/portals", "List all job portals/boards.")
            .param(per_page(25))
            .param(page()),
        Endpoint::get(
            "get_portal",
            "/portals/{portal_id}",
            "Get detailed information about a specific portal.",
        )
        .param(portal_id()),
        Endpoint::get(
            "list_portal_jobs",
            "/portals/{portal_id}/jobs",
            "List all jobs published to a specific portal.",
        )
        .param(portal_id())
        .param(per_page(25))
        .param(page()),
        Endpoint::post(
            "submit_job_application",
            "/portals/{portal_id}/jobs/{job_id}",
            "Submit a job application through a portal.",
        )
        .param(portal_id())
        .param(job_id())
        .param(Param::whole_body("candidate_data", "Applicant details")),
        Endpoint::put(
            "publish_job_to_portal",
            "/portals/{portal_id}/jobs/{job_id}",
            "Publish a job posting to a portal.",
        )
        .param(portal_id())
        .param(job_id()),
        Endpoint::delete(
            "unpublish_job_from_portal",
            "/portals/{portal_id}/jobs/{job_id}",
            "Remove a job posting from a portal.",
        )
        .param(portal_id())
        .param(job_id()),
        Endpoint::get(
            "get_portal_registration",
            "/portals/{portal_id}/registration",
            "Get portal registration information and requirements.",
        )
        .param(portal_id()),
        Endpoint::post(
            "submit_portal_registration",
            "/portals/{portal_id}/registration",
            "Submit portal registration information.",
        )
        .param(portal_id())
        .param(Param::whole_body("registration_data", "Registration details")),
    ]
}
