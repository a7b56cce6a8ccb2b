//! Site and current-user context tools.

use super::{Endpoint, Param, ParamKind};

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("get_site", "/site", "Get current CATS site information and settings."),
        Endpoint::get("get_me", "/users/current", "Get current authenticated user's information."),
        Endpoint::post(
            "authorize_user",
            "/authorization",
            "Check if a user is authorized for a specific action.",
        )
        .param(Param::body("user_id", ParamKind::Integer, "The unique identifier of the user").required())
        .param(Param::body("action", ParamKind::String, "Action to check").required()),
    ]
}
