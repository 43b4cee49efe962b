//! Users

use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// A company user
    User,
    path = "users",
    attributes = [
        admin_office_ids,
        company_id,
        country,
        date_active,
        date_added,
        date_first_login,
        display_name,
        do_not_disturb,
        emails,
        first_name,
        group_details,
        id,
        image_url,
        international_dialing_enabled,
        is_admin,
        is_available,
        is_on_duty,
        is_online,
        is_super_admin,
        language,
        last_name,
        license,
        muted,
        office_id,
        onboarding_completed,
        phone_numbers,
        state,
        timezone,
        voicemail,
    ],
}

impl Retrieve for User {}
impl List for User {}
impl Update for User {}
impl Destroy for User {}

impl Create for User {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["email", "office_id"];
}
