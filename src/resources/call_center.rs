//! Call centers

use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// A call center. Nested settings such as `hold_queue` and
    /// `routing_options` are kept exactly as the API returns them.
    CallCenter,
    path = "callcenters",
    attributes = [
        advanced_settings,
        alerts,
        availability_status,
        country,
        first_action,
        friday_hours,
        group_description,
        hold_queue,
        hours_on,
        id,
        monday_hours,
        name,
        no_operators_action,
        office_id,
        phone_numbers,
        ring_seconds,
        routing_options,
        state,
        thursday_hours,
        timezone,
        tuesday_hours,
        voice_intelligence,
        wednesday_hours,
    ],
}

impl Retrieve for CallCenter {}
impl List for CallCenter {}
impl Update for CallCenter {}
impl Destroy for CallCenter {}

impl Create for CallCenter {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["name", "office_id"];
}
