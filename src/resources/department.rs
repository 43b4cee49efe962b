//! Departments

use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// A department: an office sub-group with its own hours and routing
    Department,
    path = "departments",
    attributes = [
        auto_call_recording,
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
        saturday_hours,
        state,
        sunday_hours,
        thursday_hours,
        timezone,
        tuesday_hours,
        voice_intelligence,
        wednesday_hours,
    ],
}

impl Retrieve for Department {}
impl List for Department {}
impl Update for Department {}
impl Destroy for Department {}

impl Create for Department {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["name", "office_id"];
}
