//! Calls
//!
//! Calls are read-only apart from the hang-up action.

use crate::api::DialpadClient;
use crate::error::Result;
use crate::resource::macros::define_resource;
use crate::resource::ops::{member_path, List, Retrieve, ID_LABEL};
use crate::resource::Resource;
use crate::validation::require_one;

/// Statuses the hang-up action accepts as success
const HANGUP_SUCCESS: [u16; 2] = [200, 204];

define_resource! {
    /// A call. `state` and the other status fields are opaque strings.
    Call,
    path = "call",
    attributes = [
        admin_recording_urls,
        call_id,
        call_recording_ids,
        callback_requested,
        contact,
        csat_score,
        custom_data,
        date_connected,
        date_ended,
        date_first_rang,
        date_queued,
        date_rang,
        date_started,
        direction,
        duration,
        entry_point_call_id,
        entry_point_target,
        event_timestamp,
        external_number,
        group_id,
        hold_time,
        internal_number,
        integrations,
        is_transferred,
        labels,
        master_call_id,
        mos_score,
        operator_call_id,
        proxy_target,
        recording_details,
        routing_breadcrumbs,
        state,
        talk_time,
        target,
        target_availability_status,
        total_duration,
        transcription_text,
        voicemail_link,
        voicemail_recording_id,
        was_recorded,
    ],
}

impl Call {
    /// Hang up an active call.
    ///
    /// Only 200 and 204 count as success; any other status, other 2xx codes
    /// included, is an API error carrying the status and raw body.
    pub async fn hangup(client: &DialpadClient, id: &str) -> Result<()> {
        require_one(Self::NAME, Some(id), ID_LABEL)?;

        let path = format!("{}/actions/hangup", member_path(Self::PATH, id));
        let response = client.put(&path, None).await?;

        if HANGUP_SUCCESS.contains(&response.status) {
            tracing::info!("Hung up call {}", id);
            Ok(())
        } else {
            Err(response.into_error())
        }
    }
}

impl Retrieve for Call {}
impl List for Call {}
