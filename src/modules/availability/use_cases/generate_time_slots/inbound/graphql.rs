use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{Local, NaiveDate};

use crate::modules::availability::core::time_slot::TimeSlot;
use crate::modules::availability::use_cases::generate_time_slots::query::GenerateTimeSlots;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeSlot {
    pub id: String,
    pub time: String,
    pub formatted_time: String,
    pub available: bool,
}

impl From<TimeSlot> for GqlTimeSlot {
    fn from(slot: TimeSlot) -> Self {
        Self {
            id: slot.id,
            time: slot.time,
            formatted_time: slot.formatted_time,
            available: slot.available,
        }
    }
}

#[derive(Default)]
pub struct TimeSlotsQuery;

#[Object]
impl TimeSlotsQuery {
    async fn time_slots(
        &self,
        context: &Context<'_>,
        therapist_id: String,
        date: NaiveDate,
        service_duration_minutes: u32,
    ) -> GqlResult<Vec<GqlTimeSlot>> {
        let state = context.data_unchecked::<AppState>();
        let slots = state
            .time_slots
            .handle(GenerateTimeSlots {
                therapist_id,
                date,
                service_duration_minutes,
                now: Local::now().naive_local(),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(slots.into_iter().map(Into::into).collect())
    }
}
